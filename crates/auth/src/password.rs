//! Placeholder password obfuscation.
//!
//! The "digest" of a password is the input reversed. This is a reversible
//! transform with no security value whatsoever; it exists for compatibility
//! with the sample data, where each user's password is their name backwards.

/// Stored password transform.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Encode `input` (reverse it by Unicode scalar value).
    pub fn encode(input: &str) -> Self {
        Self(input.chars().rev().collect())
    }

    /// Exact, case-sensitive comparison against the stored value.
    pub fn matches(&self, input: &str) -> bool {
        self.0 == input
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keep the stored value out of logs.
impl core::fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("PasswordDigest(..)")
    }
}
