use serde::Serialize;

/// Separator printed around the authorization message.
pub const BANNER_RULE: &str = "**********";

/// Result of a password check. Never an error: a wrong password is a
/// reported outcome, not a failure.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthOutcome {
    Authorized,
    Denied,
}

impl AuthOutcome {
    pub fn from_match(matched: bool) -> Self {
        if matched {
            AuthOutcome::Authorized
        } else {
            AuthOutcome::Denied
        }
    }

    pub fn is_authorized(self) -> bool {
        matches!(self, AuthOutcome::Authorized)
    }

    pub fn message(self) -> &'static str {
        match self {
            AuthOutcome::Authorized => "You're authorized!",
            AuthOutcome::Denied => "Incorrect password",
        }
    }

    /// The message framed by separator rules, one per line.
    pub fn banner(self) -> String {
        format!("{BANNER_RULE}\n{}\n{BANNER_RULE}", self.message())
    }
}

impl core::fmt::Display for AuthOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_frames_message() {
        let banner = AuthOutcome::Authorized.banner();
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines, vec!["**********", "You're authorized!", "**********"]);
    }

    #[test]
    fn denied_message() {
        assert_eq!(AuthOutcome::Denied.to_string(), "Incorrect password");
        assert!(!AuthOutcome::from_match(false).is_authorized());
    }
}
