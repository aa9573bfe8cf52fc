//! User entity (purchaser).

use serde::Serialize;

use storefront_core::{Entity, OrderId, UserId};

use crate::{AuthOutcome, PasswordDigest};

/// Entity: User.
///
/// The password is derived from the name at construction time. Orders are
/// tracked by id; the orders themselves are owned by the sales registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: UserId,
    name: String,
    #[serde(skip)]
    password: PasswordDigest,
    orders: Vec<OrderId>,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(UserId::new(), name)
    }

    pub fn with_id(id: UserId, name: impl Into<String>) -> Self {
        let name = name.into();
        let password = PasswordDigest::encode(&name);
        Self {
            id,
            name,
            password,
            orders: Vec::new(),
        }
    }

    pub fn id_typed(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn orders(&self) -> &[OrderId] {
        &self.orders
    }

    pub fn record_order(&mut self, order: OrderId) {
        self.orders.push(order);
    }

    /// Pure comparison of `input` against the stored password transform.
    pub fn check_password(&self, input: &str) -> bool {
        self.password.matches(input)
    }

    /// Check a password and report the outcome.
    pub fn authorize(&self, password: &str) -> AuthOutcome {
        let outcome = AuthOutcome::from_match(self.check_password(password));
        tracing::debug!(user_id = %self.id, outcome = ?outcome, "password check");
        outcome
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
