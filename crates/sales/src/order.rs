use chrono::{DateTime, Utc};
use serde::Serialize;

use storefront_core::{Entity, OrderId, ProductId, UserId};

/// Join entity: one user bought one product. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    id: OrderId,
    product: ProductId,
    user: UserId,
    placed_at: DateTime<Utc>,
}

impl Order {
    /// Build an order. It is not registered anywhere until handed to
    /// [`crate::Registry::register_order`] or created by
    /// [`crate::Registry::place_order`].
    pub fn new(product: ProductId, user: UserId) -> Self {
        Self::with_id(OrderId::new(), product, user, Utc::now())
    }

    pub fn with_id(
        id: OrderId,
        product: ProductId,
        user: UserId,
        placed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            product,
            user,
            placed_at,
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn product(&self) -> ProductId {
        self.product
    }

    pub fn user(&self) -> UserId {
        self.user
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
