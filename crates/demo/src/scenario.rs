use storefront_auth::User;
use storefront_core::{DomainResult, Money, ProductId};
use storefront_sales::Registry;

/// The sample objects: two users and one product both of them ordered.
#[derive(Debug)]
pub struct Scenario {
    pub registry: Registry,
    pub alice: User,
    pub bob: User,
    pub sneakers: ProductId,
}

impl Scenario {
    pub fn build() -> DomainResult<Self> {
        let mut registry = Registry::new();
        let mut alice = User::new("Alice");
        let mut bob = User::new("Bob");
        let sneakers = registry.add_product("Air Jordans", Money::from_major(99));

        registry.place_order(&mut alice, sneakers)?;
        registry.place_order(&mut bob, sneakers)?;

        Ok(Self {
            registry,
            alice,
            bob,
            sneakers,
        })
    }
}
