use serde::Serialize;

use storefront_core::{Entity, Money, OrderId, ProductId};

/// Entity: Product.
///
/// Title and price are accepted as given (empty titles and negative prices
/// included). All three fields stay mutable through explicit methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: ProductId,
    title: String,
    price: Money,
    /// Back-references to orders placed for this product (non-owning).
    orders: Vec<OrderId>,
}

impl Product {
    pub fn new(title: impl Into<String>, price: Money) -> Self {
        Self::with_id(ProductId::new(), title, price)
    }

    pub fn with_id(id: ProductId, title: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            orders: Vec::new(),
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn orders(&self) -> &[OrderId] {
        &self.orders
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_price(&mut self, price: Money) {
        self.price = price;
    }

    /// Replace the order list wholesale.
    pub fn set_orders(&mut self, orders: Vec<OrderId>) {
        self.orders = orders;
    }

    pub fn record_order(&mut self, order: OrderId) {
        self.orders.push(order);
    }

    /// `price × number of orders`; zero when nothing was ordered.
    pub fn total_sales(&self) -> Money {
        self.price.times(self.orders.len())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sneakers() -> Product {
        Product::new("Air Jordans", Money::from_cents(9_900))
    }

    #[test]
    fn new_product_has_no_orders() {
        let product = sneakers();
        assert_eq!(product.title(), "Air Jordans");
        assert_eq!(product.price(), Money::from_cents(9_900));
        assert!(product.orders().is_empty());
        assert_eq!(product.total_sales(), Money::zero());
    }

    #[test]
    fn total_sales_is_price_times_order_count() {
        let mut product = sneakers();
        product.record_order(OrderId::new());
        product.record_order(OrderId::new());

        assert_eq!(product.order_count(), 2);
        assert_eq!(product.total_sales(), Money::from_cents(19_800));
    }

    #[test]
    fn total_sales_follows_price_changes() {
        let mut product = sneakers();
        product.record_order(OrderId::new());
        product.set_price(Money::from_cents(12_000));

        assert_eq!(product.total_sales(), Money::from_cents(12_000));
    }

    #[test]
    fn unchecked_input_is_accepted() {
        let mut product = Product::new("", Money::from_cents(-500));
        product.record_order(OrderId::new());

        assert_eq!(product.title(), "");
        assert_eq!(product.total_sales(), Money::from_cents(-500));
    }

    #[test]
    fn set_orders_replaces_back_references() {
        let mut product = sneakers();
        product.record_order(OrderId::new());
        let replacement = vec![OrderId::new(), OrderId::new(), OrderId::new()];
        product.set_orders(replacement.clone());

        assert_eq!(product.orders(), replacement.as_slice());
        product.set_title("Air Max");
        assert_eq!(product.title(), "Air Max");
    }

    #[test]
    fn products_with_same_title_are_distinct_entities() {
        let a = sneakers();
        let b = sneakers();
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: total sales equals price × order count.
            #[test]
            fn total_sales_matches_formula(cents in -1_000_000i64..1_000_000i64, count in 0usize..40) {
                let mut product = Product::new("Item", Money::from_cents(cents));
                for _ in 0..count {
                    product.record_order(OrderId::new());
                }
                prop_assert_eq!(product.total_sales().cents(), cents * count as i64);
            }
        }
    }
}
