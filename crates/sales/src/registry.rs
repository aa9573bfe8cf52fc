//! In-memory registry of products and orders.
//!
//! Append-only: entries are never removed. One registry per scenario; tests
//! build their own instead of sharing process-wide state.

use std::collections::HashMap;

use storefront_auth::User;
use storefront_core::{DomainError, DomainResult, Money, OrderId, ProductId};
use storefront_products::Product;

use crate::Order;

/// Owner of every product and order in a scenario.
///
/// Not synchronized. Mutation goes through `&mut self`, so a registry has a
/// single owner at any point in time.
#[derive(Debug, Default)]
pub struct Registry {
    products: Vec<Product>,
    product_index: HashMap<ProductId, usize>,
    orders: Vec<Order>,
    order_index: HashMap<OrderId, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new product. Titles need not be unique.
    pub fn add_product(&mut self, title: impl Into<String>, price: Money) -> ProductId {
        self.push_product(Product::new(title, price))
    }

    /// Register an already-built product. Its id must not be registered yet.
    pub fn insert_product(&mut self, product: Product) -> DomainResult<ProductId> {
        let id = product.id_typed();
        if self.product_index.contains_key(&id) {
            return Err(DomainError::duplicate_id(format!("ProductId {id}")));
        }
        Ok(self.push_product(product))
    }

    fn push_product(&mut self, product: Product) -> ProductId {
        let id = product.id_typed();
        tracing::debug!(product_id = %id, title = product.title(), price = %product.price(), "product registered");
        self.product_index.insert(id, self.products.len());
        self.products.push(product);
        id
    }

    /// Every registered product, in registration order.
    pub fn all_products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.product_index.get(&id).map(|&idx| &self.products[idx])
    }

    pub fn product_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        let idx = *self.product_index.get(&id)?;
        self.products.get_mut(idx)
    }

    /// First registered product whose title equals `name`.
    ///
    /// With duplicate titles only the earliest registration is ever returned.
    pub fn product_named(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.title() == name)
    }

    /// Create an order for `user` and `product` and record it on both sides.
    ///
    /// Repeated calls with the same product create independent orders.
    pub fn place_order(&mut self, user: &mut User, product: ProductId) -> DomainResult<OrderId> {
        let idx = *self
            .product_index
            .get(&product)
            .ok_or_else(DomainError::not_found)?;

        let order_id = self.push_order(Order::new(product, user.id_typed()));
        user.record_order(order_id);
        self.products[idx].record_order(order_id);

        tracing::debug!(order_id = %order_id, user_id = %user.id_typed(), product_id = %product, "order placed");
        Ok(order_id)
    }

    /// Append a pre-built order to the registry.
    ///
    /// Neither the user's nor the product's order list is touched and the ids
    /// are not checked; an order may name a product this registry has never
    /// seen. Such an order makes [`Registry::total_revenue`] fail. The order
    /// id itself must not be registered yet.
    pub fn register_order(&mut self, order: Order) -> DomainResult<OrderId> {
        let id = order.id_typed();
        if self.order_index.contains_key(&id) {
            return Err(DomainError::duplicate_id(format!("OrderId {id}")));
        }
        Ok(self.push_order(order))
    }

    fn push_order(&mut self, order: Order) -> OrderId {
        let id = order.id_typed();
        self.order_index.insert(id, self.orders.len());
        self.orders.push(order);
        id
    }

    /// Every registered order, in registration order.
    pub fn all_orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.order_index.get(&id).map(|&idx| &self.orders[idx])
    }

    /// Resolve the user's order ids. Ids this registry does not hold are skipped.
    pub fn orders_for_user(&self, user: &User) -> Vec<&Order> {
        self.resolve(user.orders())
    }

    pub fn orders_for_product(&self, product: ProductId) -> DomainResult<Vec<&Order>> {
        let product = self.product(product).ok_or_else(DomainError::not_found)?;
        Ok(self.resolve(product.orders()))
    }

    fn resolve(&self, ids: &[OrderId]) -> Vec<&Order> {
        ids.iter().filter_map(|id| self.order(*id)).collect()
    }

    /// Sum of the current product price over every registered order.
    ///
    /// Recomputed on each call, so price changes are reflected immediately.
    /// A sum outside the `i64` cents range is an error, not a clamped value.
    pub fn total_revenue(&self) -> DomainResult<Money> {
        self.orders.iter().try_fold(Money::zero(), |total, order| {
            let product = self
                .product(order.product())
                .ok_or_else(|| DomainError::dangling(order.id_typed(), order.product()))?;
            total.checked_add(product.price()).ok_or_else(|| {
                DomainError::overflow(format!("total revenue at order {}", order.id_typed()))
            })
        })
    }

    pub fn total_sales(&self, product: ProductId) -> DomainResult<Money> {
        self.product(product)
            .map(Product::total_sales)
            .ok_or_else(DomainError::not_found)
    }
}
