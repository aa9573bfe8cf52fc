use serde::Serialize;

use storefront_core::{DomainResult, Money};

use crate::Scenario;

/// Fixed summary of a built scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub products: usize,
    pub orders: usize,
    pub total_revenue: Money,
    pub users: Vec<UserLine>,
    pub product_sales: Vec<ProductLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserLine {
    pub name: String,
    pub orders: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductLine {
    pub title: String,
    pub price: Money,
    pub orders: usize,
    pub total_sales: Money,
}

impl Summary {
    pub fn of(scenario: &Scenario) -> DomainResult<Self> {
        let registry = &scenario.registry;

        Ok(Self {
            products: registry.all_products().len(),
            orders: registry.all_orders().len(),
            total_revenue: registry.total_revenue()?,
            users: [&scenario.alice, &scenario.bob]
                .into_iter()
                .map(|u| UserLine {
                    name: u.name().to_string(),
                    orders: u.orders().len(),
                })
                .collect(),
            product_sales: registry
                .all_products()
                .iter()
                .map(|p| ProductLine {
                    title: p.title().to_string(),
                    price: p.price(),
                    orders: p.order_count(),
                    total_sales: p.total_sales(),
                })
                .collect(),
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl core::fmt::Display for Summary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "products: {}", self.products)?;
        writeln!(f, "orders: {}", self.orders)?;
        writeln!(f, "total revenue: {}", self.total_revenue)?;
        for p in &self.product_sales {
            writeln!(
                f,
                "  {} @ {}: {} orders, sales {}",
                p.title, p.price, p.orders, p.total_sales
            )?;
        }
        for u in &self.users {
            writeln!(f, "  {}: {} orders", u.name, u.orders)?;
        }
        Ok(())
    }
}
