//! Sales domain module.
//!
//! Orders join one user to one product. The [`Registry`] owns every product
//! and every order created in a scenario and answers the aggregate queries
//! (revenue, lookup by title).

pub mod order;
pub mod registry;

pub use order::Order;
pub use registry::Registry;
