//! Products domain module.
//!
//! A product is a sellable item with a title, a price and the ids of the
//! orders placed for it. Registration lives in `storefront-sales`.

pub mod product;

pub use product::Product;
