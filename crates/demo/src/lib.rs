//! Sample storefront scenario: Alice and Bob both buy a pair of sneakers.

pub mod config;
pub mod run;
pub mod scenario;
pub mod summary;

pub use config::{DemoConfig, SummaryFormat};
pub use run::run;
pub use scenario::Scenario;
pub use summary::Summary;
