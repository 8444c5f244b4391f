// src/ports/mod.rs

pub use compatibility_store::CompatibilityStore;
pub use dashboard_renderer::{DashboardContext, DashboardPage, DashboardRenderer};
pub use deprecated_dep_finder::DeprecatedDepFinder;

pub mod compatibility_store;
pub mod dashboard_renderer;
pub mod deprecated_dep_finder;
