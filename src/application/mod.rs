mod dashboard_builder;

pub use dashboard_builder::DashboardBuilder;
