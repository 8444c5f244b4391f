use crate::{
    DashboardError, Package,
    ports::{DashboardContext, DashboardPage, DashboardRenderer},
    services::ResultClassifier,
};
use chrono::Local;
use tracing::info;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Builds dashboard pages for a set of packages.
///
/// The renderer is handed in at construction, so there is no process-wide
/// rendering state; dropping the builder releases it.
pub struct DashboardBuilder<R>
where
    R: DashboardRenderer,
{
    packages: Vec<Package>,
    results: ResultClassifier,
    renderer: R,
}

impl<R> DashboardBuilder<R>
where
    R: DashboardRenderer,
{
    pub fn new(packages: Vec<Package>, results: ResultClassifier, renderer: R) -> Self {
        Self {
            packages,
            results,
            renderer,
        }
    }

    /// Renders `page`, stamped with the current local time.
    pub fn build_dashboard(&self, page: DashboardPage) -> Result<String, DashboardError> {
        let current_timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        self.build_dashboard_at(page, current_timestamp)
    }

    pub fn build_dashboard_at(
        &self,
        page: DashboardPage,
        current_timestamp: String,
    ) -> Result<String, DashboardError> {
        info!(%page, packages = self.packages.len(), "building dashboard page");

        let statistics = self.results.statistics(&self.packages)?;
        let context = DashboardContext {
            packages: &self.packages,
            results: &self.results,
            statistics,
            current_timestamp,
        };

        self.renderer.render(page, &context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DashboardConfig, DeprecatedDeps, services::ResultIndex};
    use chrono::NaiveDateTime;
    use std::collections::HashMap;

    struct SummaryRenderer;

    impl DashboardRenderer for SummaryRenderer {
        fn render(
            &self,
            page: DashboardPage,
            context: &DashboardContext<'_>,
        ) -> Result<String, DashboardError> {
            Ok(format!(
                "{} {} {} {}",
                page,
                context.packages.len(),
                context.statistics.total,
                context.current_timestamp
            ))
        }
    }

    struct FailingRenderer;

    impl DashboardRenderer for FailingRenderer {
        fn render(
            &self,
            _page: DashboardPage,
            _context: &DashboardContext<'_>,
        ) -> Result<String, DashboardError> {
            Err(DashboardError::render("template not found"))
        }
    }

    fn results() -> ResultClassifier {
        let index = ResultIndex::new(
            vec![Package::new("grpcio")],
            HashMap::new(),
            HashMap::new(),
            vec![DeprecatedDeps::new("grpcio", vec![])],
        );
        ResultClassifier::new(index, DashboardConfig::default())
    }

    #[test]
    fn test_build_dashboard_passes_context() {
        let builder = DashboardBuilder::new(vec![Package::new("grpcio")], results(), SummaryRenderer);

        let page = builder
            .build_dashboard_at(DashboardPage::Grid, "2026-01-01 12:00:00".to_string())
            .unwrap();
        let total = DashboardConfig::default().catalog_size();
        assert_eq!(page, format!("grid 1 {} 2026-01-01 12:00:00", total));
    }

    #[test]
    fn test_timestamp_format() {
        let builder = DashboardBuilder::new(vec![Package::new("grpcio")], results(), SummaryRenderer);

        let page = builder.build_dashboard(DashboardPage::Main).unwrap();
        let timestamp = page.splitn(4, ' ').nth(3).unwrap();
        assert!(NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_render_error_is_propagated() {
        let builder = DashboardBuilder::new(vec![Package::new("grpcio")], results(), FailingRenderer);
        assert!(matches!(
            builder.build_dashboard(DashboardPage::Main),
            Err(DashboardError::RenderError(_))
        ));
    }

    #[test]
    fn test_unindexed_package_fails_build() {
        let builder = DashboardBuilder::new(vec![Package::new("numpy")], results(), SummaryRenderer);
        assert!(matches!(
            builder.build_dashboard(DashboardPage::Grid),
            Err(DashboardError::PackageNotIndexed(_))
        ));
    }
}
