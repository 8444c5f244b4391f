// src/main.rs

use clap::Parser;
use compat_dashboard::{
    DashboardConfig, DashboardError, DashboardPage, Package,
    application::DashboardBuilder,
    repositories::{HtmlRenderer, SnapshotStore},
    services::{IndexService, ResultClassifier},
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "compat-dashboard")]
#[command(author, version, about = "Display a grid showing the dependency compatibility between packages", long_about = None)]
struct Cli {
    /// Compatibility results snapshot (TOML)
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Dashboard configuration (TOML); the built-in catalog is used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Packages to display compatibility information for (default: whole catalog)
    #[arg(short, long, num_args = 1..)]
    packages: Vec<String>,

    /// Directory the pages are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), DashboardError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::default(),
    };

    let packages = if cli.packages.is_empty() {
        config.catalog()
    } else {
        cli.packages
            .iter()
            .map(|name| Package::try_from(name.as_str()))
            .collect::<Result<Vec<_>, _>>()?
    };

    let store = SnapshotStore::load(&cli.snapshot).await?;
    let service = IndexService::new(store.clone(), store);
    let index = service.build_index(&packages).await?;

    let builder = DashboardBuilder::new(
        packages,
        ResultClassifier::new(index, config),
        HtmlRenderer::default(),
    );

    tokio::fs::create_dir_all(&cli.output_dir).await?;
    for page in [DashboardPage::Grid, DashboardPage::Main] {
        let html = builder.build_dashboard(page)?;
        let path = cli.output_dir.join(page.file_name());
        tokio::fs::write(&path, html).await?;
        info!(%page, path = %path.display(), "dashboard page written");
    }

    Ok(())
}
