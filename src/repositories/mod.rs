pub mod html_renderer;
pub mod snapshot_store;

pub use html_renderer::HtmlRenderer;
pub use snapshot_store::{Snapshot, SnapshotStore};
