mod index_service;
mod result_classifier;
mod result_index;

pub use index_service::IndexService;
pub use result_classifier::ResultClassifier;
pub use result_index::ResultIndex;
