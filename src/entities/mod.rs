pub mod compatibility_result;
pub mod package;

pub use compatibility_result::*;
pub use package::*;
