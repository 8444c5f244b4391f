pub mod classification;
pub mod config;
pub mod deprecated;
pub mod statistics;

pub use classification::*;
pub use config::*;
pub use deprecated::*;
pub use statistics::*;
