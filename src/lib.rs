pub mod application;
pub mod entities;
pub mod errors;
pub mod models;
pub mod ports;
pub mod repositories;
pub mod services;

pub use entities::*;
pub use errors::*;
pub use models::*;
pub use ports::*;
