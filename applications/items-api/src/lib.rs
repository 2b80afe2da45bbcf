pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

pub use config::Config;
pub use error::{AppError, Result};
pub use routes::create_router;
