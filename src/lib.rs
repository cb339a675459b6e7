pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod web;

pub use config::AppConfig;
pub use database::ActivityDirectory;
pub use error::DirectoryError;
pub use models::{Activity, Catalog};
