pub mod activity_repo;
pub mod seed_catalog;

pub use activity_repo::ActivityDirectory;
