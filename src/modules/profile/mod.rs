pub mod repository;
pub mod repository_pg;
pub mod schema;
