pub mod repository;
pub mod repository_pg;
