pub mod gate;
pub mod handle;
pub mod model;
pub mod repository;
pub mod repository_pg;
pub mod route;
pub mod schema;
pub mod service;

#[cfg(test)]
pub mod testing;
