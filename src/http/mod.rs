//! HTTP surface: router assembly and read-only endpoints

pub mod routes;

pub use routes::build_router;
