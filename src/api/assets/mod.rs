pub mod handler;
pub mod routes;
pub mod store;
