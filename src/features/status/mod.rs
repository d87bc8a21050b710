//! Liveness endpoint. Public, and outside the station middleware chain.

pub mod handlers;
pub mod routes;
