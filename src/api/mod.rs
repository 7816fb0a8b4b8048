//! HTTP surface: routes, handlers, middleware and wire types.
//!
//! Everything under `/api` is documented through `utoipa` and served with
//! Swagger UI at `/swagger-ui`.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

mod doc;
