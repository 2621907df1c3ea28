//! HTTP API for the reply service: `POST /chat`, `GET /health`, `GET /`.

pub mod error;
pub mod handlers;
pub mod router;
