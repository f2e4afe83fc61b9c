//! HTTP Layer - 面向前端的 JSON API

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, UpstreamMapping};
pub use routes::{create_routes, TASK_CALLBACK_PATH};
pub use server::{build_router, HttpServer, ServerConfig};
pub use state::AppState;
