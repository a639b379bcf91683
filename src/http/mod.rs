//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware: CORS, trace, request ID, timeout)
//!     → handlers.rs (one fresh discovery per request)
//!     → render.rs (HTML) / HostSet serialization (JSON)
//!     → response.rs (error mapping)
//!     → Send to client
//! ```

pub mod cors;
pub mod handlers;
pub mod render;
pub mod response;
pub mod server;

pub use server::{AppState, HttpServer};
