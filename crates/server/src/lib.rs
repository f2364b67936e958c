//! Campus Assistant - HTTP REST API for the college information service
//!
//! This crate provides the HTTP server in front of the FAQ matching core. It
//! supports:
//!
//! - **Chat**: free-text questions answered by the FAQ relevance matcher
//! - **FAQ Management**: browse, search, rate, and (for admins) edit the FAQ set
//! - **File Repository**: upload, search, download, and delete shared documents
//! - **Analytics**: most-asked FAQs, most-downloaded files, category breakdown
//! - **Notifications**: recent content-change events for polling clients
//!
//! # Features
//!
//! - **Sessions**: email/password login issuing bearer tokens; admin-only routes
//! - **Middleware**: compression, CORS, request ID tracking, structured logging
//! - **Configuration**: environment variable and file-based configuration
//! - **Error Handling**: structured error responses with error codes
//! - **Graceful Shutdown**: proper signal handling for production deployments
//!
//! # API Endpoints
//!
//! ## Public Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `POST /api/auth/login` - Obtain a session token
//! - `GET /api/faqs` - List FAQs
//! - `GET /api/faqs/search` - Search FAQs
//! - `POST /api/faqs/{id}/helpful` - Mark a FAQ helpful
//! - `POST /api/chat` - Ask the assistant (soft-gated on login)
//! - `GET /api/chat/history` - Recent chat transcript
//! - `GET /api/files` - List repository files
//! - `GET /api/files/search` - Search repository files
//! - `GET /api/files/download/{id}` - Download a file
//! - `GET /api/analytics` - Usage analytics
//! - `GET /api/notifications` - Recent notifications
//!
//! ## Admin Endpoints (session token with admin role required)
//!
//! - `POST /api/faqs` - Add a FAQ
//! - `DELETE /api/faqs/{id}` - Delete a FAQ
//! - `POST /api/files/upload` - Upload a file (multipart)
//! - `DELETE /api/files/{id}` - Delete a file

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::AppState;
