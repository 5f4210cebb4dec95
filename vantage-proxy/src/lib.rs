//! Reverse proxy collaborator for the Vantage dashboard.
//!
//! The dashboard is served from one origin and talks to the backend
//! through this proxy: any method under any path is forwarded to the
//! configured backend base URL with path, query string, and body
//! preserved. The backend's status and body come back verbatim; an
//! unreachable backend answers `503 {"error": "Backend unreachable"}`.

pub mod forward;

pub use forward::{ProxyState, router};
