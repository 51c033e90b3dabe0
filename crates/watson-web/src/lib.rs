//! watson-web — Web front end for the Sherlock username search tool.
//! Provides:
//!   - Search form with live progress (polling and SSE)
//!   - JSON status, file listing and result download endpoints
//!   - Name lookup links for search engines and social networks

pub mod router;
pub mod handlers;
pub mod state;
pub mod sse;
