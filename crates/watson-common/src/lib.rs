//! watson-common — Shared types and errors used across all Watson crates.

pub mod error;
pub mod search;
pub mod results;

// Re-export commonly used types
pub use error::{ApiError, Result, WatsonError};
pub use results::{FoundAccount, ParsedResults};
pub use search::{SearchEvent, SearchId, SearchRecord, SearchStatus};
