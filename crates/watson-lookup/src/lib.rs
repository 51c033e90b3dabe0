//! watson-lookup — static lookup URLs for a person's name.
//!
//! Nothing here touches the network: a name is split into tokens, turned
//! into likely usernames, and formatted into fixed search-engine and
//! social-network URL templates.

pub mod variants;
pub mod links;

pub use links::{build_lookup, Link, LookupLinks};
pub use variants::{tokenize, username_variants};
