//! Watson Runner - drives the Sherlock CLI.
//!
//! This crate covers everything between an HTTP request and the tool's text:
//! 1. Translating search options into command-line flags
//! 2. Running the tool and streaming its stdout line by line
//! 3. Sorting output lines into found / not-found / checking buckets
//! 4. Tracking every search in an in-memory registry

pub mod command;
pub mod parser;
pub mod process;
pub mod registry;
pub mod service;

pub use command::{build_args, split_usernames, SearchOptions};
pub use parser::parse_output;
pub use process::{OutputSink, RunOutcome, SherlockRunner};
pub use registry::SearchRegistry;
pub use service::SearchService;
