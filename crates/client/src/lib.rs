//! Client code for boj2md.
//!
//! This crate provides the HTTP fetch step, problem extraction from the judge's
//! HTML, and Markdown rendering used by the CLI.

pub mod extract;
pub mod fetch;
pub mod render;

pub use extract::{pair_samples, parse_problem};
pub use fetch::{FetchClient, FetchConfig, ProblemSource, problem_url};
pub use render::to_markdown;
