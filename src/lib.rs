//! # Summa Braille
//!
//! A TUI client for an article summarization service that also returns a
//! braille rendering of the summary.
//!
//! ## Features
//!
//! - **One request per action**: the article URL is posted to the service and the
//!   summary, braille summary and key entity are shown verbatim
//! - **Latest action wins**: responses to superseded submits are dropped
//! - **Search link**: the key entity links to a configurable news search

pub mod config;
pub mod report;
pub mod service;
pub mod summarizer;
pub mod summary;
pub mod ui;
pub mod view;

pub use config::Config;
pub use service::{ServiceError, SummaryService};
pub use summarizer::Summarizer;
pub use summary::{SummaryResponse, SummaryState};
