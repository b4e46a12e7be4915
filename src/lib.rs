//! Renders a personal portfolio page from a public GitHub account.
//!
//! The pipeline fetches a profile and repository list, derives an ordered
//! view and aggregate stats, renders a static HTML page and writes it
//! atomically, then repeats on a fixed interval.

pub mod cli;
pub mod error;
pub mod github;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod prefs;
pub mod render;
pub mod scheduler;
pub mod state;
pub mod transform;
