pub mod artifact;
pub mod cli;
pub mod concise;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod lang;
pub mod logging;
pub mod pipeline;
pub mod scan;
pub mod symbols;
pub mod tokens;
pub mod types;
