// src/graph/mod.rs
//! Symbol dependency graph and ranking.

pub mod rank;
