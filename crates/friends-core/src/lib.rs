//! Friends Core Library
//!
//! Graph representation and structural queries for the friends social graph:
//! shortest acquaintance chains, same-school cliques and connectors.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
