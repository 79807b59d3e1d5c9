//! Command implementations

pub mod chain;
pub mod cliques;
pub mod connectors;
pub mod dispatch;
pub mod show;
