//! coauthor-graph - Co-authorship Neighborhood Explorer
//!
//! Extracts a bounded 2-hop neighborhood around a selected node of a
//! researcher/publication/organization graph and lays it out on a 2-D
//! canvas with a fixed-budget force simulation.

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod services;
pub mod visualization;
