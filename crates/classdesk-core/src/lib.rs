//! classdesk-core: Student records, query engine, and classroom exercises.
//!
//! This crate defines the student record model, the flat-file parser, the
//! in-memory query engine, and the state machines behind the arithmetic quiz
//! and the joke teller.

pub mod config;
pub mod dice;
pub mod engine;
pub mod error;
pub mod jokes;
pub mod model;
pub mod parser;
pub mod quiz;
pub mod statistics;
