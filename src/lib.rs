//! Fingerspell Server Library
//!
//! Maps text to ASL alphabet images and serves the result to a web front end.
//! The main server binary is in main.rs.
//!
//! # Modules
//!
//! - `fingerspell`: Per-character classification and JSON output
//! - `assets`: Existence lookups against the alphabet image store
//! - `routes`: HTTP API

pub mod assets;
pub mod config;
pub mod error;
pub mod fingerspell;
pub mod routes;
pub mod state;
