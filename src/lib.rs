#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::doc_markdown)]
//! peasant: detect, generate, and collect connection requests from LinkedIn.
//!
//! The library holds the command-line surface and the typed options it
//! resolves to; the `peasant` binary is a thin wrapper around it.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod records;
pub mod session;
pub mod types;
