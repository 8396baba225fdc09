//! SafeRoute CLI library.
//!
//! Argument types and subcommand handlers shared by the `saferoute-cli`
//! binary. Each handler receives the loaded graph and the resolved options
//! explicitly; nothing is kept in global state.

pub mod commands;
pub mod output;
pub mod settings;
