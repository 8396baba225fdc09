// Module exports for CLI subcommands.
//
// Each module handles one subcommand; main.rs parses arguments, loads the
// graph, and dispatches here.

pub mod assess;
pub mod evacuate;
pub mod nodes;
pub mod route;

use std::process::ExitCode;

/// Exit status used when the graph is valid but no route exists.
pub const EXIT_NO_ROUTE: u8 = 2;

pub(crate) fn no_route() -> ExitCode {
    ExitCode::from(EXIT_NO_ROUTE)
}
