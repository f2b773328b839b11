//! CLI domain: parse, route and output only.
//! No domain orchestration; single route table dispatches to the enrollment services.

mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, InputFiles};
pub use route::RunContext;
