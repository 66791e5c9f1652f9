//! Command-line interface for generating graphs and running the spanning
//! tree and shortest-path algorithms on them.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, GraphArgs, MstCommand, MstSummary,
    ShortestPathsCommand, ShortestPathsSummary, render_summary, run_cli,
};
