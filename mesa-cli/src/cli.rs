use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "mesa")]
#[command(about = "Mesa session diagnostics CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Use an in-memory session store instead of the file store (dry run)
    #[arg(long, global = true)]
    pub(crate) ephemeral: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
