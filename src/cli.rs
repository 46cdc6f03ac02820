use crate::flow::FlowType;
use crate::report::OutputFormat;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Ethereum method catalog CLI options.
#[derive(Debug, Parser)]
#[command(
    name = "eth-method-catalog",
    version,
    about = "Print the catalog of Ethereum method selectors and their flow types",
    args_conflicts_with_subcommands = true,
    subcommand_precedence_over_arg = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub print: PrintArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the catalog (default).
    Print(PrintArgs),

    /// List category keys, titles and entry counts.
    ListCategories,

    /// Show every entry with the given method name.
    Explain {
        /// Method name, e.g. MINT.
        method: String,
    },

    /// Show every entry that uses a selector.
    Lookup {
        /// Selector, e.g. 0x2e1a7d4d.
        selector: String,
    },

    /// List selectors used by more than one entry.
    SharedSelectors,
}

#[derive(Debug, Clone, Default, ClapArgs)]
pub struct PrintArgs {
    /// Output format. Defaults to pretty.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Only print these categories, in this order (comma-separated keys or titles).
    #[arg(long = "category", value_delimiter = ',')]
    pub categories: Vec<String>,

    /// Only print entries with this flow type.
    #[arg(long, value_enum)]
    pub flow: Option<FlowType>,

    /// Read report defaults from a TOML file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
