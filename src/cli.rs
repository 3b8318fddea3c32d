#[derive(clap::Parser, Debug)]
#[clap(about, long_about = None)]
pub(crate) struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Command {
    /// Differentiate an expression
    Diff {
        /// The expression; read from stdin when omitted
        expr: Option<String>,

        /// Also print the parsed expression tree
        #[arg(short, long)]
        tree: bool,

        /// Check that the input and its derivative are well-formed
        #[arg(short, long)]
        check: bool,
    },

    /// Print the token stream of an expression
    Tokens { expr: String },

    /// Print the expression tree of an expression
    Parse { expr: String },

    /// List the supported functions
    Functions,
}
