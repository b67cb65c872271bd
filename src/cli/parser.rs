use clap::{Parser, Subcommand};

/// Command-line interface definition for rChatReview
#[derive(Parser)]
#[command(
    name = "rchatreview",
    version = env!("CARGO_PKG_VERSION"),
    about = "Sample helpdesk chats and export their transcripts as annotated HTML review pages",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and output directory
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Sample chat ids from the chat history
    Select {
        #[arg(
            long,
            value_name = "RANGE",
            help = "Date range: YYYY, YYYY-MM, YYYY-MM-DD or START:END"
        )]
        range: Option<String>,

        #[arg(long, help = "Number of chats to sample")]
        sample: Option<usize>,

        #[arg(long, help = "Seed for reproducible sampling")]
        seed: Option<u64>,

        #[arg(long, value_name = "FILE", help = "Write the sampled ids to a CSV file")]
        out: Option<String>,
    },

    /// Build the HTML review pages and guest spreadsheets
    Report {
        #[arg(
            long,
            value_name = "RANGE",
            help = "Date range: YYYY, YYYY-MM, YYYY-MM-DD or START:END"
        )]
        range: Option<String>,

        #[arg(long, help = "Number of chats to sample")]
        sample: Option<usize>,

        #[arg(long, help = "Seed for reproducible sampling")]
        seed: Option<u64>,

        #[arg(long = "per-page", help = "Chats per output page")]
        per_page: Option<usize>,

        #[arg(long, value_name = "PREFIX", help = "Output path prefix")]
        output: Option<String>,

        #[arg(
            long,
            value_name = "FILE",
            help = "Read chat ids from a CSV, text or .xlsx file instead of sampling"
        )]
        ids: Option<String>,

        #[arg(long, value_name = "FILE", help = "Page template file")]
        template: Option<String>,
    },
}
