use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "treeview")]
#[command(about = "A filterable tree view for the terminal with keyboard navigation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive demo (default)
    Run {
        /// Path to a JSON file with tree data (defaults to the built-in sample)
        #[arg(short, long)]
        data: Option<String>,
    },
    /// Render a single frame to text and exit
    Screenshot {
        /// Path to a JSON file with tree data (defaults to the built-in sample)
        #[arg(short, long)]
        data: Option<String>,
        /// Output file for the screenshot (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
        /// Terminal width for rendering
        #[arg(long, default_value = "80")]
        width: u16,
        /// Terminal height for rendering
        #[arg(long, default_value = "25")]
        height: u16,
    },
}
