use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(about = "Muse utilities - trunk must be installed")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Build the frontend and serve it with the character API")]
    Launch {
        /// Extra arguments passed through to muse-launcher
        #[arg(last = true)]
        launcher_args: Vec<String>,
    },
    #[command(about = "Assemble a release bundle in ./Muse")]
    Dist { target_triple: Option<String> },
}
