mod calc;
mod cmd;
mod data;
mod ui;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bookcal", about = "hour-slot booking calendar")]
struct Cli {
    /// Path to the directory containing config.yaml (default: ./config)
    #[arg(long, default_value = "./config")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file
    Init,
    /// List the bookable hour ranges
    Slots {
        /// Emit the list as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the slots that can never be booked
    Unavailable {
        /// Emit the list as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    data::persistence::set_data_dir(cli.data_dir);

    match cli.command {
        None => cmd::root::run(),
        Some(Commands::Init) => cmd::init::run(),
        Some(Commands::Slots { json }) => cmd::slots::run(json),
        Some(Commands::Unavailable { json }) => cmd::unavailable::run(json),
    }
}
