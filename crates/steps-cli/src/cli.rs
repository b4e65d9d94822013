//! CLI argument definitions for steps.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use steps_core::{Difficulty, Layout};

#[derive(Parser)]
#[command(name = "steps")]
#[command(about = "Step chart inspection tool", version)]
pub struct Args {
    /// Chart settings file (JSON)
    #[arg(short, long, value_name = "FILE", env = "STEPS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show a summary of a note data file
    Info {
        /// Note data file
        file: PathBuf,
        /// Layout the notes are written for
        #[arg(short, long, default_value = "dance-single")]
        layout: Layout,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Derive notes for another layout
    Autogen {
        /// Note data file
        file: PathBuf,
        /// Layout the notes are written for
        #[arg(long)]
        from: Layout,
        /// Layout to derive
        #[arg(long)]
        to: Layout,
    },
    /// Drop note placements a layout cannot play
    Fix {
        /// Note data file
        file: PathBuf,
        /// Layout the notes are written for
        #[arg(short, long, default_value = "dance-single")]
        layout: Layout,
    },
    /// Fill in unset chart difficulty, meter and description
    Normalize {
        #[arg(long, default_value = "invalid")]
        difficulty: Difficulty,
        #[arg(long, default_value = "0")]
        meter: i32,
        #[arg(long, default_value = "")]
        description: String,
    },
}
