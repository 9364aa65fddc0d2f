use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ukmo-wx-config")]
#[command(about = "Configuration tool for the UK Met Office weather Munin plugin")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        short,
        long,
        global = true,
        help = "Settings file path [default: built-in configuration]"
    )]
    pub settings: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the effective configuration
    Show {
        #[arg(long, default_value = "false", help = "Emit JSON instead of TOML")]
        json: bool,
    },

    /// Check the configuration for problems the plugin would trip over
    Check {
        #[arg(long, default_value = "false", help = "Treat warnings as errors")]
        strict: bool,
    },

    /// Write a starter settings file with the default configuration
    Init {
        #[arg(short, long, help = "Output file path [default: ukmo_wx.toml]")]
        output: Option<PathBuf>,

        #[arg(long, default_value = "false", help = "Overwrite an existing file")]
        force: bool,
    },
}
