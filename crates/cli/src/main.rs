use clap::{ArgGroup, Parser, Subcommand};
use log::error;
use std::path::PathBuf;

mod commands;
mod ncdu;

#[derive(Parser)]
#[command(
    name = "ncducolors",
    version,
    about = "Dumps and patches the themes compiled into ncdu 1.x",
    long_about = "Dumps and patches the themes compiled into ncdu 1.x.\n\n\
        1. Use 'extract-default-config' to extract the config to a JSON file.\n\
        2. Keep a backup of that file.\n\
        3. Edit the colors and attributes (leave \"ncdu\" and \"offset\" alone).\n\
        4. Use 'apply-config' to write the edited config into the executable.\n\
        5. Use 'revert' with the backup or the offset to restore ncdu's defaults."
)]
struct Cli {
    /// Path of the ncdu executable (default: ncdu found on PATH)
    #[arg(long, global = true)]
    ncdu: Option<PathBuf>,

    /// Enable verbose logging/output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the factory config of an unpatched executable to JSON
    ExtractDefaultConfig {
        /// Output JSON file (default: stdout)
        config: Option<PathBuf>,
        /// Don't indent the JSON output
        #[arg(long)]
        compact: bool,
    },
    /// Write an edited JSON config into the executable
    ApplyConfig {
        /// JSON config file to apply
        config: PathBuf,
        /// Treat unrecognised color and attribute names as "none" instead of failing
        #[arg(long)]
        lenient: bool,
    },
    /// Restore ncdu's factory themes
    #[command(group(ArgGroup::new("location").required(true).args(["offset", "config"])))]
    Revert {
        /// Offset of the theme table in the executable
        #[arg(long)]
        offset: Option<usize>,
        /// JSON config file to read the offset from
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Dump the built-in factory config (recovery and analysis only)
    #[command(group(ArgGroup::new("darkbg").args(["with_darkbg", "without_darkbg"])))]
    #[command(group(ArgGroup::new("byteorder").args(["little_endian", "big_endian"])))]
    DumpInternalDefaultConfig {
        /// Output JSON file (default: stdout)
        config: Option<PathBuf>,
        /// Don't indent the JSON output
        #[arg(long)]
        compact: bool,
        /// Dump the three-theme table of ncdu >= 1.17
        #[arg(long)]
        with_darkbg: bool,
        /// Dump the two-theme table of ncdu < 1.17
        #[arg(long)]
        without_darkbg: bool,
        /// Dump the table of little-endian builds
        #[arg(long)]
        little_endian: bool,
        /// Dump the table of big-endian builds
        #[arg(long)]
        big_endian: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let ncdu = cli.ncdu;
    let res = match cli.command {
        Commands::ExtractDefaultConfig { config, compact } => {
            commands::extract::extract_default_config(ncdu, config.as_deref(), compact)
        }
        Commands::ApplyConfig { config, lenient } => {
            commands::apply::apply_config(ncdu, &config, lenient)
        }
        Commands::Revert { offset, config } => {
            commands::revert::revert(ncdu, offset, config.as_deref())
        }
        Commands::DumpInternalDefaultConfig {
            config,
            compact,
            with_darkbg,
            without_darkbg,
            little_endian,
            big_endian,
        } => {
            let darkbg = match (with_darkbg, without_darkbg) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let endianness = match (little_endian, big_endian) {
                (true, _) => Some(ncducolors_core::Endianness::Little),
                (_, true) => Some(ncducolors_core::Endianness::Big),
                _ => None,
            };
            commands::dump::dump_internal_default_config(
                ncdu,
                config.as_deref(),
                compact,
                darkbg,
                endianness,
            )
        }
    };

    if let Err(e) = res {
        // Print the full error chain using {:#}
        error!("{:#}", e);
        std::process::exit(1);
    }
}
