//! Visualino settings tool: entry point.
//!
//! Inspects and edits the same settings file the Visualino desktop
//! application reads, including the first-run bootstrap from the bundled
//! `config.ini`.  Handy for packaging scripts and for diagnosing which IDE
//! path a given installation will actually use.
//!
//! # Usage
//!
//! ```text
//! visualino-settings [OPTIONS] <COMMAND>
//!
//! Commands:
//!   get   <KEY>           Print the resolved path of one setting
//!   set   <KEY> <VALUE>   Store a value verbatim and save
//!   show  [--json]        Print every resolved setting
//!   path                  Print the settings file location
//!
//! Options:
//!   --bootstrap-file <NAME>  Bundled defaults to seed from [default: config.ini]
//!   --log-level <LEVEL>      Log level when RUST_LOG is unset [default: warn]
//! ```
//!
//! `KEY` is one of `arduino_ide_path`, `tmp_dir_name`, `tmp_file_name`,
//! `html_index`.  Values are read from and written to the current
//! platform's namespace only.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use visualino_core::SettingKey;
use visualino_settings::{SettingsStore, DEFAULT_BOOTSTRAP_FILE};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Inspect and edit Visualino's per-platform settings.
#[derive(Debug, Parser)]
#[command(
    name = "visualino-settings",
    about = "Inspect and edit Visualino's per-platform settings",
    version
)]
struct Cli {
    /// File name of the bundled default configuration.
    ///
    /// Searched for in the platform data directories, then next to this
    /// executable, when no Arduino IDE path is configured yet.
    #[arg(long, default_value = DEFAULT_BOOTSTRAP_FILE, env = "VISUALINO_BOOTSTRAP_FILE")]
    bootstrap_file: String,

    /// Log level used when `RUST_LOG` is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the resolved path of one setting.
    Get {
        /// Setting name, e.g. `arduino_ide_path`.
        key: SettingKey,
    },
    /// Store a value verbatim and save the settings file.
    Set {
        /// Setting name, e.g. `arduino_ide_path`.
        key: SettingKey,
        /// New value.  Relative paths are resolved against the install directory on read.
        value: String,
    },
    /// Print every resolved setting.
    Show {
        /// Emit a JSON object instead of aligned text.
        #[arg(long)]
        json: bool,
    },
    /// Print the settings file location.
    Path,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so command output stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut settings = SettingsStore::open(&cli.bootstrap_file);
    debug!(
        platform = %settings.platform(),
        file = %settings.settings_file().display(),
        "settings opened"
    );

    match cli.command {
        Command::Get { key } => {
            println!("{}", settings.get(key).display());
        }
        Command::Set { key, value } => {
            settings.set(key, &value);
            let file = settings.settings_file().to_path_buf();
            settings
                .close()
                .with_context(|| format!("failed to save settings to {}", file.display()))?;
        }
        Command::Show { json } => {
            if json {
                let out = serde_json::to_string_pretty(&settings.resolved())
                    .context("failed to serialize settings")?;
                println!("{out}");
            } else {
                let width = SettingKey::ALL.iter().map(|k| k.name().len()).max().unwrap_or(0);
                for key in SettingKey::ALL {
                    println!("{:<width$}  {}", key.name(), settings.get(key).display());
                }
            }
        }
        Command::Path => {
            println!("{}", settings.settings_file().display());
        }
    }

    Ok(())
}
