use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::checker::SettingsChecker;
use crate::cli::args::{Cli, Commands};
use crate::error::{ConfigError, Result};
use crate::settings::PluginSettings;
use crate::utils::constants::DEFAULT_SETTINGS_FILE;

pub fn run(cli: Cli) -> Result<()> {
    let settings = PluginSettings::load_or_default(cli.settings.as_deref())?;

    match cli.command {
        Commands::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&settings)?);
            } else {
                print!("{}", settings.to_toml_string()?);
            }
        }

        Commands::Check { strict } => {
            let checker = SettingsChecker::new();
            let report = checker.check(&settings);

            print!("{}", report.summary());

            let errors = if strict {
                report.errors() + report.warnings()
            } else {
                report.errors()
            };

            if errors > 0 {
                return Err(ConfigError::CheckFailed { errors });
            }
        }

        Commands::Init { output, force } => {
            let path = output.unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));

            if path.exists() && !force {
                return Err(ConfigError::AlreadyExists {
                    path: path.display().to_string(),
                });
            }

            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }

            fs::write(&path, settings.to_starter_file()?)?;
            info!(path = %path.display(), "wrote starter settings file");
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}
