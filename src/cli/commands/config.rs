use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};
use std::path::Path;
use std::process::Command;

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn run_editor(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        init,
        edit_config,
        editor,
    } = cmd
    {
        // ---- INIT ----
        if *init {
            if path.exists() {
                warning(format!(
                    "Configuration file already exists: {}",
                    path.display()
                ));
            } else {
                Config::default().save(path)?;
                success(format!("Config file: {}", path.display()));
            }
        }

        // ---- PRINT ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {}; defaults are in use.",
                    path.display()
                ));
            } else {
                let missing = Config::missing_keys(path)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning(format!(
                        "Missing fields (defaults in use): {}",
                        missing.join(", ")
                    ));
                }
            }
        }

        // ---- EDIT ----
        if *edit_config {
            if !path.exists() {
                Config::default().save(path)?;
                info(format!("Created default configuration at {}", path.display()));
            }

            let fallback = default_editor();
            let requested = editor.clone().unwrap_or_else(|| fallback.clone());

            if run_editor(&requested, path) {
                success(format!(
                    "Configuration file edited successfully using '{requested}'"
                ));
            } else if requested != fallback && run_editor(&fallback, path) {
                warning(format!(
                    "Editor '{requested}' not available, used fallback '{fallback}'"
                ));
            } else {
                error(format!("Failed to edit configuration file with '{requested}'"));
                return Err(AppError::Config(format!(
                    "no usable editor for {}",
                    path.display()
                )));
            }
        }
    }

    Ok(())
}
