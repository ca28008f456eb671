use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use eli5_client::{settings::ClientSettings, store::SettingsStore};

#[derive(Parser, Debug)]
#[clap(
    name = "eli5",
    version,
    about = "Rewrite pasted text so a five-year-old can follow it",
    rename_all = "kebab-case"
)]
pub struct Cli {
    /// Settings JSON file (missing file means defaults)
    #[arg(long, global = true, env = "ELI5_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Base URL of the rewrite service
    #[arg(long, global = true, env = "ELI5_BASE_URL")]
    pub base_url: Option<String>,

    /// Seconds a notification stays on screen
    #[arg(long, global = true, env = "ELI5_TOAST_DELAY_SECS")]
    pub toast_delay_secs: Option<u64>,

    #[clap(subcommand)]
    pub subcommand: Commands,
}

#[derive(clap::Subcommand, Debug, Clone)]
pub enum Commands {
    /// Simplify text from --text or stdin
    Rewrite {
        /// Text to simplify; read from stdin when absent
        #[arg(long)]
        text: Option<String>,

        /// Copy the result to the system clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Check that the service is up and configured
    Health,
    /// Write the effective settings (file plus flags) back to --settings
    SaveSettings,
}

impl Cli {
    /// File settings with command-line overrides applied on top.
    pub fn load_settings(&self) -> Result<ClientSettings> {
        let mut settings = match &self.settings {
            Some(path) => SettingsStore::new(path.clone()).load()?,
            None => ClientSettings::default(),
        };
        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(secs) = self.toast_delay_secs {
            settings.toast_delay_ms = secs.saturating_mul(1_000);
        }
        Ok(settings)
    }

    pub fn save_settings(&self, settings: &ClientSettings) -> Result<PathBuf> {
        let Some(path) = &self.settings else {
            anyhow::bail!("--settings is required to save settings")
        };
        SettingsStore::new(path.clone()).save(settings)?;
        Ok(path.clone())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "eli5",
            "--base-url",
            "https://eli5.example",
            "--toast-delay-secs",
            "5",
            "rewrite",
            "--text",
            "hello",
        ]);
        let settings = cli.load_settings().expect("settings");
        assert_eq!(settings.base_url, "https://eli5.example");
        assert_eq!(settings.toast_delay_ms, 5_000);
        assert_eq!(settings.rewrite_path, "/rewrite");
        assert!(matches!(
            cli.subcommand,
            Commands::Rewrite { text: Some(ref t), copy: false } if t == "hello"
        ));
    }

    #[test]
    fn huge_toast_delay_saturates() {
        let max = u64::MAX.to_string();
        let cli = Cli::parse_from(["eli5", "--toast-delay-secs", max.as_str(), "health"]);
        let settings = cli.load_settings().expect("settings");
        assert_eq!(settings.toast_delay_ms, u64::MAX);
    }

    #[test]
    fn save_settings_persists_flag_overrides() {
        let path = std::env::temp_dir()
            .join("eli5-client-cli-save")
            .join("settings.json");
        let _ = std::fs::remove_file(&path);
        let path_arg = path.display().to_string();
        let cli = Cli::parse_from([
            "eli5",
            "--settings",
            path_arg.as_str(),
            "--base-url",
            "https://eli5.example",
            "save-settings",
        ]);
        assert!(matches!(cli.subcommand, Commands::SaveSettings));

        let settings = cli.load_settings().expect("settings");
        let saved = cli.save_settings(&settings).expect("save");

        assert_eq!(saved, path);
        let reloaded = SettingsStore::new(path).load().expect("reload");
        assert_eq!(reloaded.base_url, "https://eli5.example");
        assert_eq!(reloaded, settings);
    }

    #[test]
    fn save_settings_needs_a_path() {
        let cli = Cli::parse_from(["eli5", "save-settings"]);
        if cli.settings.is_none() {
            assert!(cli.save_settings(&ClientSettings::default()).is_err());
        }
    }
}
