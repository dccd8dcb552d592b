use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub record_file: String,
    pub json: bool,
    pub validate_scores: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            record_file: "assessment.json".to_string(),
            json: false,
            validate_scores: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub bar_width: usize,
    pub chart_width: usize,
    pub show_feedback: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            bar_width: 30,
            chart_width: 40,
            show_feedback: true,
        }
    }
}

pub fn load_config(cli_config_path: Option<&Path>, cwd: &Path) -> Result<LoadedConfig> {
    if let Some(path) = cli_config_path {
        if !path.exists() {
            bail!(
                "config file not found at {} (passed with --config)",
                path.display()
            );
        }

        return Ok(LoadedConfig {
            config: read_config(path)?,
        });
    }

    let local_path = cwd.join("bandscore.toml");
    if local_path.exists() {
        return Ok(LoadedConfig {
            config: read_config(&local_path)?,
        });
    }

    Ok(LoadedConfig {
        config: Config::default(),
    })
}

pub fn write_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!(
            "refusing to overwrite existing config file: {}",
            path.display()
        );
    }

    let content = default_config_toml()?;
    fs::write(path, content).with_context(|| format!("failed writing {}", path.display()))?;
    Ok(())
}

pub fn default_config_toml() -> Result<String> {
    toml::to_string_pretty(&Config::default()).context("failed to serialize default config")
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed reading config file {}", path.display()))?;
    let config = toml::from_str::<Config>(&content)
        .with_context(|| format!("failed parsing config file {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_toml_round_trips() {
        let rendered = default_config_toml().unwrap();
        let parsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.general.record_file, "assessment.json");
        assert!(parsed.general.validate_scores);
        assert_eq!(parsed.display.bar_width, 30);
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let parsed: Config = toml::from_str("[display]\nbar_width = 12\n").unwrap();
        assert_eq!(parsed.display.bar_width, 12);
        assert_eq!(parsed.display.chart_width, 40);
        assert!(!parsed.general.json);
    }

    #[test]
    fn loads_local_config_when_present() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("bandscore.toml"),
            "[general]\njson = true\n",
        )
        .unwrap();

        let loaded = load_config(None, dir.path()).unwrap();
        assert!(loaded.config.general.json);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(Some(&dir.path().join("nope.toml")), dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn refuses_to_overwrite_an_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bandscore.toml");
        write_default_config(&path).unwrap();
        assert!(write_default_config(&path).is_err());
    }
}
