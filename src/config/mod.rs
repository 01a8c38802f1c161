mod schema;

pub use schema::{AssessmentConfig, Config};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/psyscore/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("psyscore"))
}

/// Get the default config file path (~/.config/psyscore/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses default path (~/.config/psyscore/config.yaml)
///
/// # Errors
///
/// Returns an error if:
/// - The config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => p,
        None => get_config_path()?,
    };

    if !config_path.exists() {
        anyhow::bail!(
            "Config file not found at {}. Run `psyscore init` to create one",
            config_path.display()
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    Ok(config)
}

/// Write the default config (all built-in presets) to `path`.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {}. Use --force to overwrite",
            path.display()
        );
    }

    let yaml = serde_saphyr::to_string(&Config::default())
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    fs::write(path, yaml)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{AssessmentType, Normalization, ScoringMethod};
    use std::env;

    #[test]
    fn test_load_missing_file_errors() {
        let temp_path = env::temp_dir().join("psyscore_test_missing_config.yaml");
        let _ = fs::remove_file(&temp_path);

        let err = load_config(Some(temp_path)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_write_and_load_default() {
        let temp_path = env::temp_dir().join("psyscore_test_default_config.yaml");
        let _ = fs::remove_file(&temp_path);

        write_default_config(&temp_path, false).unwrap();
        let loaded = load_config(Some(temp_path.clone())).unwrap();
        assert_eq!(loaded, Config::default());

        // Second write without force is refused
        assert!(write_default_config(&temp_path, false).is_err());
        assert!(write_default_config(&temp_path, true).is_ok());

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_parse_preset_and_override() {
        let yaml = r#"
assessments:
  - name: disc
    preset: disc
  - name: team-vark
    preset: vark
    scoring:
      categories: [visual, auditory]
      scoring_method: multiselect_count
      normalization: standardized
  - name: empty
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.assessments.len(), 3);

        let disc = config.find_assessment("disc").unwrap().effective_scoring().unwrap();
        assert_eq!(disc, AssessmentType::Disc.default_config());

        let vark = config.find_assessment("team-vark").unwrap().effective_scoring().unwrap();
        assert_eq!(vark.categories.len(), 2);
        assert_eq!(vark.scoring_method, ScoringMethod::MultiselectCount);
        assert_eq!(vark.normalization, Normalization::Standardized);

        assert!(config.find_assessment("empty").unwrap().effective_scoring().is_none());
        assert!(config.find_assessment("nope").is_none());
    }

    #[test]
    fn test_scoring_for() {
        let config = Config::default();
        let vark = config.scoring_for("vark").unwrap();
        assert_eq!(vark, AssessmentType::Vark.default_config());

        let err = config.scoring_for("mbti").unwrap_err();
        assert!(err.to_string().contains("Unknown assessment 'mbti'"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let yaml = r#"
assessments: []
queries: []
"#;
        let result: Result<Config, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }
}
