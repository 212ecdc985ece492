use anyhow::{Context, Result, bail};
use piggy_core::{Taxonomy, TaxonomyConfig};
use piggy_finance::BudgetConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "piggy.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub taxonomy: TaxonomyConfig,
    pub budget: BudgetConfig,
}

impl Config {
    pub fn taxonomy(&self) -> Result<Taxonomy> {
        Taxonomy::from_config(&self.taxonomy).context("invalid [taxonomy] section")
    }
}

pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Load the config; a missing file means built-in defaults.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_config(&s).with_context(|| format!("parse {}", path.display()))
}

pub fn parse_config(s: &str) -> Result<Config> {
    Ok(toml::from_str(s)?)
}

pub fn save_config(path: &Path, cfg: &Config) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, s).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("config already exists: {} (pass --force to overwrite)", path.display());
    }
    save_config(path, &Config::default())?;
    println!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = load_config(&dir.path().join("piggy.toml")).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.taxonomy().unwrap(), Taxonomy::builtin());
    }

    #[test]
    fn test_partial_config() {
        let cfg = parse_config(
            r#"
[taxonomy]
other = "other"

[[taxonomy.categories]]
name = "food"
keywords = ["Cafe", "grocery"]

[budget]
limit_factor = 1.1
"#,
        )
        .unwrap();
        let t = cfg.taxonomy().unwrap();
        assert_eq!(t.len(), 1);
        assert_eq!(t.other(), "other");
        assert_eq!(t.get("food").unwrap().keywords(), ["cafe", "grocery"]);
        assert_eq!(cfg.budget.limit_factor, 1.1);
        assert_eq!(cfg.budget.income_savings_rate, 0.15);
    }

    #[test]
    fn test_empty_keyword_rejected() {
        let cfg = parse_config(
            r#"
[[taxonomy.categories]]
name = "услуги"
keywords = ["салон", ""]
"#,
        )
        .unwrap();
        assert!(cfg.taxonomy().is_err());

        let cfg = parse_config(
            r#"
[taxonomy]
allow_catch_all = true

[[taxonomy.categories]]
name = "услуги"
keywords = ["салон", ""]
"#,
        )
        .unwrap();
        assert!(cfg.taxonomy().is_ok());
    }

    #[test]
    fn test_init_roundtrip() {
        let dir = TempDir::new().unwrap();
        let p = dir.path().join("piggy.toml");
        init_config(&p, false).unwrap();
        assert!(init_config(&p, false).is_err());
        init_config(&p, true).unwrap();
        assert_eq!(load_config(&p).unwrap(), Config::default());
    }
}
