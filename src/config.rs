use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT: &str = "slcsp.csv";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct InputConfig {
    #[serde(default)]
    pub zips: Option<PathBuf>,
    #[serde(default)]
    pub plans: Option<PathBuf>,
    #[serde(default)]
    pub slcsp: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub zips: Option<PathBuf>,
    pub plans: Option<PathBuf>,
    pub slcsp: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

/// Every path a run touches, all required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPaths {
    pub zips: PathBuf,
    pub plans: PathBuf,
    pub targets: PathBuf,
    pub output: PathBuf,
}

impl Config {
    pub fn default_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config/slcsp/config.toml")
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(|p| p.to_path_buf())
            .unwrap_or_else(Self::default_path);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(&path)
            .with_context(|| format!("failed reading config: {}", path.display()))?;
        let parsed: Self = toml::from_str(&data)
            .with_context(|| format!("failed parsing TOML config: {}", path.display()))?;
        Ok(parsed)
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(zips) = overrides.zips {
            self.input.zips = Some(zips);
        }
        if let Some(plans) = overrides.plans {
            self.input.plans = Some(plans);
        }
        if let Some(slcsp) = overrides.slcsp {
            self.input.slcsp = Some(slcsp);
        }
        if let Some(output) = overrides.output {
            self.output.path = output;
        }
    }

    pub fn resolve(&self) -> Result<RunPaths> {
        Ok(RunPaths {
            zips: required(&self.input.zips, "--zips")?,
            plans: required(&self.input.plans, "--plans")?,
            targets: required(&self.input.slcsp, "--slcsp")?,
            output: self.output.path.clone(),
        })
    }

    pub fn write_template(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed creating config directory: {}", parent.display())
            })?;
        }
        fs::write(path, Self::default_template())
            .with_context(|| format!("failed writing config template: {}", path.display()))
    }

    pub fn default_template() -> String {
        let template = r#"[input]
zips = "zips.csv"
plans = "plans.csv"
slcsp = "slcsp.csv"

[output]
path = "slcsp.csv"
"#;
        template.to_string()
    }
}

fn required(path: &Option<PathBuf>, flag: &str) -> Result<PathBuf> {
    path.clone()
        .ok_or_else(|| anyhow!("missing input path: pass {flag} or set it in the config file"))
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use crate::config::{Config, ConfigOverrides, DEFAULT_OUTPUT};

    #[test]
    fn missing_config_file_yields_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let config = Config::load(Some(&dir.path().join("absent.toml"))).expect("load");
        assert!(config.input.zips.is_none());
        assert_eq!(config.output.path, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn template_round_trips_and_resolves() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested/config.toml");
        Config::write_template(&path).expect("write template");
        let config = Config::load(Some(&path)).expect("load");
        let paths = config.resolve().expect("resolve");
        assert_eq!(paths.zips, PathBuf::from("zips.csv"));
        assert_eq!(paths.targets, PathBuf::from("slcsp.csv"));
    }

    #[test]
    fn overrides_take_precedence_over_file_values() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[input]\nzips = \"a.csv\"\nplans = \"b.csv\"\n").expect("write");
        let mut config = Config::load(Some(&path)).expect("load");
        config.apply_overrides(ConfigOverrides {
            plans: Some(PathBuf::from("override.csv")),
            slcsp: Some(PathBuf::from("targets.csv")),
            output: Some(PathBuf::from("out.csv")),
            ..ConfigOverrides::default()
        });
        let paths = config.resolve().expect("resolve");
        assert_eq!(paths.zips, PathBuf::from("a.csv"));
        assert_eq!(paths.plans, PathBuf::from("override.csv"));
        assert_eq!(paths.output, PathBuf::from("out.csv"));
    }

    #[test]
    fn resolve_names_the_missing_flag() {
        let err = Config::default().resolve().expect_err("no inputs");
        assert!(err.to_string().contains("--zips"));
    }
}
