use crate::palette::{Generator, Selection, Tone};
use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
#[derive(Default)]
pub struct Config {
    pub palette: PaletteConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PaletteConfig {
    /// Tones selected at startup, in selection order.
    pub tones: Vec<Tone>,
    /// Max per-channel jitter around a single tone.
    pub tone_spread: f64,
    /// Max per-channel jitter on gradient colors.
    pub gradient_spread: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub mouse: bool,
    /// Ring the terminal bell on regenerate and copy.
    pub sound: bool,
    /// How long the "Copied!" toast stays visible.
    pub toast_millis: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// trace, debug, info, warn or error
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    pub data_dir: PathBuf,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            tones: Vec::new(),
            tone_spread: crate::palette::generate::DEFAULT_TONE_SPREAD,
            gradient_spread: crate::palette::generate::DEFAULT_GRADIENT_SPREAD,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse: true,
            sound: true,
            toast_millis: 1500,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        let data_dir = project_dirs()
            .map(|p| p.data_dir().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join("tonewheel"));
        Self { data_dir }
    }
}

impl PaletteConfig {
    pub fn generator(&self) -> Generator {
        Generator::new(self.tone_spread, self.gradient_spread)
    }

    pub fn selection(&self) -> Selection {
        self.tones.iter().copied().collect()
    }
}

impl LogConfig {
    pub fn level(&self) -> tracing::Level {
        self.level.trim().parse().unwrap_or(tracing::Level::INFO)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "tonewheel", "tonewheel")
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj = project_dirs().context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        let cfg = defaults::defaults();
        let raw = toml::to_string_pretty(&cfg).context("serialize default config")?;
        write_private(&path, &raw)?;
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    parse(&raw).with_context(|| format!("parse {}", path.display()))
}

pub fn parse(raw: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str::<Config>(raw)?)
}

fn write_private(path: &Path, raw: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    fs::write(path, raw).with_context(|| format!("write {}", path.display()))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }
    Ok(())
}
