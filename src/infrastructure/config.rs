use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "https://api.stromgedacht.de";
const DEFAULT_CONFIG_FILE: &str = "config/stromgedacht";
const ENV_PREFIX: &str = "STROMGEDACHT";

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub chart: ChartSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct FigureSize {
    pub width: u32,
    pub height: u32,
}

impl FigureSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ChartSettings {
    pub status: FigureSize,
    pub strip: FigureSize,
    pub series: FigureSize,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            status: FigureSize::new(640, 640),
            strip: FigureSize::new(1500, 300),
            series: FigureSize::new(1000, 600),
        }
    }
}

/// Load settings from `config/stromgedacht` (optional), then `path` if given,
/// then `STROMGEDACHT__SECTION__KEY` environment variables.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let mut builder = base_builder();
    if let Some(path) = path {
        builder = builder.add_source(File::from(path));
    }

    let settings = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

fn base_builder() -> ConfigBuilder<DefaultState> {
    config::Config::builder().add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false))
}
