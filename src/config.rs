use crate::layout::{LayoutConfig, NODE_BOX_HEIGHT};
use crate::prefs::default_state_path;
use crate::theme::Theme;
use clap::Parser;
use config::{
    Config as ConfigCrate, ConfigError as ConfigCrateError, Environment, File, Map, Source, Value,
};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_CATALOG_FILE: &str = "arf.json";
const DEFAULT_EXPORT_FILE: &str = "osint-map.svg";
const DEFAULT_RECENTER_DELAY_MS: u64 = 310;
const DEFAULT_MESSAGE_TIMEOUT_MS: u64 = 5000;
const ENV_PREFIX: &str = "OSINT_MAP";

#[cfg(target_os = "macos")]
const DEFAULT_OPEN_COMMAND: &str = "open";
#[cfg(target_os = "windows")]
const DEFAULT_OPEN_COMMAND: &str = "explorer";
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const DEFAULT_OPEN_COMMAND: &str = "xdg-open";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] ConfigCrateError),
    #[error("Validation error: {0}")]
    Validation(String),
}

// Every field optional so file and environment can be layered.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
struct FileConfig {
    catalog_file: Option<PathBuf>,
    default_category: Option<String>,
    theme: Option<String>,
    root_margin: Option<f64>,
    min_margin: Option<f64>,
    horizontal_gap: Option<f64>,
    vertical_gap: Option<f64>,
    base_node_width: Option<f64>,
    base_node_height: Option<f64>,
    max_node_width: Option<f64>,
    recenter_delay_ms: Option<u64>,
    message_timeout_ms: Option<u64>,
    open_command: Option<String>,
    log_file: Option<PathBuf>,
    export_file: Option<PathBuf>,
    state_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub catalog_file: PathBuf,
    pub default_category: Option<String>,
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub recenter_delay_ms: u64,
    pub message_timeout_ms: u64,
    pub open_command: String,
    pub log_file: Option<PathBuf>,
    pub export_file: PathBuf,
    /// Where runtime choices such as the theme are remembered.
    pub state_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_file: PathBuf::from(DEFAULT_CATALOG_FILE),
            default_category: None,
            theme: Theme::default(),
            layout: LayoutConfig::default(),
            recenter_delay_ms: DEFAULT_RECENTER_DELAY_MS,
            message_timeout_ms: DEFAULT_MESSAGE_TIMEOUT_MS,
            open_command: DEFAULT_OPEN_COMMAND.to_string(),
            log_file: None,
            export_file: PathBuf::from(DEFAULT_EXPORT_FILE),
            state_file: None,
        }
    }
}

#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Browse an OSINT resource catalog as a mind map", long_about = None)]
pub struct CliArgs {
    /// Path to the catalog JSON file
    pub catalog: Option<PathBuf>,

    /// Path to a custom configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Category to show on start
    #[arg(long)]
    pub category: Option<String>,

    /// Colour theme: dark or light
    #[arg(long)]
    pub theme: Option<String>,

    #[arg(long)]
    pub horizontal_gap: Option<f64>,
    #[arg(long)]
    pub vertical_gap: Option<f64>,
    #[arg(long)]
    pub max_node_width: Option<f64>,
    #[arg(long)]
    pub recenter_delay_ms: Option<u64>,
    #[arg(long)]
    pub message_timeout_ms: Option<u64>,

    /// Command used to open links
    #[arg(long)]
    pub open_command: Option<String>,

    /// Write diagnostics to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Remember the theme in this file instead of the data directory
    #[arg(long)]
    pub state_file: Option<PathBuf>,

    /// Render the category (or search path) to this SVG file and exit
    #[arg(long)]
    pub export_svg: Option<PathBuf>,

    /// Breadcrumb path to reveal, e.g. "Domain Name > Whois Records"
    #[arg(long)]
    pub path: Option<String>,

    /// Print the resolved configuration and exit
    #[arg(long)]
    pub debug_config: bool,
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "osint-map").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Loads configuration: defaults, then config file, then environment, then arguments.
pub fn load_config(args: &CliArgs) -> Result<AppConfig, ConfigError> {
    let env_source = Environment::with_prefix(ENV_PREFIX).try_parsing(true);
    // Missing variables are fine; a failed collect just means no overrides.
    let env_map: Map<String, Value> = env_source.collect().unwrap_or_else(|_| Map::new());

    build_config(args, Some(env_map))
}

pub(crate) fn build_config(
    args: &CliArgs,
    override_source: Option<Map<String, Value>>,
) -> Result<AppConfig, ConfigError> {
    let config_file_path = args.config.clone().or_else(default_config_path);

    let mut builder = ConfigCrate::builder();
    if let Some(ref path) = config_file_path {
        builder = builder.add_source(File::from(path.clone()).required(args.config.is_some()));
    }

    if let Some(overrides) = override_source {
        for (key, value) in overrides {
            builder = builder.set_override(&key, value)?;
        }
    }

    let loaded: FileConfig = builder.build()?.try_deserialize()?;
    let defaults = LayoutConfig::default();

    let theme = match args.theme.clone().or(loaded.theme) {
        Some(raw) => raw.parse::<Theme>().map_err(ConfigError::Validation)?,
        None => Theme::default(),
    };

    let config = AppConfig {
        catalog_file: args
            .catalog
            .clone()
            .or(loaded.catalog_file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_FILE)),
        default_category: args.category.clone().or(loaded.default_category),
        theme,
        layout: LayoutConfig {
            root_margin: loaded.root_margin.unwrap_or(defaults.root_margin),
            min_margin: loaded.min_margin.unwrap_or(defaults.min_margin),
            horizontal_gap: args
                .horizontal_gap
                .or(loaded.horizontal_gap)
                .unwrap_or(defaults.horizontal_gap),
            vertical_gap: args
                .vertical_gap
                .or(loaded.vertical_gap)
                .unwrap_or(defaults.vertical_gap),
            base_node_width: loaded.base_node_width.unwrap_or(defaults.base_node_width),
            base_node_height: loaded.base_node_height.unwrap_or(defaults.base_node_height),
            max_node_width: args
                .max_node_width
                .or(loaded.max_node_width)
                .unwrap_or(defaults.max_node_width),
        },
        recenter_delay_ms: args
            .recenter_delay_ms
            .or(loaded.recenter_delay_ms)
            .unwrap_or(DEFAULT_RECENTER_DELAY_MS),
        message_timeout_ms: args
            .message_timeout_ms
            .or(loaded.message_timeout_ms)
            .unwrap_or(DEFAULT_MESSAGE_TIMEOUT_MS),
        open_command: args
            .open_command
            .clone()
            .or(loaded.open_command)
            .unwrap_or_else(|| DEFAULT_OPEN_COMMAND.to_string()),
        log_file: args.log_file.clone().or(loaded.log_file),
        export_file: args
            .export_svg
            .clone()
            .or(loaded.export_file)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE)),
        state_file: args
            .state_file
            .clone()
            .or(loaded.state_file)
            .or_else(default_state_path),
    };

    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let layout = &config.layout;

    if layout.base_node_width <= 0.0 || layout.base_node_height <= 0.0 {
        return Err(ConfigError::Validation(
            "base_node_width and base_node_height must be positive".to_string(),
        ));
    }
    if layout.base_node_height < NODE_BOX_HEIGHT {
        return Err(ConfigError::Validation(format!(
            "base_node_height must be at least {}",
            NODE_BOX_HEIGHT
        )));
    }
    if layout.max_node_width < layout.base_node_width {
        return Err(ConfigError::Validation(
            "max_node_width must be at least base_node_width".to_string(),
        ));
    }
    if layout.horizontal_gap < 0.0 || layout.vertical_gap < 0.0 || layout.min_margin < 0.0 {
        return Err(ConfigError::Validation(
            "gaps and margins cannot be negative".to_string(),
        ));
    }
    if config.open_command.trim().is_empty() {
        return Err(ConfigError::Validation(
            "open_command cannot be empty".to_string(),
        ));
    }

    Ok(())
}
