use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Highest QR version defined by the standard.
pub const MAX_QR_VERSION: i16 = 40;

/// Modules per side of a version-40 code.
pub const MAX_QR_MODULES: u32 = 177;

/// Largest accepted image side in pixels.
pub const MAX_IMAGE_SIDE: u32 = 16_384;

/// Output directory used when the operator leaves the prompt empty.
pub const DEFAULT_OUTPUT_DIR: &str = "qrcodes";

/// QR error-correction level. `L` recovers ~7% of codewords, `H` ~30%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ErrorCorrection {
    #[default]
    L,
    M,
    Q,
    H,
}

impl From<ErrorCorrection> for qrcode::EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::L => qrcode::EcLevel::L,
            ErrorCorrection::M => qrcode::EcLevel::M,
            ErrorCorrection::Q => qrcode::EcLevel::Q,
            ErrorCorrection::H => qrcode::EcLevel::H,
        }
    }
}

/// Invalid QR parameters found in the config file.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("min_version must be between 1 and 40, got {0}")]
    VersionOutOfRange(i16),
    #[error("box_size must be at least 1 pixel")]
    ZeroBoxSize,
    #[error("box_size {box_size} with border {border} gives images over 16384 px per side")]
    ImageTooLarge { box_size: u32, border: u32 },
}

/// Parameters handed to the QR generator (`[qr]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrConfig {
    /// Version the encoder starts from (1 = 21x21 modules).
    pub min_version: i16,
    pub error_correction: ErrorCorrection,
    /// Pixel size of one module.
    pub box_size: u32,
    /// Quiet zone around the matrix, in modules.
    pub border: u32,
    /// Grow the version until the data fits instead of failing at `min_version`.
    pub fit: bool,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            min_version: 1,
            error_correction: ErrorCorrection::L,
            box_size: 10,
            border: 4,
            fit: true,
        }
    }
}

impl QrConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_QR_VERSION).contains(&self.min_version) {
            return Err(ConfigError::VersionOutOfRange(self.min_version));
        }
        if self.box_size == 0 {
            return Err(ConfigError::ZeroBoxSize);
        }
        match self.image_side(MAX_QR_MODULES) {
            Some(side) if side <= MAX_IMAGE_SIDE => Ok(()),
            _ => Err(self.too_large()),
        }
    }

    /// Pixel side of a rendered code with `modules` modules per side; `None` on overflow.
    pub fn image_side(&self, modules: u32) -> Option<u32> {
        self.border
            .checked_mul(2)?
            .checked_add(modules)?
            .checked_mul(self.box_size)
    }

    pub(crate) fn too_large(&self) -> ConfigError {
        ConfigError::ImageTooLarge {
            box_size: self.box_size,
            border: self.border,
        }
    }
}

/// Global configuration loaded from `~/.config/urlqr/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlqrConfig {
    /// Used when the output directory prompt is left empty or `-o` is not given.
    pub default_output_dir: PathBuf,
    /// Keep processing a CSV batch after a row fails to generate.
    pub continue_on_error: bool,
    pub qr: QrConfig,
}

impl Default for UrlqrConfig {
    fn default() -> Self {
        Self {
            default_output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            continue_on_error: false,
            qr: QrConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlqr")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlqrConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlqrConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Parse and validate a config file at an explicit path.
pub fn load_from_path(path: &Path) -> Result<UrlqrConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: UrlqrConfig = toml::from_str(&data)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    cfg.qr
        .validate()
        .with_context(|| format!("invalid [qr] section in {}", path.display()))?;
    Ok(cfg)
}
