//! Error type for building a QR image from a payload.

use crate::config::ConfigError;

/// Failure while turning a payload into PNG bytes. Disk errors are reported
/// separately by the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("invalid QR configuration: {0}")]
    Config(#[from] ConfigError),
    /// Payload does not fit in any allowed version at the configured EC level.
    #[error("data too long for a QR code: {len} bytes exceed the capacity of version {version}")]
    DataTooLong { len: usize, version: i16 },
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),
    #[error("PNG encoding failed: {0}")]
    Image(#[from] image::ImageError),
}
