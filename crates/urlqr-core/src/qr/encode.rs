//! Payload → QR matrix, growing the version until the data fits.

use qrcode::bits::Bits;
use qrcode::types::{QrError, QrResult};
use qrcode::{EcLevel, QrCode, Version};

use super::GenerateError;
use crate::config::{QrConfig, MAX_QR_VERSION};

/// Encode `data` as a single byte-mode segment.
///
/// Starts at `cfg.min_version`; when `cfg.fit` is set, each `DataTooLong`
/// moves on to the next version, up to 40. Without `fit` only `min_version` is tried.
pub fn encode(data: &[u8], cfg: &QrConfig) -> Result<QrCode, GenerateError> {
    cfg.validate()?;
    let ec_level: EcLevel = cfg.error_correction.into();
    let last = if cfg.fit {
        MAX_QR_VERSION
    } else {
        cfg.min_version
    };

    for v in cfg.min_version..=last {
        match encode_at(data, Version::Normal(v), ec_level) {
            Ok(code) => {
                tracing::debug!(version = v, bytes = data.len(), "payload encoded");
                return Ok(code);
            }
            Err(QrError::DataTooLong) => continue,
            Err(e) => return Err(GenerateError::Encode(e)),
        }
    }

    Err(GenerateError::DataTooLong {
        len: data.len(),
        version: last,
    })
}

fn encode_at(data: &[u8], version: Version, ec_level: EcLevel) -> QrResult<QrCode> {
    let mut bits = Bits::new(version);
    bits.push_byte_data(data)?;
    bits.push_terminator(ec_level)?;
    QrCode::with_bits(bits, ec_level)
}
