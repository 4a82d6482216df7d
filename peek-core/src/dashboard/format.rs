use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display unit for byte counts. Decimal (SI) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ByteUnit {
    #[serde(rename = "B")]
    Bytes,
    #[serde(rename = "KB")]
    Kilobytes,
    #[default]
    #[serde(rename = "MB")]
    Megabytes,
    #[serde(rename = "GB")]
    Gigabytes,
}

impl ByteUnit {
    pub fn scale(self) -> f64 {
        match self {
            ByteUnit::Bytes => 1.0,
            ByteUnit::Kilobytes => 1e3,
            ByteUnit::Megabytes => 1e6,
            ByteUnit::Gigabytes => 1e9,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ByteUnit::Bytes => "Bytes",
            ByteUnit::Kilobytes => "Kilobytes",
            ByteUnit::Megabytes => "Megabytes",
            ByteUnit::Gigabytes => "Gigabytes",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ByteUnit::Bytes => "B",
            ByteUnit::Kilobytes => "KB",
            ByteUnit::Megabytes => "MB",
            ByteUnit::Gigabytes => "GB",
        }
    }
}

impl FromStr for ByteUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "B" => Ok(ByteUnit::Bytes),
            "KB" => Ok(ByteUnit::Kilobytes),
            "MB" => Ok(ByteUnit::Megabytes),
            "GB" => Ok(ByteUnit::Gigabytes),
            other => Err(format!("unknown byte unit '{other}' (expected B, KB, MB or GB)")),
        }
    }
}

impl fmt::Display for ByteUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Render a byte count in `unit`, rounded to `precision` decimals.
///
/// Plain bytes are printed as an integer. Scaled values always keep at least
/// one decimal, so `2_000_000` in megabytes reads `2.0 Megabytes`.
pub fn format_bytes(byte_count: u64, unit: ByteUnit, precision: usize) -> String {
    if unit == ByteUnit::Bytes {
        return format!("{byte_count} {}", unit.name());
    }

    let factor = 10f64.powi(precision as i32);
    let value = (byte_count as f64 / unit.scale() * factor).round() / factor;

    if value.fract() == 0.0 {
        format!("{value:.1} {}", unit.name())
    } else {
        format!("{value} {}", unit.name())
    }
}

/// Left-align `text` in a field of `width` characters.
pub fn pad_right(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}
