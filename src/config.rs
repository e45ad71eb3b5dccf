//! Host settings and their normalization
//!
//! Hosts hand over whatever their settings store holds. Nothing here fails:
//! missing or out-of-range values fall back to defaults so the measuring
//! functions only ever see sane inputs.

use std::fmt;

use winnow::combinator::preceded;
use winnow::token::take_while;
use winnow::PResult;
use winnow::Parser;

use crate::error::ConfigError;

/// Maximum line width used when the host has none
pub const DEFAULT_MAX_LENGTH: usize = 80;

/// Warning color used when the host's value is missing or malformed
pub const DEFAULT_WARNING_COLOR: HexColor = HexColor {
    r: 0xff,
    g: 0x6b,
    b: 0x6b,
};

/// An opaque RGB color written as `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    /// Parse a `#RRGGBB` color (hex digits in either case, nothing else)
    pub fn parse(s: &str) -> Result<HexColor, ConfigError> {
        hex_color.parse(s).map_err(|_| ConfigError::InvalidColor {
            value: s.to_string(),
            suggestion: Some("Use six hex digits, e.g. #ff6b6b".to_string()),
        })
    }

    /// `#rrggbbaa` form, for translucent backgrounds
    pub fn with_alpha(&self, alpha: u8) -> String {
        format!("{}{:02x}", self, alpha)
    }
}

impl Default for HexColor {
    fn default() -> Self {
        DEFAULT_WARNING_COLOR
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parse two hex digits into a byte
fn hex_byte(input: &mut &str) -> PResult<u8> {
    take_while(2, |c: char| c.is_ascii_hexdigit())
        .try_map(|s: &str| u8::from_str_radix(s, 16))
        .parse_next(input)
}

/// Parse `#RRGGBB`
fn hex_color(input: &mut &str) -> PResult<HexColor> {
    preceded('#', (hex_byte, hex_byte, hex_byte))
        .map(|(r, g, b)| HexColor { r, g, b })
        .parse_next(input)
}

/// Check whether `color` is a `#RRGGBB` string
pub fn is_valid_hex_color(color: &str) -> bool {
    HexColor::parse(color).is_ok()
}

/// Settings exactly as the host reports them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfig {
    pub max_length: Option<i64>,
    pub enabled: Option<bool>,
    pub warning_color: Option<String>,
}

/// Normalized line limit settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineLimitConfig {
    /// Lines wider than this many columns are flagged (at least 1)
    pub max_length: usize,
    pub enabled: bool,
    pub warning_color: HexColor,
}

impl Default for LineLimitConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            enabled: true,
            warning_color: DEFAULT_WARNING_COLOR,
        }
    }
}

impl LineLimitConfig {
    /// Build a config from host settings, clamping and defaulting as needed
    pub fn normalize(raw: RawConfig) -> Self {
        let max_length = match raw.max_length {
            Some(n) => usize::try_from(n.max(1)).unwrap_or(usize::MAX),
            None => DEFAULT_MAX_LENGTH,
        };

        let warning_color = match raw.warning_color.as_deref() {
            Some(s) => HexColor::parse(s).unwrap_or_else(|err| {
                tracing::warn!(%err, "falling back to default warning color");
                DEFAULT_WARNING_COLOR
            }),
            None => DEFAULT_WARNING_COLOR,
        };

        let config = Self {
            max_length,
            enabled: raw.enabled.unwrap_or(true),
            warning_color,
        };
        tracing::debug!(?config, "normalized line limit config");
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        let color = HexColor::parse("#FF6b00").unwrap();
        assert_eq!(color, HexColor { r: 0xff, g: 0x6b, b: 0x00 });
        assert_eq!(color.to_string(), "#ff6b00");
        assert_eq!(color.with_alpha(0x33), "#ff6b0033");
    }

    #[test]
    fn test_reject_malformed_colors() {
        for bad in ["", "#", "ff6b6b", "#ff6b6", "#ff6b6b6b", "#gg0000", " #ff6b6b", "red"] {
            assert!(!is_valid_hex_color(bad), "{bad:?} should be rejected");
        }
        assert!(is_valid_hex_color("#000000"));
    }

    #[test]
    fn test_invalid_color_error() {
        let err = HexColor::parse("blue").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor { ref value, .. } if value == "blue"));
        assert!(err.to_string().starts_with("Invalid color 'blue'"));
    }

    #[test]
    fn test_normalize_defaults() {
        let config = LineLimitConfig::normalize(RawConfig::default());
        assert_eq!(config, LineLimitConfig::default());
        assert_eq!(config.max_length, 80);
        assert!(config.enabled);
        assert_eq!(config.warning_color.to_string(), "#ff6b6b");
    }

    #[test]
    fn test_normalize_clamps_max_length() {
        let clamp = |n| {
            LineLimitConfig::normalize(RawConfig {
                max_length: Some(n),
                ..RawConfig::default()
            })
            .max_length
        };
        assert_eq!(clamp(0), 1);
        assert_eq!(clamp(-10), 1);
        assert_eq!(clamp(120), 120);
    }

    #[test]
    fn test_normalize_color_fallback() {
        let config = LineLimitConfig::normalize(RawConfig {
            warning_color: Some("#12345".to_string()),
            enabled: Some(false),
            ..RawConfig::default()
        });
        assert_eq!(config.warning_color, DEFAULT_WARNING_COLOR);
        assert!(!config.enabled);

        let config = LineLimitConfig::normalize(RawConfig {
            warning_color: Some("#00AAFF".to_string()),
            ..RawConfig::default()
        });
        assert_eq!(config.warning_color.to_string(), "#00aaff");
    }
}
