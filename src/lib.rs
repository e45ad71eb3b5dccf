//! dont-cross-line - Visual line width measurement for line length indicators
//!
//! Measures how many display columns a line occupies, with tab-stop alignment
//! and double-width CJK/emoji characters, and finds the first character that
//! crosses a width limit.
//!
//! # Measuring
//! ```
//! use dont_cross_line::{find_exceeding_position, visual_width, width, TabSize};
//!
//! let tab = TabSize::default();
//! assert_eq!(width("中"), 2);
//! assert_eq!(visual_width("\tabc", tab), 7);
//! assert_eq!(find_exceeding_position("中中中", 4, tab), Some(2));
//! ```
//!
//! # Indicator Session
//! ```
//! use dont_cross_line::{LineLengthIndicator, LineLimitConfig, Overflow, RawConfig, TabSize};
//!
//! let config = LineLimitConfig::normalize(RawConfig {
//!     max_length: Some(10),
//!     ..RawConfig::default()
//! });
//! let indicator = LineLengthIndicator::new(config);
//!
//! let mut decorations: Vec<Overflow> = Vec::new();
//! indicator.update("fits\nthis one does not", TabSize::default(), &mut decorations);
//! assert_eq!(decorations[0].line, 1);
//! assert_eq!(decorations[0].hover_message(), "Line length exceeds limit (17/10)");
//! ```
//!
//! # Width Models
//! ```
//! use dont_cross_line::{visual_width, visual_width_with, TabSize, UnicodeWidth};
//!
//! // Hangul is outside the default table but wide in the Unicode data
//! assert_eq!(visual_width("한글", TabSize::default()), 2);
//! assert_eq!(visual_width_with("한글", TabSize::default(), UnicodeWidth), 4);
//! ```

mod config;
mod error;
mod indicator;
mod measure;
mod width;

pub use config::{
    is_valid_hex_color, HexColor, LineLimitConfig, RawConfig, DEFAULT_MAX_LENGTH,
    DEFAULT_WARNING_COLOR,
};
pub use error::ConfigError;
pub use indicator::{DecorationSink, LineLengthIndicator, Overflow};
pub use measure::{
    find_exceeding_position, find_exceeding_position_with, visual_width, visual_width_with,
    ColumnCursor, TabSize, DEFAULT_TAB_SIZE,
};
pub use width::{char_width, width, TableWidth, UnicodeWidth, WidthClass, WidthModel};
