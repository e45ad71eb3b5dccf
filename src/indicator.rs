//! Line length indicator session
//!
//! Scans a document with the measuring functions and hands the offending
//! ranges to a host-provided sink. The host owns event subscription and
//! drawing; this type owns the settings and the enabled flag.

use tracing::{debug, trace};

use crate::config::LineLimitConfig;
use crate::measure::{find_exceeding_position, visual_width, TabSize};

/// One line that is wider than the configured limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overflow {
    /// Zero-based line number
    pub line: usize,
    /// Character index of the first character past the limit
    pub start: usize,
    /// Character count of the line (end of the highlighted range)
    pub end: usize,
    /// Visual width of the whole line
    pub width: usize,
    pub max_length: usize,
}

impl Overflow {
    /// Text shown when hovering the highlighted range
    pub fn hover_message(&self) -> String {
        format!(
            "Line length exceeds limit ({}/{})",
            self.width, self.max_length
        )
    }
}

/// Receiver for scan results, implemented by the host's rendering layer
pub trait DecorationSink {
    /// Replace all decorations with `overflows`. An empty slice clears them.
    fn set_decorations(&mut self, overflows: &[Overflow]);
}

impl DecorationSink for Vec<Overflow> {
    fn set_decorations(&mut self, overflows: &[Overflow]) {
        self.clear();
        self.extend_from_slice(overflows);
    }
}

/// Session state for one indicator instance
#[derive(Debug, Clone, Default)]
pub struct LineLengthIndicator {
    config: LineLimitConfig,
}

impl LineLengthIndicator {
    pub fn new(config: LineLimitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LineLimitConfig {
        &self.config
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Replace the settings, e.g. after the host reports a change
    pub fn reconfigure(&mut self, config: LineLimitConfig) {
        debug!(?config, "indicator reconfigured");
        self.config = config;
    }

    /// Flip the enabled flag and return the new state
    pub fn toggle(&mut self) -> bool {
        self.config.enabled = !self.config.enabled;
        debug!(enabled = self.config.enabled, "indicator toggled");
        self.config.enabled
    }

    /// Find every line of `text` wider than the limit.
    ///
    /// Lines are split on `\n`; a trailing `\r` is not part of the line.
    /// This ignores the enabled flag.
    pub fn scan(&self, text: &str, tab_size: TabSize) -> Vec<Overflow> {
        let max_length = self.config.max_length;
        let mut overflows = Vec::new();

        for (line, raw) in text.split('\n').enumerate() {
            let line_text = raw.strip_suffix('\r').unwrap_or(raw);
            let Some(start) = find_exceeding_position(line_text, max_length, tab_size) else {
                continue;
            };

            let width = visual_width(line_text, tab_size);
            trace!(line, start, width, "line exceeds limit");
            overflows.push(Overflow {
                line,
                start,
                end: line_text.chars().count(),
                width,
                max_length,
            });
        }

        overflows
    }

    /// Rescan `text` and push the result to `sink`. A disabled indicator
    /// clears the sink instead.
    pub fn update(&self, text: &str, tab_size: TabSize, sink: &mut dyn DecorationSink) {
        if !self.config.enabled {
            sink.set_decorations(&[]);
            return;
        }

        let overflows = self.scan(text, tab_size);
        debug!(count = overflows.len(), "decorations updated");
        sink.set_decorations(&overflows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indicator(max_length: usize) -> LineLengthIndicator {
        LineLengthIndicator::new(LineLimitConfig {
            max_length,
            ..LineLimitConfig::default()
        })
    }

    #[test]
    fn test_scan_reports_long_lines() {
        let text = "short\nthis line is too long\nok";
        let overflows = indicator(10).scan(text, TabSize::default());
        assert_eq!(
            overflows,
            vec![Overflow {
                line: 1,
                start: 10,
                end: 21,
                width: 21,
                max_length: 10,
            }]
        );
    }

    #[test]
    fn test_scan_strips_carriage_return() {
        let overflows = indicator(5).scan("aaaaa\r\nbbbbbb\r\n", TabSize::default());
        assert_eq!(overflows.len(), 1);
        assert_eq!(overflows[0].line, 1);
        assert_eq!(overflows[0].end, 6);
    }

    #[test]
    fn test_scan_uses_tab_size() {
        let ind = indicator(6);
        assert!(ind.scan("\tab", TabSize::new(4).unwrap()).is_empty());
        let overflows = ind.scan("\tab", TabSize::new(8).unwrap());
        assert_eq!(overflows[0].start, 0);
        assert_eq!(overflows[0].width, 10);
    }

    #[test]
    fn test_update_and_toggle() {
        let mut ind = indicator(3);
        let mut sink: Vec<Overflow> = Vec::new();

        ind.update("abcd", TabSize::default(), &mut sink);
        assert_eq!(sink.len(), 1);

        assert!(!ind.toggle());
        assert!(!ind.is_enabled());
        ind.update("abcd", TabSize::default(), &mut sink);
        assert!(sink.is_empty());

        assert!(ind.toggle());
        ind.update("abcd\nefgh", TabSize::default(), &mut sink);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_reconfigure() {
        let mut ind = indicator(3);
        ind.reconfigure(LineLimitConfig {
            max_length: 10,
            ..LineLimitConfig::default()
        });
        assert_eq!(ind.config().max_length, 10);
        assert!(ind.scan("abcd", TabSize::default()).is_empty());
    }
}
