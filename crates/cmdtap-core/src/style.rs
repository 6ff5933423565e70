//! Line decoration for mirrored child output.
//!
//! Mirrored lines are visually set apart from the parent process's own
//! output by wrapping each one in an ANSI color marker and resetting the
//! style afterwards. The decoration is injected configuration, not a global.

/// ANSI reset sequence appended after every decorated line.
pub const RESET: &str = "\x1b[0m";

/// Default marker: gray foreground, the conventional "this is someone
/// else's output" dimming.
pub const GRAY: &str = "\x1b[37m";

/// How mirrored lines are decorated before printing.
#[derive(Debug, Clone)]
pub struct LineStyle {
    /// When false, lines pass through undecorated.
    pub enabled: bool,
    /// ANSI escape prefix applied to each line.
    pub color: String,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            enabled: true,
            color: GRAY.to_string(),
        }
    }
}

impl LineStyle {
    /// A style that passes lines through untouched.
    pub const fn plain() -> Self {
        Self {
            enabled: false,
            color: String::new(),
        }
    }

    /// Wrap a line in the color marker and reset, or return it bare when
    /// decoration is disabled.
    pub fn paint(&self, line: &str) -> String {
        if self.enabled {
            format!("{}{line}{RESET}", self.color)
        } else {
            line.to_string()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_style_wraps_in_gray_and_reset() {
        let style = LineStyle::default();
        assert_eq!(style.paint("hello"), "\x1b[37mhello\x1b[0m");
    }

    #[test]
    fn plain_style_leaves_line_untouched() {
        let style = LineStyle::plain();
        assert_eq!(style.paint("hello"), "hello");
    }

    #[test]
    fn custom_color_is_used_verbatim() {
        let style = LineStyle {
            enabled: true,
            color: "\x1b[90m".to_string(),
        };
        assert_eq!(style.paint("x"), "\x1b[90mx\x1b[0m");
    }

    #[test]
    fn empty_line_still_gets_reset() {
        let style = LineStyle::default();
        assert_eq!(style.paint(""), "\x1b[37m\x1b[0m");
    }
}
