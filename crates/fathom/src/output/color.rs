//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Success/Connected: green  (same-cluster verdicts, found routes)
//!   - Warning:           yellow (partial results)
//!   - Error/Severed:     red    (different clusters, missing routes)
//!   - Info/Identifiers:  cyan   (landing and vertex ids)
//!   - Muted:             dimmed (field labels, connectors)
//!   - Emphasis:          bold   (section headers)

use colored::Colorize;

use super::OutputConfig;

/// Apply semantic "success" color (green) to text.
pub fn success(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Apply semantic "error" color (red) to text.
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Apply semantic "warning" color (yellow) to text.
pub fn warning(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.yellow().to_string()
}

/// Apply semantic "info" color (cyan) to text.
pub fn info(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.cyan().to_string()
}

/// Apply dimmed style to text (for labels/field names).
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// Apply bold style to text (for section headers).
pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}

/// Colorize a landing or vertex id.
pub(crate) fn colorize_id(id: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return id.to_string();
    }
    id.cyan().to_string()
}

/// Hop connector, with ASCII fallback support.
pub(crate) fn arrow(config: &OutputConfig) -> &'static str {
    if config.use_ascii {
        "->"
    } else {
        "→"
    }
}

/// Verdict icon for cluster membership, with ASCII fallback support.
pub(crate) fn verdict_icon(connected: bool, config: &OutputConfig) -> String {
    let icon = match (connected, config.use_ascii) {
        (true, false) => "✓",
        (true, true) => "[ok]",
        (false, false) => "✗",
        (false, true) => "[--]",
    };
    if !config.use_colors {
        return icon.to_string();
    }
    if connected {
        icon.green().to_string()
    } else {
        icon.red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colored::control::set_override;
    use std::sync::{Mutex, MutexGuard};

    // colored's set_override() is process-global; tests that flip it must
    // hold this mutex.
    static GLOBAL_STATE_MUTEX: Mutex<()> = Mutex::new(());

    /// RAII guard that enables colors via set_override and resets on drop.
    struct ColorGuard<'a> {
        _guard: MutexGuard<'a, ()>,
    }

    impl ColorGuard<'_> {
        fn new() -> Self {
            let guard = GLOBAL_STATE_MUTEX.lock().unwrap();
            set_override(true);
            ColorGuard { _guard: guard }
        }
    }

    impl Drop for ColorGuard<'_> {
        fn drop(&mut self) {
            set_override(false);
        }
    }

    fn colors_on() -> OutputConfig {
        OutputConfig::new(80, false, true)
    }

    fn colors_off() -> OutputConfig {
        OutputConfig::new(80, false, false)
    }

    #[test]
    fn semantic_colors_emit_ansi_codes() {
        let _guard = ColorGuard::new();
        let config = colors_on();

        assert!(success("up", &config).contains("\x1b["));
        assert!(error("down", &config).contains("\x1b["));
        assert!(warning("maybe", &config).contains("\x1b["));
        assert!(info("id", &config).contains("\x1b["));
        assert!(bold("header", &config).contains("\x1b["));
        assert!(dimmed("label", &config).contains("\x1b["));
    }

    #[test]
    fn disabled_colors_pass_text_through() {
        let config = colors_off();

        assert_eq!(success("up", &config), "up");
        assert_eq!(error("down", &config), "down");
        assert_eq!(colorize_id("1-alpha", &config), "1-alpha");
        assert_eq!(bold("header", &config), "header");
    }

    #[test]
    fn verdict_icons_follow_ascii_mode() {
        let unicode = colors_off();
        let ascii = OutputConfig::new(80, true, false);

        assert_eq!(verdict_icon(true, &unicode), "✓");
        assert_eq!(verdict_icon(false, &unicode), "✗");
        assert_eq!(verdict_icon(true, &ascii), "[ok]");
        assert_eq!(verdict_icon(false, &ascii), "[--]");
    }

    #[test]
    fn verdict_icons_colorize_by_outcome() {
        let _guard = ColorGuard::new();
        let config = colors_on();

        let same = verdict_icon(true, &config);
        let split = verdict_icon(false, &config);
        assert!(same.contains("\x1b[32m"), "green for connected: {same:?}");
        assert!(split.contains("\x1b[31m"), "red for severed: {split:?}");
    }

    #[test]
    fn arrows_follow_ascii_mode() {
        assert_eq!(arrow(&colors_off()), "→");
        assert_eq!(arrow(&OutputConfig::new(80, true, false)), "->");
    }
}
