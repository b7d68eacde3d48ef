//! Visual theme and styling.

use console::Style;

/// Runway's visual theme.
#[derive(Debug, Clone)]
pub struct RunwayTheme {
    /// Success messages (green).
    pub success: Style,
    /// Warning messages (orange).
    pub warning: Style,
    /// Error messages (red bold).
    pub error: Style,
    /// Secondary text.
    pub dim: Style,
    /// Important text.
    pub highlight: Style,
    /// Headers (cyan bold).
    pub header: Style,
    /// Table borders.
    pub border: Style,
    /// Contextual hints.
    pub hint: Style,
    /// Tag labels.
    pub tag: Style,
    /// Engine versions.
    pub version: Style,
}

impl Default for RunwayTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl RunwayTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            border: Style::new().dim(),
            hint: Style::new().cyan().dim(),
            tag: Style::new().magenta(),
            version: Style::new().cyan(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            border: Style::new(),
            hint: Style::new(),
            tag: Style::new(),
            version: Style::new(),
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("▶"),
            self.highlight.apply_to(title)
        )
    }

    /// Format a tag list as `#a #b`.
    pub fn format_tags(&self, tags: &[String]) -> String {
        tags.iter()
            .map(|t| self.tag.apply_to(format!("#{}", t)).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
