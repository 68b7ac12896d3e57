//! Configuration for SVG rendering

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Edge length of the square viewBox, in canvas units
    pub view_size: f64,

    /// Whether to include XML declaration and standalone attributes
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "bq-" for "bq-flower")
    pub class_prefix: Option<String>,

    /// Fill opacity applied to every flower circle
    pub circle_opacity: f64,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            view_size: 400.0,
            standalone: true,
            pretty_print: true,
            class_prefix: Some("bq-".to_string()),
            circle_opacity: 0.95,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the viewBox edge length
    pub fn with_view_size(mut self, size: f64) -> Self {
        self.view_size = size;
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    /// Set the fill opacity for flower circles
    pub fn with_circle_opacity(mut self, opacity: f64) -> Self {
        self.circle_opacity = opacity;
        self
    }
}
