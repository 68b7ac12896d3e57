//! SVG generation from placed circles

use crate::layout::{PlacedCircle, Scheme};
use crate::selection::SelectionEntry;

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
            indent: 1,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a flower circle element
    ///
    /// When the owning selection entry is known, the circle gets a `<title>`
    /// child so hovering shows the flower's display name, and its role class
    /// comes from the entry. Otherwise the role is recovered from the leading
    /// segment of the circle id.
    pub fn add_circle(&mut self, circle: &PlacedCircle, owner: Option<&SelectionEntry>) {
        let prefix = self.prefix();
        let role = owner
            .map(|entry| entry.role.ident())
            .or_else(|| circle.id.split('-').next().filter(|s| !s.is_empty()));

        let class_list = std::iter::once(format!("{}flower", prefix))
            .chain(role.map(|r| format!("{}{}", prefix, r)))
            .collect::<Vec<_>>()
            .join(" ");

        let opacity_attr = if self.config.circle_opacity < 1.0 {
            format!(r#" opacity="{}""#, self.config.circle_opacity)
        } else {
            String::new()
        };

        let open = format!(
            r#"{}<circle id="{}" class="{}" cx="{}" cy="{}" r="{}" fill="{}"{}"#,
            self.indent_str(),
            escape_xml(&circle.id),
            class_list,
            circle.position.x,
            circle.position.y,
            circle.radius,
            circle.color,
            opacity_attr
        );

        match owner {
            Some(entry) => {
                let nl = self.newline();
                let inner = if self.config.pretty_print {
                    "  ".repeat(self.indent + 1)
                } else {
                    String::new()
                };
                self.elements.push(format!(
                    "{}>{}{}<title>{}</title>{}{}</circle>",
                    open,
                    nl,
                    inner,
                    escape_xml(&entry.display_name),
                    nl,
                    self.indent_str()
                ));
            }
            None => {
                self.elements.push(format!("{}/>", open));
            }
        }
    }

    /// Build the final SVG string
    pub fn build(self) -> String {
        let size = self.config.view_size;
        let nl = self.newline();

        let mut svg = String::new();

        // XML declaration for standalone
        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">"#,
            size, size
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render placed circles to an SVG string
///
/// Each circle whose `entry_key` matches a selection entry gets a tooltip
/// with that entry's display name.
pub fn render_circles(
    circles: &[PlacedCircle],
    entries: &[SelectionEntry],
    config: &SvgConfig,
) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    for circle in circles {
        let owner = entries.iter().find(|entry| entry.key == circle.entry_key);
        builder.add_circle(circle, owner);
    }
    builder.build()
}

/// Render a scheme's circles to an SVG string using its own entry snapshot
pub fn render_scheme(scheme: &Scheme, config: &SvgConfig) -> String {
    render_circles(&scheme.circles, &scheme.entries, config)
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
