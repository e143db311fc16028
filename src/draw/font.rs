//! Font descriptor for panel text rendering.

/// Font face used for the property panel.
///
/// Converted to a Pango description string at render time so the panel and
/// its measurement pass always agree on metrics. Panel text is always the
/// regular face; only the family varies (from `panel.font_family`).
#[derive(Debug, Clone)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Monospace", "JetBrains Mono").
    /// References installed system fonts by name.
    pub family: String,
}

impl FontDescriptor {
    /// Creates a descriptor for the given font family.
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
        }
    }

    /// Converts this descriptor to a Pango font description string.
    ///
    /// Pango sizes are integer points; fractional sizes round to the
    /// nearest. Example: `"Sans 13"`.
    pub fn to_pango_string(&self, size: f64) -> String {
        format!("{} {}", self.family, size.round() as i32)
    }
}

impl Default for FontDescriptor {
    /// Plain sans-serif, the stock panel face.
    fn default() -> Self {
        Self::new("Sans")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pango_string_default_is_plain_sans() {
        let font = FontDescriptor::default();
        assert_eq!(font.to_pango_string(13.0), "Sans 13");
    }

    #[test]
    fn pango_string_keeps_multi_word_families() {
        let font = FontDescriptor::new("JetBrains Mono");
        assert_eq!(font.to_pango_string(16.0), "JetBrains Mono 16");
    }

    #[test]
    fn pango_string_rounds_fractional_sizes() {
        let font = FontDescriptor::new("Monospace");
        assert_eq!(font.to_pango_string(15.6), "Monospace 16");
    }
}
