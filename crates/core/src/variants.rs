//! Variants
//!
//! Colour and size chosen for a cart line.

/// Placeholder shown when a variant attribute was not chosen.
pub const UNSPECIFIED: &str = "N/A";

/// Colour and size of a line. Blank values are treated as unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Variant {
    color: Option<String>,
    size: Option<String>,
}

impl Variant {
    /// Build a variant, trimming values and dropping blank ones.
    pub fn new(color: Option<String>, size: Option<String>) -> Self {
        Self {
            color: normalize(color),
            size: normalize(size),
        }
    }

    /// Chosen colour, if any.
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// Chosen size, if any.
    pub fn size(&self) -> Option<&str> {
        self.size.as_deref()
    }

    /// Text snapshotted onto order lines, e.g. `Màu: Đen | Size: M`.
    pub fn text(&self) -> String {
        format!(
            "Màu: {} | Size: {}",
            self.color().unwrap_or(UNSPECIFIED),
            self.size().unwrap_or(UNSPECIFIED)
        )
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_includes_colour_and_size() {
        let variant = Variant::new(Some("Đen".to_string()), Some("M".to_string()));

        assert_eq!(variant.text(), "Màu: Đen | Size: M");
    }

    #[test]
    fn text_uses_placeholder_for_missing_values() {
        assert_eq!(Variant::default().text(), "Màu: N/A | Size: N/A");
        assert_eq!(
            Variant::new(None, Some("XL".to_string())).text(),
            "Màu: N/A | Size: XL"
        );
    }

    #[test]
    fn blank_values_are_unspecified() {
        let variant = Variant::new(Some("  ".to_string()), Some(" L ".to_string()));

        assert_eq!(variant.color(), None);
        assert_eq!(variant.size(), Some("L"));
        assert_eq!(variant, Variant::new(None, Some("L".to_string())));
    }
}
