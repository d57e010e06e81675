//! Style batches and inline style storage
//!
//! A [`Style`] is built in full before it touches an element, then handed to
//! [`Document::set_style`](super::Document::set_style) in a single write.
//! Properties spelled with one leading dash (`-transform`) are expanded to
//! the unprefixed property plus every vendor-prefixed variant.

use crate::constants::VENDOR_PREFIXES;

/// An ordered batch of style declarations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    declarations: Vec<(String, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Style::set`]
    #[must_use]
    pub fn with(mut self, property: &str, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Set a declaration, replacing an earlier one for the same property
    pub fn set(&mut self, property: &str, value: impl Into<String>) {
        let value = value.into();
        match self.declarations.iter_mut().find(|(name, _)| name == property) {
            Some((_, existing)) => *existing = value,
            None => self.declarations.push((property.to_string(), value)),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Expand `-property` declarations into their prefixed forms.
    ///
    /// `-transform: v` becomes `transform`, `-webkit-transform`,
    /// `-moz-transform`, `-ms-transform` and `-o-transform`, all set to `v`.
    /// Declarations that already carry a vendor prefix pass through.
    #[must_use]
    pub fn auto_prefixed(&self) -> Style {
        let mut expanded = Style::new();

        for (property, value) in &self.declarations {
            match wants_prefixes(property) {
                Some(bare) => {
                    expanded.set(bare, value.clone());
                    for prefix in VENDOR_PREFIXES {
                        expanded.set(&format!("-{prefix}-{bare}"), value.clone());
                    }
                }
                None => expanded.set(property, value.clone()),
            }
        }

        expanded
    }
}

/// Returns the bare property name when `property` asks for vendor prefixes.
fn wants_prefixes(property: &str) -> Option<&str> {
    let bare = property.strip_prefix('-')?;
    if bare.is_empty() || bare.starts_with('-') {
        return None;
    }

    let already_prefixed = VENDOR_PREFIXES
        .iter()
        .any(|prefix| bare.strip_prefix(prefix).is_some_and(|rest| rest.starts_with('-')));

    if already_prefixed {
        None
    } else {
        Some(bare)
    }
}

/// The inline style currently held by an element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    properties: Vec<(String, String)>,
}

impl InlineStyle {
    /// Apply every declaration of `style`, keeping properties it does not name.
    pub fn apply(&mut self, style: &Style) {
        for (property, value) in style.iter() {
            match self.properties.iter_mut().find(|(name, _)| name == property) {
                Some((_, existing)) => *existing = value.to_string(),
                None => self.properties.push((property.to_string(), value.to_string())),
            }
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Render as a `style` attribute value
    pub fn css_text(&self) -> String {
        self.properties
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Format a number the way a style engine prints it.
///
/// Integral values have no fraction, non-finite values print as `NaN`,
/// `Infinity` or `-Infinity`, and negative zero prints as `0`. Magnitudes
/// from `1e21` up or below `1e-6` use exponent form (`1e+21`, `1e-7`).
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        let exponent = format!("{value:e}");
        match exponent.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exponent,
        }
    } else {
        value.to_string()
    }
}

/// Format a pixel length, e.g. `40px` or `NaNpx`
#[must_use]
pub fn px(value: f64) -> String {
    format!("{}px", format_number(value))
}
