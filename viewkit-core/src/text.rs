use std::ops::Range;
use vello::peniko::Color;

/// An attribute applied to a run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextAttribute {
    /// The color of the glyphs.
    ForegroundColor(Color),
    /// The font size in points.
    FontSize(f32),
    /// Draw an underline below the glyphs.
    Underline,
}

/// A run of text sharing one attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeRun {
    /// The byte range the attribute covers.
    pub range: Range<usize>,
    /// The attribute itself.
    pub attribute: TextAttribute,
}

/// A string with attributes for portions of its text.
///
/// Only holds the data; laying out and shaping the text is up to the component.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributedText {
    text: String,
    runs: Vec<AttributeRun>,
}

impl AttributedText {
    /// Create attributed text without any attributes.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            runs: Vec::new(),
        }
    }

    /// Add an attribute for the given byte range.
    ///
    /// The range is clamped to the length of the text.
    pub fn with_attribute(mut self, range: Range<usize>, attribute: TextAttribute) -> Self {
        let len = self.text.len();
        let range = range.start.min(len)..range.end.min(len);
        self.runs.push(AttributeRun { range, attribute });
        self
    }

    /// Add an attribute covering the whole text.
    pub fn with_attribute_all(self, attribute: TextAttribute) -> Self {
        let len = self.text.len();
        self.with_attribute(0..len, attribute)
    }

    /// Returns the plain string.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the attribute runs in the order they were added.
    pub fn runs(&self) -> &[AttributeRun] {
        &self.runs
    }

    /// Returns `true` if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<&str> for AttributedText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for AttributedText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_range_is_clamped() {
        let text = AttributedText::new("hello").with_attribute(2..40, TextAttribute::Underline);
        assert_eq!(text.runs()[0].range, 2..5);
    }

    #[test]
    fn test_equality_includes_runs() {
        let plain = AttributedText::from("hi");
        let colored = AttributedText::from("hi")
            .with_attribute_all(TextAttribute::ForegroundColor(Color::from_rgb8(255, 0, 0)));
        assert_ne!(plain, colored);
        assert_eq!(plain.as_str(), colored.as_str());
    }

    #[test]
    fn test_is_empty() {
        assert!(AttributedText::new("").is_empty());
        assert!(AttributedText::default().is_empty());
        assert!(!AttributedText::from("hi").is_empty());
    }
}
