use crate::view::View;
use viewkit_core::text::AttributedText;
use viewkit_options::apply::configured;
use viewkit_options::view::ViewOptions;

/// A component that displays read-only text, either plain or attributed.
///
/// A label holds one or the other: setting plain text clears the attributed
/// text and the other way round.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    view: View,
    text: Option<String>,
    attributed_text: Option<AttributedText>,
}

impl_view_properties!(Label => view);

impl Label {
    /// Create an empty label.
    pub fn new() -> Self {
        Self {
            view: View::without_interaction(),
            text: None,
            attributed_text: None,
        }
    }

    /// Create a label with the given text and apply `options` to it.
    ///
    /// If both `text` and `attributed_text` are given, the attributed text is
    /// used and the plain text is left unset. If neither is given, the label
    /// stays empty.
    pub fn with_options(
        text: Option<String>,
        attributed_text: Option<AttributedText>,
        options: &ViewOptions,
    ) -> Self {
        let mut label = Self::new();

        if let Some(attributed_text) = attributed_text {
            if text.is_some() {
                log::trace!("Label given both text and attributed text, using attributed text");
            }
            label.set_attributed_text(Some(attributed_text));
        } else if let Some(text) = text {
            label.set_text(Some(text));
        }

        configured(label, options)
    }

    /// Returns the plain text, if the label holds plain text.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns the attributed text, if the label holds attributed text.
    pub fn attributed_text(&self) -> Option<&AttributedText> {
        self.attributed_text.as_ref()
    }

    /// Returns the string the label displays, which is empty for an empty label.
    pub fn displayed_text(&self) -> &str {
        match (&self.attributed_text, &self.text) {
            (Some(attributed), _) => attributed.as_str(),
            (None, Some(text)) => text.as_str(),
            (None, None) => "",
        }
    }

    /// Set the plain text, clearing any attributed text.
    pub fn set_text(&mut self, text: Option<String>) {
        self.text = text;
        self.attributed_text = None;
    }

    /// Set the attributed text, clearing any plain text.
    pub fn set_attributed_text(&mut self, text: Option<AttributedText>) {
        self.attributed_text = text;
        self.text = None;
    }
}

impl Default for Label {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a label and apply `options` to it in one call.
///
/// See [Label::with_options] for how `text` and `attributed_text` interact.
pub fn make_label(
    text: Option<String>,
    attributed_text: Option<AttributedText>,
    options: &ViewOptions,
) -> Label {
    Label::with_options(text, attributed_text, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewkit_core::text::TextAttribute;

    #[test]
    fn test_plain_text() {
        let label = Label::with_options(Some("hello".to_string()), None, &ViewOptions::default());

        assert_eq!(label.text(), Some("hello"));
        assert_eq!(label.attributed_text(), None);
        assert_eq!(label.displayed_text(), "hello");
    }

    #[test]
    fn test_attributed_text_takes_precedence() {
        let attributed = AttributedText::new("bold").with_attribute_all(TextAttribute::Underline);
        let label = make_label(
            Some("plain".to_string()),
            Some(attributed.clone()),
            &ViewOptions::default(),
        );

        assert_eq!(label.attributed_text(), Some(&attributed));
        assert_eq!(label.text(), None);
        assert_eq!(label.displayed_text(), "bold");
    }

    #[test]
    fn test_no_text_is_empty() {
        let label = make_label(None, None, &ViewOptions::new().with_hidden(true));

        assert_eq!(label.text(), None);
        assert_eq!(label.attributed_text(), None);
        assert_eq!(label.displayed_text(), "");
        assert!(label.is_hidden());
    }

    #[test]
    fn test_setting_text_clears_attributed() {
        let mut label = Label::new();
        label.set_attributed_text(Some(AttributedText::from("a")));
        label.set_text(Some("b".to_string()));

        assert_eq!(label.attributed_text(), None);
        assert_eq!(label.displayed_text(), "b");
    }
}
