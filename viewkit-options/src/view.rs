use crate::field::Field;
use serde::Deserialize;
use viewkit_core::appearance::ContentMode;
use viewkit_core::layout::{Axis, LayoutPriority};
use viewkit_core::view::ViewProperties;
use viewkit_core::Color;

/// An object that defines the appearance of a view.
///
/// Every plain field is written when the options are applied, even when it
/// still holds its default. [Field] members are only written when set.
///
/// | field | default |
/// |---|---|
/// | `background_color` | `Some(Color::TRANSPARENT)` |
/// | `content_mode` | [ContentMode::ScaleToFill] |
/// | `corner_radius` | `0.0` |
/// | `clips_to_bounds` | `false` |
/// | `is_hidden` | `false` |
/// | `tint_color` | `None` |
/// | `alpha` | `1.0` |
/// | `interaction_enabled` | [Field::Unset] |
/// | `layout_compression` | [Field::Unset] |
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewOptions {
    /// The view's background color.
    #[serde(with = "viewkit_core::serde_color::option")]
    pub background_color: Option<Color>,
    /// How the view lays out its content when its bounds change.
    pub content_mode: ContentMode,
    /// The radius to use when drawing rounded corners for the background.
    pub corner_radius: f64,
    /// Whether children are confined to the bounds of the view.
    pub clips_to_bounds: bool,
    /// Whether the view is hidden.
    pub is_hidden: bool,
    /// The view's tint color.
    #[serde(with = "viewkit_core::serde_color::option")]
    pub tint_color: Option<Color>,
    /// The view's alpha value.
    pub alpha: f64,
    /// Whether user events are delivered to the view.
    pub interaction_enabled: Field<bool>,
    /// The view's layout compression and hugging priorities.
    pub layout_compression: Field<LayoutCompressionOptions>,
}

impl ViewOptions {
    /// Create view options with every field at its default.
    pub fn new() -> Self {
        Self {
            background_color: Some(Color::TRANSPARENT),
            content_mode: ContentMode::ScaleToFill,
            corner_radius: 0.0,
            clips_to_bounds: false,
            is_hidden: false,
            tint_color: None,
            alpha: 1.0,
            interaction_enabled: Field::Unset,
            layout_compression: Field::Unset,
        }
    }

    /// Create view options whose only non-default field is the given layout compression.
    ///
    /// Applying the result still writes every plain field with its default.
    /// Applying it after other options therefore resets their appearance; use
    /// [LayoutCompressionOptions] directly to touch only the priorities.
    pub fn layout_compression(compression: LayoutCompressionOptions) -> Self {
        Self::new().with_layout_compression(compression)
    }

    /// Set the background color. Pass [None] to remove the background.
    pub fn with_background_color(mut self, color: impl Into<Option<Color>>) -> Self {
        self.background_color = color.into();
        self
    }

    /// Set the content mode.
    pub fn with_content_mode(mut self, mode: ContentMode) -> Self {
        self.content_mode = mode;
        self
    }

    /// Set the corner radius.
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Set whether children are clipped to the bounds.
    pub fn with_clips_to_bounds(mut self, clips: bool) -> Self {
        self.clips_to_bounds = clips;
        self
    }

    /// Set whether the view is hidden.
    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.is_hidden = hidden;
        self
    }

    /// Set the tint color. Pass [None] to inherit the tint.
    pub fn with_tint_color(mut self, color: impl Into<Option<Color>>) -> Self {
        self.tint_color = color.into();
        self
    }

    /// Set the alpha value.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Force user interaction on or off when applied.
    pub fn with_interaction_enabled(mut self, enabled: bool) -> Self {
        self.interaction_enabled = Field::Set(enabled);
        self
    }

    /// Set the layout compression priorities.
    pub fn with_layout_compression(mut self, compression: LayoutCompressionOptions) -> Self {
        self.layout_compression = Field::Set(compression);
        self
    }

    /// Write these options onto the given view.
    pub fn apply_to<V: ViewProperties + ?Sized>(&self, view: &mut V) {
        log::trace!("Applying {:?}", self);

        view.set_background_color(self.background_color);
        view.set_content_mode(self.content_mode);
        view.set_hidden(self.is_hidden);
        view.set_corner_radius(self.corner_radius);
        view.set_clips_to_bounds(self.clips_to_bounds);
        view.set_tint_color(self.tint_color);
        view.set_alpha(self.alpha);

        self.interaction_enabled
            .if_set(|enabled| view.set_interaction_enabled(enabled));
        if let Field::Set(compression) = &self.layout_compression {
            compression.apply_to(view);
        }
    }
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Describes a view's layout compression and hugging priorities.
///
/// Each slot is independent. Unset slots are never written, so a value with
/// only `horizontal_hugging` set changes nothing but that priority.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutCompressionOptions {
    /// How strongly the view resists shrinking horizontally.
    pub horizontal_compression_resistance: Field<LayoutPriority>,
    /// How strongly the view resists growing horizontally.
    pub horizontal_hugging: Field<LayoutPriority>,
    /// How strongly the view resists shrinking vertically.
    pub vertical_compression_resistance: Field<LayoutPriority>,
    /// How strongly the view resists growing vertically.
    pub vertical_hugging: Field<LayoutPriority>,
}

impl LayoutCompressionOptions {
    /// Create layout compression options with every slot unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the horizontal compression resistance priority.
    pub fn with_horizontal_compression_resistance(
        mut self,
        priority: impl Into<LayoutPriority>,
    ) -> Self {
        self.horizontal_compression_resistance = Field::Set(priority.into());
        self
    }

    /// Set the horizontal content hugging priority.
    pub fn with_horizontal_hugging(mut self, priority: impl Into<LayoutPriority>) -> Self {
        self.horizontal_hugging = Field::Set(priority.into());
        self
    }

    /// Set the vertical compression resistance priority.
    pub fn with_vertical_compression_resistance(
        mut self,
        priority: impl Into<LayoutPriority>,
    ) -> Self {
        self.vertical_compression_resistance = Field::Set(priority.into());
        self
    }

    /// Set the vertical content hugging priority.
    pub fn with_vertical_hugging(mut self, priority: impl Into<LayoutPriority>) -> Self {
        self.vertical_hugging = Field::Set(priority.into());
        self
    }

    /// Returns `true` if no slot is set.
    pub fn is_empty(&self) -> bool {
        self.horizontal_compression_resistance.is_unset()
            && self.horizontal_hugging.is_unset()
            && self.vertical_compression_resistance.is_unset()
            && self.vertical_hugging.is_unset()
    }

    /// Write the set priorities onto the given view.
    pub fn apply_to<V: ViewProperties + ?Sized>(&self, view: &mut V) {
        log::trace!("Applying {:?}", self);

        self.horizontal_compression_resistance.if_set(|priority| {
            view.set_compression_resistance_priority(priority, Axis::Horizontal)
        });
        self.horizontal_hugging
            .if_set(|priority| view.set_content_hugging_priority(priority, Axis::Horizontal));
        self.vertical_compression_resistance.if_set(|priority| {
            view.set_compression_resistance_priority(priority, Axis::Vertical)
        });
        self.vertical_hugging
            .if_set(|priority| view.set_content_hugging_priority(priority, Axis::Vertical));
    }
}
