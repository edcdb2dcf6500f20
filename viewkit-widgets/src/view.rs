use viewkit_core::appearance::ContentMode;
use viewkit_core::layout::{Axis, LayoutPriority};
use viewkit_core::view::ViewProperties;
use viewkit_core::Color;
use viewkit_options::apply::configured;
use viewkit_options::view::ViewOptions;

/// The base component: a rectangle with presentation state and no content.
///
/// Specialized components embed a `View` and dereference to it, so the
/// getters below are available on all of them.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    background_color: Option<Color>,
    content_mode: ContentMode,
    corner_radius: f64,
    clips_to_bounds: bool,
    hidden: bool,
    tint_color: Option<Color>,
    alpha: f64,
    interaction_enabled: bool,
    hugging: [LayoutPriority; 2],
    compression_resistance: [LayoutPriority; 2],
}

impl View {
    /// Create a new view with no background that accepts user interaction.
    pub fn new() -> Self {
        Self {
            background_color: None,
            content_mode: ContentMode::ScaleToFill,
            corner_radius: 0.0,
            clips_to_bounds: false,
            hidden: false,
            tint_color: None,
            alpha: 1.0,
            interaction_enabled: true,
            hugging: [LayoutPriority::DEFAULT_LOW; 2],
            compression_resistance: [LayoutPriority::DEFAULT_HIGH; 2],
        }
    }

    /// Create a new view and apply the given options to it.
    pub fn with_options(options: &ViewOptions) -> Self {
        configured(Self::new(), options)
    }

    pub(crate) fn without_interaction() -> Self {
        Self {
            interaction_enabled: false,
            ..Self::new()
        }
    }

    /// Returns the background color.
    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    /// Returns the content mode.
    pub fn content_mode(&self) -> ContentMode {
        self.content_mode
    }

    /// Returns the corner radius.
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    /// Returns whether children are clipped to the bounds.
    pub fn clips_to_bounds(&self) -> bool {
        self.clips_to_bounds
    }

    /// Returns whether the view is hidden.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Returns the tint color.
    pub fn tint_color(&self) -> Option<Color> {
        self.tint_color
    }

    /// Returns the alpha value.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns whether user events are delivered to the view.
    pub fn is_interaction_enabled(&self) -> bool {
        self.interaction_enabled
    }

    /// Returns the content hugging priority for the given axis.
    pub fn content_hugging_priority(&self, axis: Axis) -> LayoutPriority {
        self.hugging[axis_index(axis)]
    }

    /// Returns the compression resistance priority for the given axis.
    pub fn compression_resistance_priority(&self, axis: Axis) -> LayoutPriority {
        self.compression_resistance[axis_index(axis)]
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewProperties for View {
    fn set_background_color(&mut self, color: Option<Color>) {
        self.background_color = color;
    }

    fn set_content_mode(&mut self, mode: ContentMode) {
        self.content_mode = mode;
    }

    fn set_corner_radius(&mut self, radius: f64) {
        self.corner_radius = radius;
    }

    fn set_clips_to_bounds(&mut self, clips: bool) {
        self.clips_to_bounds = clips;
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    fn set_tint_color(&mut self, color: Option<Color>) {
        self.tint_color = color;
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
    }

    fn set_interaction_enabled(&mut self, enabled: bool) {
        self.interaction_enabled = enabled;
    }

    fn set_content_hugging_priority(&mut self, priority: LayoutPriority, axis: Axis) {
        self.hugging[axis_index(axis)] = priority;
    }

    fn set_compression_resistance_priority(&mut self, priority: LayoutPriority, axis: Axis) {
        self.compression_resistance[axis_index(axis)] = priority;
    }
}

fn axis_index(axis: Axis) -> usize {
    match axis {
        Axis::Horizontal => 0,
        Axis::Vertical => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewkit_options::apply::ApplyOptions;
    use viewkit_options::view::LayoutCompressionOptions;

    #[test]
    fn test_default_priorities() {
        let view = View::new();
        for axis in Axis::ALL {
            assert_eq!(view.content_hugging_priority(axis), LayoutPriority::DEFAULT_LOW);
            assert_eq!(view.compression_resistance_priority(axis), LayoutPriority::DEFAULT_HIGH);
        }
    }

    #[test]
    fn test_with_options_writes_required_fields() {
        let options = ViewOptions::new()
            .with_background_color(Color::from_rgb8(10, 20, 30))
            .with_content_mode(ContentMode::Center)
            .with_corner_radius(6.0)
            .with_clips_to_bounds(true)
            .with_hidden(true)
            .with_tint_color(Color::from_rgb8(0, 122, 255))
            .with_alpha(0.3);
        let view = View::with_options(&options);

        assert_eq!(view.background_color(), options.background_color);
        assert_eq!(view.content_mode(), options.content_mode);
        assert_eq!(view.corner_radius(), options.corner_radius);
        assert_eq!(view.clips_to_bounds(), options.clips_to_bounds);
        assert_eq!(view.is_hidden(), options.is_hidden);
        assert_eq!(view.tint_color(), options.tint_color);
        assert_eq!(view.alpha(), options.alpha);
    }

    #[test]
    fn test_out_of_range_values_pass_through() {
        let view = View::with_options(&ViewOptions::new().with_alpha(3.5).with_corner_radius(-2.0));

        assert_eq!(view.alpha(), 3.5);
        assert_eq!(view.corner_radius(), -2.0);
    }

    #[test]
    fn test_none_background_is_written() {
        let mut view = View::with_options(&ViewOptions::new().with_background_color(Color::WHITE));
        view.apply_options(&ViewOptions::new().with_background_color(None));

        assert_eq!(view.background_color(), None);
    }

    #[test]
    fn test_sequential_fragments_last_write_wins() {
        let mut view = View::new();
        let fragment = LayoutCompressionOptions::new;
        view.apply_options(&fragment().with_horizontal_hugging(LayoutPriority::new(300.0)));
        view.apply_options(&fragment().with_vertical_hugging(LayoutPriority::new(400.0)));
        view.apply_options(&fragment().with_horizontal_hugging(LayoutPriority::new(500.0)));

        assert_eq!(view.content_hugging_priority(Axis::Horizontal), LayoutPriority::new(500.0));
        assert_eq!(view.content_hugging_priority(Axis::Vertical), LayoutPriority::new(400.0));
    }
}
