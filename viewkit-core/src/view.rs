use crate::appearance::ContentMode;
use crate::geometry::EdgeInsets;
use crate::layout::{Axis, LayoutPriority};
use crate::scroll::{DecelerationRate, IndicatorStyle};
use vello::peniko::Color;

/// The presentation properties every view exposes.
///
/// This is the contract options are applied through. Each setter must take
/// effect immediately and must not fail; values are passed through exactly as
/// given, so an alpha of `1.5` or a negative corner radius reaches the
/// implementation unchanged.
///
/// ```rust
/// use viewkit_core::view::ViewProperties;
/// use viewkit_core::appearance::ContentMode;
/// use viewkit_core::layout::{Axis, LayoutPriority};
/// use viewkit_core::Color;
///
/// #[derive(Default)]
/// struct Swatch {
///     background: Option<Color>,
///     alpha: f64,
/// }
///
/// impl ViewProperties for Swatch {
///     fn set_background_color(&mut self, color: Option<Color>) {
///         self.background = color;
///     }
///     fn set_content_mode(&mut self, _: ContentMode) {}
///     fn set_corner_radius(&mut self, _: f64) {}
///     fn set_clips_to_bounds(&mut self, _: bool) {}
///     fn set_hidden(&mut self, _: bool) {}
///     fn set_tint_color(&mut self, _: Option<Color>) {}
///     fn set_alpha(&mut self, alpha: f64) {
///         self.alpha = alpha;
///     }
///     fn set_interaction_enabled(&mut self, _: bool) {}
///     fn set_content_hugging_priority(&mut self, _: LayoutPriority, _: Axis) {}
///     fn set_compression_resistance_priority(&mut self, _: LayoutPriority, _: Axis) {}
/// }
/// ```
pub trait ViewProperties {
    /// Set the background color. [None] removes the background.
    fn set_background_color(&mut self, color: Option<Color>);

    /// Set how the view lays out its content when its bounds change.
    fn set_content_mode(&mut self, mode: ContentMode);

    /// Set the radius used when drawing rounded corners for the background.
    fn set_corner_radius(&mut self, radius: f64);

    /// Set whether children are confined to the bounds of the view.
    fn set_clips_to_bounds(&mut self, clips: bool);

    /// Set whether the view is hidden.
    fn set_hidden(&mut self, hidden: bool);

    /// Set the tint color. [None] means the view inherits its tint.
    fn set_tint_color(&mut self, color: Option<Color>);

    /// Set the opacity of the view.
    fn set_alpha(&mut self, alpha: f64);

    /// Set whether user events are delivered to the view.
    fn set_interaction_enabled(&mut self, enabled: bool);

    /// Set the priority with which the view resists growing beyond its content size.
    fn set_content_hugging_priority(&mut self, priority: LayoutPriority, axis: Axis);

    /// Set the priority with which the view resists shrinking below its content size.
    fn set_compression_resistance_priority(&mut self, priority: LayoutPriority, axis: Axis);
}

/// The behavior properties of a scrollable container.
pub trait ScrollViewProperties: ViewProperties {
    /// Set the extra scroll area around the content.
    fn set_content_inset(&mut self, inset: EdgeInsets);

    /// Set whether scrolling is locked to one axis while dragging.
    fn set_directional_lock_enabled(&mut self, enabled: bool);

    /// Set whether the content bounces past its edges.
    fn set_bounces(&mut self, bounces: bool);

    /// Set whether vertical bouncing happens even when the content is smaller than the bounds.
    fn set_always_bounce_vertical(&mut self, bounce: bool);

    /// Set whether horizontal bouncing happens even when the content is smaller than the bounds.
    fn set_always_bounce_horizontal(&mut self, bounce: bool);

    /// Set whether scrolling stops on multiples of the view bounds.
    fn set_paging_enabled(&mut self, enabled: bool);

    /// Set whether scrolling is enabled.
    fn set_scroll_enabled(&mut self, enabled: bool);

    /// Set whether the vertical indicator is shown while scrolling.
    fn set_shows_vertical_indicator(&mut self, shows: bool);

    /// Set whether the horizontal indicator is shown while scrolling.
    fn set_shows_horizontal_indicator(&mut self, shows: bool);

    /// Set the style of the scroll indicators.
    fn set_indicator_style(&mut self, style: IndicatorStyle);

    /// Set the deceleration rate after the user lifts their finger.
    fn set_deceleration_rate(&mut self, rate: DecelerationRate);
}
