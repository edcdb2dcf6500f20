use serde::Deserialize;
use viewkit_core::geometry::EdgeInsets;
use viewkit_core::scroll::{DecelerationRate, IndicatorStyle};
use viewkit_core::view::ScrollViewProperties;

/// An object that defines the scrolling behavior of a scroll view.
///
/// Unlike [ViewOptions](crate::view::ViewOptions), there are no partial fields
/// here: applying scroll options always writes every property, so the result
/// never depends on what the container had before.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollOptions {
    /// Additional scroll area around the content. Defaults to [EdgeInsets::ZERO].
    pub content_inset: EdgeInsets,
    /// If `true`, scrolling is locked to one axis while dragging. Defaults to `false`.
    pub directional_lock_enabled: bool,
    /// If `true`, the content bounces past its edge and back again. Defaults to `true`.
    pub bounces: bool,
    /// If `true` and `bounces` is `true`, allows dragging vertically even if the content is smaller than the bounds. Defaults to `false`.
    pub always_bounce_vertical: bool,
    /// If `true` and `bounces` is `true`, allows dragging horizontally even if the content is smaller than the bounds. Defaults to `false`.
    pub always_bounce_horizontal: bool,
    /// If `true`, scrolling stops on multiples of the view bounds. Defaults to `false`.
    pub paging_enabled: bool,
    /// If `false`, dragging is turned off. Defaults to `true`.
    pub scroll_enabled: bool,
    /// Show the vertical indicator while scrolling. Defaults to `true`.
    pub shows_vertical_indicator: bool,
    /// Show the horizontal indicator while scrolling. Defaults to `true`.
    pub shows_horizontal_indicator: bool,
    /// The style of the scroll indicators. Defaults to [IndicatorStyle::Default].
    pub indicator_style: IndicatorStyle,
    /// The deceleration rate after the user lifts their finger. Defaults to [DecelerationRate::Normal].
    pub deceleration_rate: DecelerationRate,
}

impl ScrollOptions {
    /// Create scroll options with the standard defaults.
    pub fn new() -> Self {
        Self {
            content_inset: EdgeInsets::ZERO,
            directional_lock_enabled: false,
            bounces: true,
            always_bounce_vertical: false,
            always_bounce_horizontal: false,
            paging_enabled: false,
            scroll_enabled: true,
            shows_vertical_indicator: true,
            shows_horizontal_indicator: true,
            indicator_style: IndicatorStyle::Default,
            deceleration_rate: DecelerationRate::Normal,
        }
    }

    /// Set the content inset.
    pub fn with_content_inset(mut self, inset: EdgeInsets) -> Self {
        self.content_inset = inset;
        self
    }

    /// Set whether directional lock is enabled.
    pub fn with_directional_lock_enabled(mut self, enabled: bool) -> Self {
        self.directional_lock_enabled = enabled;
        self
    }

    /// Set whether the content bounces.
    pub fn with_bounces(mut self, bounces: bool) -> Self {
        self.bounces = bounces;
        self
    }

    /// Set whether the content always bounces vertically.
    pub fn with_always_bounce_vertical(mut self, bounce: bool) -> Self {
        self.always_bounce_vertical = bounce;
        self
    }

    /// Set whether the content always bounces horizontally.
    pub fn with_always_bounce_horizontal(mut self, bounce: bool) -> Self {
        self.always_bounce_horizontal = bounce;
        self
    }

    /// Set whether paging is enabled.
    pub fn with_paging_enabled(mut self, enabled: bool) -> Self {
        self.paging_enabled = enabled;
        self
    }

    /// Set whether scrolling is enabled.
    pub fn with_scroll_enabled(mut self, enabled: bool) -> Self {
        self.scroll_enabled = enabled;
        self
    }

    /// Set whether the vertical indicator is shown.
    pub fn with_shows_vertical_indicator(mut self, shows: bool) -> Self {
        self.shows_vertical_indicator = shows;
        self
    }

    /// Set whether the horizontal indicator is shown.
    pub fn with_shows_horizontal_indicator(mut self, shows: bool) -> Self {
        self.shows_horizontal_indicator = shows;
        self
    }

    /// Set the indicator style.
    pub fn with_indicator_style(mut self, style: IndicatorStyle) -> Self {
        self.indicator_style = style;
        self
    }

    /// Set the deceleration rate.
    pub fn with_deceleration_rate(mut self, rate: impl Into<DecelerationRate>) -> Self {
        self.deceleration_rate = rate.into();
        self
    }

    /// Write every field onto the given scroll view.
    pub fn apply_to<S: ScrollViewProperties + ?Sized>(&self, scroll_view: &mut S) {
        log::trace!("Applying {:?}", self);

        scroll_view.set_content_inset(self.content_inset);
        scroll_view.set_directional_lock_enabled(self.directional_lock_enabled);
        scroll_view.set_bounces(self.bounces);
        scroll_view.set_always_bounce_vertical(self.always_bounce_vertical);
        scroll_view.set_always_bounce_horizontal(self.always_bounce_horizontal);
        scroll_view.set_paging_enabled(self.paging_enabled);
        scroll_view.set_scroll_enabled(self.scroll_enabled);
        scroll_view.set_shows_vertical_indicator(self.shows_vertical_indicator);
        scroll_view.set_shows_horizontal_indicator(self.shows_horizontal_indicator);
        scroll_view.set_indicator_style(self.indicator_style);
        scroll_view.set_deceleration_rate(self.deceleration_rate);
    }
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self::new()
    }
}
