use crate::view::View;
use viewkit_core::geometry::EdgeInsets;
use viewkit_core::scroll::{DecelerationRate, IndicatorStyle};
use viewkit_core::view::ScrollViewProperties;
use viewkit_options::apply::{configured, ApplyOptions};
use viewkit_options::scroll::ScrollOptions;
use viewkit_options::view::ViewOptions;

/// A scrollable container.
///
/// Starts out with the same behavior [ScrollOptions::default] describes.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollView {
    view: View,
    content_inset: EdgeInsets,
    directional_lock_enabled: bool,
    bounces: bool,
    always_bounce_vertical: bool,
    always_bounce_horizontal: bool,
    paging_enabled: bool,
    scroll_enabled: bool,
    shows_vertical_indicator: bool,
    shows_horizontal_indicator: bool,
    indicator_style: IndicatorStyle,
    deceleration_rate: DecelerationRate,
}

impl_view_properties!(ScrollView => view);

impl ScrollView {
    /// Create a new scroll view.
    pub fn new() -> Self {
        Self {
            view: View::new(),
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

    /// Create a scroll view and apply the given view options to it.
    pub fn with_options(options: &ViewOptions) -> Self {
        configured(Self::new(), options)
    }

    /// Create a scroll view and apply both view and scroll options to it.
    pub fn with_scroll_options(options: &ViewOptions, scroll_options: &ScrollOptions) -> Self {
        let mut scroll_view = Self::with_options(options);
        scroll_view.apply_options(scroll_options);
        scroll_view
    }

    /// Returns the content inset.
    pub fn content_inset(&self) -> EdgeInsets {
        self.content_inset
    }

    /// Returns whether directional lock is enabled.
    pub fn is_directional_lock_enabled(&self) -> bool {
        self.directional_lock_enabled
    }

    /// Returns whether the content bounces.
    pub fn bounces(&self) -> bool {
        self.bounces
    }

    /// Returns whether the content always bounces vertically.
    pub fn always_bounce_vertical(&self) -> bool {
        self.always_bounce_vertical
    }

    /// Returns whether the content always bounces horizontally.
    pub fn always_bounce_horizontal(&self) -> bool {
        self.always_bounce_horizontal
    }

    /// Returns whether paging is enabled.
    pub fn is_paging_enabled(&self) -> bool {
        self.paging_enabled
    }

    /// Returns whether scrolling is enabled.
    pub fn is_scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    /// Returns whether the vertical indicator is shown.
    pub fn shows_vertical_indicator(&self) -> bool {
        self.shows_vertical_indicator
    }

    /// Returns whether the horizontal indicator is shown.
    pub fn shows_horizontal_indicator(&self) -> bool {
        self.shows_horizontal_indicator
    }

    /// Returns the indicator style.
    pub fn indicator_style(&self) -> IndicatorStyle {
        self.indicator_style
    }

    /// Returns the deceleration rate.
    pub fn deceleration_rate(&self) -> DecelerationRate {
        self.deceleration_rate
    }

    /// Returns the current scroll behavior as options.
    pub fn scroll_options(&self) -> ScrollOptions {
        ScrollOptions {
            content_inset: self.content_inset,
            directional_lock_enabled: self.directional_lock_enabled,
            bounces: self.bounces,
            always_bounce_vertical: self.always_bounce_vertical,
            always_bounce_horizontal: self.always_bounce_horizontal,
            paging_enabled: self.paging_enabled,
            scroll_enabled: self.scroll_enabled,
            shows_vertical_indicator: self.shows_vertical_indicator,
            shows_horizontal_indicator: self.shows_horizontal_indicator,
            indicator_style: self.indicator_style,
            deceleration_rate: self.deceleration_rate,
        }
    }
}

impl Default for ScrollView {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollViewProperties for ScrollView {
    fn set_content_inset(&mut self, inset: EdgeInsets) {
        self.content_inset = inset;
    }

    fn set_directional_lock_enabled(&mut self, enabled: bool) {
        self.directional_lock_enabled = enabled;
    }

    fn set_bounces(&mut self, bounces: bool) {
        self.bounces = bounces;
    }

    fn set_always_bounce_vertical(&mut self, bounce: bool) {
        self.always_bounce_vertical = bounce;
    }

    fn set_always_bounce_horizontal(&mut self, bounce: bool) {
        self.always_bounce_horizontal = bounce;
    }

    fn set_paging_enabled(&mut self, enabled: bool) {
        self.paging_enabled = enabled;
    }

    fn set_scroll_enabled(&mut self, enabled: bool) {
        self.scroll_enabled = enabled;
    }

    fn set_shows_vertical_indicator(&mut self, shows: bool) {
        self.shows_vertical_indicator = shows;
    }

    fn set_shows_horizontal_indicator(&mut self, shows: bool) {
        self.shows_horizontal_indicator = shows;
    }

    fn set_indicator_style(&mut self, style: IndicatorStyle) {
        self.indicator_style = style;
    }

    fn set_deceleration_rate(&mut self, rate: DecelerationRate) {
        self.deceleration_rate = rate;
    }
}
