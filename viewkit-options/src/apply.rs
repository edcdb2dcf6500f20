use crate::scroll::ScrollOptions;
use crate::view::{LayoutCompressionOptions, ViewOptions};
use viewkit_core::view::{ScrollViewProperties, ViewProperties};

/// A component that an options value of type `O` can be written onto.
///
/// Implemented for every [ViewProperties] type with [ViewOptions] and
/// [LayoutCompressionOptions], and for every [ScrollViewProperties] type with
/// [ScrollOptions]. Which options type gets applied is picked by the argument;
/// there is no runtime dispatch.
///
/// Applying never fails and never validates: values reach the component
/// exactly as they are stored in the options.
pub trait ApplyOptions<O: ?Sized> {
    /// Write `options` onto this component.
    fn apply_options(&mut self, options: &O);
}

impl<V: ViewProperties + ?Sized> ApplyOptions<ViewOptions> for V {
    fn apply_options(&mut self, options: &ViewOptions) {
        options.apply_to(self);
    }
}

impl<V: ViewProperties + ?Sized> ApplyOptions<LayoutCompressionOptions> for V {
    fn apply_options(&mut self, options: &LayoutCompressionOptions) {
        options.apply_to(self);
    }
}

impl<S: ScrollViewProperties + ?Sized> ApplyOptions<ScrollOptions> for S {
    fn apply_options(&mut self, options: &ScrollOptions) {
        options.apply_to(self);
    }
}

/// Write `options` onto `component`.
///
/// Same as calling [ApplyOptions::apply_options] on the component.
pub fn apply_options<C, O>(component: &mut C, options: &O)
where
    C: ApplyOptions<O> + ?Sized,
    O: ?Sized,
{
    component.apply_options(options);
}

/// Apply `options` to a freshly built component and hand it back.
///
/// This is the building block for composed constructors:
///
/// ```rust,ignore
/// let label = configured(Label::new(), &ViewOptions::new().with_alpha(0.8));
/// ```
pub fn configured<C, O>(mut component: C, options: &O) -> C
where
    C: ApplyOptions<O>,
    O: ?Sized,
{
    component.apply_options(options);
    component
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use viewkit_core::appearance::ContentMode;
    use viewkit_core::geometry::EdgeInsets;
    use viewkit_core::layout::{Axis, LayoutPriority};
    use viewkit_core::scroll::{DecelerationRate, IndicatorStyle};
    use viewkit_core::Color;

    /// Records every setter call by name.
    #[derive(Default)]
    struct Recorder {
        writes: Vec<&'static str>,
        alpha: f64,
        interaction_enabled: bool,
        hugging: Vec<(LayoutPriority, Axis)>,
        paging_enabled: bool,
    }

    impl ViewProperties for Recorder {
        fn set_background_color(&mut self, _: Option<Color>) {
            self.writes.push("background_color");
        }
        fn set_content_mode(&mut self, _: ContentMode) {
            self.writes.push("content_mode");
        }
        fn set_corner_radius(&mut self, _: f64) {
            self.writes.push("corner_radius");
        }
        fn set_clips_to_bounds(&mut self, _: bool) {
            self.writes.push("clips_to_bounds");
        }
        fn set_hidden(&mut self, _: bool) {
            self.writes.push("hidden");
        }
        fn set_tint_color(&mut self, _: Option<Color>) {
            self.writes.push("tint_color");
        }
        fn set_alpha(&mut self, alpha: f64) {
            self.writes.push("alpha");
            self.alpha = alpha;
        }
        fn set_interaction_enabled(&mut self, enabled: bool) {
            self.writes.push("interaction_enabled");
            self.interaction_enabled = enabled;
        }
        fn set_content_hugging_priority(&mut self, priority: LayoutPriority, axis: Axis) {
            self.writes.push("content_hugging_priority");
            self.hugging.push((priority, axis));
        }
        fn set_compression_resistance_priority(&mut self, _: LayoutPriority, _: Axis) {
            self.writes.push("compression_resistance_priority");
        }
    }

    impl ScrollViewProperties for Recorder {
        fn set_content_inset(&mut self, _: EdgeInsets) {
            self.writes.push("content_inset");
        }
        fn set_directional_lock_enabled(&mut self, _: bool) {
            self.writes.push("directional_lock_enabled");
        }
        fn set_bounces(&mut self, _: bool) {
            self.writes.push("bounces");
        }
        fn set_always_bounce_vertical(&mut self, _: bool) {
            self.writes.push("always_bounce_vertical");
        }
        fn set_always_bounce_horizontal(&mut self, _: bool) {
            self.writes.push("always_bounce_horizontal");
        }
        fn set_paging_enabled(&mut self, enabled: bool) {
            self.writes.push("paging_enabled");
            self.paging_enabled = enabled;
        }
        fn set_scroll_enabled(&mut self, _: bool) {
            self.writes.push("scroll_enabled");
        }
        fn set_shows_vertical_indicator(&mut self, _: bool) {
            self.writes.push("shows_vertical_indicator");
        }
        fn set_shows_horizontal_indicator(&mut self, _: bool) {
            self.writes.push("shows_horizontal_indicator");
        }
        fn set_indicator_style(&mut self, _: IndicatorStyle) {
            self.writes.push("indicator_style");
        }
        fn set_deceleration_rate(&mut self, _: DecelerationRate) {
            self.writes.push("deceleration_rate");
        }
    }

    #[test]
    fn test_default_view_options_write_required_fields_only() {
        let mut recorder = Recorder::default();
        recorder.apply_options(&ViewOptions::default());

        assert_eq!(recorder.writes.len(), 7);
        assert!(!recorder.writes.contains(&"interaction_enabled"));
        assert!(!recorder.writes.contains(&"content_hugging_priority"));
        assert!(!recorder.writes.contains(&"compression_resistance_priority"));
    }

    #[test]
    fn test_interaction_enabled_false_is_written() {
        let mut recorder = Recorder {
            interaction_enabled: true,
            ..Default::default()
        };
        recorder.apply_options(&ViewOptions::new().with_interaction_enabled(false));

        assert!(recorder.writes.contains(&"interaction_enabled"));
        assert!(!recorder.interaction_enabled);
    }

    #[test]
    fn test_empty_layout_compression_writes_no_priorities() {
        let mut recorder = Recorder::default();
        let options = ViewOptions {
            layout_compression: Field::Set(LayoutCompressionOptions::new()),
            ..ViewOptions::new()
        };
        recorder.apply_options(&options);

        assert_eq!(recorder.writes.len(), 7);
    }

    #[test]
    fn test_layout_compression_alone_touches_only_priorities() {
        let mut recorder = Recorder::default();
        recorder.apply_options(
            &LayoutCompressionOptions::new().with_vertical_hugging(LayoutPriority::REQUIRED),
        );

        assert_eq!(recorder.writes, vec!["content_hugging_priority"]);
        assert_eq!(recorder.hugging, vec![(LayoutPriority::REQUIRED, Axis::Vertical)]);
    }

    #[test]
    fn test_scroll_options_write_every_field() {
        let mut recorder = Recorder::default();
        apply_options(&mut recorder, &ScrollOptions::default());

        assert_eq!(recorder.writes.len(), 11);
    }

    #[test]
    fn test_apply_through_trait_object() {
        let mut recorder = Recorder::default();
        let view: &mut dyn ViewProperties = &mut recorder;
        view.apply_options(&ViewOptions::new().with_alpha(0.25));

        assert_eq!(recorder.alpha, 0.25);
    }

    #[test]
    fn test_configured_returns_configured_component() {
        let recorder = configured(
            Recorder::default(),
            &ScrollOptions::new().with_paging_enabled(true),
        );

        assert!(recorder.paging_enabled);
    }
}
