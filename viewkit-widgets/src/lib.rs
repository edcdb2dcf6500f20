#![warn(missing_docs)]

//! Reference components for viewkit => See `viewkit` crate.
//!
//! In-memory components that hold their presentation state as plain values
//! and implement the property contracts from `viewkit_core::view`. They are
//! what the composed constructors build, and what a real toolkit binding
//! mirrors.

/// Delegates [ViewProperties](viewkit_core::view::ViewProperties) to an embedded [View](view::View).
macro_rules! impl_view_properties {
    ($type:ty => $field:ident) => {
        impl viewkit_core::view::ViewProperties for $type {
            fn set_background_color(&mut self, color: Option<viewkit_core::Color>) {
                self.$field.set_background_color(color);
            }

            fn set_content_mode(&mut self, mode: viewkit_core::appearance::ContentMode) {
                self.$field.set_content_mode(mode);
            }

            fn set_corner_radius(&mut self, radius: f64) {
                self.$field.set_corner_radius(radius);
            }

            fn set_clips_to_bounds(&mut self, clips: bool) {
                self.$field.set_clips_to_bounds(clips);
            }

            fn set_hidden(&mut self, hidden: bool) {
                self.$field.set_hidden(hidden);
            }

            fn set_tint_color(&mut self, color: Option<viewkit_core::Color>) {
                self.$field.set_tint_color(color);
            }

            fn set_alpha(&mut self, alpha: f64) {
                self.$field.set_alpha(alpha);
            }

            fn set_interaction_enabled(&mut self, enabled: bool) {
                self.$field.set_interaction_enabled(enabled);
            }

            fn set_content_hugging_priority(
                &mut self,
                priority: viewkit_core::layout::LayoutPriority,
                axis: viewkit_core::layout::Axis,
            ) {
                self.$field.set_content_hugging_priority(priority, axis);
            }

            fn set_compression_resistance_priority(
                &mut self,
                priority: viewkit_core::layout::LayoutPriority,
                axis: viewkit_core::layout::Axis,
            ) {
                self.$field.set_compression_resistance_priority(priority, axis);
            }
        }

        impl std::ops::Deref for $type {
            type Target = $crate::view::View;

            fn deref(&self) -> &Self::Target {
                &self.$field
            }
        }
    };
}

/// Contains the [ImageView](image_view::ImageView) component.
pub mod image_view;
/// Contains the [Label](label::Label) component.
pub mod label;
/// Contains the [ScrollView](scroll_view::ScrollView) component.
pub mod scroll_view;
/// Contains the base [View](view::View) component.
pub mod view;
