#![warn(missing_docs)]

//! # Options records for viewkit
//!
//! An *options* value describes the presentation state a caller wants a
//! component to have. It is built once, optionally refined with `with_*`
//! helpers that return a new value, and then applied to a live component in a
//! single call.
//!
//! ## Overview
//!
//! - **[ViewOptions](view::ViewOptions)**: appearance of any view
//! - **[LayoutCompressionOptions](view::LayoutCompressionOptions)**: hugging and compression resistance priorities
//! - **[ScrollOptions](scroll::ScrollOptions)**: behavior of scrollable containers
//! - **[ApplyOptions](apply::ApplyOptions)**: writes an options value onto a component
//! - **[OptionsConfig](config::OptionsConfig)**: named options presets loaded from TOML
//!
//! ## Partial and full overwrite
//!
//! Fields typed as [Field](field::Field) are only written when they are
//! [Field::Set](field::Field::Set); an unset field leaves whatever the component
//! currently has. Every other field is always written, including its default.
//! [ScrollOptions](scroll::ScrollOptions) has no partial fields at all.
//!
//! ```rust
//! use viewkit_options::apply::ApplyOptions;
//! use viewkit_options::view::{LayoutCompressionOptions, ViewOptions};
//! use viewkit_core::layout::LayoutPriority;
//! # use viewkit_core::view::ViewProperties;
//! # use viewkit_core::appearance::ContentMode;
//! # use viewkit_core::layout::Axis;
//! # use viewkit_core::Color;
//! # #[derive(Default)]
//! # struct Card { alpha: f64 }
//! # impl ViewProperties for Card {
//! #     fn set_background_color(&mut self, _: Option<Color>) {}
//! #     fn set_content_mode(&mut self, _: ContentMode) {}
//! #     fn set_corner_radius(&mut self, _: f64) {}
//! #     fn set_clips_to_bounds(&mut self, _: bool) {}
//! #     fn set_hidden(&mut self, _: bool) {}
//! #     fn set_tint_color(&mut self, _: Option<Color>) {}
//! #     fn set_alpha(&mut self, alpha: f64) { self.alpha = alpha; }
//! #     fn set_interaction_enabled(&mut self, _: bool) {}
//! #     fn set_content_hugging_priority(&mut self, _: LayoutPriority, _: Axis) {}
//! #     fn set_compression_resistance_priority(&mut self, _: LayoutPriority, _: Axis) {}
//! # }
//!
//! let mut card = Card::default();
//!
//! card.apply_options(&ViewOptions::new().with_alpha(0.5).with_corner_radius(8.0));
//! card.apply_options(&ViewOptions::layout_compression(
//!     LayoutCompressionOptions::new().with_horizontal_hugging(LayoutPriority::DEFAULT_HIGH),
//! ));
//!
//! // The second call wrote every required field again.
//! assert_eq!(card.alpha, 1.0);
//! ```

/// Contains the [ApplyOptions](apply::ApplyOptions) trait and composition helpers.
pub mod apply;
/// Contains the [OptionsConfig](config::OptionsConfig) struct for loading presets.
pub mod config;
/// Contains the [OptionsError](error::OptionsError) type.
pub mod error;
/// Contains the [Field](field::Field) partial-override value.
pub mod field;
/// Contains the [ScrollOptions](scroll::ScrollOptions) struct.
pub mod scroll;
/// Contains the [ViewOptions](view::ViewOptions) and [LayoutCompressionOptions](view::LayoutCompressionOptions) structs.
pub mod view;
