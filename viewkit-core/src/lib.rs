#![warn(missing_docs)]

//! Core value types for viewkit => See `viewkit` crate.
//!
//! Contains the property value types shared by every options record and the
//! traits a component has to implement so options can be applied to it.

pub use vello::peniko::Color;

/// Contains the [ContentMode](appearance::ContentMode) enum.
pub mod appearance;

/// Contains edge insets and other plain geometry.
pub mod geometry;

/// Contains [Axis](layout::Axis) and [LayoutPriority](layout::LayoutPriority).
pub mod layout;

/// Contains scroll indicator and deceleration settings.
pub mod scroll;

/// Contains custom serialization helpers for [Color].
pub mod serde_color;

/// Contains the [AttributedText](text::AttributedText) value type.
pub mod text;

/// Contains the property contracts components implement.
pub mod view;
