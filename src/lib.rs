#![warn(missing_docs)]

//! Declarative, one-shot options for configuring UI components.
//!
//! Build an options value, then write it onto a component in one call:
//!
//! ```rust
//! use viewkit::prelude::*;
//!
//! let options = ViewOptions::new()
//!     .with_background_color(Color::from_rgb8(240, 240, 240))
//!     .with_corner_radius(8.0)
//!     .with_clips_to_bounds(true);
//!
//! let label = Label::with_options(Some("Hello".to_string()), None, &options);
//! assert_eq!(label.corner_radius(), 8.0);
//! ```

pub use vello::peniko as color;

pub use viewkit_core as core;
pub use viewkit_options as options;
#[cfg(feature = "widgets")]
pub use viewkit_widgets as widgets;

/// A "prelude" for users of viewkit.
///
/// Importing this module brings into scope the options types, the apply
/// trait, the value types they carry and the reference components.
///
/// ```rust
/// use viewkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::appearance::ContentMode;
    pub use crate::core::geometry::EdgeInsets;
    pub use crate::core::layout::{Axis, LayoutPriority};
    pub use crate::core::scroll::{DecelerationRate, IndicatorStyle};
    pub use crate::core::text::{AttributedText, TextAttribute};
    pub use crate::core::view::{ScrollViewProperties, ViewProperties};
    pub use crate::core::Color;

    pub use crate::options::apply::{apply_options, configured, ApplyOptions};
    pub use crate::options::config::OptionsConfig;
    pub use crate::options::error::{OptionsError, OptionsResult};
    pub use crate::options::field::Field;
    pub use crate::options::scroll::ScrollOptions;
    pub use crate::options::view::{LayoutCompressionOptions, ViewOptions};

    #[cfg(feature = "widgets")]
    pub use crate::widgets::image_view::{make_image_view, rgba_image, ImageData, ImageView};
    #[cfg(feature = "widgets")]
    pub use crate::widgets::label::{make_label, Label};
    #[cfg(feature = "widgets")]
    pub use crate::widgets::scroll_view::ScrollView;
    #[cfg(feature = "widgets")]
    pub use crate::widgets::view::View;
}
