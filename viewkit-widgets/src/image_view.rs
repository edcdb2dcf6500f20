use crate::view::View;
use vello::peniko::{Blob, ImageAlphaType, ImageFormat};
pub use vello::peniko::ImageData;
use viewkit_options::apply::configured;
use viewkit_options::view::ViewOptions;

/// A component that displays a single image, with an optional alternative
/// shown while highlighted.
///
/// Image views ignore user interaction until it is turned on, for example
/// with [ViewOptions::with_interaction_enabled].
#[derive(Debug, Clone)]
pub struct ImageView {
    view: View,
    image: Option<ImageData>,
    highlighted_image: Option<ImageData>,
    highlighted: bool,
}

impl_view_properties!(ImageView => view);

impl ImageView {
    /// Create an image view with the given images.
    pub fn new(image: Option<ImageData>, highlighted_image: Option<ImageData>) -> Self {
        Self {
            view: View::without_interaction(),
            image,
            highlighted_image,
            highlighted: false,
        }
    }

    /// Create an image view with the given images and apply `options` to it.
    pub fn with_options(
        image: Option<ImageData>,
        highlighted_image: Option<ImageData>,
        options: &ViewOptions,
    ) -> Self {
        configured(Self::new(image, highlighted_image), options)
    }

    /// Returns the image.
    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    /// Returns the highlighted image.
    pub fn highlighted_image(&self) -> Option<&ImageData> {
        self.highlighted_image.as_ref()
    }

    /// Returns whether the view is highlighted.
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Replace the image.
    pub fn set_image(&mut self, image: Option<ImageData>) {
        self.image = image;
    }

    /// Replace the highlighted image.
    pub fn set_highlighted_image(&mut self, image: Option<ImageData>) {
        self.highlighted_image = image;
    }

    /// Set whether the view is highlighted.
    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    /// Returns the image that is currently displayed.
    ///
    /// While highlighted, that is the highlighted image if there is one.
    pub fn displayed_image(&self) -> Option<&ImageData> {
        if self.highlighted {
            self.highlighted_image.as_ref().or(self.image.as_ref())
        } else {
            self.image.as_ref()
        }
    }
}

/// Build an image view and apply `options` to it in one call.
pub fn make_image_view(
    image: Option<ImageData>,
    highlighted_image: Option<ImageData>,
    options: &ViewOptions,
) -> ImageView {
    ImageView::with_options(image, highlighted_image, options)
}

/// Convenience helper to build image data from raw RGBA pixels.
pub fn rgba_image(size: (u32, u32), pixels: impl Into<Vec<u8>>) -> ImageData {
    let (width, height) = size;
    ImageData {
        data: Blob::from(pixels.into()),
        format: ImageFormat::Rgba8,
        alpha_type: ImageAlphaType::Alpha,
        width,
        height,
    }
}
