use serde::Deserialize;

/// Describes how a view lays out its content when its bounds change.
///
/// The scaling modes stretch or fit the content; the remaining modes pin it to
/// a position inside the bounds without scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentMode {
    /// Scale the content to fill the bounds, changing the aspect ratio if needed.
    #[default]
    ScaleToFill,
    /// Scale the content to fit the bounds, keeping the aspect ratio.
    ScaleAspectFit,
    /// Scale the content to fill the bounds, keeping the aspect ratio. Some content may be clipped.
    ScaleAspectFill,
    /// Redisplay the content when the bounds change.
    Redraw,
    /// Center the content.
    Center,
    /// Align the content to the top edge.
    Top,
    /// Align the content to the bottom edge.
    Bottom,
    /// Align the content to the left edge.
    Left,
    /// Align the content to the right edge.
    Right,
    /// Align the content to the top-left corner.
    TopLeft,
    /// Align the content to the top-right corner.
    TopRight,
    /// Align the content to the bottom-left corner.
    BottomLeft,
    /// Align the content to the bottom-right corner.
    BottomRight,
}

impl ContentMode {
    /// Returns `true` if this mode scales the content instead of positioning it.
    pub fn is_scaling(&self) -> bool {
        matches!(
            self,
            ContentMode::ScaleToFill | ContentMode::ScaleAspectFit | ContentMode::ScaleAspectFill
        )
    }
}
