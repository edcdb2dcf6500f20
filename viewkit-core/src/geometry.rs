use serde::Deserialize;

/// Insets for each edge of a rectangle.
///
/// Positive values shrink the rectangle, negative values grow it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EdgeInsets {
    /// Inset from the top edge.
    pub top: f64,
    /// Inset from the left edge.
    pub left: f64,
    /// Inset from the bottom edge.
    pub bottom: f64,
    /// Inset from the right edge.
    pub right: f64,
}

impl EdgeInsets {
    /// Insets of zero on every edge.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create new insets in top, left, bottom, right order.
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Create insets with the same value on every edge.
    pub const fn uniform(inset: f64) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Create insets with separate horizontal (left/right) and vertical (top/bottom) values.
    pub const fn symmetric(horizontal: f64, vertical: f64) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// The sum of the left and right insets.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// The sum of the top and bottom insets.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_matches_default() {
        assert_eq!(EdgeInsets::ZERO, EdgeInsets::default());
    }

    #[test]
    fn test_symmetric() {
        let insets = EdgeInsets::symmetric(4.0, 10.0);
        assert_eq!(insets, EdgeInsets::new(10.0, 4.0, 10.0, 4.0));
        assert_eq!(insets.horizontal(), 8.0);
        assert_eq!(insets.vertical(), 20.0);
    }

    #[test]
    fn test_deserialize_partial() {
        let insets: EdgeInsets = serde_json::from_str(r#"{"top": 8.0}"#).unwrap();
        assert_eq!(insets, EdgeInsets::new(8.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_deserialize_rejects_unknown_edge() {
        assert!(serde_json::from_str::<EdgeInsets>(r#"{"botom": 8.0}"#).is_err());
    }
}
