use serde::Deserialize;
use std::fmt::{Display, Formatter};

/// A layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// The horizontal (x) axis.
    Horizontal,
    /// The vertical (y) axis.
    Vertical,
}

impl Axis {
    /// Both axes, horizontal first.
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];
}

/// The priority a layout constraint or content preference has.
///
/// Priorities range from `1` to `1000`, where [LayoutPriority::REQUIRED] is
/// never broken. Values outside that range are stored as given; the component
/// decides what to do with them.
///
/// Components use two of these per axis:
///
/// - **Content hugging**: how strongly the view resists growing beyond its content size.
/// - **Compression resistance**: how strongly the view resists shrinking below its content size.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize)]
#[serde(transparent)]
pub struct LayoutPriority(f32);

impl LayoutPriority {
    /// A required priority.
    pub const REQUIRED: Self = Self(1000.0);
    /// The priority a button uses to resist compression.
    pub const DEFAULT_HIGH: Self = Self(750.0);
    /// The priority a button uses to hug its content.
    pub const DEFAULT_LOW: Self = Self(250.0);
    /// The priority used when fitting a view to its smallest size.
    pub const FITTING_SIZE_LEVEL: Self = Self(50.0);

    /// Create a new priority from a raw value.
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Returns the raw priority value.
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Returns `true` if this priority is at least [LayoutPriority::REQUIRED].
    pub fn is_required(self) -> bool {
        self.0 >= Self::REQUIRED.0
    }
}

impl Default for LayoutPriority {
    fn default() -> Self {
        Self::DEFAULT_LOW
    }
}

impl From<f32> for LayoutPriority {
    fn from(value: f32) -> Self {
        Self(value)
    }
}

impl From<LayoutPriority> for f32 {
    fn from(priority: LayoutPriority) -> Self {
        priority.0
    }
}

impl Display for LayoutPriority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
