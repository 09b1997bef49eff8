/// Side length of the bounding square `[0, 2] × [0, 2]`.
pub const SQUARE_SIDE: f64 = 2.0;

/// Center of the inscribed reference circle.
pub const CIRCLE_CENTER: SamplePoint = SamplePoint { x: 1.0, y: 1.0 };

/// Radius of the inscribed reference circle. Its area is exactly pi.
pub const CIRCLE_RADIUS: f64 = 1.0;

/// One dart thrown at the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
}

impl SamplePoint {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to the circle center.
    #[inline]
    pub fn distance_to_center(&self) -> f64 {
        (self.x - CIRCLE_CENTER.x).hypot(self.y - CIRCLE_CENTER.y)
    }

    /// A hit. The circle boundary counts as inside.
    #[inline]
    pub fn is_inside(&self) -> bool {
        self.distance_to_center() <= CIRCLE_RADIUS
    }
}

impl From<(f64, f64)> for SamplePoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
