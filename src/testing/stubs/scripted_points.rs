use crate::sampling::{PointSource, SamplePoint};

/// Replays a fixed list of points, starting over when it runs out.
pub struct ScriptedPoints {
    points: Vec<SamplePoint>,
    idx: usize,
    drawn: usize,
}

impl ScriptedPoints {
    pub fn new<P: Into<SamplePoint>>(points: Vec<P>) -> Self {
        assert!(!points.is_empty(), "script needs at least one point");
        Self {
            points: points.into_iter().map(Into::into).collect(),
            idx: 0,
            drawn: 0,
        }
    }

    /// Total points handed out so far.
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl PointSource for ScriptedPoints {
    fn next_point(&mut self) -> SamplePoint {
        let p = self.points[self.idx];
        self.idx = (self.idx + 1) % self.points.len();
        self.drawn += 1;
        p
    }
}
