//! Axis-aligned boxes and the overlap test used for hit detection.

/// A rectangle with all four edges in the same screen-space coordinate
/// system (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Rect {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    /// True unless `other` lies strictly beyond one of this box's edges.
    /// Edge-touching boxes count as overlapping.  Symmetric.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.bottom < other.top
            || self.top > other.bottom
            || self.right < other.left
            || self.left > other.right)
    }
}
