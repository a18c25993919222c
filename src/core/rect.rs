// Integer rectangle geometry in screen space

use glam::IVec2;

/// Axis-aligned rectangle with a top-left origin. Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub position: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            position: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    pub fn left(&self) -> i32 {
        self.position.x
    }

    pub fn right(&self) -> i32 {
        self.position.x + self.size.x
    }

    pub fn top(&self) -> i32 {
        self.position.y
    }

    pub fn bottom(&self) -> i32 {
        self.position.y + self.size.y
    }

    pub fn width(&self) -> i32 {
        self.size.x
    }

    pub fn height(&self) -> i32 {
        self.size.y
    }

    pub fn set_x(&mut self, x: i32) {
        self.position.x = x;
    }

    /// Move the rectangle so its bottom edge sits on `y`
    pub fn set_bottom(&mut self, y: i32) {
        self.position.y = y - self.size.y;
    }

    pub fn translate(&mut self, offset: IVec2) {
        self.position += offset;
    }

    /// Overlap test where touching edges count as a hit
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }
}
