/// Integer axis-aligned bounding box in world (pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    /// Inclusive overlap test: rectangles that share an edge count as touching.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.right() < other.left()
            || self.left() > other.right()
            || self.bottom() < other.top()
            || self.top() > other.bottom())
    }
}

/// Shared position/size state embedded by every moving entity.
///
/// Position is kept as `f32` so sub-pixel velocities accumulate; the bounding
/// rectangle is always the truncation of the current position and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Movable2D {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Movable2D {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Places the body so its top edge is centred on `(cx, top)`.
    pub fn at_midtop(cx: f32, top: f32, w: f32, h: f32) -> Self {
        Self::new(cx - w / 2.0, top, w, h)
    }

    /// Places the body so its bottom edge is centred on `(cx, bottom)`.
    pub fn at_midbottom(cx: f32, bottom: f32, w: f32, h: f32) -> Self {
        Self::new(cx - w / 2.0, bottom - h, w, h)
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x as i32, self.y as i32, self.w as i32, self.h as i32)
    }
}
