//! Cell-based geometry for positioning controls and hit testing

/// Rectangle bounds in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Create rectangle from terminal dimensions (fills entire screen)
    pub fn fullscreen(cols: u16, rows: u16) -> Self {
        Rect::new(0, 0, cols, rows)
    }

    /// Get right edge x-coordinate (exclusive)
    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Get bottom edge y-coordinate (exclusive)
    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Check if a cell position lies inside the rectangle
    ///
    /// This is the hit test used to decide whether a pointer press landed on
    /// a control or outside of it.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Smallest rectangle covering both `self` and `other`
    ///
    /// A dropdown's root bounds are the union of its label row and, while
    /// open, the option list below it.
    pub fn union(&self, other: Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    /// Single row at a vertical offset into this rectangle
    pub fn row(&self, offset: u16) -> Rect {
        Rect::new(self.x, self.y.saturating_add(offset), self.width, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(10, 10, 20, 20);
        assert!(r.contains(15, 15));
        assert!(r.contains(10, 10)); // top-left edge is inside
        assert!(!r.contains(30, 10)); // right edge is exclusive
        assert!(!r.contains(5, 15));
    }

    #[test]
    fn test_rect_union() {
        let label = Rect::new(4, 2, 20, 1);
        let menu = Rect::new(4, 3, 20, 5);
        let root = label.union(menu);
        assert_eq!(root, Rect::new(4, 2, 20, 6));
    }

    #[test]
    fn test_rect_row() {
        let r = Rect::new(0, 5, 16, 4);
        assert_eq!(r.row(2), Rect::new(0, 7, 16, 1));
    }
}
