use crate::coord::Coord;

/// Maximum width/height of the playable area, in cells.
pub const MAX_SPAN: i16 = 4;

/// Axis-aligned bounding box of a set of occupied cells.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub min_x: i16,
    pub max_x: i16,
    pub min_y: i16,
    pub max_y: i16,
}

impl BoundingBox {
    /// Bounding box of the given cells, or `None` for an empty set.
    pub fn of(cells: impl IntoIterator<Item = Coord>) -> Option<Self> {
        let mut iter = cells.into_iter();
        let first = iter.next()?;
        let mut bb = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for c in iter {
            bb.expand(c);
        }
        Some(bb)
    }

    #[inline]
    pub fn expand(&mut self, c: Coord) {
        self.min_x = self.min_x.min(c.x);
        self.max_x = self.max_x.max(c.x);
        self.min_y = self.min_y.min(c.y);
        self.max_y = self.max_y.max(c.y);
    }

    #[inline]
    pub fn width(&self) -> i16 {
        self.max_x - self.min_x + 1
    }

    #[inline]
    pub fn height(&self) -> i16 {
        self.max_y - self.min_y + 1
    }

    /// True once the box spans the full limit on the x axis.
    ///
    /// The left/right board edges only exist ("are closed") when this holds.
    #[inline]
    pub fn x_closed(&self) -> bool {
        self.width() >= MAX_SPAN
    }

    /// True once the box spans the full limit on the y axis.
    #[inline]
    pub fn y_closed(&self) -> bool {
        self.height() >= MAX_SPAN
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.x >= self.min_x && c.x <= self.max_x && c.y >= self.min_y && c.y <= self.max_y
    }
}

/// Would adding `candidate` to `cells` stretch the board past the 4x4 limit?
pub fn would_exceed_max(cells: impl IntoIterator<Item = Coord>, candidate: Coord) -> bool {
    let mut bb = BoundingBox {
        min_x: candidate.x,
        max_x: candidate.x,
        min_y: candidate.y,
        max_y: candidate.y,
    };
    for c in cells {
        bb.expand(c);
    }
    bb.width() > MAX_SPAN || bb.height() > MAX_SPAN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_has_no_box() {
        assert_eq!(BoundingBox::of(std::iter::empty()), None);
    }

    #[test]
    fn exceeding_either_axis_is_rejected() {
        let cells = [Coord::new(0, 0), Coord::new(3, 0)];
        assert!(!would_exceed_max(cells, Coord::new(2, 3)));
        assert!(would_exceed_max(cells, Coord::new(4, 0)));
        assert!(would_exceed_max(cells, Coord::new(0, 4)));
        assert!(would_exceed_max(cells, Coord::new(-1, 0)));
    }

    #[test]
    fn edge_closure_requires_full_span() {
        let bb = BoundingBox::of([Coord::new(0, 0), Coord::new(2, 2)]).unwrap();
        assert!(!bb.x_closed());
        let bb = BoundingBox::of([Coord::new(0, 0), Coord::new(3, 2)]).unwrap();
        assert!(bb.x_closed());
        assert!(!bb.y_closed());
    }
}
