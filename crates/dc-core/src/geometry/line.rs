//! Lines walked cell by cell

use std::iter::FusedIterator;

use super::Point;

/// A segment between two grid points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Greedy grid walk from `start` to `end`, both included
    ///
    /// Each step moves to the neighbor closest to `end`; ties go to the
    /// first neighbor in East, South, West, North order. This is not a
    /// Bresenham line: a diagonal run comes out as a staircase.
    pub fn walk(&self) -> Walk {
        Walk {
            next: Some(self.start),
            end: self.end,
        }
    }

    /// Collected points of [`Line::walk`]
    pub fn points(&self) -> Vec<Point> {
        self.walk().collect()
    }
}

/// Iterator over the cells of a [`Line`]
///
/// Finite: every step strictly shrinks the distance to the end point.
#[derive(Debug, Clone)]
pub struct Walk {
    next: Option<Point>,
    end: Point,
}

impl Iterator for Walk {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let current = self.next?;
        self.next = if current == self.end {
            None
        } else {
            Some(current.step_toward(self.end))
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(p) => {
                let remaining = p.manhattan(self.end) as usize + 1;
                (remaining, Some(remaining))
            }
            None => (0, Some(0)),
        }
    }
}

impl ExactSizeIterator for Walk {}

impl FusedIterator for Walk {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_walk_horizontal() {
        let line = Line::new(Point::new(2, 4), Point::new(6, 4));
        let pts = line.points();
        assert_eq!(pts.len(), 5);
        assert_eq!(pts.first(), Some(&Point::new(2, 4)));
        assert_eq!(pts.last(), Some(&Point::new(6, 4)));
        assert!(pts.iter().all(|p| p.y == 4));
    }

    #[test]
    fn test_walk_vertical_upward() {
        let pts = Line::new(Point::new(3, 9), Point::new(3, 5)).points();
        assert_eq!(
            pts,
            vec![
                Point::new(3, 9),
                Point::new(3, 8),
                Point::new(3, 7),
                Point::new(3, 6),
                Point::new(3, 5)
            ]
        );
    }

    #[test]
    fn test_walk_single_point() {
        let p = Point::new(7, 7);
        assert_eq!(Line::new(p, p).points(), vec![p]);
    }

    #[test]
    fn test_walk_diagonal_shape() {
        // East wins the first tie, then the walk alternates
        let pts = Line::new(Point::new(0, 0), Point::new(2, 2)).points();
        assert_eq!(
            pts,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(2, 2)
            ]
        );
    }

    #[test]
    fn test_walk_is_fused() {
        let mut walk = Line::new(Point::new(0, 0), Point::new(1, 0)).walk();
        assert_eq!(walk.len(), 2);
        assert_eq!(walk.next(), Some(Point::new(0, 0)));
        assert_eq!(walk.next(), Some(Point::new(1, 0)));
        assert_eq!(walk.next(), None);
        assert_eq!(walk.next(), None);
    }

    proptest! {
        #[test]
        fn walk_is_a_shortest_4_connected_path(
            ax in -40i32..40, ay in -40i32..40,
            bx in -40i32..40, by in -40i32..40,
        ) {
            let a = Point::new(ax, ay);
            let b = Point::new(bx, by);
            let pts = Line::new(a, b).points();

            prop_assert_eq!(pts[0], a);
            prop_assert_eq!(*pts.last().unwrap(), b);
            prop_assert_eq!(pts.len() as i32, a.manhattan(b) + 1);
            for pair in pts.windows(2) {
                prop_assert!(pair[0].is_adjacent(pair[1]));
            }
        }
    }
}
