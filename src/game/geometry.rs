//! Board geometry: positions, toroidal wrapping and box overlap

use rand::Rng;

use super::action::Direction;

/// A position on the board, in board units (multiples of the cell size)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Axis-aligned square occupying `size` units from `origin`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub origin: Position,
    pub size: i32,
}

impl BoundingBox {
    pub fn new(origin: Position, size: i32) -> Self {
        Self { origin, size }
    }

    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        boxes_overlap(self.origin, self.size, other.origin, other.size)
    }
}

/// Half-open overlap test; boxes that only touch do not overlap
pub fn boxes_overlap(pos_a: Position, size_a: i32, pos_b: Position, size_b: i32) -> bool {
    pos_a.x < pos_b.x + size_b
        && pos_a.x + size_a > pos_b.x
        && pos_a.y < pos_b.y + size_b
        && pos_a.y + size_a > pos_b.y
}

/// Reduce a coordinate onto `[0, extent)`
pub fn wrap(coordinate: i32, extent: i32) -> i32 {
    coordinate.rem_euclid(extent)
}

/// Fixed-size toroidal board divided into square cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
}

impl Board {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    /// Number of cells across
    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of cells down
    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Cell nearest the middle of the board
    pub fn center(&self) -> Position {
        Position::new(
            self.columns() / 2 * self.cell_size,
            self.rows() / 2 * self.cell_size,
        )
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Bring a position back onto the board on both axes
    pub fn wrap_position(&self, pos: Position) -> Position {
        Position::new(wrap(pos.x, self.width), wrap(pos.y, self.height))
    }

    /// One cell from `pos` in `direction`, re-entering at the opposite edge
    pub fn step(&self, pos: Position, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        self.wrap_position(pos.moved_by(dx * self.cell_size, dy * self.cell_size))
    }

    /// Box covering the cell at `pos`
    pub fn cell_box(&self, pos: Position) -> BoundingBox {
        BoundingBox::new(pos, self.cell_size)
    }

    /// Uniformly chosen cell, column and row drawn independently
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        let column = rng.gen_range(0..self.columns());
        let row = rng.gen_range(0..self.rows());
        Position::new(column * self.cell_size, row * self.cell_size)
    }

    /// Terminal cell coordinates of a board position
    pub fn to_cell(&self, pos: Position) -> (i32, i32) {
        (pos.x / self.cell_size, pos.y / self.cell_size)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(800, 600, 20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_wrap_stays_in_range_and_aligned() {
        let cell = 20;
        for extent in [20, 100, 600, 800] {
            for k in -50..50 {
                let coordinate = k * cell;
                let wrapped = wrap(coordinate, extent);
                assert!(wrapped >= 0 && wrapped < extent, "{coordinate} -> {wrapped}");
                assert_eq!(wrapped % cell, 0);
            }
        }
    }

    #[test]
    fn test_wrap_edges() {
        assert_eq!(wrap(-20, 800), 780);
        assert_eq!(wrap(800, 800), 0);
        assert_eq!(wrap(400, 800), 400);
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let cases = [
            (Position::new(0, 0), 20, Position::new(10, 10), 20),
            (Position::new(0, 0), 20, Position::new(20, 0), 20),
            (Position::new(40, 40), 20, Position::new(40, 40), 20),
            (Position::new(5, 5), 0, Position::new(0, 0), 20),
            (Position::new(100, 0), 20, Position::new(0, 100), 20),
        ];
        for (a, sa, b, sb) in cases {
            assert_eq!(boxes_overlap(a, sa, b, sb), boxes_overlap(b, sb, a, sa));
        }
    }

    #[test]
    fn test_touching_boxes_do_not_overlap() {
        let a = Position::new(0, 0);
        assert!(!boxes_overlap(a, 20, Position::new(20, 0), 20));
        assert!(!boxes_overlap(a, 20, Position::new(0, 20), 20));
        assert!(!boxes_overlap(a, 20, Position::new(20, 20), 20));
        assert!(boxes_overlap(a, 20, Position::new(0, 0), 20));
        assert!(boxes_overlap(a, 20, Position::new(19, 19), 20));
    }

    #[test]
    fn test_zero_area_box_never_overlaps() {
        let a = Position::new(0, 0);
        assert!(!boxes_overlap(a, 0, a, 0));
        assert!(!boxes_overlap(a, 0, Position::new(0, 0), 20));
    }

    #[test]
    fn test_step_wraps_at_every_edge() {
        let board = Board::default();
        assert_eq!(
            board.step(Position::new(0, 300), Direction::Left),
            Position::new(780, 300)
        );
        assert_eq!(
            board.step(Position::new(780, 300), Direction::Right),
            Position::new(0, 300)
        );
        assert_eq!(
            board.step(Position::new(400, 0), Direction::Up),
            Position::new(400, 580)
        );
        assert_eq!(
            board.step(Position::new(400, 580), Direction::Down),
            Position::new(400, 0)
        );
    }

    #[test]
    fn test_random_cell_is_aligned_and_in_bounds() {
        let board = Board::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let pos = board.random_cell(&mut rng);
            assert!(board.contains(pos));
            assert_eq!(pos.x % board.cell_size, 0);
            assert_eq!(pos.y % board.cell_size, 0);
        }
    }

    #[test]
    fn test_cell_counts() {
        let board = Board::default();
        assert_eq!(board.columns(), 40);
        assert_eq!(board.rows(), 30);
        assert_eq!(board.center(), Position::new(400, 300));
        assert_eq!(board.to_cell(Position::new(780, 580)), (39, 29));
    }
}
