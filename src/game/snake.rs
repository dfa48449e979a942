use std::collections::VecDeque;

use super::action::Direction;
use super::geometry::{Board, Position};

/// One cell of the snake's body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub position: Position,
    /// Direction this segment was travelling when it reached `position`
    pub direction: Direction,
}

impl Segment {
    pub fn new(position: Position, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }
}

/// The snake: head at index 0, tail at the back
///
/// The body only ever grows. Heading is kept apart from the segments and only
/// changes through [`Snake::set_direction`].
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Segment>,
    heading: Direction,
    board: Board,
}

impl Snake {
    /// Segments grown onto a freshly created snake
    pub const INITIAL_GROWTHS: usize = 2;

    /// Create a snake at `position` heading up, then grow it to its starting length
    pub fn new(position: Position, board: Board) -> Self {
        let mut body = VecDeque::new();
        body.push_back(Segment::new(position, Direction::Up));

        let mut snake = Self {
            body,
            heading: Direction::Up,
            board,
        };
        for _ in 0..Self::INITIAL_GROWTHS {
            snake.grow();
        }
        snake
    }

    pub fn head(&self) -> &Segment {
        &self.body[0]
    }

    pub fn tail(&self) -> &Segment {
        &self.body[self.body.len() - 1]
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true; the body starts with one segment and only grows
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Change heading unless the request is a 180-degree turn.
    ///
    /// Returns whether the heading was accepted. A rejected turn is not an
    /// error; the snake simply keeps going.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.heading.is_opposite(direction) {
            return false;
        }
        self.heading = direction;
        true
    }

    /// Shift every segment onto its predecessor, then step the head one cell
    pub fn advance(&mut self) {
        for i in (1..self.body.len()).rev() {
            let prev = self.body[i - 1];
            let segment = &mut self.body[i];
            segment.position = prev.position;
            segment.direction = prev.direction;
        }

        let heading = self.heading;
        let next = self.board.step(self.body[0].position, heading);
        let head = &mut self.body[0];
        head.direction = heading;
        head.position = next;
    }

    /// Append a segment one cell behind the tail, opposite the tail's direction
    pub fn grow(&mut self) {
        let tail = *self.tail();
        let position = self.board.step(tail.position, tail.direction.opposite());
        self.body.push_back(Segment::new(position, tail.direction));
    }

    /// True if the head shares space with any other segment
    pub fn check_self_collision(&self) -> bool {
        let head = self.board.cell_box(self.head().position);
        self.body
            .iter()
            .skip(1)
            .any(|segment| head.overlaps(&self.board.cell_box(segment.position)))
    }
}
