use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighbouring position in `direction`, `None` if it would leave the
    /// top or left edge.
    pub fn step(self, direction: Direction) -> Option<Position> {
        match direction {
            Direction::North => self.row.checked_sub(1).map(|row| Position::new(row, self.col)),
            Direction::South => Some(Position::new(self.row + 1, self.col)),
            Direction::East => Some(Position::new(self.row, self.col + 1)),
            Direction::West => self.col.checked_sub(1).map(|col| Position::new(self.row, col)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Direction::North => "N",
            Direction::South => "S",
            Direction::East => "E",
            Direction::West => "W",
        };
        write!(f, "{}", symbol)
    }
}

/// What a single agent does in one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridAction {
    NoOp,
    Move(Direction),
}

impl GridAction {
    /// Every action an agent can take, no-op first.
    pub fn all() -> Vec<GridAction> {
        std::iter::once(GridAction::NoOp)
            .chain(Direction::ALL.into_iter().map(GridAction::Move))
            .collect()
    }
}

impl fmt::Display for GridAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridAction::NoOp => write!(f, "NoOp"),
            GridAction::Move(direction) => write!(f, "Move({})", direction),
        }
    }
}
