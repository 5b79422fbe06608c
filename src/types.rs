//! Core types shared across the bot
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// State of a single board cell, as encoded on the wire (codes 0-3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Nothing here
    Empty,
    /// Covered by the currently falling piece; not an obstacle
    Active,
    /// Settled piece material
    Block,
    /// Permanent floor row material; never clears
    Solid,
}

impl CellState {
    /// Parse from the wire code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(CellState::Empty),
            1 => Some(CellState::Active),
            2 => Some(CellState::Block),
            3 => Some(CellState::Solid),
            _ => None,
        }
    }

    /// Convert to the wire code
    pub fn code(&self) -> u8 {
        match self {
            CellState::Empty => 0,
            CellState::Active => 1,
            CellState::Block => 2,
            CellState::Solid => 3,
        }
    }
}

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Parse piece kind from the single-letter wire form (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to the single-letter wire form
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Rotation states (North = spawn orientation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }
}

/// Move primitives the engine accepts for one turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    TurnRight,
    Left,
    Right,
    Drop,
}

impl Move {
    /// Convert to the wire form
    pub fn as_str(&self) -> &'static str {
        match self {
            Move::TurnRight => "turnright",
            Move::Left => "left",
            Move::Right => "right",
            Move::Drop => "drop",
        }
    }
}
