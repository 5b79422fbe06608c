//! Protocol module - the line protocol spoken with the game engine
//!
//! The engine writes one message per line:
//!
//! ```text
//! settings <key> <value>
//! update game <key> <value>
//! update <player> <key> <value>
//! action moves <timebank_ms>
//! ```
//!
//! The bot answers each action line with comma-joined move primitives
//! ("turnright,left,left,drop"), or "no_moves" when nothing is legal.
//! Unknown keys inside settings/update lines are tolerated so a newer
//! engine does not break the bot; malformed lines are errors.

use std::fmt;

use crate::core::board::Board;
use crate::core::pieces::Piece;
use crate::types::{CellState, Move, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

/// Reply when the search reports no legal placement
pub const NO_MOVES: &str = "no_moves";

/// Parse failure for a single engine line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    UnknownCommand(String),
    MissingArgument(&'static str),
    InvalidNumber(String),
    InvalidPiece(String),
    InvalidPosition(String),
    FieldRows(usize),
    FieldRowWidth { row: usize, cols: usize },
    InvalidCellCode(String),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::UnknownCommand(cmd) => write!(f, "unknown command {cmd:?}"),
            ProtocolError::MissingArgument(what) => write!(f, "missing {what}"),
            ProtocolError::InvalidNumber(value) => write!(f, "invalid number {value:?}"),
            ProtocolError::InvalidPiece(value) => write!(f, "unknown piece type {value:?}"),
            ProtocolError::InvalidPosition(value) => write!(f, "invalid position {value:?}"),
            ProtocolError::FieldRows(rows) => {
                write!(f, "field has {rows} rows, expected {BOARD_HEIGHT}")
            }
            ProtocolError::FieldRowWidth { row, cols } => {
                write!(f, "field row {row} has {cols} cells, expected {BOARD_WIDTH}")
            }
            ProtocolError::InvalidCellCode(value) => write!(f, "invalid cell code {value:?}"),
        }
    }
}

impl std::error::Error for ProtocolError {}

/// One parsed engine line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Settings(Setting),
    UpdateGame(GameUpdate),
    UpdatePlayer { player: String, update: PlayerUpdate },
    Action { timebank_ms: u32 },
}

/// `settings <key> <value>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Setting {
    Timebank(u32),
    TimePerMove(u32),
    PlayerNames(Vec<String>),
    YourBot(String),
    FieldWidth(u8),
    FieldHeight(u8),
    /// Well-formed but unrecognized key; ignored
    Unknown,
}

/// `update game <key> <value>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameUpdate {
    Round(u32),
    ThisPieceType(PieceKind),
    NextPieceType(PieceKind),
    ThisPiecePosition { x: i8, y: i8 },
    /// Well-formed but unrecognized key; ignored
    Unknown,
}

/// `update <player> <key> <value>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerUpdate {
    RowPoints(u32),
    Combo(u32),
    Skips(u32),
    Field(Board),
    /// Well-formed but unrecognized key; ignored
    Unknown,
}

/// Parse one non-empty engine line into a typed message
pub fn parse_line(line: &str) -> Result<Message, ProtocolError> {
    let mut parts = line.split_whitespace();
    let command = parts
        .next()
        .ok_or(ProtocolError::MissingArgument("command"))?;

    match command {
        "settings" => {
            let key = parts.next().ok_or(ProtocolError::MissingArgument("settings key"))?;
            let value = parts
                .next()
                .ok_or(ProtocolError::MissingArgument("settings value"))?;
            Ok(Message::Settings(parse_setting(key, value)?))
        }
        "update" => {
            let target = parts
                .next()
                .ok_or(ProtocolError::MissingArgument("update target"))?;
            let key = parts.next().ok_or(ProtocolError::MissingArgument("update key"))?;
            let value = parts
                .next()
                .ok_or(ProtocolError::MissingArgument("update value"))?;
            if target == "game" {
                Ok(Message::UpdateGame(parse_game_update(key, value)?))
            } else {
                Ok(Message::UpdatePlayer {
                    player: target.to_string(),
                    update: parse_player_update(key, value)?,
                })
            }
        }
        "action" => {
            let kind = parts.next().ok_or(ProtocolError::MissingArgument("action kind"))?;
            if kind != "moves" {
                return Err(ProtocolError::UnknownCommand(format!("action {kind}")));
            }
            let value = parts
                .next()
                .ok_or(ProtocolError::MissingArgument("action timebank"))?;
            Ok(Message::Action {
                timebank_ms: parse_number(value)?,
            })
        }
        other => Err(ProtocolError::UnknownCommand(other.to_string())),
    }
}

fn parse_setting(key: &str, value: &str) -> Result<Setting, ProtocolError> {
    let setting = match key {
        "timebank" => Setting::Timebank(parse_number(value)?),
        "time_per_move" => Setting::TimePerMove(parse_number(value)?),
        "player_names" => {
            Setting::PlayerNames(value.split(',').map(|name| name.to_string()).collect())
        }
        "your_bot" => Setting::YourBot(value.to_string()),
        "field_width" => Setting::FieldWidth(parse_number(value)?),
        "field_height" => Setting::FieldHeight(parse_number(value)?),
        _ => Setting::Unknown,
    };
    Ok(setting)
}

fn parse_game_update(key: &str, value: &str) -> Result<GameUpdate, ProtocolError> {
    let update = match key {
        "round" => GameUpdate::Round(parse_number(value)?),
        "this_piece_type" => GameUpdate::ThisPieceType(parse_piece(value)?),
        "next_piece_type" => GameUpdate::NextPieceType(parse_piece(value)?),
        "this_piece_position" => {
            let (x, y) = parse_position(value)?;
            GameUpdate::ThisPiecePosition { x, y }
        }
        _ => GameUpdate::Unknown,
    };
    Ok(update)
}

fn parse_player_update(key: &str, value: &str) -> Result<PlayerUpdate, ProtocolError> {
    let update = match key {
        "row_points" => PlayerUpdate::RowPoints(parse_number(value)?),
        "combo" => PlayerUpdate::Combo(parse_number(value)?),
        "skips" => PlayerUpdate::Skips(parse_number(value)?),
        "field" => PlayerUpdate::Field(decode_field(value)?),
        _ => PlayerUpdate::Unknown,
    };
    Ok(update)
}

fn parse_number<T: std::str::FromStr>(value: &str) -> Result<T, ProtocolError> {
    value
        .parse()
        .map_err(|_| ProtocolError::InvalidNumber(value.to_string()))
}

fn parse_piece(value: &str) -> Result<PieceKind, ProtocolError> {
    PieceKind::from_str(value).ok_or_else(|| ProtocolError::InvalidPiece(value.to_string()))
}

fn parse_position(value: &str) -> Result<(i8, i8), ProtocolError> {
    let invalid = || ProtocolError::InvalidPosition(value.to_string());
    let (x, y) = value.split_once(',').ok_or_else(invalid)?;
    Ok((
        x.trim().parse().map_err(|_| invalid())?,
        y.trim().parse().map_err(|_| invalid())?,
    ))
}

/// Decode a field string: rows separated by `;`, cells by `,`, each cell
/// an integer state code. Trailing separators are tolerated; dimensions
/// other than the fixed board are not.
pub fn decode_field(value: &str) -> Result<Board, ProtocolError> {
    let rows: Vec<&str> = value.split(';').filter(|row| !row.is_empty()).collect();
    if rows.len() != BOARD_HEIGHT as usize {
        return Err(ProtocolError::FieldRows(rows.len()));
    }

    let mut board = Board::new();
    for (y, row) in rows.iter().enumerate() {
        let cells: Vec<&str> = row.split(',').filter(|cell| !cell.is_empty()).collect();
        if cells.len() != BOARD_WIDTH as usize {
            return Err(ProtocolError::FieldRowWidth {
                row: y,
                cols: cells.len(),
            });
        }
        for (x, cell) in cells.iter().enumerate() {
            let code: u8 = cell
                .trim()
                .parse()
                .map_err(|_| ProtocolError::InvalidCellCode(cell.to_string()))?;
            let state = CellState::from_code(code)
                .ok_or_else(|| ProtocolError::InvalidCellCode(cell.to_string()))?;
            board.set(x as i8, y as i8, state);
        }
    }
    Ok(board)
}

/// Join moves into the engine's comma-separated reply; an empty list
/// becomes the explicit no-move reply.
pub fn encode_moves(moves: &[Move]) -> String {
    if moves.is_empty() {
        return NO_MOVES.to_string();
    }
    moves
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

/// Everything the engine has told us so far, folded in line by line.
/// Only the bot's own per-player updates are retained.
#[derive(Debug, Clone, Default)]
pub struct BotState {
    pub my_name: String,
    pub round: u32,
    pub timebank: u32,
    pub time_per_move: u32,
    pub this_piece: Option<PieceKind>,
    pub next_piece: Option<PieceKind>,
    pub this_piece_position: Option<(i8, i8)>,
    pub field: Option<Board>,
    pub row_points: u32,
    pub combo: u32,
}

impl BotState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one message into the state. Action requests carry no state
    /// and are handled by the runtime.
    pub fn apply(&mut self, message: Message) {
        match message {
            Message::Settings(setting) => match setting {
                Setting::Timebank(value) => self.timebank = value,
                Setting::TimePerMove(value) => self.time_per_move = value,
                Setting::YourBot(name) => self.my_name = name,
                Setting::PlayerNames(_)
                | Setting::FieldWidth(_)
                | Setting::FieldHeight(_)
                | Setting::Unknown => {}
            },
            Message::UpdateGame(update) => match update {
                GameUpdate::Round(round) => self.round = round,
                GameUpdate::ThisPieceType(kind) => self.this_piece = Some(kind),
                GameUpdate::NextPieceType(kind) => self.next_piece = Some(kind),
                GameUpdate::ThisPiecePosition { x, y } => {
                    self.this_piece_position = Some((x, y));
                }
                GameUpdate::Unknown => {}
            },
            Message::UpdatePlayer { player, update } => {
                if player == self.my_name {
                    match update {
                        PlayerUpdate::RowPoints(value) => self.row_points = value,
                        PlayerUpdate::Combo(value) => self.combo = value,
                        PlayerUpdate::Field(board) => self.field = Some(board),
                        PlayerUpdate::Skips(_) | PlayerUpdate::Unknown => {}
                    }
                }
            }
            Message::Action { .. } => {}
        }
    }

    /// The active piece at the pose the engine reported, or at its
    /// default spawn pose when no position has been sent yet.
    pub fn current_piece(&self) -> Option<Piece> {
        let kind = self.this_piece?;
        let piece = match self.this_piece_position {
            Some((x, y)) => Piece::new(kind, Rotation::North, x, y),
            None => Piece::spawn(kind),
        };
        Some(piece)
    }
}
