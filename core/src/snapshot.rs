use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Text shown above the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusLine {
    MinesLeft(isize),
    YouWin,
    YouLose,
}

impl StatusLine {
    pub fn for_engine(engine: &GameEngine) -> Self {
        match engine.status() {
            GameStatus::InProgress => Self::MinesLeft(engine.mines_left()),
            GameStatus::Won => Self::YouWin,
            GameStatus::Lost => Self::YouLose,
        }
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinesLeft(count) => write!(f, "Mines left: {}", count),
            Self::YouWin => f.write_str("You Win!"),
            Self::YouLose => f.write_str("You Lose!"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSnapshot {
    pub x: Coord,
    pub y: Coord,
    pub status: TileStatus,
    pub adjacent_mine_count: Option<u8>,
}

/// Read-only projection of a game handed to renderers after every intent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord,
    pub status: GameStatus,
    pub mines_left: isize,
    pub triggered_mine: Option<Coord2>,
    /// Row-major: all of `y = 0` first, then `y = 1`, and so on.
    pub tiles: Vec<TileSnapshot>,
    pub status_line: String,
}

impl Snapshot {
    pub fn from_engine(engine: &GameEngine) -> Self {
        use alloc::string::ToString;

        let size = engine.size();
        let board = engine.board();
        let mut tiles = Vec::with_capacity(board.len());
        for y in 0..size {
            for x in 0..size {
                let status = board[(x, y).to_nd_index()].status();
                tiles.push(TileSnapshot {
                    x,
                    y,
                    status,
                    adjacent_mine_count: status.adjacent_mine_count(),
                });
            }
        }

        Self {
            size,
            status: engine.status(),
            mines_left: engine.mines_left(),
            triggered_mine: engine.triggered_mine(),
            tiles,
            status_line: StatusLine::for_engine(engine).to_string(),
        }
    }

    pub fn tile(&self, (x, y): Coord2) -> Option<&TileSnapshot> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.tiles
            .get(usize::from(y) * usize::from(self.size) + usize::from(x))
    }

    /// Tiles grouped by row, `y = 0` first.
    pub fn rows(&self) -> impl Iterator<Item = &[TileSnapshot]> {
        self.tiles.chunks(usize::from(self.size).max(1))
    }
}

impl GameEngine {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_engine(self)
    }
}
