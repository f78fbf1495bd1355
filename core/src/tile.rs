use serde::{Deserialize, Serialize};

/// Player-visible state of a single tile.
///
/// The adjacent mine count only exists once a safe tile is revealed, so it is
/// carried by the `Revealed` variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileStatus {
    Hidden,
    Flagged,
    Revealed(u8),
    ExplodedMine,
}

impl TileStatus {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }

    pub const fn adjacent_mine_count(self) -> Option<u8> {
        match self {
            Self::Revealed(count) => Some(count),
            _ => None,
        }
    }
}

impl Default for TileStatus {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    is_mine: bool,
    status: TileStatus,
}

impl Tile {
    pub const fn new(is_mine: bool) -> Self {
        Self {
            is_mine,
            status: TileStatus::Hidden,
        }
    }

    pub const fn is_mine(self) -> bool {
        self.is_mine
    }

    pub const fn status(self) -> TileStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: TileStatus) {
        self.status = status;
    }
}
