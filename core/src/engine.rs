use alloc::collections::VecDeque;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Indicates the game has ended and the board no longer accepts moves
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Derives the game status from the tiles alone.
///
/// Any exploded mine loses the game. The game is won once every safe tile is
/// revealed while every mine is still hidden or flagged; a flagged safe tile
/// therefore blocks the win until it is unflagged and revealed.
pub fn evaluate_status(board: &Array2<Tile>) -> GameStatus {
    if board
        .iter()
        .any(|tile| tile.status() == TileStatus::ExplodedMine)
    {
        return GameStatus::Lost;
    }

    let won = board.iter().all(|tile| match (tile.is_mine(), tile.status()) {
        (false, TileStatus::Revealed(_)) => true,
        (true, TileStatus::Hidden | TileStatus::Flagged) => true,
        _ => false,
    });

    if won {
        GameStatus::Won
    } else {
        GameStatus::InProgress
    }
}

/// Owns one game from the first click to a win or loss.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEngine {
    mine_layout: MineLayout,
    board: Array2<Tile>,
    triggered_mine: Option<Coord2>,
}

impl GameEngine {
    pub fn new(mine_layout: MineLayout) -> Self {
        let size = mine_layout.size();
        let board = Array2::from_shape_fn((size, size).to_nd_index(), |(x, y)| {
            Tile::new(mine_layout[(x as Coord, y as Coord)])
        });
        log::debug!(
            "new {}x{} game with {} mines",
            size,
            size,
            mine_layout.mine_count()
        );
        Self {
            mine_layout,
            board,
            triggered_mine: None,
        }
    }

    /// Starts a game with uniformly placed mines drawn from `seed`.
    pub fn new_game(config: GameConfig, seed: u64) -> Result<Self> {
        log::debug!("seed: {}", seed);
        RandomLayoutGenerator::new(seed)
            .generate(config)
            .map(Self::new)
    }

    pub fn status(&self) -> GameStatus {
        evaluate_status(&self.board)
    }

    pub fn is_finished(&self) -> bool {
        self.status().is_finished()
    }

    /// Side length of the square board.
    pub fn size(&self) -> Coord {
        self.mine_layout.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    pub fn flagged_count(&self) -> CellCount {
        // bounded by the tile count, which fits
        self.board
            .iter()
            .filter(|tile| tile.status() == TileStatus::Flagged)
            .count() as CellCount
    }

    /// Mines minus flags; goes negative when the player over-flags.
    pub fn mines_left(&self) -> isize {
        (self.total_mines() as isize) - (self.flagged_count() as isize)
    }

    pub fn tile_at(&self, coords: Coord2) -> Result<Tile> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(self.board[coords.to_nd_index()])
    }

    pub fn has_mine_at(&self, coords: Coord2) -> Result<bool> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(self.mine_layout.contains_mine(coords))
    }

    /// The mine the player clicked, if the game was lost.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn mine_layout(&self) -> &MineLayout {
        &self.mine_layout
    }

    pub fn board(&self) -> &Array2<Tile> {
        &self.board
    }

    pub fn reveal_tile(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.mine_layout.validate_coords(coords)?;

        if self.is_finished() || self.status_at(coords) != TileStatus::Hidden {
            return Ok(RevealOutcome::NoChange);
        }

        if self.mine_layout.contains_mine(coords) {
            log::debug!("mine hit at {:?}", coords);
            self.set_status_at(coords, TileStatus::ExplodedMine);
            self.triggered_mine = Some(coords);
        } else {
            self.flood_reveal(coords);
        }

        Ok(match self.settle() {
            GameStatus::InProgress => RevealOutcome::Revealed,
            GameStatus::Won => RevealOutcome::Won,
            GameStatus::Lost => RevealOutcome::HitMine,
        })
    }

    pub fn flag_tile(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.mine_layout.validate_coords(coords)?;

        if self.is_finished() {
            return Ok(MarkOutcome::NoChange);
        }

        let next = match self.status_at(coords) {
            TileStatus::Hidden => TileStatus::Flagged,
            TileStatus::Flagged => TileStatus::Hidden,
            _ => return Ok(MarkOutcome::NoChange),
        };
        self.set_status_at(coords, next);
        log::debug!("{:?} is now {:?}, mines left: {}", coords, next, self.mines_left());

        self.settle();
        Ok(MarkOutcome::Changed)
    }

    /// Reveals a safe tile and, while the revealed tiles have no adjacent
    /// mines, keeps revealing their hidden neighbors.
    fn flood_reveal(&mut self, start: Coord2) {
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            // reachable through more than one zero tile
            if self.status_at(coords) != TileStatus::Hidden {
                continue;
            }
            debug_assert!(!self.mine_layout.contains_mine(coords));

            let count = self.mine_layout.adjacent_mine_count(coords);
            self.set_status_at(coords, TileStatus::Revealed(count));
            log::trace!("revealed {:?}, adjacent mines: {}", coords, count);

            if count == 0 {
                to_visit.extend(
                    self.mine_layout
                        .iter_neighbors(coords)
                        .filter(|&pos| self.status_at(pos) == TileStatus::Hidden),
                );
            }
        }
    }

    /// Re-derives the status after a mutation and applies the end-of-game
    /// effects: a loss exposes every remaining mine.
    fn settle(&mut self) -> GameStatus {
        let status = evaluate_status(&self.board);
        match status {
            GameStatus::InProgress => {}
            GameStatus::Won => log::debug!("game won"),
            GameStatus::Lost => {
                log::debug!("game lost");
                self.expose_mines();
            }
        }
        status
    }

    fn expose_mines(&mut self) {
        for tile in self.board.iter_mut() {
            if tile.is_mine() && tile.status().is_unrevealed() {
                tile.set_status(TileStatus::ExplodedMine);
            }
        }
    }

    fn status_at(&self, coords: Coord2) -> TileStatus {
        self.board[coords.to_nd_index()].status()
    }

    fn set_status_at(&mut self, coords: Coord2, status: TileStatus) {
        self.board[coords.to_nd_index()].set_status(status);
    }
}
