//! Board state: tiles, sprite stacks, and actor positions.
//!
//! A [`Board`] is the complete mutable state of a game. Everything a move
//! can change lives here, so cloning a board is a full snapshot and
//! `clone_from` is a full restore.
//!
//! Tiles keep their sprites bottom to top. The top sprite is what a
//! renderer shows and what [`Board::sprite_at`] returns. Actor positions
//! are also indexed on the board ([`Player::position`] and the ghost map)
//! so moves do not have to scan the grid.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use rewind_types::{ActorId, Position, SpriteKind};

/// Something that occupies a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sprite {
    /// An impassable wall.
    Wall,
    /// A pellet the player can eat.
    Food {
        /// Points awarded when eaten.
        points: u32,
    },
    /// The player.
    Player,
    /// A ghost with its identity.
    Ghost(ActorId),
}

impl Sprite {
    /// The kind of this sprite, without identity or payload.
    pub const fn kind(self) -> SpriteKind {
        match self {
            Self::Wall => SpriteKind::Wall,
            Self::Food { .. } => SpriteKind::Food,
            Self::Player => SpriteKind::Player,
            Self::Ghost(_) => SpriteKind::Ghost,
        }
    }
}

/// A single board cell holding a bottom-to-top stack of sprites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    sprites: Vec<Sprite>,
}

impl Tile {
    /// The topmost sprite, if the tile is not empty.
    pub fn top(&self) -> Option<&Sprite> {
        self.sprites.last()
    }

    /// All sprites, bottom to top.
    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    /// Whether the tile holds `sprite`.
    pub fn contains(&self, sprite: &Sprite) -> bool {
        self.sprites.contains(sprite)
    }

    /// Whether the tile holds a wall.
    pub fn has_wall(&self) -> bool {
        self.sprites.contains(&Sprite::Wall)
    }

    /// Points of the food on this tile, if any.
    pub fn food_points(&self) -> Option<u32> {
        self.sprites.iter().find_map(|sprite| match sprite {
            Sprite::Food { points } => Some(*points),
            _ => None,
        })
    }

    /// The first ghost on this tile, if any.
    pub fn ghost(&self) -> Option<ActorId> {
        self.sprites.iter().find_map(|sprite| match sprite {
            Sprite::Ghost(id) => Some(*id),
            _ => None,
        })
    }

    /// Place `sprite` on top of the stack.
    pub(crate) fn push(&mut self, sprite: Sprite) {
        self.sprites.push(sprite);
    }

    /// Remove the first occurrence of `sprite`. Returns whether it was present.
    pub(crate) fn remove(&mut self, sprite: &Sprite) -> bool {
        match self.sprites.iter().position(|s| s == sprite) {
            Some(index) => {
                self.sprites.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove the food on this tile and return its points.
    pub(crate) fn take_food(&mut self) -> Option<u32> {
        let index = self
            .sprites
            .iter()
            .position(|sprite| matches!(sprite, Sprite::Food { .. }))?;
        match self.sprites.remove(index) {
            Sprite::Food { points } => Some(points),
            _ => None,
        }
    }
}

/// The player's mutable attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable identity of the player.
    pub id: ActorId,
    /// Current tile.
    pub position: Position,
    /// Points collected from food.
    pub points: u32,
    /// Whether the player is still alive.
    pub alive: bool,
}

/// The complete state of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major tiles, `width * height` of them.
    tiles: Vec<Tile>,
    player: Player,
    /// Ghost positions indexed by ghost id.
    ghosts: BTreeMap<ActorId, Position>,
}

impl Board {
    /// Assemble a board from already-validated parts.
    pub(crate) const fn from_parts(
        width: usize,
        height: usize,
        tiles: Vec<Tile>,
        player: Player,
        ghosts: BTreeMap<ActorId, Position>,
    ) -> Self {
        Self {
            width,
            height,
            tiles,
            player,
            ghosts,
        }
    }

    /// Number of columns.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// The player.
    pub const fn player(&self) -> &Player {
        &self.player
    }

    pub(crate) const fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Where the ghost with `id` is, if it exists.
    pub fn ghost_position(&self, id: ActorId) -> Option<Position> {
        self.ghosts.get(&id).copied()
    }

    pub(crate) fn set_ghost_position(&mut self, id: ActorId, position: Position) {
        self.ghosts.insert(id, position);
    }

    /// All ghost ids, in id order.
    pub fn ghost_ids(&self) -> Vec<ActorId> {
        self.ghosts.keys().copied().collect()
    }

    /// The tile at `position`, if it is on the board.
    pub fn tile(&self, position: Position) -> Option<&Tile> {
        self.tiles.get(self.index(position)?)
    }

    pub(crate) fn tile_mut(&mut self, position: Position) -> Option<&mut Tile> {
        let index = self.index(position)?;
        self.tiles.get_mut(index)
    }

    /// The top sprite at `position`.
    pub fn sprite_at(&self, position: Position) -> Option<&Sprite> {
        self.tile(position)?.top()
    }

    /// The kind of the top sprite at `position`.
    pub fn sprite_kind_at(&self, position: Position) -> Option<SpriteKind> {
        self.sprite_at(position).map(|sprite| sprite.kind())
    }

    /// Number of food pellets left on the board.
    pub fn remaining_food(&self) -> usize {
        self.tiles
            .iter()
            .filter(|tile| tile.food_points().is_some())
            .count()
    }

    /// Text rendering, one line per row, using map glyphs for top sprites.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, tile) in self.tiles.iter().enumerate() {
            if i > 0 && i.checked_rem(self.width) == Some(0) {
                out.push('\n');
            }
            out.push(tile.top().map_or(' ', |sprite| sprite.kind().glyph()));
        }
        out
    }

    fn index(&self, position: Position) -> Option<usize> {
        if position.x >= self.width || position.y >= self.height {
            return None;
        }
        position.y.checked_mul(self.width)?.checked_add(position.x)
    }
}
