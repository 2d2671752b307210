//! Text map parsing.
//!
//! Each string is one row, read left to right:
//!
//! | Glyph | Meaning |
//! |-------|---------|
//! | `#` | wall |
//! | `.` | food worth [`RulesConfig::food_points`] |
//! | `P` | the player (exactly one) |
//! | `G` | a ghost |
//! | space | empty floor |

use std::collections::BTreeMap;

use tracing::debug;

use rewind_types::{ActorId, Position};

use crate::board::{Board, Player, Sprite, Tile};
use crate::config::RulesConfig;
use crate::error::BoardError;

/// Parse `rows` into a board.
///
/// # Errors
///
/// Returns [`BoardError`] for an empty or ragged map, an unknown
/// character, or a player count other than one.
pub fn parse_map<S: AsRef<str>>(rows: &[S], rules: &RulesConfig) -> Result<Board, BoardError> {
    let width = rows
        .first()
        .map(|row| row.as_ref().chars().count())
        .ok_or(BoardError::EmptyMap)?;
    if width == 0 {
        return Err(BoardError::EmptyMap);
    }

    let mut tiles = Vec::with_capacity(width.saturating_mul(rows.len()));
    let mut player: Option<Position> = None;
    let mut ghosts = BTreeMap::new();

    for (y, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        let actual = row.chars().count();
        if actual != width {
            return Err(BoardError::RaggedRow {
                row: y,
                expected: width,
                actual,
            });
        }

        for (x, glyph) in row.chars().enumerate() {
            let position = Position::new(x, y);
            let mut tile = Tile::default();
            match glyph {
                ' ' => {}
                '#' => tile.push(Sprite::Wall),
                '.' => tile.push(Sprite::Food {
                    points: rules.food_points,
                }),
                'P' => {
                    if let Some(first) = player {
                        return Err(BoardError::MultiplePlayers {
                            first,
                            second: position,
                        });
                    }
                    player = Some(position);
                    tile.push(Sprite::Player);
                }
                'G' => {
                    let id = ActorId::new();
                    ghosts.insert(id, position);
                    tile.push(Sprite::Ghost(id));
                }
                other => {
                    return Err(BoardError::UnknownGlyph {
                        glyph: other,
                        position,
                    });
                }
            }
            tiles.push(tile);
        }
    }

    let position = player.ok_or(BoardError::MissingPlayer)?;
    debug!(
        width,
        height = rows.len(),
        ghosts = ghosts.len(),
        player = %position,
        "map parsed"
    );

    Ok(Board::from_parts(
        width,
        rows.len(),
        tiles,
        Player {
            id: ActorId::new(),
            position,
            points: 0,
            alive: true,
        },
        ghosts,
    ))
}
