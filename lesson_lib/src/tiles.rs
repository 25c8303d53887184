//! Tile based level loaded from a text map

use crate::error::{LessonError, LessonResult};
use crate::gfx::Rect;
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

pub const LEVEL_WIDTH: i32 = 1280;
pub const LEVEL_HEIGHT: i32 = 960;

pub const TILE_WIDTH: i32 = 80;
pub const TILE_HEIGHT: i32 = 80;

pub const TOTAL_TILES: usize = 192;

#[derive(Clone, Copy, PartialEq, Eq, Debug, FromPrimitive)]
pub enum TileKind {
    Red = 0,
    Green = 1,
    Blue = 2,
    Center = 3,
    Top = 4,
    TopRight = 5,
    Right = 6,
    BottomRight = 7,
    Bottom = 8,
    BottomLeft = 9,
    Left = 10,
    TopLeft = 11,
}

impl TileKind {
    /// Everything from `Center` to `TopLeft` blocks movement
    pub fn is_wall(self) -> bool {
        (TileKind::Center as u8..=TileKind::TopLeft as u8).contains(&(self as u8))
    }

    /// Source rectangle in the tile sheet
    pub fn clip(self) -> Rect {
        let (col, row) = match self {
            TileKind::Red => (0, 0),
            TileKind::Green => (0, 1),
            TileKind::Blue => (0, 2),
            TileKind::TopLeft => (1, 0),
            TileKind::Left => (1, 1),
            TileKind::BottomLeft => (1, 2),
            TileKind::Top => (2, 0),
            TileKind::Center => (2, 1),
            TileKind::Bottom => (2, 2),
            TileKind::TopRight => (3, 0),
            TileKind::Right => (3, 1),
            TileKind::BottomRight => (3, 2),
        };

        Rect::new(col * TILE_WIDTH, row * TILE_HEIGHT, TILE_WIDTH, TILE_HEIGHT)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Tile {
    pub rect: Rect,
    pub kind: TileKind,
}

pub struct TileMap {
    tiles: Vec<Tile>,
}

impl TileMap {
    /// Parse whitespace separated tile kinds, filling the level row by row. Anything after the
    /// first `TOTAL_TILES` values is ignored.
    pub fn parse(map: &str) -> LessonResult<TileMap> {
        let mut tiles = Vec::with_capacity(TOTAL_TILES);
        let (mut x, mut y) = (0, 0);

        for token in map.split_whitespace().take(TOTAL_TILES) {
            let value: i64 = token
                .parse()
                .map_err(|_| LessonError::BadTileMap(format!("`{token}` is not a number")))?;

            let kind = TileKind::from_i64(value).ok_or_else(|| {
                LessonError::BadTileMap(format!("tile #{} has invalid kind {value}", tiles.len()))
            })?;

            tiles.push(Tile {
                rect: Rect::new(x, y, TILE_WIDTH, TILE_HEIGHT),
                kind,
            });

            x += TILE_WIDTH;
            if x >= LEVEL_WIDTH {
                x = 0;
                y += TILE_HEIGHT;
            }
        }

        if tiles.len() < TOTAL_TILES {
            return Err(LessonError::BadTileMap(format!(
                "expected {TOTAL_TILES} tiles, got {}",
                tiles.len()
            )));
        }

        Ok(TileMap { tiles })
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn touches_wall(&self, rect: &Rect) -> bool {
        self.tiles
            .iter()
            .any(|t| t.kind.is_wall() && t.rect.has_intersection(rect))
    }

    /// Tiles at least partially inside `camera`
    pub fn visible<'a>(&'a self, camera: &'a Rect) -> impl Iterator<Item = &'a Tile> + 'a {
        self.tiles.iter().filter(move |t| t.rect.has_intersection(camera))
    }
}
