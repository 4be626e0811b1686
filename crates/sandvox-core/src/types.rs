//! Core block types.

use serde::{Deserialize, Serialize};

/// An RGB display color, 0-255 per channel.
pub type Rgb = [u8; 3];

/// Identity of a block kind placeable in the world.
///
/// The set is fixed at compile time; [`BlockKind::ALL`] defines the hotkey
/// slot order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// Surface block with a grass top.
    Grass,
    /// Plain dirt block.
    Dirt,
    /// Deep stone block.
    Stone,
    /// Wooden building block.
    Wood,
    /// Brick building block.
    Brick,
}

impl BlockKind {
    /// Every kind, in hotkey-slot order.
    pub const ALL: [Self; 5] = [
        Self::Grass,
        Self::Dirt,
        Self::Stone,
        Self::Wood,
        Self::Brick,
    ];

    /// Lower-case display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Grass => "grass",
            Self::Dirt => "dirt",
            Self::Stone => "stone",
            Self::Wood => "wood",
            Self::Brick => "brick",
        }
    }
}

/// Visual and identity properties for one block kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockDefinition {
    /// The kind this definition describes.
    pub kind: BlockKind,
    /// Base display color.
    pub base_color: Rgb,
    /// Color shown while the block is hovered.
    pub highlight_color: Rgb,
    /// Texture identifier, if the kind is textured.
    pub texture: Option<&'static str>,
}

impl BlockDefinition {
    /// Built-in grass definition.
    pub const GRASS: Self = Self {
        kind: BlockKind::Grass,
        base_color: [95, 159, 53],
        highlight_color: [123, 190, 82],
        texture: Some("grass_top.png"),
    };

    /// Built-in dirt definition.
    pub const DIRT: Self = Self {
        kind: BlockKind::Dirt,
        base_color: [151, 106, 68],
        highlight_color: [181, 141, 102],
        texture: Some("dirt.png"),
    };

    /// Built-in stone definition.
    pub const STONE: Self = Self {
        kind: BlockKind::Stone,
        base_color: [130, 130, 130],
        highlight_color: [169, 169, 169],
        texture: Some("stone.png"),
    };

    /// Built-in wood definition.
    pub const WOOD: Self = Self {
        kind: BlockKind::Wood,
        base_color: [110, 85, 58],
        highlight_color: [142, 112, 80],
        texture: Some("wood.png"),
    };

    /// Built-in brick definition.
    pub const BRICK: Self = Self {
        kind: BlockKind::Brick,
        base_color: [156, 68, 58],
        highlight_color: [186, 96, 84],
        texture: Some("brick.png"),
    };
}
