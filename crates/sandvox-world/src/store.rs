//! Sparse block storage and structural mutation.

use glam::Vec3;
use hashbrown::HashMap;
use sandvox_core::{BlockKind, GridPos, Result};
use tracing::info;

use crate::config::WorldConfig;
use crate::heightfield::HeightField;

/// Stable identity of one placed block instance.
///
/// Assigned by the store and never reused, so the rendering host can tell
/// instances apart across place/remove cycles on the same cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockInstanceId(u64);

impl BlockInstanceId {
    /// Raw numeric value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// One placed block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    /// Stable instance identity for the rendering host.
    pub id: BlockInstanceId,
    /// The cell this block occupies.
    pub pos: GridPos,
    /// The kind of the block.
    pub kind: BlockKind,
}

/// Sparse grid of placed blocks, keyed by cell.
///
/// An entry exists iff a visible block occupies the cell; removed cells
/// simply vanish from the map, so no tombstones are needed and placement
/// outside the generated bounds is legal. The store is exclusively owned by
/// the thread driving the session — every operation completes before the
/// next event is processed, so no locking is involved.
pub struct TerrainStore {
    blocks: HashMap<GridPos, Block>,
    next_id: u64,
}

impl TerrainStore {
    /// Validate the configuration and generate the initial chunk.
    ///
    /// For every (x, z) in `[-chunk_size/2, chunk_size/2)²` the height
    /// field decides the column height, and layers `[0, height)` are
    /// spawned under the three-tier kind policy. Runs to completion before
    /// any edit is accepted; columns with non-positive height stay empty.
    pub fn generate(config: &WorldConfig) -> Result<Self> {
        config.validate()?;
        let field = HeightField::new(config);
        let mut store = Self::empty();

        let half = config.half_size();
        for x in -half..half {
            for z in -half..half {
                let height = field.height_at(x, z);
                let column_top = height - 1;
                for y in 0..height {
                    store.spawn(GridPos::new(x, y, z), field.kind_for_layer(y, column_top));
                }
            }
        }

        info!(
            "initial chunk generated: {} blocks",
            store.active_block_count()
        );
        Ok(store)
    }

    /// An empty store with no generated terrain.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            blocks: HashMap::new(),
            next_id: 0,
        }
    }

    /// Insert a new block into a vacant cell.
    fn spawn(&mut self, pos: GridPos, kind: BlockKind) -> Block {
        debug_assert!(!self.blocks.contains_key(&pos));
        let block = Block {
            id: BlockInstanceId(self.next_id),
            pos,
            kind,
        };
        self.next_id += 1;
        self.blocks.insert(pos, block);
        block
    }

    /// Place a new block in the cell adjacent to `anchor` across
    /// `face_normal`.
    ///
    /// The normal is trusted to be a unit axis-aligned cube-face vector. An
    /// occupied target cell is left untouched and `None` is returned —
    /// placement never overwrites.
    pub fn place_adjacent(
        &mut self,
        anchor: Vec3,
        face_normal: Vec3,
        kind: BlockKind,
    ) -> Option<Block> {
        let target = GridPos::from_world(anchor + face_normal);
        if self.blocks.contains_key(&target) {
            return None;
        }
        Some(self.spawn(target, kind))
    }

    /// Remove the block in the given cell.
    ///
    /// Returns the evicted block, or `None` when the cell is already empty
    /// (a stale reference from in-flight input; not an error).
    pub fn remove(&mut self, pos: GridPos) -> Option<Block> {
        self.blocks.remove(&pos)
    }

    /// Block at a continuous position, looked up by its rounded cell.
    #[must_use]
    pub fn block_at(&self, position: Vec3) -> Option<Block> {
        self.block_at_pos(GridPos::from_world(position))
    }

    /// Block at an exact cell.
    #[must_use]
    pub fn block_at_pos(&self, pos: GridPos) -> Option<Block> {
        self.blocks.get(&pos).copied()
    }

    /// Whether the cell is occupied.
    #[must_use]
    pub fn contains(&self, pos: GridPos) -> bool {
        self.blocks.contains_key(&pos)
    }

    /// Current number of placed blocks. O(1), so it is safe to poll for the
    /// HUD every frame.
    #[must_use]
    pub fn active_block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Iterate over all placed blocks, in no particular order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.values()
    }
}
