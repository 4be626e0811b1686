//! Place/remove edits derived from hover hit-tests.

use sandvox_core::{BlockKind, GridPos};
use sandvox_world::{Block, TerrainStore};
use tracing::debug;

use crate::host::HoverHit;

/// Highest layer that counts as protected floor; cells at or below this can
/// never be removed.
const FLOOR_LEVEL: i32 = 0;

/// Outcome of an edit request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// A block was created.
    Placed(Block),
    /// A block was evicted.
    Removed(Block),
    /// Nothing changed: hover miss, occupied target, stale reference, or
    /// floor protection.
    Ignored,
}

/// Stateless translator from hover hit-tests to store mutations.
///
/// Each request is independent; there is no selection or drag mode between
/// events.
#[derive(Clone, Copy, Debug, Default)]
pub struct EditEngine;

impl EditEngine {
    /// Create an edit engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Place a block of `kind` against the hovered face.
    ///
    /// A missed hover or an occupied target cell is silently ignored.
    pub fn place(
        self,
        store: &mut TerrainStore,
        hover: Option<&HoverHit>,
        kind: BlockKind,
    ) -> EditOutcome {
        let Some(hit) = hover else {
            return EditOutcome::Ignored;
        };
        match store.place_adjacent(hit.position, hit.normal, kind) {
            Some(block) => {
                debug!("placed {:?} at {:?}", block.kind, block.pos.to_ivec3());
                EditOutcome::Placed(block)
            }
            None => EditOutcome::Ignored,
        }
    }

    /// Remove the hovered block, if it sits above the protected floor.
    ///
    /// A missed hover, a floor cell, or a stale reference is silently
    /// ignored.
    pub fn remove(self, store: &mut TerrainStore, hover: Option<&HoverHit>) -> EditOutcome {
        let Some(hit) = hover else {
            return EditOutcome::Ignored;
        };
        let pos = GridPos::from_world(hit.position);
        if pos.y <= FLOOR_LEVEL {
            return EditOutcome::Ignored;
        }
        match store.remove(pos) {
            Some(block) => {
                debug!("removed {:?} at {:?}", block.kind, block.pos.to_ivec3());
                EditOutcome::Removed(block)
            }
            None => EditOutcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn hover_at(x: f32, y: f32, z: f32) -> HoverHit {
        HoverHit {
            position: Vec3::new(x, y, z),
            normal: Vec3::Y,
        }
    }

    /// Store with single blocks at (0,0,0) and (0,1,0).
    fn two_block_store() -> TerrainStore {
        let mut store = TerrainStore::empty();
        store
            .place_adjacent(Vec3::new(0.0, -1.0, 0.0), Vec3::Y, BlockKind::Stone)
            .unwrap();
        store
            .place_adjacent(Vec3::new(0.0, 0.0, 0.0), Vec3::Y, BlockKind::Grass)
            .unwrap();
        store
    }

    #[test]
    fn hover_miss_is_ignored() {
        let mut store = two_block_store();
        let engine = EditEngine::new();

        assert_eq!(
            engine.place(&mut store, None, BlockKind::Dirt),
            EditOutcome::Ignored
        );
        assert_eq!(engine.remove(&mut store, None), EditOutcome::Ignored);
        assert_eq!(store.active_block_count(), 2);
    }

    #[test]
    fn place_creates_the_adjacent_block() {
        let mut store = two_block_store();
        let engine = EditEngine::new();

        let outcome = engine.place(&mut store, Some(&hover_at(0.0, 1.0, 0.0)), BlockKind::Wood);
        match outcome {
            EditOutcome::Placed(block) => {
                assert_eq!(block.pos, GridPos::new(0, 2, 0));
                assert_eq!(block.kind, BlockKind::Wood);
            }
            other => panic!("expected placement, got {other:?}"),
        }
        assert_eq!(store.active_block_count(), 3);
    }

    #[test]
    fn place_into_occupied_cell_is_ignored() {
        let mut store = two_block_store();
        let engine = EditEngine::new();

        // The face above (0,0,0) is (0,1,0), which is occupied.
        let outcome = engine.place(&mut store, Some(&hover_at(0.0, 0.0, 0.0)), BlockKind::Wood);
        assert_eq!(outcome, EditOutcome::Ignored);
        assert_eq!(store.active_block_count(), 2);
    }

    #[test]
    fn floor_layer_cannot_be_removed() {
        let mut store = two_block_store();
        let engine = EditEngine::new();

        let outcome = engine.remove(&mut store, Some(&hover_at(0.0, 0.0, 0.0)));
        assert_eq!(outcome, EditOutcome::Ignored);
        assert_eq!(store.active_block_count(), 2);

        let below = engine.remove(&mut store, Some(&hover_at(0.0, -3.0, 0.0)));
        assert_eq!(below, EditOutcome::Ignored);
    }

    #[test]
    fn blocks_above_the_floor_are_removable() {
        let mut store = two_block_store();
        let engine = EditEngine::new();

        let outcome = engine.remove(&mut store, Some(&hover_at(0.0, 1.0, 0.0)));
        match outcome {
            EditOutcome::Removed(block) => assert_eq!(block.pos, GridPos::new(0, 1, 0)),
            other => panic!("expected removal, got {other:?}"),
        }
        assert_eq!(store.active_block_count(), 1);
    }

    #[test]
    fn stale_remove_is_ignored() {
        let mut store = two_block_store();
        let engine = EditEngine::new();

        // Hover reported for a cell that was already cleared.
        let outcome = engine.remove(&mut store, Some(&hover_at(5.0, 5.0, 5.0)));
        assert_eq!(outcome, EditOutcome::Ignored);
        assert_eq!(store.active_block_count(), 2);
    }
}
