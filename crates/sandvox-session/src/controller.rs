//! Session controller: owns the world and routes input events.

use std::fmt::Write as _;

use hashbrown::HashMap;
use sandvox_core::{BlockCatalog, BlockKind, Result};
use sandvox_world::{BlockInstanceId, TerrainStore};
use tracing::info;

use crate::config::SessionConfig;
use crate::edit::{EditEngine, EditOutcome};
use crate::events::SessionEvent;
use crate::host::{RenderHandle, SceneHost};

/// What the event loop should do after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionSignal {
    /// Keep running.
    Continue,
    /// Terminate the session.
    Quit,
}

/// Owns configuration, catalog, terrain, and the player's selection, and
/// dispatches input events to the edit engine.
pub struct WorldController {
    config: SessionConfig,
    catalog: BlockCatalog,
    store: TerrainStore,
    edit: EditEngine,
    selected: BlockKind,
    cursor_locked: bool,
    /// Scene handles for live block instances; the store itself never
    /// references the renderer.
    handles: HashMap<BlockInstanceId, RenderHandle>,
}

impl WorldController {
    /// Validate the configuration and generate the initial world.
    ///
    /// Configuration errors are fatal here, before any generation output is
    /// visible; no event is accepted until generation has completed.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let catalog = BlockCatalog::builtin();
        for role in [
            config.world.surface_block,
            config.world.subsurface_block,
            config.world.foundation_block,
        ] {
            catalog.definition_of(role)?;
        }

        let store = TerrainStore::generate(&config.world)?;
        let selected = config.world.surface_block;
        Ok(Self {
            config,
            catalog,
            store,
            edit: EditEngine::new(),
            selected,
            cursor_locked: true,
            handles: HashMap::new(),
        })
    }

    /// Instantiate every existing block in the scene host.
    ///
    /// Called once after construction, before the event loop starts.
    pub fn sync_scene(&mut self, host: &mut dyn SceneHost) {
        for block in self.store.blocks() {
            let handle = host.instantiate(block);
            self.handles.insert(block.id, handle);
        }
        info!(
            "scene synchronized: {} blocks",
            self.store.active_block_count()
        );
    }

    /// Route one input event.
    ///
    /// Place and remove resolve the current hover through the scene host,
    /// drive the edit engine, and mirror the outcome back into the host.
    pub fn handle_event(&mut self, event: SessionEvent, host: &mut dyn SceneHost) -> SessionSignal {
        match event {
            SessionEvent::PlaceRequested => {
                let hover = host.hovered();
                if let EditOutcome::Placed(block) =
                    self.edit.place(&mut self.store, hover.as_ref(), self.selected)
                {
                    let handle = host.instantiate(&block);
                    self.handles.insert(block.id, handle);
                }
            }
            SessionEvent::RemoveRequested => {
                let hover = host.hovered();
                if let EditOutcome::Removed(block) =
                    self.edit.remove(&mut self.store, hover.as_ref())
                {
                    if let Some(handle) = self.handles.remove(&block.id) {
                        host.dispose(handle);
                    }
                }
            }
            SessionEvent::SelectSlot(slot) => self.select_slot(slot),
            SessionEvent::ToggleCursorLock => {
                self.cursor_locked = !self.cursor_locked;
            }
            SessionEvent::Quit => return SessionSignal::Quit,
        }
        SessionSignal::Continue
    }

    /// Select the given kind directly.
    pub fn select_block(&mut self, kind: BlockKind) {
        self.selected = kind;
    }

    /// Select by hotkey slot, 1-based over the catalog's kind order.
    /// Out-of-range slots are ignored.
    pub fn select_slot(&mut self, slot: usize) {
        if slot == 0 {
            return;
        }
        if let Some(kind) = self.catalog.kinds().nth(slot - 1) {
            self.selected = kind;
        }
    }

    /// Currently selected block kind.
    #[must_use]
    pub const fn selected_block(&self) -> BlockKind {
        self.selected
    }

    /// Whether pointer-lock is active.
    #[must_use]
    pub const fn cursor_locked(&self) -> bool {
        self.cursor_locked
    }

    /// The session configuration.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The block catalog.
    #[must_use]
    pub const fn catalog(&self) -> &BlockCatalog {
        &self.catalog
    }

    /// Read access to the terrain store.
    #[must_use]
    pub const fn store(&self) -> &TerrainStore {
        &self.store
    }

    /// Live block counter line for the HUD.
    #[must_use]
    pub fn status_text(&self) -> String {
        format!("Blocks: {}", self.store.active_block_count())
    }

    /// Hotkey legend with a marker on the selected kind.
    #[must_use]
    pub fn instruction_text(&self) -> String {
        let mut line = String::from("Left click: build  |  Right click: remove  |");
        for (index, kind) in self.catalog.kinds().enumerate() {
            let marker = if kind == self.selected { ">" } else { " " };
            let _ = write!(line, "  [{}] {}{}", index + 1, marker, kind.name());
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HoverHit;
    use glam::Vec3;
    use sandvox_world::WorldConfig;

    /// Host double with scripted hover and counted scene mutations.
    #[derive(Default)]
    struct TestHost {
        hover: Option<HoverHit>,
        next_handle: u64,
        spawned: usize,
        disposed: usize,
    }

    impl TestHost {
        fn point_at(&mut self, position: Vec3, normal: Vec3) {
            self.hover = Some(HoverHit { position, normal });
        }
    }

    impl SceneHost for TestHost {
        fn hovered(&self) -> Option<HoverHit> {
            self.hover
        }

        fn instantiate(&mut self, _block: &sandvox_world::Block) -> RenderHandle {
            self.spawned += 1;
            self.next_handle += 1;
            RenderHandle::new(self.next_handle)
        }

        fn dispose(&mut self, _handle: RenderHandle) {
            self.disposed += 1;
        }
    }

    /// A 4x4 chunk that is exactly one floor layer at y = 0.
    fn flat_session() -> WorldController {
        let config = SessionConfig {
            world: WorldConfig {
                chunk_size: 4,
                chunk_height: 2,
                octaves: 1,
                amplitude: 0.0,
                ..WorldConfig::default()
            },
            ..SessionConfig::default()
        };
        WorldController::new(config).unwrap()
    }

    #[test]
    fn construction_generates_before_events() {
        let controller = flat_session();
        assert_eq!(controller.store().active_block_count(), 16);
        assert_eq!(controller.status_text(), "Blocks: 16");
    }

    #[test]
    fn invalid_config_is_fatal_at_startup() {
        let config = SessionConfig {
            world: WorldConfig {
                chunk_size: 0,
                ..WorldConfig::default()
            },
            ..SessionConfig::default()
        };
        assert!(WorldController::new(config).is_err());
    }

    #[test]
    fn scene_sync_instantiates_every_block() {
        let mut controller = flat_session();
        let mut host = TestHost::default();

        controller.sync_scene(&mut host);
        assert_eq!(host.spawned, 16);
    }

    #[test]
    fn place_event_adds_a_block_and_a_scene_object() {
        let mut controller = flat_session();
        let mut host = TestHost::default();
        controller.sync_scene(&mut host);

        host.point_at(Vec3::ZERO, Vec3::Y);
        let signal = controller.handle_event(SessionEvent::PlaceRequested, &mut host);

        assert_eq!(signal, SessionSignal::Continue);
        assert_eq!(controller.store().active_block_count(), 17);
        assert_eq!(host.spawned, 17);
        assert!(controller.store().block_at(Vec3::new(0.0, 1.0, 0.0)).is_some());
    }

    #[test]
    fn place_without_hover_is_ignored() {
        let mut controller = flat_session();
        let mut host = TestHost::default();
        controller.sync_scene(&mut host);

        let _ = controller.handle_event(SessionEvent::PlaceRequested, &mut host);
        assert_eq!(controller.store().active_block_count(), 16);
        assert_eq!(host.spawned, 16);
    }

    #[test]
    fn remove_event_disposes_the_scene_object() {
        let mut controller = flat_session();
        let mut host = TestHost::default();
        controller.sync_scene(&mut host);

        // Stack a block on the floor, then remove it again.
        host.point_at(Vec3::ZERO, Vec3::Y);
        let _ = controller.handle_event(SessionEvent::PlaceRequested, &mut host);
        host.point_at(Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
        let _ = controller.handle_event(SessionEvent::RemoveRequested, &mut host);

        assert_eq!(controller.store().active_block_count(), 16);
        assert_eq!(host.disposed, 1);
    }

    #[test]
    fn floor_removal_is_refused() {
        let mut controller = flat_session();
        let mut host = TestHost::default();
        controller.sync_scene(&mut host);

        host.point_at(Vec3::ZERO, Vec3::Y);
        let _ = controller.handle_event(SessionEvent::RemoveRequested, &mut host);

        assert_eq!(controller.store().active_block_count(), 16);
        assert_eq!(host.disposed, 0);
    }

    #[test]
    fn slot_selection_follows_catalog_order() {
        let mut controller = flat_session();
        assert_eq!(controller.selected_block(), BlockKind::Grass);

        let mut host = TestHost::default();
        let _ = controller.handle_event(SessionEvent::SelectSlot(3), &mut host);
        assert_eq!(controller.selected_block(), BlockKind::Stone);

        // Out-of-range and zero slots keep the current selection.
        let _ = controller.handle_event(SessionEvent::SelectSlot(9), &mut host);
        assert_eq!(controller.selected_block(), BlockKind::Stone);
        let _ = controller.handle_event(SessionEvent::SelectSlot(0), &mut host);
        assert_eq!(controller.selected_block(), BlockKind::Stone);
    }

    #[test]
    fn placed_blocks_use_the_selection() {
        let mut controller = flat_session();
        let mut host = TestHost::default();
        controller.sync_scene(&mut host);

        controller.select_block(BlockKind::Brick);
        host.point_at(Vec3::ZERO, Vec3::Y);
        let _ = controller.handle_event(SessionEvent::PlaceRequested, &mut host);

        let placed = controller.store().block_at(Vec3::new(0.0, 1.0, 0.0)).unwrap();
        assert_eq!(placed.kind, BlockKind::Brick);
    }

    #[test]
    fn instruction_text_marks_the_selection() {
        let mut controller = flat_session();
        controller.select_slot(2);

        let text = controller.instruction_text();
        assert!(text.contains("[2] >dirt"));
        assert!(text.contains("[1]  grass"));
    }

    #[test]
    fn toggle_and_quit_signals() {
        let mut controller = flat_session();
        let mut host = TestHost::default();

        assert!(controller.cursor_locked());
        let _ = controller.handle_event(SessionEvent::ToggleCursorLock, &mut host);
        assert!(!controller.cursor_locked());

        let signal = controller.handle_event(SessionEvent::Quit, &mut host);
        assert_eq!(signal, SessionSignal::Quit);
    }
}
