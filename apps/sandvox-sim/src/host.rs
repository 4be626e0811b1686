//! Recording scene host used by the headless driver.

use glam::Vec3;
use hashbrown::HashSet;
use tracing::debug;

use sandvox_assets::{BlockSkin, DirSource, TextureCache};
use sandvox_core::BlockCatalog;
use sandvox_session::{HoverHit, RenderHandle, SceneHost};
use sandvox_world::Block;

/// Scene host double that records instantiations instead of rendering.
///
/// Hover is scripted: the driver points it at a cell before sending the
/// matching pointer event, standing in for the real hit-test. Skins are
/// resolved through the texture cache exactly as a renderer would, so
/// missing assets exercise the solid-color fallback.
pub struct RecordingHost {
    catalog: BlockCatalog,
    textures: TextureCache<DirSource>,
    hover: Option<HoverHit>,
    live: HashSet<RenderHandle>,
    next_handle: u64,
    spawned: usize,
    disposed: usize,
}

impl RecordingHost {
    /// Create a host resolving textures under `assets_dir`.
    pub fn new(assets_dir: &str) -> Self {
        Self {
            catalog: BlockCatalog::builtin(),
            textures: TextureCache::new(DirSource::new(assets_dir)),
            hover: None,
            live: HashSet::new(),
            next_handle: 0,
            spawned: 0,
            disposed: 0,
        }
    }

    /// Script the hover at a block's position with the given face normal.
    pub fn point_at(&mut self, position: Vec3, normal: Vec3) {
        self.hover = Some(HoverHit { position, normal });
    }

    /// Script a hover miss.
    pub fn clear_hover(&mut self) {
        self.hover = None;
    }

    /// Number of scene objects currently alive.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Total instantiations over the run.
    pub fn spawned(&self) -> usize {
        self.spawned
    }

    /// Total disposals over the run.
    pub fn disposed(&self) -> usize {
        self.disposed
    }
}

impl SceneHost for RecordingHost {
    fn hovered(&self) -> Option<HoverHit> {
        self.hover
    }

    fn instantiate(&mut self, block: &Block) -> RenderHandle {
        let skin = self
            .catalog
            .definition_of(block.kind)
            .map(|definition| self.textures.skin_for(definition));
        let painted = match skin {
            Ok(BlockSkin::Textured(_)) => "textured",
            Ok(BlockSkin::Solid(_)) => "solid",
            Err(_) => "undefined",
        };
        debug!(
            "instantiate {:?} at {:?} ({painted})",
            block.kind,
            block.pos.to_ivec3()
        );

        self.next_handle += 1;
        let handle = RenderHandle::new(self.next_handle);
        self.live.insert(handle);
        self.spawned += 1;
        handle
    }

    fn dispose(&mut self, handle: RenderHandle) {
        if self.live.remove(&handle) {
            self.disposed += 1;
        }
    }
}
