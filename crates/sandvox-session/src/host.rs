//! Boundary traits for the rendering host.

use glam::Vec3;
use sandvox_world::Block;

/// Opaque identity of an instantiated scene object.
///
/// The host picks the numbering; the session only stores and returns these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RenderHandle(u64);

impl RenderHandle {
    /// Create a handle from the host's own numbering.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// A hover hit-test result reported by the rendering host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverHit {
    /// World position of the hovered block instance.
    pub position: Vec3,
    /// Unit axis-aligned normal of the hit cube face.
    pub normal: Vec3,
}

/// Rendering host callback surface consumed by the session.
///
/// The host owns everything visual. The session hands it blocks to
/// materialize and handles to drop, and asks which block instance the
/// pointer is currently on.
pub trait SceneHost {
    /// The block instance currently under the pointer, if any.
    fn hovered(&self) -> Option<HoverHit>;

    /// Materialize a placed block; the returned handle identifies the scene
    /// object for later disposal.
    fn instantiate(&mut self, block: &Block) -> RenderHandle;

    /// Drop the scene object behind a handle.
    fn dispose(&mut self, handle: RenderHandle);
}
