//! Texture resolution for block skins.
//!
//! Texture loading is a one-time, cached side operation: the cache probes
//! each texture identifier at most once per session, and a failed load
//! degrades to the block's solid base color. Nothing on the edit path ever
//! waits on asset I/O or sees an asset error.

use std::path::PathBuf;
use std::sync::Arc;

use hashbrown::HashMap;
use sandvox_core::{BlockDefinition, Rgb};
use thiserror::Error;
use tracing::warn;

/// Asset loading errors.
#[derive(Error, Debug)]
pub enum AssetError {
    /// IO error while reading a texture file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Texture file exists but could not be decoded.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Decoded RGBA texture pixels.
#[derive(Debug, Clone)]
pub struct TextureData {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Tightly packed RGBA8 pixel data.
    pub rgba: Vec<u8>,
}

/// Resolves a texture identifier to pixel data.
pub trait TextureSource {
    /// Load the texture with the given identifier.
    fn load(&self, name: &str) -> Result<TextureData, AssetError>;
}

/// Loads textures from files under a root directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    /// Create a source rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TextureSource for DirSource {
    fn load(&self, name: &str) -> Result<TextureData, AssetError> {
        let image = image::open(self.root.join(name))?.to_rgba8();
        let (width, height) = image.dimensions();
        Ok(TextureData {
            width,
            height,
            rgba: image.into_raw(),
        })
    }
}

/// How the rendering host should paint a block.
#[derive(Debug, Clone)]
pub enum BlockSkin {
    /// Textured with a shared decoded image.
    Textured(Arc<TextureData>),
    /// Solid fallback color.
    Solid(Rgb),
}

/// Session-scoped texture cache.
///
/// Owned explicitly by whoever builds the scene, not a process-wide global.
/// Failed probes are cached too, so a missing file is touched once and then
/// served from the fallback path.
pub struct TextureCache<S> {
    source: S,
    entries: HashMap<String, Option<Arc<TextureData>>>,
}

impl<S: TextureSource> TextureCache<S> {
    /// Create an empty cache over the given source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            entries: HashMap::new(),
        }
    }

    /// Skin for a block definition: its texture when it resolves, the solid
    /// base color otherwise.
    pub fn skin_for(&mut self, definition: &BlockDefinition) -> BlockSkin {
        let Some(name) = definition.texture else {
            return BlockSkin::Solid(definition.base_color);
        };
        match self.texture(name) {
            Some(data) => BlockSkin::Textured(data),
            None => BlockSkin::Solid(definition.base_color),
        }
    }

    /// Cached texture lookup; probes the source on first use.
    pub fn texture(&mut self, name: &str) -> Option<Arc<TextureData>> {
        if let Some(entry) = self.entries.get(name) {
            return entry.clone();
        }
        let loaded = match self.source.load(name) {
            Ok(data) => Some(Arc::new(data)),
            Err(err) => {
                warn!("texture {name} failed to load, using solid fallback: {err}");
                None
            }
        };
        self.entries.insert(name.to_string(), loaded.clone());
        loaded
    }

    /// Number of probed identifiers, hits and failures alike.
    #[must_use]
    pub fn probed(&self) -> usize {
        self.entries.len()
    }
}
