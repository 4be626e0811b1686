//! Static registry of block definitions.

use hashbrown::HashMap;

use crate::error::{Error, Result};
use crate::types::{BlockDefinition, BlockKind};

/// Immutable mapping from block kind to its definition.
///
/// Built once at startup. The enumeration and the catalog are kept in
/// lock-step: a lookup miss is a programming error, surfaced as
/// [`Error::UnknownBlockKind`] during validation rather than mid-session.
#[derive(Debug, Clone, Default)]
pub struct BlockCatalog {
    definitions: HashMap<BlockKind, BlockDefinition>,
}

impl BlockCatalog {
    /// The built-in catalog covering every block kind.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::default();
        for definition in [
            BlockDefinition::GRASS,
            BlockDefinition::DIRT,
            BlockDefinition::STONE,
            BlockDefinition::WOOD,
            BlockDefinition::BRICK,
        ] {
            catalog.definitions.insert(definition.kind, definition);
        }
        catalog
    }

    /// Build a catalog from explicit definitions.
    ///
    /// Fails if a kind is defined twice or any kind in [`BlockKind::ALL`]
    /// is left without a definition.
    pub fn from_definitions(definitions: impl IntoIterator<Item = BlockDefinition>) -> Result<Self> {
        let mut catalog = Self::default();
        for definition in definitions {
            if catalog
                .definitions
                .insert(definition.kind, definition)
                .is_some()
            {
                return Err(Error::InvalidConfig(format!(
                    "duplicate catalog definition for block kind {:?}",
                    definition.kind
                )));
            }
        }
        catalog.validate()?;
        Ok(catalog)
    }

    /// Verify that every block kind has exactly one definition.
    pub fn validate(&self) -> Result<()> {
        for kind in BlockKind::ALL {
            self.definition_of(kind)?;
        }
        Ok(())
    }

    /// Look up the definition for a kind.
    pub fn definition_of(&self, kind: BlockKind) -> Result<&BlockDefinition> {
        self.definitions
            .get(&kind)
            .ok_or(Error::UnknownBlockKind(kind))
    }

    /// Registered kinds, in hotkey-slot order.
    pub fn kinds(&self) -> impl Iterator<Item = BlockKind> + '_ {
        BlockKind::ALL
            .into_iter()
            .filter(|kind| self.definitions.contains_key(kind))
    }

    /// Number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether no kinds are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_kind() {
        let catalog = BlockCatalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.len(), BlockKind::ALL.len());
        for kind in BlockKind::ALL {
            let definition = catalog.definition_of(kind).unwrap();
            assert_eq!(definition.kind, kind);
        }
    }

    #[test]
    fn kinds_follow_slot_order() {
        let catalog = BlockCatalog::builtin();
        let kinds: Vec<_> = catalog.kinds().collect();
        assert_eq!(kinds, BlockKind::ALL.to_vec());
    }

    #[test]
    fn missing_definition_is_rejected() {
        let result = BlockCatalog::from_definitions([
            BlockDefinition::GRASS,
            BlockDefinition::DIRT,
            BlockDefinition::STONE,
        ]);
        assert!(matches!(result, Err(Error::UnknownBlockKind(_))));
    }

    #[test]
    fn duplicate_definition_is_rejected() {
        let result =
            BlockCatalog::from_definitions([BlockDefinition::GRASS, BlockDefinition::GRASS]);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn empty_catalog_lookup_fails() {
        let catalog = BlockCatalog::default();
        assert!(matches!(
            catalog.definition_of(BlockKind::Grass),
            Err(Error::UnknownBlockKind(BlockKind::Grass))
        ));
        assert!(catalog.is_empty());
    }
}
