//! Collaborator traits implemented by whatever hosts the blocks.

use std::sync::Arc;

use crate::error::{FaceError, IconError, ScanError};

/// Cube face, in engine query order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    Down = 0,
    Up = 1,
    North = 2,
    South = 3,
    West = 4,
    East = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Down,
        Face::Up,
        Face::North,
        Face::South,
        Face::West,
        Face::East,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Face::Down => "down",
            Face::Up => "up",
            Face::North => "north",
            Face::South => "south",
            Face::West => "west",
            Face::East => "east",
        }
    }
}

/// Texture icon handle.
///
/// Icons are compared by identity only: two handles are the same texture when
/// they point at the same allocation (`Arc::ptr_eq`), never because their
/// names match.
pub trait Icon {
    fn icon_name(&self) -> Result<&str, IconError>;
}

/// A block type as exposed by the host.
pub trait Entity {
    type Icon: Icon;

    fn unlocalized_name(&self) -> &str;

    /// Runtime type name, e.g. the implementing class.
    fn type_name(&self) -> &str;

    /// Texture bound to `face` for the given metadata `variant`.
    /// `Ok(None)` means the face has no texture.
    fn face_icon(&self, face: Face, variant: u32) -> Result<Option<Arc<Self::Icon>>, FaceError>;
}

/// One slot of a registry. Registries may hold things that are not blocks.
pub trait RegistryEntry {
    type Entity: Entity;

    fn as_entity(&self) -> Option<&Self::Entity>;
}

pub type EntityOf<R> = <<R as Registry>::Entry as RegistryEntry>::Entity;

/// Read-only registry iterated once per scan, in registration order.
pub trait Registry {
    type Entry: RegistryEntry;

    fn entries(&self) -> impl Iterator<Item = Result<&Self::Entry, ScanError>>;

    fn id_of(&self, entity: &<Self::Entry as RegistryEntry>::Entity) -> Result<u32, ScanError>;

    fn name_of<'a>(
        &'a self,
        entity: &'a <Self::Entry as RegistryEntry>::Entity,
    ) -> Result<&'a str, ScanError>;
}
