#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct TextureId(pub u16);

pub type BlockId = u32;

/// Namespace given to registry names written without one.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Runtime type name of blocks that do not declare a `class`.
pub const DEFAULT_CLASS: &str = "Block";
