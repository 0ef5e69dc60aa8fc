//! Block and texture registry loaded from TOML definitions.
#![forbid(unsafe_code)]

pub mod config;
pub mod registry;
pub mod texture;
pub mod types;

pub use registry::{BlockRegistry, BlockType, Entry, FaceTexture};
pub use texture::{Texture, TextureCatalog};
pub use types::{BlockId, TextureId};
