use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use blockscan_core::{Icon, IconError};
use serde::Deserialize;

use super::types::TextureId;

/// A texture handle. Each catalog entry is its own allocation, so two keys
/// with the same icon name are still different textures.
#[derive(Debug)]
pub struct Texture {
    pub id: TextureId,
    pub key: String,
    pub icon: Option<String>,
}

impl Icon for Texture {
    fn icon_name(&self) -> Result<&str, IconError> {
        self.icon
            .as_deref()
            .ok_or_else(|| IconError::Unnamed(self.key.clone()))
    }
}

#[derive(Default, Clone, Debug)]
pub struct TextureCatalog {
    pub textures: Vec<Arc<Texture>>,
    pub by_key: HashMap<String, TextureId>,
}

impl TextureCatalog {
    pub fn new() -> Self {
        Self {
            textures: Vec::new(),
            by_key: HashMap::new(),
        }
    }

    pub fn get_id(&self, key: &str) -> Option<TextureId> {
        self.by_key.get(key).copied()
    }

    pub fn get(&self, id: TextureId) -> Option<&Arc<Texture>> {
        self.textures.get(id.0 as usize)
    }

    pub fn by_key(&self, key: &str) -> Option<&Arc<Texture>> {
        self.get_id(key).and_then(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: TexturesConfig = toml::from_str(toml_str)?;
        let mut catalog = TextureCatalog::new();
        let mut entries: Vec<(String, TextureEntry)> = cfg.textures.into_iter().collect();
        // HashMap iteration order is nondeterministic; sort keys so TextureId assignment is stable.
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        for (key, entry) in entries {
            let icon = match entry {
                TextureEntry::Icon(name) => Some(name),
                TextureEntry::Detail { icon } => icon,
            };
            let id = TextureId(u16::try_from(catalog.textures.len())?);
            catalog.by_key.insert(key.clone(), id);
            catalog.textures.push(Arc::new(Texture { id, key, icon }));
        }
        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

// --- Config ---

#[derive(Deserialize)]
pub struct TexturesConfig {
    #[serde(default)]
    pub textures: HashMap<String, TextureEntry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
pub enum TextureEntry {
    // Simple: stone = "minecraft:stone"
    Icon(String),
    // Detailed: broken = { icon = "..." }, icon may be left out
    Detail {
        #[serde(default)]
        icon: Option<String>,
    },
}
