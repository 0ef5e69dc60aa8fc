use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use blockscan_core::{Entity, Face, FaceError, Registry, RegistryEntry, ScanError};

use super::config::{BlockDef, BlocksConfig, EntryKind, TexturesDef};
use super::texture::{Texture, TextureCatalog};
use super::types::{BlockId, DEFAULT_CLASS, DEFAULT_NAMESPACE};

/// What a face query will answer, resolved once at load time.
#[derive(Clone, Debug)]
pub enum FaceTexture {
    Empty,
    Bound(Arc<Texture>),
    // Key named in blocks.toml but missing from the catalog; querying it faults.
    Unresolved(String),
}

#[derive(Clone, Debug)]
pub struct BlockType {
    pub name: String,
    pub unlocalized: String,
    pub class: String,
    pub faces: [FaceTexture; 6],
}

impl Entity for BlockType {
    type Icon = Texture;

    fn unlocalized_name(&self) -> &str {
        &self.unlocalized
    }

    fn type_name(&self) -> &str {
        &self.class
    }

    // Metadata variants are not modelled; every variant sees the same faces.
    fn face_icon(&self, face: Face, _variant: u32) -> Result<Option<Arc<Texture>>, FaceError> {
        match &self.faces[face.index()] {
            FaceTexture::Empty => Ok(None),
            FaceTexture::Bound(t) => Ok(Some(Arc::clone(t))),
            FaceTexture::Unresolved(key) => Err(FaceError::UndefinedTexture { key: key.clone() }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ItemType {
    pub name: String,
}

#[derive(Clone, Debug)]
pub enum Entry {
    Block(BlockType),
    Item(ItemType),
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Entry::Block(b) => &b.name,
            Entry::Item(i) => &i.name,
        }
    }
}

impl RegistryEntry for Entry {
    type Entity = BlockType;

    fn as_entity(&self) -> Option<&BlockType> {
        match self {
            Entry::Block(b) => Some(b),
            Entry::Item(_) => None,
        }
    }
}

#[derive(Clone, Debug)]
struct Slot {
    id: BlockId,
    entry: Entry,
}

/// Entries in registration order, addressable by id and by name.
#[derive(Default, Clone, Debug)]
pub struct BlockRegistry {
    pub textures: TextureCatalog,
    slots: Vec<Slot>,
    by_name: HashMap<String, usize>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        Self {
            textures: TextureCatalog::new(),
            slots: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn block_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s.entry, Entry::Block(_)))
            .count()
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.by_name.get(name).map(|&i| &self.slots[i].entry)
    }

    pub fn id_by_name(&self, name: &str) -> Option<BlockId> {
        self.by_name.get(name).map(|&i| self.slots[i].id)
    }

    /// `(block, face, key)` for every face bound to an undefined texture key.
    pub fn unresolved_faces(&self) -> Vec<(&str, Face, &str)> {
        let mut out = Vec::new();
        for slot in &self.slots {
            let Entry::Block(b) = &slot.entry else {
                continue;
            };
            for face in Face::ALL {
                if let FaceTexture::Unresolved(key) = &b.faces[face.index()] {
                    out.push((b.name.as_str(), face, key.as_str()));
                }
            }
        }
        out
    }

    pub fn load_from_paths(
        textures_path: impl AsRef<Path>,
        blocks_path: impl AsRef<Path>,
    ) -> Result<Self, Box<dyn Error>> {
        let textures = TextureCatalog::from_path(textures_path)?;
        let blocks_toml = fs::read_to_string(blocks_path)?;
        let blocks_cfg: BlocksConfig = toml::from_str(&blocks_toml)?;
        Self::from_configs(textures, blocks_cfg)
    }

    pub fn from_configs(
        textures: TextureCatalog,
        cfg: BlocksConfig,
    ) -> Result<Self, Box<dyn Error>> {
        let mut reg = BlockRegistry {
            textures,
            slots: Vec::new(),
            by_name: HashMap::new(),
        };
        let namespace = cfg.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE);
        let mut used_ids: HashSet<BlockId> = HashSet::new();
        let mut next_id: BlockId = 0;
        for def in cfg.blocks {
            let name = qualify(&def.name, namespace);
            if reg.by_name.contains_key(&name) {
                return Err(format!("duplicate registry name `{name}`").into());
            }
            let id = def.id.unwrap_or(next_id);
            if !used_ids.insert(id) {
                return Err(format!("registry id {id} of `{name}` is already taken").into());
            }
            next_id = next_id.max(id.saturating_add(1));

            let entry = compile_entry(&reg.textures, def, name);
            reg.by_name.insert(entry.name().to_string(), reg.slots.len());
            reg.slots.push(Slot { id, entry });
        }
        log::debug!(
            "loaded {} registry entries ({} blocks, {} textures)",
            reg.len(),
            reg.block_count(),
            reg.textures.len()
        );
        Ok(reg)
    }

    fn slot_of(&self, entity: &BlockType) -> Result<&Slot, ScanError> {
        self.by_name
            .get(&entity.name)
            .map(|&i| &self.slots[i])
            .ok_or_else(|| ScanError::Unregistered(entity.name.clone()))
    }
}

impl Registry for BlockRegistry {
    type Entry = Entry;

    fn entries(&self) -> impl Iterator<Item = Result<&Entry, ScanError>> {
        self.slots.iter().map(|s| Ok(&s.entry))
    }

    fn id_of(&self, entity: &BlockType) -> Result<BlockId, ScanError> {
        self.slot_of(entity).map(|s| s.id)
    }

    fn name_of<'a>(&'a self, entity: &'a BlockType) -> Result<&'a str, ScanError> {
        self.slot_of(entity).map(|s| s.entry.name())
    }
}

fn qualify(name: &str, namespace: &str) -> String {
    if name.contains(':') {
        name.to_string()
    } else {
        format!("{namespace}:{name}")
    }
}

fn compile_entry(textures: &TextureCatalog, def: BlockDef, name: String) -> Entry {
    match def.kind {
        EntryKind::Item => Entry::Item(ItemType { name }),
        EntryKind::Block => {
            let path = name.split_once(':').map_or(name.as_str(), |(_, p)| p);
            let unlocalized = def.unlocalized.unwrap_or_else(|| format!("tile.{path}"));
            let faces = compile_faces(textures, def.textures.as_ref(), &name);
            Entry::Block(BlockType {
                name,
                unlocalized,
                class: def.class.unwrap_or_else(|| DEFAULT_CLASS.to_string()),
                faces,
            })
        }
    }
}

fn compile_faces(
    textures: &TextureCatalog,
    def: Option<&TexturesDef>,
    block: &str,
) -> [FaceTexture; 6] {
    std::array::from_fn(|i| {
        let face = Face::ALL[i];
        let Some(key) = def.and_then(|d| d.key_for(face)) else {
            return FaceTexture::Empty;
        };
        match textures.by_key(key) {
            Some(t) => FaceTexture::Bound(Arc::clone(t)),
            None => {
                log::warn!(
                    "block `{}` face {} uses undefined texture `{}`",
                    block,
                    face.name(),
                    key
                );
                FaceTexture::Unresolved(key.to_string())
            }
        }
    })
}
