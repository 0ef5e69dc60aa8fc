use blockscan_core::Face;
use serde::Deserialize;

// Top-level blocks config file
#[derive(Deserialize, Debug)]
pub struct BlocksConfig {
    // Namespace for names given without one; `minecraft` if absent.
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub blocks: Vec<BlockDef>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct BlockDef {
    pub name: String,
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub kind: EntryKind,
    #[serde(default)]
    pub unlocalized: Option<String>,
    // Runtime type name reported in listings
    #[serde(default)]
    pub class: Option<String>,
    // No textures at all means every face is untextured (custom rendered)
    #[serde(default)]
    pub textures: Option<TexturesDef>,
}

// Registries also carry non-block objects; scans skip them.
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    #[default]
    Block,
    Item,
}

// Either a single texture key for every face, or a per-face table
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum TexturesDef {
    All(String),
    Faces(FaceTextures),
}

// Most specific wins: down/up/north/... over bottom/top/side over all
#[derive(Deserialize, Debug, Clone, Default)]
pub struct FaceTextures {
    #[serde(default)]
    pub all: Option<String>,
    #[serde(default)]
    pub top: Option<String>,
    #[serde(default)]
    pub bottom: Option<String>,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(default)]
    pub down: Option<String>,
    #[serde(default)]
    pub up: Option<String>,
    #[serde(default)]
    pub north: Option<String>,
    #[serde(default)]
    pub south: Option<String>,
    #[serde(default)]
    pub west: Option<String>,
    #[serde(default)]
    pub east: Option<String>,
}

impl TexturesDef {
    pub fn key_for(&self, face: Face) -> Option<&str> {
        match self {
            TexturesDef::All(key) => Some(key.as_str()),
            TexturesDef::Faces(f) => f.key_for(face),
        }
    }
}

impl FaceTextures {
    pub fn key_for(&self, face: Face) -> Option<&str> {
        let (specific, role) = match face {
            Face::Down => (&self.down, &self.bottom),
            Face::Up => (&self.up, &self.top),
            Face::North => (&self.north, &self.side),
            Face::South => (&self.south, &self.side),
            Face::West => (&self.west, &self.side),
            Face::East => (&self.east, &self.side),
        };
        specific
            .as_deref()
            .or(role.as_deref())
            .or(self.all.as_deref())
    }
}
