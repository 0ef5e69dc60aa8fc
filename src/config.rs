use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use blockscan_core::SessionConfig;
use serde::Deserialize;

use crate::assets;
use crate::cli::{RegistryArgs, ScanArgs};

// Optional settings file; command line flags win over every key here
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub assets: Option<PathBuf>,
    #[serde(default)]
    pub textures: Option<PathBuf>,
    #[serde(default)]
    pub blocks: Option<PathBuf>,
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
    #[serde(default)]
    pub log_file_name: Option<String>,
    #[serde(default)]
    pub host_version: Option<String>,
    #[serde(default)]
    pub json: Option<PathBuf>,
}

impl FileConfig {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let path = path.as_ref();
        let s = fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
        Self::from_toml_str(&s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryPaths {
    pub textures: PathBuf,
    pub blocks: PathBuf,
}

impl RegistryPaths {
    pub fn resolve(file: &FileConfig, args: &RegistryArgs) -> Self {
        let textures = args.textures.clone().or_else(|| file.textures.clone());
        let blocks = args.blocks.clone().or_else(|| file.blocks.clone());
        if let (Some(textures), Some(blocks)) = (&textures, &blocks) {
            return Self {
                textures: textures.clone(),
                blocks: blocks.clone(),
            };
        }
        let root = assets::resolve_assets_root(args.assets.as_deref().or(file.assets.as_deref()));
        Self {
            textures: textures.unwrap_or_else(|| assets::textures_path(&root)),
            blocks: blocks.unwrap_or_else(|| assets::blocks_path(&root)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScanSettings {
    pub registry: RegistryPaths,
    pub session: SessionConfig,
    pub json: Option<PathBuf>,
}

impl ScanSettings {
    pub fn resolve(file: FileConfig, args: &ScanArgs) -> Self {
        let registry = RegistryPaths::resolve(&file, &args.registry);
        let defaults = SessionConfig::default();
        let session = SessionConfig {
            base_dir: args
                .base_dir
                .clone()
                .or(file.base_dir)
                .unwrap_or(defaults.base_dir),
            log_file_name: args
                .log_file
                .clone()
                .or(file.log_file_name)
                .unwrap_or(defaults.log_file_name),
            host_version: args
                .host_version
                .clone()
                .or(file.host_version)
                .unwrap_or(defaults.host_version),
        };
        Self {
            registry,
            session,
            json: args.json.clone().or(file.json),
        }
    }
}
