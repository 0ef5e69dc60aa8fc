use std::path::{Path, PathBuf};

const BLOCKS_FILE: &str = "assets/registry/blocks.toml";
const TEXTURES_FILE: &str = "assets/registry/textures.toml";

pub fn resolve_assets_root(cli: Option<&Path>) -> PathBuf {
    // Precedence: CLI flag -> BLOCKSCAN_ASSETS env -> search nearby dirs -> CWD
    if let Some(p) = cli {
        if p.exists() {
            return p.to_path_buf();
        }
        log::warn!("assets root {} does not exist, searching", p.display());
    }
    if let Ok(p) = std::env::var("BLOCKSCAN_ASSETS") {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return pb;
        }
    }
    // Search candidates: CWD, executable dir, crate root. A binary under
    // target/<profile>/deps sits four levels below the workspace, so five
    // parents reach the assets from any build output or a nested test CWD.
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd);
    }
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            candidates.push(dir.to_path_buf());
        }
    }
    candidates.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")));

    for base in candidates {
        let mut cur = base;
        for _ in 0..5 {
            if cur.join(BLOCKS_FILE).exists() {
                return cur;
            }
            match cur.parent() {
                Some(parent) => cur = parent.to_path_buf(),
                None => break,
            }
        }
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

pub fn textures_path(root: &Path) -> PathBuf {
    root.join(TEXTURES_FILE)
}

pub fn blocks_path(root: &Path) -> PathBuf {
    root.join(BLOCKS_FILE)
}
