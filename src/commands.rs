use std::error::Error;

use blockscan_blocks::BlockRegistry;
use blockscan_core::{Session, export};

use crate::cli::{RegistryArgs, ScanArgs};
use crate::config::{FileConfig, RegistryPaths, ScanSettings};

fn load_registry(paths: &RegistryPaths) -> Result<BlockRegistry, Box<dyn Error>> {
    let reg = BlockRegistry::load_from_paths(&paths.textures, &paths.blocks).map_err(|e| {
        format!(
            "failed to load registry ({}, {}): {}",
            paths.textures.display(),
            paths.blocks.display(),
            e
        )
    })?;
    log::info!(
        "loaded {} registry entries ({} blocks) from {}",
        reg.len(),
        reg.block_count(),
        paths.blocks.display()
    );
    Ok(reg)
}

/// Registry problems stop the command; a failed scan only loses its report.
pub fn scan(file: FileConfig, args: ScanArgs) -> Result<(), Box<dyn Error>> {
    let settings = ScanSettings::resolve(file, &args);
    let registry = load_registry(&settings.registry)?;

    let mut session = Session::open(&settings.session);
    let outcome = session.on_ready(&registry);
    session.shutdown();

    let Some(result) = outcome else {
        log::warn!("scan aborted, no report produced");
        return Ok(());
    };
    println!("classified {} blocks", result.report.total());
    for c in blockscan_core::Category::ALL {
        println!("  {}", result.report.summary_line(c));
    }
    if let Some(path) = &settings.json {
        export::write_json(&result, path)?;
        log::info!("wrote {} block records to {}", result.records.len(), path.display());
    }
    Ok(())
}

pub fn check(file: FileConfig, args: RegistryArgs) -> Result<(), Box<dyn Error>> {
    let paths = RegistryPaths::resolve(&file, &args);
    let registry = load_registry(&paths)?;
    if registry.is_empty() {
        println!("registry defines no entries");
        return Ok(());
    }
    let unresolved = registry.unresolved_faces();
    println!(
        "{} entries, {} blocks, {} textures",
        registry.len(),
        registry.block_count(),
        registry.textures.len()
    );
    if registry.textures.is_empty() {
        println!("no textures defined, every block will be custom rendered or faulty");
    }
    if unresolved.is_empty() {
        println!("all texture references resolve");
        return Ok(());
    }
    println!("{} faces reference undefined textures:", unresolved.len());
    for (block, face, key) in &unresolved {
        println!("  {} {}: `{}`", block, face.name(), key);
    }
    Ok(())
}
