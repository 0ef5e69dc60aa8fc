use blockscan_blocks::config::{BlockDef, BlocksConfig, EntryKind, TexturesDef};
use blockscan_blocks::{BlockRegistry, Entry, FaceTexture, TextureCatalog};
use blockscan_core::{Category, Entity, Face, FaceError, Registry, RegistryEntry, ScanLog, scan};
use proptest::prelude::*;

const TEXTURES: &str = r#"
    [textures]
    stone = "stone"
    log_top = "log_oak_top"
    log_side = "log_oak"
    glass = "glass"
    glass_twin = "glass"
    nameless = {}
"#;

const BLOCKS: &str = r#"
    [[blocks]]
    name = "air"
    id = 0
    class = "BlockAir"

    [[blocks]]
    name = "stone"
    class = "BlockStone"
    textures = "stone"

    [[blocks]]
    name = "stick"
    kind = "item"

    [[blocks]]
    name = "log"
    id = 17
    class = "BlockOldLog"
    textures = { top = "log_top", bottom = "log_top", side = "log_side" }

    [[blocks]]
    name = "thaumcraft:pane"
    textures = { all = "glass", up = "glass_twin" }

    [[blocks]]
    name = "broken"
    textures = { all = "stone", east = "missing" }

    [[blocks]]
    name = "odd"
    textures = "nameless"

    [[blocks]]
    name = "torch"
    textures = { side = "stone" }
"#;

fn registry() -> BlockRegistry {
    let textures = TextureCatalog::from_toml_str(TEXTURES).unwrap();
    let cfg: BlocksConfig = toml::from_str(BLOCKS).unwrap();
    BlockRegistry::from_configs(textures, cfg).expect("registry")
}

fn block<'a>(reg: &'a BlockRegistry, name: &str) -> &'a blockscan_blocks::BlockType {
    reg.get(name).and_then(|e| e.as_entity()).expect("block entry")
}

#[test]
fn names_ids_and_defaults() {
    let reg = registry();
    assert_eq!(reg.len(), 8);
    assert_eq!(reg.block_count(), 7);
    assert_eq!(reg.id_by_name("minecraft:air"), Some(0));
    assert_eq!(reg.id_by_name("minecraft:stone"), Some(1));
    assert_eq!(reg.id_by_name("minecraft:stick"), Some(2));
    assert_eq!(reg.id_by_name("minecraft:log"), Some(17));
    assert_eq!(reg.id_by_name("thaumcraft:pane"), Some(18));

    let stone = block(&reg, "minecraft:stone");
    assert_eq!(stone.unlocalized_name(), "tile.stone");
    assert_eq!(stone.type_name(), "BlockStone");
    assert_eq!(block(&reg, "thaumcraft:pane").type_name(), "Block");
    assert!(matches!(reg.get("minecraft:stick"), Some(Entry::Item(_))));
}

#[test]
fn face_selectors_prefer_specific_faces() {
    let reg = registry();
    let log = block(&reg, "minecraft:log");
    let up = log.face_icon(Face::Up, 0).unwrap().unwrap();
    let north = log.face_icon(Face::North, 0).unwrap().unwrap();
    assert_eq!(up.key, "log_top");
    assert_eq!(north.key, "log_side");

    let torch = block(&reg, "minecraft:torch");
    assert!(torch.face_icon(Face::Up, 0).unwrap().is_none());
    assert!(torch.face_icon(Face::West, 0).unwrap().is_some());
}

#[test]
fn undefined_texture_faults_on_query() {
    let reg = registry();
    let broken = block(&reg, "minecraft:broken");
    assert!(matches!(broken.faces[Face::East.index()], FaceTexture::Unresolved(_)));
    assert!(matches!(
        broken.face_icon(Face::East, 0),
        Err(FaceError::UndefinedTexture { ref key }) if key == "missing"
    ));
    assert_eq!(
        reg.unresolved_faces(),
        vec![("minecraft:broken", Face::East, "missing")]
    );
}

#[test]
fn registry_trait_resolves_ids_and_names() {
    let reg = registry();
    let log = block(&reg, "minecraft:log");
    assert_eq!(reg.id_of(log).unwrap(), 17);
    assert_eq!(reg.name_of(log).unwrap(), "minecraft:log");
    assert_eq!(reg.entries().count(), 8);
    assert_eq!(reg.entries().filter_map(|e| e.unwrap().as_entity()).count(), 7);
}

#[test]
fn full_scan_classifies_every_block() {
    let reg = registry();
    let report = scan(&reg, &mut ScanLog::disabled()).unwrap();
    assert_eq!(report.total(), 7);
    assert_eq!(report.lines(Category::Standard), ["minecraft:stone (BlockStone)"]);
    assert_eq!(
        report.lines(Category::Directional),
        ["minecraft:log (BlockOldLog)", "thaumcraft:pane (Block)"]
    );
    assert_eq!(
        report.lines(Category::CustomRender),
        ["minecraft:air (BlockAir)", "minecraft:torch (Block)"]
    );
    // An undefined texture key and an unnamed texture both fault on their face.
    assert_eq!(
        report.lines(Category::Error),
        ["minecraft:broken (Block)", "minecraft:odd (Block)"]
    );
    assert!(report.lines(Category::Unknown).is_empty());
}

#[test]
fn empty_definitions_give_empty_registry() {
    assert!(BlockRegistry::new().is_empty());
    let cfg: BlocksConfig = toml::from_str("").unwrap();
    let reg = BlockRegistry::from_configs(TextureCatalog::new(), cfg).unwrap();
    assert!(reg.is_empty());
    assert!(reg.textures.is_empty());
    assert!(!registry().is_empty());
    assert!(!registry().textures.is_empty());
}

#[test]
fn duplicate_names_and_ids_are_rejected() {
    let dup_name: BlocksConfig = toml::from_str(
        r#"
        [[blocks]]
        name = "stone"
        [[blocks]]
        name = "minecraft:stone"
    "#,
    )
    .unwrap();
    assert!(BlockRegistry::from_configs(TextureCatalog::new(), dup_name).is_err());

    let dup_id: BlocksConfig = toml::from_str(
        r#"
        [[blocks]]
        name = "a"
        id = 3
        [[blocks]]
        name = "b"
        id = 3
    "#,
    )
    .unwrap();
    assert!(BlockRegistry::from_configs(TextureCatalog::new(), dup_id).is_err());
}

#[test]
fn texture_ids_follow_sorted_keys() {
    let cat = TextureCatalog::from_toml_str(TEXTURES).unwrap();
    let keys: Vec<&str> = cat.textures.iter().map(|t| t.key.as_str()).collect();
    assert_eq!(
        keys,
        ["glass", "glass_twin", "log_side", "log_top", "nameless", "stone"]
    );
    for (i, t) in cat.textures.iter().enumerate() {
        assert_eq!(t.id.0 as usize, i);
    }
}

fn def(name: String, id: Option<u32>) -> BlockDef {
    BlockDef {
        name,
        id,
        kind: EntryKind::Block,
        unlocalized: None,
        class: None,
        textures: Some(TexturesDef::All("stone".into())),
    }
}

proptest! {
    // Auto ids never collide with explicit ones and preserve registration order.
    #[test]
    fn ids_are_unique(explicit in prop::collection::vec(prop::option::of(0u32..64), 1..24)) {
        let mut seen = std::collections::HashSet::new();
        let defs: Vec<BlockDef> = explicit
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let id = id.filter(|v| seen.insert(*v));
                def(format!("b{i}"), id)
            })
            .collect();
        let cfg = BlocksConfig { namespace: Some("prop".into()), blocks: defs };
        let textures = TextureCatalog::from_toml_str(TEXTURES).unwrap();
        match BlockRegistry::from_configs(textures, cfg) {
            Ok(reg) => {
                let ids: Vec<u32> = reg
                    .entries()
                    .map(|e| reg.id_of(e.unwrap().as_entity().unwrap()).unwrap())
                    .collect();
                let unique: std::collections::HashSet<_> = ids.iter().collect();
                prop_assert_eq!(unique.len(), ids.len());
                let names: Vec<String> = reg.entries().map(|e| e.unwrap().name().to_string()).collect();
                let expected: Vec<String> = (0..explicit.len()).map(|i| format!("prop:b{i}")).collect();
                prop_assert_eq!(names, expected);
            }
            // An explicit id may land on one handed out automatically earlier.
            Err(e) => prop_assert!(e.to_string().contains("already taken")),
        }
    }
}
