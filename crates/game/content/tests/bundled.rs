use heroes_content::{ContentFactory, MapLoader};
use heroes_core::{GameConfig, GameState, MapLayout};

#[test]
fn bundled_config_matches_defaults() {
    let config = ContentFactory::bundled().load_config().unwrap();
    assert_eq!(config, GameConfig::default());
}

#[test]
fn bundled_classic_map_matches_builtin_layout() {
    let layout = ContentFactory::bundled().load_map("classic").unwrap();
    assert_eq!(layout, MapLayout::classic());
}

#[test]
fn bundled_content_builds_the_classic_game() {
    let factory = ContentFactory::bundled();
    let config = factory.load_config().unwrap();
    let layout = factory.load_map("classic").unwrap();

    let state = GameState::new(&config, &layout, 42).unwrap();
    assert_eq!(state, GameState::classic(42));
    assert!(factory.map_names().unwrap().contains(&"classic".to_owned()));
}

#[test]
fn map_written_to_disk_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("islet.ron");
    std::fs::write(
        &path,
        r#"(
            dimensions: (width: 3, height: 3),
            base: Water,
            blocks: [(terrain: Plain, min: (x: 1, y: 1), max: (x: 1, y: 1))],
            features: [(feature: Port, position: (x: 1, y: 1))],
        )"#,
    )
    .unwrap();

    let layout = MapLoader::load(&path).unwrap();
    assert_eq!(layout.features.len(), 1);
    assert!(layout.camps.is_empty());
}
