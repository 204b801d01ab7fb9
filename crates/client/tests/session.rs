use heroes_client::{ClientConfig, Command, Flow, Session};
use heroes_core::{FeatureKind, GameConfig, MapLayout, Position, Tile};

fn classic_session() -> Session {
    Session::new(GameConfig::default(), &MapLayout::classic(), 5, 32).unwrap()
}

fn run_script(session: &mut Session, script: &str) -> String {
    let mut output = Vec::new();
    session.run(script.as_bytes(), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn scripted_walk_reports_each_move() {
    let mut session = classic_session();
    let output = run_script(&mut session, "e\nn\nfly\ngoto 14 2\nquit\ns\n");

    assert!(output.contains("The hero is in position. Exploration begins!"));
    assert!(output.contains("Moved to (9, 6)\nOn Grassland terrain.\nNow at (9, 6)."));
    assert!(output.contains("Moved to (9, 5)"));
    assert!(output.contains("? unknown command 'fly'"));
    assert!(output.contains("Cannot move to (14, 2) - Water is impassable!"));
    assert!(output.ends_with("Farewell.\n"));

    // Input after quit is never read.
    assert_eq!(session.state().hero.position(), Position::new(9, 5));
    assert_eq!(session.state().nonce, 2);
}

#[test]
fn click_resolves_pixels_to_cells() {
    let mut session = classic_session();

    // (13 * 32 + 5, 1 * 32 + 31) lands in the treasure cell.
    let (text, flow) = session.execute(Command::Click { px: 421, py: 63 }).unwrap();
    assert_eq!(flow, Flow::Continue);
    assert!(text.contains("Opened a treasure chest!"));
    assert_eq!(session.state().hero.position(), Position::new(13, 1));
    assert_eq!(
        session.state().world.tile(Position::new(13, 1)),
        Some(Tile::PLAIN)
    );

    let log_len = session.state().hero.log().len();
    let (text, _) = session.execute(Command::Click { px: -4, py: 10 }).unwrap();
    assert_eq!(text, "Click at (-4, 10) is outside the map.");
    assert_eq!(session.state().hero.log().len(), log_len);
}

#[test]
fn hover_only_previews() {
    let mut session = classic_session();
    let before = session.state().clone();

    let (text, _) = session.execute(Command::Hover(Position::new(10, 6))).unwrap();
    assert_eq!(text, "(10, 6): Library (passable)");
    assert_eq!(session.hover(), Some(Position::new(10, 6)));

    let (map, _) = session.execute(Command::Map).unwrap();
    assert!(map.contains("[L]"));
    assert!(map.contains('@'));

    session.execute(Command::Hover(Position::new(40, 40))).unwrap();
    assert_eq!(session.hover(), None);
    assert_eq!(session.state(), &before);
}

#[test]
fn json_dumps_the_hero() {
    let mut session = classic_session();
    let (text, _) = session.execute(Command::Json).unwrap();

    let hero: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(hero["name"], "Elrath");
    assert_eq!(hero["position"]["x"], 8);
    assert_eq!(hero["resources"]["gold"], 2450);
}

#[test]
fn camps_shrink_as_they_fall() {
    let mut session = classic_session();
    let (before, _) = session.execute(Command::Camps).unwrap();
    assert_eq!(before.lines().count(), 3);

    session.execute(Command::Goto(Position::new(5, 4))).unwrap();
    let (after, _) = session.execute(Command::Camps).unwrap();
    assert_eq!(after.lines().count(), 2);
    assert!(!after.contains("Goblin"));
    assert_ne!(
        session.state().world.tile(Position::new(5, 4)),
        Some(FeatureKind::MonsterCamp.into())
    );
}

#[test]
fn loads_content_from_a_data_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("maps")).unwrap();
    std::fs::write(
        dir.path().join("maps").join("pond.ron"),
        r#"(
            dimensions: (width: 4, height: 4),
            blocks: [(terrain: Water, min: (x: 1, y: 1), max: (x: 2, y: 2))],
            features: [(feature: Arena, position: (x: 3, y: 3))],
        )"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[hero]\nstart = { x = 0, y = 0 }\n",
    )
    .unwrap();

    let client = ClientConfig {
        data_dir: Some(dir.path().to_path_buf()),
        map: "pond".to_owned(),
        seed: Some(1),
        log_window: Some(3),
        ..ClientConfig::default()
    };
    let mut session = Session::from_client_config(&client).unwrap();

    let (text, _) = session.execute(Command::Goto(Position::new(3, 3))).unwrap();
    assert!(text.contains("Won the arena challenge!"));

    let (log, _) = session.execute(Command::Log).unwrap();
    assert_eq!(log.lines().count(), 3);
}
