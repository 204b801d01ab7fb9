//! Plain-text rendering of the map, sidebar and log.
//!
//! Views only read state; nothing here mutates the game.
use heroes_core::{Hero, HoverPreview, MoveError, MoveOutcome, Position, Tile, WorldState};

/// ASCII map: one three-column cell per tile, `@` for the hero and
/// brackets around the hovered cell.
pub fn render_map(world: &WorldState, hero: Position, hover: Option<Position>) -> String {
    let header: String = (0..world.dimensions().width)
        .map(|x| format!("{:>2} ", x % 100))
        .collect();
    let mut lines = vec![format!("   {header}").trim_end().to_owned()];

    for (y, row) in world.grid.rows().enumerate() {
        let cells: String = row
            .iter()
            .enumerate()
            .map(|(x, tile)| {
                let position = Position::new(x as i32, y as i32);
                let glyph = if position == hero { '@' } else { tile.symbol() };
                if Some(position) == hover {
                    format!("[{glyph}]")
                } else {
                    format!(" {glyph} ")
                }
            })
            .collect();
        lines.push(format!("{y:>2} {cells}").trim_end().to_owned());
    }

    format!("{}\n", lines.join("\n"))
}

/// One line per tile kind: glyph and name.
pub fn render_legend() -> String {
    std::iter::once("@ Hero".to_owned())
        .chain(Tile::all().map(|tile| format!("{} {}", tile.symbol(), tile.name())))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_stats(hero: &Hero) -> String {
    hero.stats_lines().join("\n")
}

/// The newest `window` log entries, oldest first.
pub fn render_log(hero: &Hero, window: usize) -> String {
    hero.log().recent(window).join("\n")
}

pub fn render_camps(world: &WorldState) -> String {
    if world.camps.is_empty() {
        return "No monster camps remain.".to_owned();
    }
    world
        .camps
        .iter()
        .map(|(position, camp)| {
            let loot = if camp.artifact_drop { ", guards loot" } else { "" };
            format!(
                "{position} {} x{}, {} gold{loot}",
                camp.creature, camp.count, camp.reward_gold
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_preview(preview: &HoverPreview) -> String {
    match preview.tile {
        None => format!("{}: off the map", preview.position),
        Some(tile) => {
            let access = if preview.passable { "passable" } else { "impassable" };
            format!("{}: {} ({access})", preview.position, tile.name())
        }
    }
}

/// Short status line after a move attempt.
pub fn render_outcome(result: &Result<MoveOutcome, MoveError>) -> String {
    match result {
        Ok(outcome) => match outcome.level_up {
            Some(level) => format!("Now at {}. Reached level {level}.", outcome.destination),
            None => format!("Now at {}.", outcome.destination),
        },
        Err(error) => error.narration(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heroes_core::{FeatureKind, MapDimensions, MapLayout, MonsterCamp, TerrainKind};

    fn small_world() -> WorldState {
        WorldState::generate(
            &MapLayout::blank(MapDimensions::new(3, 2))
                .with_block(TerrainKind::Water, (2, 0), (2, 1))
                .with_feature(FeatureKind::Town, 0, 1)
                .with_camp(1, 1, MonsterCamp::new("Goblin", 4, 120)),
        )
    }

    #[test]
    fn map_marks_hero_and_hover() {
        let map = render_map(&small_world(), Position::new(0, 0), Some(Position::new(1, 1)));
        assert_eq!(map, "    0  1  2\n 0  @  .  ~\n 1  T [!] ~\n");
    }

    #[test]
    fn rows_keep_a_closing_hover_bracket() {
        let map = render_map(&small_world(), Position::new(1, 0), Some(Position::new(2, 1)));
        let lines: Vec<&str> = map.lines().collect();
        assert_eq!(lines, ["    0  1  2", " 0  .  @  ~", " 1  T  ! [~]"]);
    }

    #[test]
    fn camps_list_every_registry_entry() {
        assert_eq!(render_camps(&small_world()), "(1, 1) Goblin x4, 120 gold");

        let mut world = small_world();
        world.take_camp(Position::new(1, 1));
        assert_eq!(render_camps(&world), "No monster camps remain.");
    }

    #[test]
    fn preview_names_the_tile() {
        let world = small_world();
        assert_eq!(
            render_preview(&world.preview(Position::new(2, 0))),
            "(2, 0): Water (impassable)"
        );
        assert_eq!(
            render_preview(&world.preview(Position::new(0, 1))),
            "(0, 1): Town (passable)"
        );
        assert_eq!(
            render_preview(&world.preview(Position::new(5, 5))),
            "(5, 5): off the map"
        );
    }

    #[test]
    fn legend_covers_every_tile() {
        let legend = render_legend();
        assert_eq!(legend.lines().next(), Some("@ Hero"));
        assert_eq!(legend.lines().count(), 1 + Tile::all().count());
        assert!(legend.contains("~ Water"));
        assert!(legend.contains("! Monster Camp"));
    }
}
