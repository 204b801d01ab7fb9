//! Tile-event dispatch.
//!
//! One exhaustive `match` over [`Tile`] decides what stepping on a cell does.
//! Consumed features (treasure, resources, camps) are cleared here; the
//! revisitable ones (library, arena, port, ruins) are left in place.

use crate::config::RewardTables;
use crate::env::{FeatureKind, GameEnv, RngOracle, TerrainKind, Tile, choose, compute_seed};
use crate::state::{GameState, MonsterCamp, Position, ResourceKind};

/// What happened when the hero arrived on a tile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileEvent {
    /// Plain terrain: nothing but a description.
    Terrain { terrain: TerrainKind },
    Town {
        gold: u32,
        skill: String,
        rank: u32,
    },
    Treasure {
        artifact: Option<String>,
        gold: u32,
    },
    Resource {
        kind: ResourceKind,
        amount: u32,
    },
    MonsterCamp {
        camp: MonsterCamp,
        /// True when the cell had no registry entry and the default camp stood in.
        fallback: bool,
        experience: u64,
        loot: Option<String>,
    },
    Library { spell: Option<String> },
    Arena { experience: u64, bonus: u32 },
    Port,
    Ruins { artifact: Option<String> },
}

/// Per-move source of roll seeds.
///
/// Each draw gets its own context index so an event can make several
/// independent rolls.
pub(super) struct Rolls<'a> {
    rng: &'a dyn RngOracle,
    game_seed: u64,
    nonce: u64,
    context: u32,
}

impl<'a> Rolls<'a> {
    pub(super) fn new(rng: &'a dyn RngOracle, game_seed: u64, nonce: u64) -> Self {
        Self {
            rng,
            game_seed,
            nonce,
            context: 0,
        }
    }

    fn next_seed(&mut self) -> u64 {
        let seed = compute_seed(self.game_seed, self.nonce, self.context);
        self.context += 1;
        seed
    }

    fn pick(&mut self, pool: &[String]) -> Option<String> {
        let seed = self.next_seed();
        choose(self.rng, seed, pool).cloned()
    }

    fn amount(&mut self, min: u32, max: u32) -> u32 {
        let seed = self.next_seed();
        self.rng.range(seed, min, max)
    }

    fn chance(&mut self, percent: u32) -> bool {
        let seed = self.next_seed();
        self.rng.roll_d100(seed) <= percent
    }
}

/// Fires the event of the tile at `position` exactly once.
pub(super) fn dispatch(
    state: &mut GameState,
    env: &GameEnv<'_>,
    position: Position,
    rolls: &mut Rolls<'_>,
) -> TileEvent {
    let rewards = &env.config().rewards;
    let Some(tile) = state.world.tile(position) else {
        // Moves are validated before dispatch, so this cell always exists.
        return TileEvent::Terrain {
            terrain: TerrainKind::Plain,
        };
    };

    tracing::debug!(%position, code = %tile.code(), "dispatching tile event");

    match tile {
        Tile::Terrain(terrain) => {
            state
                .hero
                .log
                .push(format!("On {} terrain.", tile.name()));
            TileEvent::Terrain { terrain }
        }
        Tile::Feature(FeatureKind::Town) => visit_town(state, rewards),
        Tile::Feature(FeatureKind::Treasure) => collect_treasure(state, rewards, position, rolls),
        Tile::Feature(FeatureKind::Resource) => collect_resource(state, rewards, position, rolls),
        Tile::Feature(FeatureKind::MonsterCamp) => fight_camp(state, rewards, position, rolls),
        Tile::Feature(FeatureKind::Library) => {
            let spell = rolls.pick(&rewards.library_spells);
            if let Some(spell) = &spell {
                state.hero.spells.push(spell.clone());
                state
                    .hero
                    .log
                    .push(format!("Studied at the library and learned {spell}!"));
            }
            TileEvent::Library { spell }
        }
        Tile::Feature(FeatureKind::Arena) => {
            let hero = &mut state.hero;
            let (experience, bonus) = (rewards.arena_experience, rewards.arena_skill_bonus);
            hero.primary.raise_all(bonus);
            hero.gain_experience(experience);
            hero.log.push(format!(
                "Won the arena challenge! All attributes +{bonus}, gained {experience} experience!"
            ));
            TileEvent::Arena { experience, bonus }
        }
        Tile::Feature(FeatureKind::Port) => {
            state
                .hero
                .log
                .push("Reached the port. Ships may sail from here.");
            TileEvent::Port
        }
        Tile::Feature(FeatureKind::Ruins) => {
            let artifact = rolls.pick(&rewards.ruins_artifacts);
            if let Some(artifact) = &artifact {
                state.hero.artifacts.push(artifact.clone());
                state
                    .hero
                    .log
                    .push(format!("Unearthed {artifact} in the ruins!"));
            }
            TileEvent::Ruins { artifact }
        }
    }
}

fn visit_town(state: &mut GameState, rewards: &RewardTables) -> TileEvent {
    let hero = &mut state.hero;
    let gold = rewards.town_gold;
    let skill = rewards.town_skill.clone();

    hero.resources.add(ResourceKind::Gold, gold);
    let rank = hero.add_skill(&skill);
    hero.log
        .push(format!("Visited the town! Gold +{gold}, trained in {skill}!"));

    TileEvent::Town { gold, skill, rank }
}

fn collect_treasure(
    state: &mut GameState,
    rewards: &RewardTables,
    position: Position,
    rolls: &mut Rolls<'_>,
) -> TileEvent {
    let artifact = rolls.pick(&rewards.treasure_artifacts);
    let gold = rolls.amount(rewards.treasure_gold.min, rewards.treasure_gold.max);

    let hero = &mut state.hero;
    hero.resources.add(ResourceKind::Gold, gold);
    match &artifact {
        Some(artifact) => {
            hero.artifacts.push(artifact.clone());
            hero.log.push(format!(
                "Opened a treasure chest! Found {artifact} and {gold} gold!"
            ));
        }
        None => hero
            .log
            .push(format!("Opened a treasure chest! Found {gold} gold!")),
    }
    state.world.grid.clear_feature(position);

    TileEvent::Treasure { artifact, gold }
}

fn collect_resource(
    state: &mut GameState,
    rewards: &RewardTables,
    position: Position,
    rolls: &mut Rolls<'_>,
) -> TileEvent {
    let last = (ResourceKind::GATHERABLE.len() - 1) as u32;
    let kind = ResourceKind::GATHERABLE[rolls.amount(0, last) as usize];
    let amount = rolls.amount(rewards.resource_amount.min, rewards.resource_amount.max);

    state.hero.resources.add(kind, amount);
    state
        .hero
        .log
        .push(format!("Gathered resources! Got {amount} {kind}!"));
    state.world.grid.clear_feature(position);

    TileEvent::Resource { kind, amount }
}

fn fight_camp(
    state: &mut GameState,
    rewards: &RewardTables,
    position: Position,
    rolls: &mut Rolls<'_>,
) -> TileEvent {
    let (camp, fallback) = match state.world.camps.get(position) {
        Some(camp) => (camp.clone(), false),
        None => {
            tracing::warn!(%position, "monster camp without registry entry, using default camp");
            (rewards.default_camp.clone(), true)
        }
    };
    tracing::info!(creature = %camp.creature, count = camp.count, %position, "camp encountered");

    // Combat is not simulated: the hero always wins.
    let hero = &mut state.hero;
    let experience = u64::from(camp.experience());
    hero.gain_experience(experience);
    hero.resources.add(ResourceKind::Gold, camp.reward_gold);
    hero.log.push(format!(
        "Defeated the {} army! Gained {} gold and {experience} experience!",
        camp.creature, camp.reward_gold
    ));

    let loot = if rolls.chance(rewards.camp_drop_percent) {
        rolls.pick(&rewards.camp_artifacts)
    } else {
        None
    };
    if let Some(artifact) = &loot {
        hero.artifacts.push(artifact.clone());
        hero.log
            .push(format!("Captured the spoils of war! Obtained {artifact}!"));
    }

    state.world.take_camp(position);

    TileEvent::MonsterCamp {
        camp,
        fallback,
        experience,
        loot,
    }
}
