//! Console session: owns the game and turns commands into engine calls.
use std::io::{BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use heroes_content::ContentFactory;
use heroes_core::{
    Env, GameConfig, GameEngine, GameError, GameState, MapLayout, MoveError, MoveOutcome, PcgRng,
    Position,
};

use crate::command::{Command, HELP};
use crate::config::ClientConfig;
use crate::view;

/// Whether the read loop keeps going after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A running game plus the presentation state around it.
pub struct Session {
    config: GameConfig,
    state: GameState,
    rng: PcgRng,
    tile_size: u32,
    hover: Option<Position>,
}

impl Session {
    pub fn new(config: GameConfig, layout: &MapLayout, seed: u64, tile_size: u32) -> Result<Self> {
        config.validate().context("Invalid game config")?;
        let state =
            GameState::new(&config, layout, seed).context("Failed to place the hero on the map")?;

        Ok(Self {
            config,
            state,
            rng: PcgRng,
            tile_size,
            hover: None,
        })
    }

    /// Loads config and map from the content directory named by `client`.
    pub fn from_client_config(client: &ClientConfig) -> Result<Self> {
        let factory = match &client.data_dir {
            Some(dir) => ContentFactory::new(dir),
            None => ContentFactory::bundled(),
        };

        let mut config = factory.load_config()?;
        if let Some(window) = client.log_window {
            config.log_window = window;
        }
        let layout = factory.load_map(&client.map)?;
        let seed = client.seed.unwrap_or_else(clock_seed);

        tracing::info!(
            data_dir = %factory.data_dir().display(),
            map = %client.map,
            seed,
            "starting session"
        );

        Self::new(config, &layout, seed, client.tile_size)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn hover(&self) -> Option<Position> {
        self.hover
    }

    /// Full screen: map, sidebar stats and the log window.
    pub fn overview(&self) -> String {
        format!(
            "{}\n{}\n\n{}",
            self.map(),
            view::render_stats(&self.state.hero),
            view::render_log(&self.state.hero, self.config.log_window)
        )
    }

    /// Runs one command and returns the text to print.
    pub fn execute(&mut self, command: Command) -> Result<(String, Flow)> {
        let text = match command {
            Command::Step(direction) => {
                let (dx, dy) = direction.delta();
                self.move_hero(|engine| engine.attempt_move(dx, dy))
            }
            Command::Goto(position) => self.move_hero(|engine| engine.attempt_move_to(position)),
            Command::Click { px, py } => {
                let cell = self
                    .state
                    .world
                    .dimensions()
                    .cell_at_pixel(px, py, self.tile_size);
                match cell {
                    Some(position) => self.move_hero(|engine| engine.attempt_move_to(position)),
                    None => format!("Click at ({px}, {py}) is outside the map."),
                }
            }
            Command::Hover(position) => {
                let preview = self.state.world.preview(position);
                self.hover = preview.tile.map(|_| position);
                view::render_preview(&preview)
            }
            Command::Map => format!("{}\n{}", self.map(), view::render_legend()),
            Command::Stats => view::render_stats(&self.state.hero),
            Command::Log => view::render_log(&self.state.hero, self.config.log_window),
            Command::Camps => view::render_camps(&self.state.world),
            Command::Json => serde_json::to_string_pretty(&self.state.hero)
                .context("Failed to serialize hero")?,
            Command::Help => HELP.to_owned(),
            Command::Quit => return Ok(("Farewell.".to_owned(), Flow::Quit)),
        };

        Ok((text, Flow::Continue))
    }

    /// Reads commands line by line until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<()> {
        writeln!(output, "{}", self.overview())?;
        writeln!(output, "Type 'help' for commands.")?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(error) => {
                    writeln!(output, "? {error}")?;
                    continue;
                }
            };

            tracing::debug!(?command, "command");
            let (text, flow) = self.execute(command)?;
            writeln!(output, "{text}")?;
            output.flush()?;

            if flow == Flow::Quit {
                break;
            }
        }

        tracing::info!(
            position = %self.state.hero.position(),
            level = self.state.hero.level(),
            moves = self.state.nonce,
            "session ended"
        );
        Ok(())
    }

    fn map(&self) -> String {
        view::render_map(&self.state.world, self.state.hero.position(), self.hover)
    }

    /// Runs one engine call and reports every log line it produced.
    fn move_hero(
        &mut self,
        attempt: impl FnOnce(&mut GameEngine<'_>) -> Result<MoveOutcome, MoveError>,
    ) -> String {
        let before = self.state.hero.log().len();

        let env = Env::new(&self.config, &self.rng).as_game_env();
        let result = attempt(&mut GameEngine::new(&mut self.state, env));

        match &result {
            Ok(outcome) => {
                tracing::info!(destination = %outcome.destination, event = ?outcome.event, "hero moved");
            }
            Err(error) => tracing::debug!(
                severity = error.severity().as_str(),
                code = error.error_code(),
                %error,
                "move refused"
            ),
        }

        let status = view::render_outcome(&result);
        let mut lines: Vec<&str> = self.state.hero.log().iter().skip(before).collect();
        if result.is_ok() {
            lines.push(&status);
        }
        lines.join("\n")
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
