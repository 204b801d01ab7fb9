//! Line commands accepted by the console driver.
use std::str::FromStr;

use heroes_core::Position;

/// One-step movement directions. North is up the screen (`y - 1`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Step(Direction),
    /// Pointer move straight to a cell.
    Goto(Position),
    /// Pointer click in pixels; resolved to a cell with the tile size.
    Click { px: i32, py: i32 },
    Hover(Position),
    Map,
    Stats,
    Log,
    Camps,
    Json,
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let lowered = input.trim().to_lowercase();
        let parts: Vec<&str> = lowered.split_whitespace().collect();
        let Some((&head, args)) = parts.split_first() else {
            return Err(ParseCommandError::Empty);
        };

        let command = match head {
            "n" | "north" | "up" => Command::Step(Direction::North),
            "s" | "south" | "down" => Command::Step(Direction::South),
            "e" | "east" | "right" => Command::Step(Direction::East),
            "w" | "west" | "left" => Command::Step(Direction::West),
            "goto" | "g" => {
                let (x, y) = pair(args).ok_or(ParseCommandError::Usage("goto X Y"))?;
                Command::Goto(Position::new(x, y))
            }
            "click" => {
                let (px, py) = pair(args).ok_or(ParseCommandError::Usage("click PX PY"))?;
                Command::Click { px, py }
            }
            "hover" => {
                let (x, y) = pair(args).ok_or(ParseCommandError::Usage("hover X Y"))?;
                Command::Hover(Position::new(x, y))
            }
            "map" | "m" => Command::Map,
            "stats" | "i" => Command::Stats,
            "log" => Command::Log,
            "camps" => Command::Camps,
            "json" => Command::Json,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(ParseCommandError::Unknown(other.to_owned())),
        };

        Ok(command)
    }
}

fn pair(args: &[&str]) -> Option<(i32, i32)> {
    match args {
        [a, b] => Some((a.parse().ok()?, b.parse().ok()?)),
        _ => None,
    }
}

pub const HELP: &str = "\
Commands:
  n s e w (or up/down/left/right)  step one cell
  goto X Y                         move straight to a cell
  click PX PY                      move to the cell under a pixel
  hover X Y                        inspect a cell
  map | stats | log | camps        show the map, hero, recent log, camps
  json                             dump the hero as JSON
  help | quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_steps_in_every_spelling() {
        for (input, direction) in [
            ("n", Direction::North),
            ("UP", Direction::North),
            (" south ", Direction::South),
            ("right", Direction::East),
            ("w", Direction::West),
        ] {
            assert_eq!(input.parse::<Command>(), Ok(Command::Step(direction)));
        }
    }

    #[test]
    fn parses_pointer_commands() {
        assert_eq!(
            "goto 13 1".parse::<Command>(),
            Ok(Command::Goto(Position::new(13, 1)))
        );
        assert_eq!(
            "click 40 -3".parse::<Command>(),
            Ok(Command::Click { px: 40, py: -3 })
        );
        assert_eq!(
            "hover 15 3".parse::<Command>(),
            Ok(Command::Hover(Position::new(15, 3)))
        );
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!("".parse::<Command>(), Err(ParseCommandError::Empty));
        assert_eq!(
            "fly".parse::<Command>(),
            Err(ParseCommandError::Unknown("fly".to_owned()))
        );
        assert_eq!(
            "goto 3".parse::<Command>(),
            Err(ParseCommandError::Usage("goto X Y"))
        );
        assert_eq!(
            "click a b".parse::<Command>(),
            Err(ParseCommandError::Usage("click PX PY"))
        );
    }

    #[test]
    fn north_moves_up_the_screen() {
        assert_eq!(Direction::North.delta(), (0, -1));
        assert_eq!(Direction::East.delta(), (1, 0));
    }
}
