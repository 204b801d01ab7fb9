use std::fmt;

/// Discrete grid position expressed in tile coordinates.
///
/// `x` grows to the right and `y` grows downwards, matching the row-major
/// order in which the grid is stored and drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position shifted by the given delta.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Ordered name → count tally (secondary skills, army stacks).
///
/// Keeps insertion order so display lines stay stable between frames.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tally {
    entries: Vec<(String, u32)>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, count)| *count)
    }

    /// Adds `amount` to `name`, inserting it at the end when absent.
    ///
    /// Returns the new count.
    pub fn add(&mut self, name: &str, amount: u32) -> u32 {
        if let Some((_, count)) = self.entries.iter_mut().find(|(entry, _)| entry == name) {
            *count = count.saturating_add(amount);
            return *count;
        }
        self.entries.push((name.to_owned(), amount));
        amount
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for Tally {
    fn from_iter<T: IntoIterator<Item = (S, u32)>>(iter: T) -> Self {
        let mut tally = Self::new();
        for (name, count) in iter {
            let name: String = name.into();
            tally.add(&name, count);
        }
        tally
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (name, count)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}:{count}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_inserts_then_increments() {
        let mut tally = Tally::new();
        assert_eq!(tally.add("Logistics", 1), 1);
        assert_eq!(tally.add("Scouting", 1), 1);
        assert_eq!(tally.add("Logistics", 1), 2);

        assert_eq!(tally.get("Logistics"), Some(2));
        assert_eq!(tally.get("Wisdom"), None);
        assert_eq!(tally.to_string(), "Logistics:2, Scouting:1");
    }

    #[test]
    fn offset_applies_delta() {
        assert_eq!(Position::new(8, 6).offset(-1, 2), Position::new(7, 8));
    }
}
