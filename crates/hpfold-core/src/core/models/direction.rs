use rand::Rng;
use rand::distributions::{Distribution, Standard};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A turn taken at one bond of the chain, relative to the current heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Straight,
    Right,
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Invalid direction '{0}'. Expected one of 'L', 'S', or 'R'.")]
pub struct ParseDirectionError(pub String);

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::Left, Direction::Straight, Direction::Right];

    /// The turn that undoes this one when the chain is walked backwards.
    #[inline]
    pub fn inverse(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Straight => Direction::Straight,
            Direction::Right => Direction::Left,
        }
    }

    pub fn code(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Straight => 'S',
            Direction::Right => 'R',
        }
    }

    pub fn from_code(code: char) -> Result<Self, ParseDirectionError> {
        match code.to_ascii_uppercase() {
            'L' => Ok(Direction::Left),
            'S' => Ok(Direction::Straight),
            'R' => Ok(Direction::Right),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }

    /// Parses a compact turn string such as `"LSRRL"`. Whitespace is ignored.
    pub fn parse_turns(s: &str) -> Result<Vec<Direction>, ParseDirectionError> {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .map(Direction::from_code)
            .collect()
    }

    pub fn format_turns(turns: &[Direction]) -> String {
        turns.iter().map(|d| d.code()).collect()
    }
}

impl Distribution<Direction> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Accepts the one-letter code or the full name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "l" | "left" => Ok(Direction::Left),
            "s" | "straight" => Ok(Direction::Straight),
            "r" | "right" => Ok(Direction::Right),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}
