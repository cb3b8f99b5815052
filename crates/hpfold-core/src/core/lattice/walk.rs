use crate::core::models::direction::Direction;
use crate::core::models::point::LatticePoint;
use serde::{Deserialize, Serialize};

/// Position and heading of the chain at one residue.
///
/// Residue 0 sits at the origin with the heading pointing up. Each turn rotates
/// the heading first and then advances the position by one lattice unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walker {
    pub position: LatticePoint,
    pub heading: LatticePoint,
}

impl Walker {
    pub const fn start() -> Self {
        Self {
            position: LatticePoint::ORIGIN,
            heading: LatticePoint::UP,
        }
    }

    #[inline]
    pub fn step(self, direction: Direction) -> Self {
        let heading = self.heading.turn(direction);
        Self {
            position: self.position.translate(heading),
            heading,
        }
    }
}

impl Default for Walker {
    fn default() -> Self {
        Self::start()
    }
}

/// Iterator over the absolute coordinates of every residue of a turn sequence.
///
/// Yields `turns.len() + 1` points, the first of which is the origin.
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    turns: std::slice::Iter<'a, Direction>,
    walker: Option<Walker>,
    started: bool,
}

impl<'a> Walk<'a> {
    pub fn new(turns: &'a [Direction]) -> Self {
        Self {
            turns: turns.iter(),
            walker: Some(Walker::start()),
            started: false,
        }
    }
}

impl Iterator for Walk<'_> {
    type Item = LatticePoint;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return self.walker.map(|w| w.position);
        }
        let walker = self.walker?;
        match self.turns.next() {
            Some(&direction) => {
                let next = walker.step(direction);
                self.walker = Some(next);
                Some(next.position)
            }
            None => {
                self.walker = None;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match (self.started, self.walker) {
            (_, None) => 0,
            (false, Some(_)) => self.turns.len() + 1,
            (true, Some(_)) => self.turns.len(),
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Walk<'_> {}

/// Replays the first `index` turns and returns the walker at residue `index`.
///
/// Callers must ensure `index <= turns.len()`.
pub fn walker_at(turns: &[Direction], index: usize) -> Walker {
    turns[..index]
        .iter()
        .fold(Walker::start(), |walker, &d| walker.step(d))
}

/// Axis-aligned box enclosing every residue of a fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: LatticePoint,
    pub max: LatticePoint,
}

impl BoundingBox {
    pub fn of(turns: &[Direction]) -> Self {
        Walk::new(turns).fold(
            BoundingBox {
                min: LatticePoint::ORIGIN,
                max: LatticePoint::ORIGIN,
            },
            |bbox, p| BoundingBox {
                min: bbox.min.component_min(p),
                max: bbox.max.component_max(p),
            },
        )
    }

    pub fn width(&self) -> usize {
        (self.max.x - self.min.x) as usize + 1
    }

    pub fn height(&self) -> usize {
        (self.max.y - self.min.y) as usize + 1
    }

    pub fn contains(&self, p: LatticePoint) -> bool {
        (self.min.x..=self.max.x).contains(&p.x) && (self.min.y..=self.max.y).contains(&p.y)
    }
}
