use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Residue {
    Hydrophobic, // '1'
    Polar,       // any other character
}

impl Residue {
    pub fn from_char(c: char) -> Self {
        if c == '1' {
            Residue::Hydrophobic
        } else {
            Residue::Polar
        }
    }

    #[inline]
    pub fn is_hydrophobic(self) -> bool {
        matches!(self, Residue::Hydrophobic)
    }
}

/// A chain of residues in HP notation.
///
/// Every character of the source string is one residue; `'1'` marks a hydrophobic
/// residue and anything else a polar one, so parsing cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct HpSequence {
    residues: Vec<Residue>,
}

impl HpSequence {
    pub fn new(residues: Vec<Residue>) -> Self {
        Self { residues }
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    pub fn get(&self, index: usize) -> Option<Residue> {
        self.residues.get(index).copied()
    }

    #[inline]
    pub fn is_hydrophobic(&self, index: usize) -> bool {
        self.residues[index].is_hydrophobic()
    }

    pub fn hydrophobic_count(&self) -> usize {
        self.residues.iter().filter(|r| r.is_hydrophobic()).count()
    }

    /// Number of turns a fold needs to be scored against this sequence.
    pub fn bond_count(&self) -> usize {
        self.residues.len().saturating_sub(1)
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.residues.iter().rev().copied().collect())
    }
}

impl From<&str> for HpSequence {
    fn from(s: &str) -> Self {
        Self::new(s.chars().map(Residue::from_char).collect())
    }
}

impl FromStr for HpSequence {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for HpSequence {
    /// Writes the canonical form: `1` for hydrophobic, `0` for polar.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for residue in &self.residues {
            let c = if residue.is_hydrophobic() { '1' } else { '0' };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
