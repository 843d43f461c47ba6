//! Combat domain: attack kinds and input-boundary parsing.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

/// The three committed attacks a combatant can swing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackKind {
    Slash,
    Stab,
    Overhead,
}

impl AttackKind {
    pub const ALL: [AttackKind; 3] = [AttackKind::Slash, AttackKind::Stab, AttackKind::Overhead];

    /// Identifier used in config files and input bindings
    pub fn id(self) -> &'static str {
        match self {
            AttackKind::Slash => "slash",
            AttackKind::Stab => "stab",
            AttackKind::Overhead => "overhead",
        }
    }

    /// Display name shown on the status indicator
    pub fn display_name(self) -> &'static str {
        match self {
            AttackKind::Slash => "Slash",
            AttackKind::Stab => "Stab",
            AttackKind::Overhead => "Overhead",
        }
    }

    /// Pick a kind uniformly at random.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for AttackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Returned when an input source names an attack that does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAttackKindError {
    pub input: String,
}

impl fmt::Display for ParseAttackKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown attack kind '{}' (expected slash, stab or overhead)",
            self.input
        )
    }
}

impl std::error::Error for ParseAttackKindError {}

impl FromStr for AttackKind {
    type Err = ParseAttackKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.id().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseAttackKindError {
                input: s.to_string(),
            })
    }
}
