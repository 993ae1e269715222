//! Edge symbols: one half of a picture printed along a tile edge
//!
//! Each edge carries a symbol kind and a half label. Two edges fit together
//! when they show the same kind and complementary halves.

use crate::io::configuration::SYMBOL_SEPARATOR;
use crate::io::error::{PuzzleError, Result};
use std::fmt;
use std::str::FromStr;

/// Which half of a symbol an edge shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HalfLabel {
    /// First half
    A,
    /// Second half
    B,
}

impl HalfLabel {
    /// The half that completes this one
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    const fn as_char(self) -> char {
        match self {
            Self::A => 'a',
            Self::B => 'b',
        }
    }
}

impl fmt::Display for HalfLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Name of the picture an edge shows half of
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolKind(String);

impl SymbolKind {
    /// Create a kind from its name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The kind's name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One edge of a tile: a symbol kind together with the half it shows
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeSymbol {
    kind: SymbolKind,
    half: HalfLabel,
}

impl EdgeSymbol {
    /// Create an edge symbol from its parts
    pub fn new(kind: impl Into<String>, half: HalfLabel) -> Self {
        Self {
            kind: SymbolKind::new(kind),
            half,
        }
    }

    /// Parse a `kind_half` token such as `dancer_a`
    ///
    /// # Errors
    ///
    /// Returns `PuzzleError::MalformedSymbol` if the token does not split into
    /// exactly two non-empty parts, or if the half is neither `a` nor `b`
    pub fn parse(token: &str) -> Result<Self> {
        let malformed = |reason| PuzzleError::MalformedSymbol {
            token: token.to_string(),
            reason,
        };

        let mut parts = token.split(SYMBOL_SEPARATOR);
        let (Some(kind), Some(half), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed("expected exactly one separator"));
        };

        if kind.is_empty() || half.is_empty() {
            return Err(malformed("kind and half must both be non-empty"));
        }

        let half = match half {
            "a" | "A" => HalfLabel::A,
            "b" | "B" => HalfLabel::B,
            _ => return Err(malformed("half label must be 'a' or 'b'")),
        };

        Ok(Self::new(kind, half))
    }

    /// The symbol kind
    pub const fn kind(&self) -> &SymbolKind {
        &self.kind
    }

    /// The half label
    pub const fn half(&self) -> HalfLabel {
        self.half
    }

    /// Is `other` the complementary half of this symbol?
    ///
    /// Symmetric, and never true for an edge compared with itself.
    pub fn matches(&self, other: &Self) -> bool {
        self.kind == other.kind && self.half != other.half
    }
}

impl FromStr for EdgeSymbol {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for EdgeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SYMBOL_SEPARATOR}{}", self.kind, self.half)
    }
}
