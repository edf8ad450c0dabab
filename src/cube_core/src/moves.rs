//! Move tokens and their text grammar.
//!
//! A token is a base letter from `U D F B L R M` followed by nothing
//! (clockwise quarter turn seen from that face), `'` (counterclockwise) or
//! `2` (half turn). `M` turns the same way as `L`.

use std::{
    fmt::{self, Display},
    ops::{Deref, DerefMut},
    str::FromStr,
};

use itertools::Itertools;
use thiserror::Error;

use crate::state::Face;

/// The layer a move turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseMove {
    U,
    D,
    F,
    B,
    L,
    R,
    M,
}

impl BaseMove {
    pub const ALL: [Self; 7] = {
        use BaseMove::*;
        let v = [U, D, F, B, L, R, M];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The outer face turned along with the layer. `M` has none.
    #[must_use]
    pub const fn face(self) -> Option<Face> {
        match self {
            BaseMove::U => Some(Face::U),
            BaseMove::D => Some(Face::D),
            BaseMove::F => Some(Face::F),
            BaseMove::B => Some(Face::B),
            BaseMove::L => Some(Face::L),
            BaseMove::R => Some(Face::R),
            BaseMove::M => None,
        }
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            BaseMove::U => 'U',
            BaseMove::D => 'D',
            BaseMove::F => 'F',
            BaseMove::B => 'B',
            BaseMove::L => 'L',
            BaseMove::R => 'R',
            BaseMove::M => 'M',
        }
    }

    fn from_letter(letter: char) -> Option<Self> {
        Self::ALL.into_iter().find(|base| base.letter() == letter)
    }
}

impl From<Face> for BaseMove {
    fn from(face: Face) -> Self {
        match face {
            Face::U => BaseMove::U,
            Face::D => BaseMove::D,
            Face::F => BaseMove::F,
            Face::B => BaseMove::B,
            Face::L => BaseMove::L,
            Face::R => BaseMove::R,
        }
    }
}

impl Display for BaseMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Represents the direction which to turn a layer. `Prime` represents
/// a counterclockwise quarter turn, and `Double` a half turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Normal,
    Prime,
    Double,
}

impl Direction {
    pub const ALL: [Self; 3] = [Direction::Normal, Direction::Prime, Direction::Double];

    /// Clockwise quarter turns this direction amounts to.
    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Direction::Normal => 1,
            Direction::Double => 2,
            Direction::Prime => 3,
        }
    }

    /// The direction equal to `turns` clockwise quarter turns, or `None` when
    /// that is a whole rotation.
    #[must_use]
    pub const fn from_quarter_turns(turns: u8) -> Option<Self> {
        match turns % 4 {
            1 => Some(Direction::Normal),
            2 => Some(Direction::Double),
            3 => Some(Direction::Prime),
            _ => None,
        }
    }

    #[must_use]
    pub const fn invert(self) -> Self {
        match self {
            Direction::Normal => Direction::Prime,
            Direction::Prime => Direction::Normal,
            Direction::Double => Direction::Double,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Normal => write!(f, ""),
            Direction::Prime => write!(f, "'"),
            Direction::Double => write!(f, "2"),
        }
    }
}

/// A base layer equipped with a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveToken {
    pub base: BaseMove,
    pub dir: Direction,
}

/// A shorthand macro that can be used to construct `MoveToken`s.
///
/// ```
/// use cube_core::cube_move;
///
/// let r_prime = cube_move!(R, Prime);
/// let u = cube_move!(U);
/// assert_eq!(r_prime.to_string(), "R'");
/// assert_eq!(u.to_string(), "U");
/// ```
#[macro_export]
macro_rules! cube_move {
    ($base:ident) => {
        $crate::cube_move!($base, Normal)
    };
    ($base:ident, $dir:ident) => {
        $crate::moves::MoveToken {
            base: $crate::moves::BaseMove::$base,
            dir: $crate::moves::Direction::$dir,
        }
    };
}

impl MoveToken {
    /// Every token, grouped by base letter.
    pub const ALL: [Self; 21] = Self::table::<21>();

    /// Every outer face turn, which excludes `M`.
    pub const FACE_TURNS: [Self; 18] = Self::table::<18>();

    const fn table<const N: usize>() -> [Self; N] {
        let mut table = [cube_move!(U); N];
        let mut i = 0;
        while i < N {
            table[i] = Self::new(BaseMove::ALL[i / 3], Direction::ALL[i % 3]);
            i += 1;
        }
        table
    }

    #[must_use]
    pub const fn new(base: BaseMove, dir: Direction) -> Self {
        Self { base, dir }
    }

    #[must_use]
    pub const fn invert(self) -> Self {
        Self {
            base: self.base,
            dir: self.dir.invert(),
        }
    }

    /// Whether applying `other` right after `self` undoes it.
    #[must_use]
    pub fn cancels(self, other: Self) -> bool {
        self.invert() == other
    }
}

impl Display for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base, self.dir)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("Empty move token")]
    Empty,
    #[error("Unknown base move `{letter}` in `{token}`; expected one of U D F B L R M")]
    UnknownBase { token: String, letter: char },
    #[error("Invalid suffix `{suffix}` in `{token}`; expected nothing, `'` or `2`")]
    InvalidSuffix { token: String, suffix: String },
}

impl FromStr for MoveToken {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars.next().ok_or(MoveParseError::Empty)?;
        let base = BaseMove::from_letter(letter).ok_or_else(|| MoveParseError::UnknownBase {
            token: s.to_owned(),
            letter,
        })?;
        let dir = match chars.as_str() {
            "" => Direction::Normal,
            "'" => Direction::Prime,
            "2" => Direction::Double,
            suffix => {
                return Err(MoveParseError::InvalidSuffix {
                    token: s.to_owned(),
                    suffix: suffix.to_owned(),
                });
            }
        };
        Ok(Self::new(base, dir))
    }
}

/// An ordered list of tokens, used for scrambles, solutions and user input.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MoveSequence(Vec<MoveToken>);

impl MoveSequence {
    #[must_use]
    pub fn invert(&self) -> Self {
        self.iter().rev().map(|token| token.invert()).collect()
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<MoveToken> {
        self.0
    }
}

impl From<Vec<MoveToken>> for MoveSequence {
    fn from(tokens: Vec<MoveToken>) -> Self {
        Self(tokens)
    }
}

impl FromIterator<MoveToken> for MoveSequence {
    fn from_iter<I: IntoIterator<Item = MoveToken>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MoveSequence {
    type Item = MoveToken;
    type IntoIter = std::vec::IntoIter<MoveToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Whitespace separated tokens. The empty string is the empty sequence.
impl FromStr for MoveSequence {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse::<MoveToken>).collect()
    }
}

impl Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter().join(" "))
    }
}

impl Deref for MoveSequence {
    type Target = Vec<MoveToken>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveSequence {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
