//! The facelet representation of a 3x3 cube.
//!
//! Each face stores its nine stickers row-major, seen from outside the cube.
//! U is read with B along its top edge, D with F along its top edge, and the
//! four sides with U along their top edge. This is the orientation used by the
//! common URFDLB facelet-string format, which lets [`CubeState::to_facelet_string`]
//! be a plain concatenation.

use std::{fmt, ops::Index};

use itertools::Itertools;

/// A face of the cube, in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    U,
    D,
    F,
    B,
    L,
    R,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [U, D, F, B, L, R];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The four side faces, each followed by its right-hand neighbour.
    pub const SIDES: [Self; 4] = [Face::F, Face::R, Face::B, Face::L];

    /// Face order of the URFDLB facelet string.
    pub const URFDLB: [Self; 6] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

    /// The color this face shows on a solved cube.
    #[must_use]
    pub const fn home_color(self) -> Color {
        Color::ALL[self as usize]
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
            Face::L => 'L',
            Face::R => 'R',
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A sticker color. Declared in the same order as [`Face`] so that a face and
/// its home color share an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Orange,
    Red,
}

impl Color {
    pub const ALL: [Self; 6] = {
        use Color::*;
        let v = [White, Yellow, Green, Blue, Orange, Red];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The face this color sits on when the cube is solved.
    #[must_use]
    pub const fn home_face(self) -> Face {
        Face::ALL[self as usize]
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Orange => 'O',
            Color::Red => 'R',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A full cube configuration: 6 faces of 9 stickers.
///
/// There is no way to edit stickers directly. New states only come out of
/// the move engine, so every value is reachable from solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubeState {
    pub(crate) faces: [[Color; 9]; 6],
}

impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}

impl CubeState {
    #[must_use]
    pub const fn solved() -> Self {
        let mut faces = [[Color::White; 9]; 6];
        let mut i = 0;
        while i < faces.len() {
            faces[i] = [Color::ALL[i]; 9];
            i += 1;
        }
        Self { faces }
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(|face| face.iter().all_equal())
    }

    #[must_use]
    pub fn face(&self, face: Face) -> &[Color; 9] {
        &self.faces[face as usize]
    }

    /// # Panics
    ///
    /// Panics if `index` is not in `0..9`.
    #[must_use]
    pub fn facelet(&self, face: Face, index: usize) -> Color {
        self.faces[face as usize][index]
    }

    #[must_use]
    pub fn center(&self, face: Face) -> Color {
        self.faces[face as usize][4]
    }

    /// How many stickers of each color the cube shows, indexed by `Color as usize`.
    #[must_use]
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for &color in self.faces.iter().flatten() {
            counts[color as usize] += 1;
        }
        counts
    }

    #[must_use]
    pub fn has_valid_color_counts(&self) -> bool {
        self.color_counts() == [9; 6]
    }

    /// The 54 letter facelet string in URFDLB face order, where each letter
    /// names the home face of the sticker's color.
    #[must_use]
    pub fn to_facelet_string(&self) -> String {
        Face::URFDLB
            .iter()
            .flat_map(|&face| self[face])
            .map(|color| color.home_face().letter())
            .collect()
    }

    fn net_row(&self, face: Face, row: usize) -> String {
        self[face][row * 3..row * 3 + 3]
            .iter()
            .map(|color| color.letter())
            .join(" ")
    }
}

impl Index<Face> for CubeState {
    type Output = [Color; 9];

    fn index(&self, index: Face) -> &Self::Output {
        &self.faces[index as usize]
    }
}

/// Prints the cube unfolded: U above F, then L F R B in a row, then D.
impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = " ".repeat(6);
        for row in 0..3 {
            writeln!(f, "{indent}{}", self.net_row(Face::U, row))?;
        }
        for row in 0..3 {
            writeln!(
                f,
                "{}",
                [Face::L, Face::F, Face::R, Face::B]
                    .iter()
                    .map(|&face| self.net_row(face, row))
                    .join(" ")
            )?;
        }
        for row in 0..3 {
            writeln!(f, "{indent}{}", self.net_row(Face::D, row))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_is_solved() {
        let state = CubeState::solved();
        assert!(state.is_solved());
        assert!(state.has_valid_color_counts());
        for face in Face::ALL {
            assert_eq!(state.center(face), face.home_color());
            assert_eq!(state.center(face).home_face(), face);
        }
    }

    #[test]
    fn solved_facelet_string() {
        assert_eq!(
            CubeState::solved().to_facelet_string(),
            "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB"
        );
    }

    #[test]
    fn net_layout() {
        let net = CubeState::solved().to_string();
        let lines = net.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "      W W W");
        assert_eq!(lines[4], "O O O G G G R R R B B B");
        assert_eq!(lines[8], "      Y Y Y");
    }
}
