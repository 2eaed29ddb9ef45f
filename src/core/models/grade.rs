//! Letter grade model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Letter grade on the five-point scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    /// 70 and above
    A,
    /// 60 to below 70
    B,
    /// 50 to below 60
    C,
    /// 45 to below 50
    D,
    /// 40 to below 45
    E,
    /// Below 40
    F,
}

impl Grade {
    /// Every grade, best first. Chart and table output follows this order.
    pub const ALL: [Self; 6] = [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F];

    /// Grade point awarded for this grade
    #[must_use]
    pub const fn point(self) -> u32 {
        match self {
            Self::A => 5,
            Self::B => 4,
            Self::C => 3,
            Self::D => 2,
            Self::E => 1,
            Self::F => 0,
        }
    }

    /// The grade's letter
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
        }
    }

    /// Position in [`Grade::ALL`]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Self::A),
            "B" | "b" => Ok(Self::B),
            "C" | "c" => Ok(Self::C),
            "D" | "d" => Ok(Self::D),
            "E" | "e" => Ok(Self::E),
            "F" | "f" => Ok(Self::F),
            _ => Err(format!("Unknown grade: '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_follow_scale() {
        let points: Vec<u32> = Grade::ALL.iter().map(|g| g.point()).collect();
        assert_eq!(points, vec![5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (idx, grade) in Grade::ALL.iter().enumerate() {
            assert_eq!(grade.index(), idx);
        }
    }

    #[test]
    fn test_parse_and_display() {
        for grade in Grade::ALL {
            assert_eq!(grade.to_string().parse::<Grade>(), Ok(grade));
        }
        assert_eq!(" c ".parse::<Grade>(), Ok(Grade::C));
        assert!("G".parse::<Grade>().is_err());
        assert!("AB".parse::<Grade>().is_err());
        assert!("".parse::<Grade>().is_err());
    }
}
