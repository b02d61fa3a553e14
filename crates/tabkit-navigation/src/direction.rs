//! Focus directions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NavigationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusDirection {
    Next,
    Previous,
    First,
    Last,
}

impl FocusDirection {
    pub const ALL: [FocusDirection; 4] = [
        FocusDirection::Next,
        FocusDirection::Previous,
        FocusDirection::First,
        FocusDirection::Last,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FocusDirection::Next => "next",
            FocusDirection::Previous => "previous",
            FocusDirection::First => "first",
            FocusDirection::Last => "last",
        }
    }
}

impl fmt::Display for FocusDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FocusDirection {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "next" | "n" => Ok(FocusDirection::Next),
            "previous" | "prev" | "p" => Ok(FocusDirection::Previous),
            "first" | "home" => Ok(FocusDirection::First),
            "last" | "end" => Ok(FocusDirection::Last),
            _ => Err(NavigationError::UnknownDirection(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_directions() {
        assert_eq!("next".parse::<FocusDirection>().unwrap(), FocusDirection::Next);
        assert_eq!("Prev".parse::<FocusDirection>().unwrap(), FocusDirection::Previous);
        assert_eq!("home".parse::<FocusDirection>().unwrap(), FocusDirection::First);
        assert_eq!(" END ".parse::<FocusDirection>().unwrap(), FocusDirection::Last);
    }

    #[test]
    fn test_unknown_direction() {
        let err = "sideways".parse::<FocusDirection>().unwrap_err();
        assert_eq!(err, NavigationError::UnknownDirection("sideways".to_string()));
    }

    #[test]
    fn test_display_round_trips() {
        for direction in FocusDirection::ALL {
            assert_eq!(direction.to_string().parse::<FocusDirection>().unwrap(), direction);
        }
    }
}
