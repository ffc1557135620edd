//! Icon style selection

use crate::StixViewError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual style of the bundled node icons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconStyle {
    #[default]
    SquareFlat,
    SquareDark,
    SquareLite,
    NobackDark,
    NobackFlat,
    RoundFlat,
}

impl IconStyle {
    pub const ALL: [IconStyle; 6] = [
        IconStyle::SquareFlat,
        IconStyle::SquareDark,
        IconStyle::SquareLite,
        IconStyle::NobackDark,
        IconStyle::NobackFlat,
        IconStyle::RoundFlat,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IconStyle::SquareFlat => "square-flat",
            IconStyle::SquareDark => "square-dark",
            IconStyle::SquareLite => "square-lite",
            IconStyle::NobackDark => "noback-dark",
            IconStyle::NobackFlat => "noback-flat",
            IconStyle::RoundFlat => "round-flat",
        }
    }
}

impl FromStr for IconStyle {
    type Err = StixViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| StixViewError::InvalidStyle(s.to_string()))
    }
}

impl fmt::Display for IconStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
