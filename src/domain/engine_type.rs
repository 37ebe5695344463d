use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineType {
    Lyrics,
    Chord,
}

impl EngineType {
    pub const ALL: [EngineType; 2] = [EngineType::Lyrics, EngineType::Chord];

    pub fn as_str(&self) -> &'static str {
        match self {
            EngineType::Lyrics => "lyrics",
            EngineType::Chord => "chord",
        }
    }
}

impl FromStr for EngineType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lyrics" => Ok(EngineType::Lyrics),
            "chord" => Ok(EngineType::Chord),
            _ => Err(format!("Unknown engine type: {}", s)),
        }
    }
}

impl fmt::Display for EngineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
