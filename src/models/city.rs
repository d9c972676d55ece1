use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed catalog of cities with trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lowercase name, as typed at the prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        }
    }

    /// Default CSV file name inside the data directory.
    pub fn default_file(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Whether the city's file carries `Gender` and `Birth Year`.
    pub fn has_demographics(&self) -> bool {
        !matches!(self, City::Washington)
    }

    /// Parse already-normalized (trimmed, lowercase) input.
    pub fn from_input(s: &str) -> Option<Self> {
        City::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
