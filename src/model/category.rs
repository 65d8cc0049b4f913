use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCategoryError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Numbers,
    Family,
    Colors,
    Phrases,
}

impl Category {
    pub fn all() -> [Category; 4] {
        [
            Category::Numbers,
            Category::Family,
            Category::Colors,
            Category::Phrases,
        ]
    }

    /// Key stored in the catalog and accepted on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Numbers => "numbers",
            Category::Family => "family",
            Category::Colors => "colors",
            Category::Phrases => "phrases",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Category::Numbers => "Numbers",
            Category::Family => "Family Members",
            Category::Colors => "Colors",
            Category::Phrases => "Phrases",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCategoryError::UnknownCategory(s.to_string()))
    }
}
