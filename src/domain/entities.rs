//! Domain entities: core data structures

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Kind of name a term refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Gene,
    Attribute,
    Facs,
    /// Unknown name, or an unused suggestion slot
    Invalid,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Gene => "gene",
            Category::Attribute => "attribute",
            Category::Facs => "facs",
            Category::Invalid => "invalid",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gene" => Ok(Category::Gene),
            "attribute" | "attr" => Ok(Category::Attribute),
            "facs" => Ok(Category::Facs),
            "invalid" => Ok(Category::Invalid),
            other => Err(DomainError::UnknownCategory(other.to_string())),
        }
    }
}

/// A named string with its category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Term {
    pub value: String,
    pub category: Category,
}

impl Term {
    pub fn new(value: impl Into<String>, category: Category) -> Self {
        Self {
            value: value.into(),
            category,
        }
    }

    /// Marker for an unused suggestion slot: empty text, `Invalid` category.
    pub fn placeholder() -> Self {
        Self {
            value: String::new(),
            category: Category::Invalid,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_empty() && self.category == Category::Invalid
    }

    pub fn gene(value: impl Into<String>) -> Self {
        Self::new(value, Category::Gene)
    }

    pub fn attribute(value: impl Into<String>) -> Self {
        Self::new(value, Category::Attribute)
    }

    pub fn facs(value: impl Into<String>) -> Self {
        Self::new(value, Category::Facs)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.value, self.category)
    }
}
