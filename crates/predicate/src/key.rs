//! Parsing of filter keys.
//!
//! A filter key either names a boolean group (`or`, `and`, `not`,
//! `and_not`, `or_not`) or encodes a leaf predicate as
//! `[prefix__]column__operator`.

use std::fmt;

/// Separator between the segments of a leaf key.
pub const SEGMENT_DELIMITER: &str = "__";

/// How a predicate joins its siblings at the same nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    And,
    Or,
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Combinator::And => write!(f, "and"),
            Combinator::Or => write!(f, "or"),
        }
    }
}

/// The boolean-group keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKey {
    Or,
    And,
    Not,
    AndNot,
    OrNot,
}

impl GroupKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "or" => Some(GroupKey::Or),
            "and" => Some(GroupKey::And),
            "not" => Some(GroupKey::Not),
            "and_not" => Some(GroupKey::AndNot),
            "or_not" => Some(GroupKey::OrNot),
            _ => None,
        }
    }

    pub fn combinator(self) -> Combinator {
        match self {
            GroupKey::Or | GroupKey::OrNot => Combinator::Or,
            GroupKey::And | GroupKey::Not | GroupKey::AndNot => Combinator::And,
        }
    }

    pub fn is_negated(self) -> bool {
        matches!(self, GroupKey::Not | GroupKey::AndNot | GroupKey::OrNot)
    }
}

/// A leaf predicate key split into its parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leaf<'a> {
    pub combinator: Combinator,
    pub column: &'a str,
    pub operator: &'a str,
}

/// Result of classifying a filter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    Group(GroupKey),
    Leaf(Leaf<'a>),
    /// Wrong number of segments. Such entries emit nothing.
    Malformed,
}

impl<'a> Key<'a> {
    pub fn parse(key: &'a str) -> Self {
        if let Some(group) = GroupKey::from_key(key) {
            return Key::Group(group);
        }

        let segments: Vec<&str> = key.split(SEGMENT_DELIMITER).collect();
        match segments.as_slice() {
            &[column, operator] => Key::Leaf(Leaf {
                combinator: Combinator::And,
                column,
                operator,
            }),
            // Only an exact "or" prefix disjoins; anything else conjoins.
            &[prefix, column, operator] => Key::Leaf(Leaf {
                combinator: if prefix == "or" {
                    Combinator::Or
                } else {
                    Combinator::And
                },
                column,
                operator,
            }),
            _ => Key::Malformed,
        }
    }
}
