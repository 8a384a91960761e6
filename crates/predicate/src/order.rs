//! Translation of order strings into ordering calls.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{builder::OrderBuilder, error::ConfigError, key::SEGMENT_DELIMITER};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl OrderDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderDirection::Asc => "asc",
            OrderDirection::Desc => "desc",
        }
    }

    /// `+` is ascending, `-` is descending.
    pub fn from_sign(sign: char) -> Option<Self> {
        match sign {
            '+' => Some(OrderDirection::Asc),
            '-' => Some(OrderDirection::Desc),
            _ => None,
        }
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderDirection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(OrderDirection::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(OrderDirection::Desc)
        } else {
            Err(ConfigError::InvalidDirection(s.to_string()))
        }
    }
}

/// A single parsed sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderKey<'a> {
    pub column: &'a str,
    pub direction: OrderDirection,
}

impl<'a> OrderKey<'a> {
    /// Parses `column__direction`, `+column`, `-column` or `column`.
    /// Returns `None` when a `__` suffix is not a known direction. A suffix
    /// wins over a sign, which is dropped.
    pub fn parse(spec: &'a str, default_direction: OrderDirection) -> Option<Self> {
        if let Some((column, direction)) = spec.rsplit_once(SEGMENT_DELIMITER) {
            let direction = direction.parse().ok()?;
            let column = column.strip_prefix(['+', '-']).unwrap_or(column);
            return Some(OrderKey { column, direction });
        }

        let mut chars = spec.chars();
        match chars.next().and_then(OrderDirection::from_sign) {
            Some(direction) => Some(OrderKey {
                column: chars.as_str(),
                direction,
            }),
            None => Some(OrderKey {
                column: spec,
                direction: default_direction,
            }),
        }
    }
}

/// Registers one sort key per entry, in input order.
///
/// ```text
/// ["-created_at"]          -> order by created_at desc
/// ["name", "-id"]          -> order by name asc, id desc
/// ["hello__asc", "hey__desc"]
/// ```
pub fn apply_order<'b, B, I, S>(
    builder: &'b mut B,
    specs: I,
    default_direction: OrderDirection,
) -> Result<&'b mut B, B::Error>
where
    B: OrderBuilder,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for spec in specs {
        let spec = spec.as_ref();
        match OrderKey::parse(spec, default_direction) {
            Some(OrderKey { column, direction }) => {
                trace!(column, %direction, "Applying order");
                builder.order_by(column, direction)?;
            }
            None => debug!(spec, "Skipping order entry with unknown direction"),
        }
    }
    Ok(builder)
}
