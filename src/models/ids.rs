//! Strongly-typed ID wrapper for expense records
//!
//! Ids are positive integers assigned sequentially by the store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of an expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// The id given to the first expense in an empty store
    pub const FIRST: ExpenseId = ExpenseId(1);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The id that follows this one, or `None` once ids are exhausted
    pub fn checked_next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// Next id for a collection: `max(existing) + 1`, or 1 when empty
    ///
    /// Returns `None` when the largest existing id is already `u64::MAX`.
    pub fn next_after<I>(ids: I) -> Option<Self>
    where
        I: IntoIterator<Item = ExpenseId>,
    {
        match ids.into_iter().max() {
            Some(max) => max.checked_next(),
            None => Some(Self::FIRST),
        }
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ExpenseId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}
