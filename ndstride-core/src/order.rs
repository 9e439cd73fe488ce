use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Memory layout convention for a dense n-dimensional array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// C order: the last dimension varies fastest in memory.
    #[default]
    RowMajor,
    /// Fortran order: the first dimension varies fastest in memory.
    ColMajor,
}

impl Order {
    pub const fn as_str(self) -> &'static str {
        match self {
            Order::RowMajor => "row-major",
            Order::ColMajor => "column-major",
        }
    }

    /// Parse an order tag, treating anything other than the canonical
    /// `"column-major"` spelling as row-major.
    pub fn parse_lossy(tag: &str) -> Self {
        if tag == Order::ColMajor.as_str() {
            Order::ColMajor
        } else {
            Order::RowMajor
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Order {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "row-major" => Ok(Order::RowMajor),
            "column-major" => Ok(Order::ColMajor),
            other => Err(Error::UnknownOrder(other.to_string())),
        }
    }
}
