//! Display order for post lists

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order in which posts are listed, by creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first
    Asc,
    /// Newest first
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "oldest" => Ok(SortOrder::Asc),
            "desc" | "newest" => Ok(SortOrder::Desc),
            _ => Err(format!(
                "Invalid sort order: '{}'. Valid sort orders are: asc, desc",
                s
            )),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_newest_first() {
        assert_eq!(SortOrder::default(), SortOrder::Desc);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(SortOrder::from_str("asc").unwrap(), SortOrder::Asc);
        assert_eq!(SortOrder::from_str("DESC").unwrap(), SortOrder::Desc);
        assert_eq!(SortOrder::from_str("oldest").unwrap(), SortOrder::Asc);
    }

    #[test]
    fn test_from_str_invalid() {
        let err = SortOrder::from_str("sideways").unwrap_err();
        assert!(err.contains("Invalid sort order"));
    }

    #[test]
    fn test_display_round_trips() {
        for order in [SortOrder::Asc, SortOrder::Desc] {
            assert_eq!(SortOrder::from_str(&order.to_string()).unwrap(), order);
        }
    }
}
