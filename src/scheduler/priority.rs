//! Priority scale for slot scheduling.
//!
//! Items compete for the single presentation slot by priority level.
//! Higher level = more urgent = shows first. Two items on the same level
//! never displace one another; the queue keeps them in arrival order.

use serde::{Deserialize, Serialize};

/// Priority of a presentable item.
///
/// The scale is ordered by `level()`: LOW(0) < NORMAL(1) < HIGH(2) <
/// ERROR(3) < SYSTEM(4).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Background hints, dismissible promotions
    Low,
    /// Everyday dialogs
    Normal,
    /// Needs attention before normal traffic
    High,
    /// Unrecoverable errors the user must see
    Error,
    /// System-level interruptions, outranks everything
    System,
}

impl Priority {
    /// Numeric urgency level. Larger wins.
    pub fn level(&self) -> i32 {
        match self {
            Priority::Low => 0,
            Priority::Normal => 1,
            Priority::High => 2,
            Priority::Error => 3,
            Priority::System => 4,
        }
    }

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
            Priority::Error => "error",
            Priority::System => "system",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Normal
    }
}

// Ordering is defined by level alone so that any extension of the scale
// stays consistent with the comparator the queue sorts with.
impl Ord for Priority {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.level().cmp(&other.level())
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
