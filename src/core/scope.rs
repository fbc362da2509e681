//! Which senders an aggregation looks at.
//!
//! Every aggregation first narrows the table to a [`Scope`]: either the whole
//! chat or a single sender. A sender that never wrote anything is a valid
//! scope; it simply selects zero rows.
//!
//! # Examples
//!
//! ```
//! use chatstat::core::scope::Scope;
//!
//! let all: Scope = "Overall".parse().unwrap();
//! assert_eq!(all, Scope::Overall);
//!
//! let alice: Scope = "Alice".parse().unwrap();
//! assert!(alice.includes("Alice"));
//! assert!(!alice.includes("alice"));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::RecordTable;
use crate::error::ChatstatError;

/// Label used for the all-senders scope in pickers and on the command line.
pub const OVERALL: &str = "Overall";

/// The set of senders an aggregation runs over.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Every record, including group events.
    #[default]
    Overall,

    /// Records whose sender matches exactly (case-sensitive).
    Sender(String),
}

impl Scope {
    /// Creates a single-sender scope.
    pub fn sender(name: impl Into<String>) -> Self {
        Scope::Sender(name.into())
    }

    /// Returns `true` if a record from `sender` is visible in this scope.
    pub fn includes(&self, sender: &str) -> bool {
        match self {
            Scope::Overall => true,
            Scope::Sender(name) => name == sender,
        }
    }

    pub fn is_overall(&self) -> bool {
        matches!(self, Scope::Overall)
    }

    /// Picker entries for `table`: [`OVERALL`] first, then each human sender
    /// in ascending order.
    pub fn choices(table: &RecordTable) -> Vec<String> {
        std::iter::once(OVERALL.to_string())
            .chain(table.senders().into_iter().map(str::to_string))
            .collect()
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Overall => f.write_str(OVERALL),
            Scope::Sender(name) => f.write_str(name),
        }
    }
}

impl FromStr for Scope {
    type Err = ChatstatError;

    /// Parses [`OVERALL`] as the all-senders scope and anything else as a
    /// sender name. Blank input is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ChatstatError::invalid_scope(s));
        }
        if s == OVERALL {
            Ok(Scope::Overall)
        } else {
            Ok(Scope::Sender(s.to_string()))
        }
    }
}
