//! Typed identifier newtypes backed by store-generated row ids.
//!
//! Identifiers are never minted in memory: the store assigns one on the
//! first insert and it stays fixed afterwards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a row id handed out by the store.
            #[must_use]
            pub fn from_raw(raw: i64) -> Self {
                Self(raw)
            }

            /// Access the inner row id.
            #[must_use]
            pub fn as_raw(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Salle`](crate::salle::Salle).
    SalleId
);
