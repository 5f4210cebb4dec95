//! Strongly typed entity identifiers.
//!
//! Every identifier is assigned server-side; the client never mints one.
//! Newtypes keep a convoy id from being handed to a route lookup.

use serde::{Deserialize, Serialize};

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub const fn as_i64(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of a convoy.
    ConvoyId
);
entity_id!(
    /// Identifier of a route.
    RouteId
);
entity_id!(
    /// Identifier of a traffic control point.
    TcpId
);
entity_id!(
    /// Identifier of a reported threat.
    ThreatId
);
entity_id!(
    /// Identifier of a military asset.
    AssetId
);
entity_id!(
    /// Identifier of a vehicle within a convoy.
    VehicleId
);
