//! Delivery-type discriminator supplied by the host page.
//!
//! The host decides which simulator to mount from this value: room
//! deliveries get the linear progress timer, everything else gets the
//! waypoint navigator.

use std::str::FromStr;

use crate::CoreError;

/// Where an order is being delivered to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DeliveryType {
    /// Guest room inside the hotel building.
    Room,
    /// Pool deck or cabana.
    Pool,
    /// Beach umbrella or cabana.
    Beach,
    /// Anything else (lobby bar, spa, …).
    #[default]
    Standard,
}

impl DeliveryType {
    /// `true` when the host mounts the linear progress timer instead of the
    /// waypoint navigator.
    #[inline]
    pub fn uses_progress_timer(self) -> bool {
        matches!(self, DeliveryType::Room)
    }

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryType::Room     => "room",
            DeliveryType::Pool     => "pool",
            DeliveryType::Beach    => "beach",
            DeliveryType::Standard => "standard",
        }
    }
}

impl std::fmt::Display for DeliveryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "room"     => Ok(DeliveryType::Room),
            "pool"     => Ok(DeliveryType::Pool),
            "beach"    => Ok(DeliveryType::Beach),
            "standard" => Ok(DeliveryType::Standard),
            other => Err(CoreError::Parse(format!(
                "invalid delivery type {other:?}: expected room, pool, beach, or standard"
            ))),
        }
    }
}
