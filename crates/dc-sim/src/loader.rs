//! CSV order manifest loader.
//!
//! # CSV format
//!
//! One row per order.  `delivery_type` may be left empty, in which case it
//! is inferred from the destination.
//!
//! ```csv
//! order_id,destination,delivery_type
//! 1,Room #215,room
//! 2,Beach - Umbrella B7,
//! 3,Lobby Bar,standard
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use dc_core::{DeliveryType, OrderId};

use crate::builder::infer_delivery_type;
use crate::{SessionBuilder, SessionError, SessionResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct OrderRecord {
    order_id:      u32,
    destination:   String,
    #[serde(default)]
    delivery_type: String,
}

// ── Order ─────────────────────────────────────────────────────────────────────

/// One delivery from a manifest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    pub id:            OrderId,
    pub destination:   String,
    pub delivery_type: DeliveryType,
}

impl Order {
    /// A session builder pre-filled with this order's details.
    pub fn session_builder(&self) -> SessionBuilder {
        SessionBuilder::new(self.id, self.destination.clone()).delivery_type(self.delivery_type)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load orders from a CSV file.
pub fn load_orders_csv(path: &Path) -> SessionResult<Vec<Order>> {
    let file = std::fs::File::open(path)?;
    load_orders_reader(file)
}

/// Like [`load_orders_csv`] but accepts any `Read` source.
pub fn load_orders_reader<R: Read>(reader: R) -> SessionResult<Vec<Order>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut orders = Vec::new();

    for result in csv_reader.deserialize::<OrderRecord>() {
        let row = result.map_err(|e| SessionError::Manifest(e.to_string()))?;
        let destination = row.destination.trim().to_string();
        if destination.is_empty() {
            return Err(SessionError::Manifest(format!(
                "order {} has an empty destination",
                row.order_id
            )));
        }

        let delivery_type = match row.delivery_type.trim() {
            "" => infer_delivery_type(&destination),
            s => s
                .parse::<DeliveryType>()
                .map_err(|e| SessionError::Manifest(format!("order {}: {e}", row.order_id)))?,
        };

        orders.push(Order {
            id: OrderId(row.order_id),
            destination,
            delivery_type,
        });
    }

    Ok(orders)
}
