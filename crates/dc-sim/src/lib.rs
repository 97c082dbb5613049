//! `dc-sim` — the host side of a delivery simulation.
//!
//! A [`DeliverySession`] is what an order-detail view mounts: it takes a
//! destination, a delivery type, and a completion callback, picks one of
//! the two simulators, and drives it from a virtual clock.
//!
//! # Driving loop
//!
//! ```text
//! session.advance(ms):
//!   target = now + ms
//!   while scheduler has a task due at or before target:
//!     clock ← due
//!     tick the simulator
//!     report the tick (and a rendered frame, if wanted) to the observer
//!     on arrival: cancel the task; navigator runs fire on_complete once
//!   clock ← target
//! ```
//!
//! The session holds at most one scheduler task.  It is armed by `start`
//! and `resume` and cancelled by `pause`, arrival, `complete`, `reset`, and
//! `dispose`, so a session that is not running never ticks.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dc_core::OrderId;
//! use dc_sim::{NoopObserver, SessionBuilder};
//!
//! let mut session = SessionBuilder::new(OrderId(1), "Beach - Umbrella B7")
//!     .on_complete(|order| println!("{order} delivered"))
//!     .build()?;
//! session.start()?;
//! session.run_until_arrived(60_000, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod loader;
pub mod observer;
pub mod session;


pub use builder::{SessionBuilder, infer_delivery_type};
pub use error::{SessionError, SessionResult};
pub use loader::{Order, load_orders_csv, load_orders_reader};
pub use observer::{NoopObserver, SessionObserver, SessionView};
pub use session::{CompletionHook, DeliverySession, Simulator};
