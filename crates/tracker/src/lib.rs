//! Marlin Order Tracker
//!
//! The order tracker is the connector's in-memory table of in-flight orders,
//! responsible for:
//! - **Order registration**: Tracks freshly submitted orders by `client_order_id`
//! - **Exchange updates**: Applies acknowledgments, fills, and status changes
//! - **Event emission**: Produces connector events (created/filled/completed/
//!   cancelled/failure) for the layers above
//! - **Restart recovery**: Persists tracking state as snapshots and restores it
//!
//! The tracker is a single-owner structure with no internal synchronization;
//! callers decide the concurrency discipline around it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use marlin_core::{InFlightOrder, OrderType, TradeType};
//! use marlin_tracker::OrderTracker;
//!
//! let mut tracker = OrderTracker::new();
//! tracker.start_tracking(InFlightOrder::new(
//!     "C1", None, "ETH-USDT",
//!     OrderType::Limit, TradeType::Buy,
//!     dec!(10.00), dec!(2.0),
//! ))?;
//!
//! // Exchange acknowledges, then fills arrive
//! tracker.acknowledge("C1", "E1", "submitted")?;
//! let events = tracker.apply_fill("C1", &fill)?;
//! ```

pub mod error;
pub mod events;
pub mod tracker;

// Re-export main types
pub use error::{Error, Result};
pub use events::{
    OrderCancelledEvent, OrderCompletedEvent, OrderCreatedEvent, OrderEvent, OrderFailureEvent,
    OrderFill, OrderFilledEvent,
};
pub use tracker::OrderTracker;
