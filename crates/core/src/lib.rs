//! Marlin Core Domain
//!
//! Pure domain types for the Marlin exchange connector.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod error;
pub mod snapshot;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    CANCELLED_STATES,
    DONE_STATES,
    // Core trading entities
    InFlightOrder,
    OrderType,
    STATE_LOCAL,
    TradeType,
};
pub use error::{Error, Result};
pub use snapshot::OrderSnapshot;
pub use values::{Price, Quantity, Timestamp, TradingPair};
