mod in_flight_order;
mod order_type;
mod trade_type;

pub use in_flight_order::{CANCELLED_STATES, DONE_STATES, InFlightOrder, STATE_LOCAL};
pub use order_type::OrderType;
pub use trade_type::TradeType;
