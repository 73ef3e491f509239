//! Order Tracker errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown order: {client_order_id}")]
    UnknownOrder { client_order_id: String },

    #[error("Order {client_order_id} is already being tracked")]
    DuplicateOrder { client_order_id: String },

    #[error(transparent)]
    Core(#[from] marlin_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
