//! Marlin Core errors

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Malformed decimal in field {field}: {source}")]
    ParseError {
        field: &'static str,
        source: rust_decimal::Error,
    },

    #[error("Order {client_order_id} has not been created on the exchange yet")]
    OrderNotCreated { client_order_id: String },
}

pub type Result<T> = std::result::Result<T, Error>;
