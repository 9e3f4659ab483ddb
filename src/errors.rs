use ethers::{
    abi::{Error as AbiError, InvalidOutputType},
    utils::hex::FromHexError,
};
use thiserror::Error;

// Define the custom error type using `thiserror`.
#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("abi error")]
    AbiError,
    #[error("invalid token shape")]
    InvalidTokenShape,
    #[error("hex decoding error")]
    HexDecodingError,
    #[error("token ids and amounts length mismatch")]
    TokenArrayMismatch,
}

impl From<AbiError> for EncodingError {
    fn from(_: AbiError) -> Self {
        EncodingError::AbiError
    }
}

impl From<InvalidOutputType> for EncodingError {
    fn from(_: InvalidOutputType) -> Self {
        EncodingError::InvalidTokenShape
    }
}

impl From<FromHexError> for EncodingError {
    fn from(_: FromHexError) -> Self {
        EncodingError::HexDecodingError
    }
}
