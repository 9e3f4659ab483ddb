#![doc = include_str!("../README.md")]

use std::sync::Arc;

use ethers::{
    contract::{Event, FunctionCall},
    core::k256::ecdsa::SigningKey,
    middleware::SignerMiddleware,
    providers::{Http, Provider},
    signers::Wallet,
};

pub mod encoding;
pub mod erc1155_vault;
pub mod erc20_vault;
pub mod errors;

pub type SignerMiddlewareType = SignerMiddleware<Provider<Http>, Wallet<SigningKey>>;
pub type ArcSignerMiddleware = Arc<SignerMiddlewareType>;
pub type ContractFunctionCall = FunctionCall<ArcSignerMiddleware, SignerMiddlewareType, ()>;
pub type ContractEvent<D> = Event<ArcSignerMiddleware, SignerMiddlewareType, D>;
