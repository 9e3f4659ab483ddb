use ethers::{
    abi::{self, ParamType, Tokenizable},
    contract::EthAbiType,
    types::{Address, Bytes, H256, U256},
};
use serde::{Deserialize, Serialize};

use crate::errors::EncodingError;

/// Merkle inclusion proofs for an account and one of its storage slots
#[derive(EthAbiType, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    pub account_proof: Bytes,
    pub storage_proof: Bytes,
}

/// Mirror of the source chain block header layout used for proof verification
#[derive(EthAbiType, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BlockHeader {
    pub parent_hash: H256,
    pub ommers_hash: H256,
    pub beneficiary: Address,
    pub state_root: H256,
    pub transactions_root: H256,
    pub receipts_root: H256,
    pub logs_bloom: [H256; 8],
    pub difficulty: U256,
    pub height: U256,
    pub gas_limit: u64,
    pub gas_used: u64,
    pub timestamp: u64,
    pub extra_data: Bytes,
    pub mix_hash: H256,
    pub nonce: u64,
    pub base_fee_per_gas: U256,
    pub withdrawals_root: H256,
}

/// Proof that a signal was recorded on a source chain, verified through a
/// chain of relayed signal roots
#[derive(EthAbiType, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SignalProof {
    pub cross_chain_sync: Address,
    pub height: u64,
    pub storage_proof: Bytes,
    pub hops: Vec<Hop>,
}

/// One relay step in a multi-hop signal proof
#[derive(EthAbiType, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    pub signal_root_relay: Address,
    pub signal_root: H256,
    pub storage_proof: Bytes,
}

fn hop_param_type() -> ParamType {
    ParamType::Tuple(vec![
        ParamType::Address,
        ParamType::FixedBytes(32),
        ParamType::Bytes,
    ])
}

/// Solidity tuple type of a signal proof.
pub fn signal_proof_param_type() -> ParamType {
    ParamType::Tuple(vec![
        ParamType::Address,
        ParamType::Uint(64),
        ParamType::Bytes,
        ParamType::Array(Box::new(hop_param_type())),
    ])
}

/// Solidity tuple type of a block header.
pub fn block_header_param_type() -> ParamType {
    ParamType::Tuple(vec![
        ParamType::FixedBytes(32),
        ParamType::FixedBytes(32),
        ParamType::Address,
        ParamType::FixedBytes(32),
        ParamType::FixedBytes(32),
        ParamType::FixedBytes(32),
        ParamType::FixedArray(Box::new(ParamType::FixedBytes(32)), 8),
        ParamType::Uint(256),
        ParamType::Uint(256),
        ParamType::Uint(64),
        ParamType::Uint(64),
        ParamType::Uint(64),
        ParamType::Bytes,
        ParamType::FixedBytes(32),
        ParamType::Uint(64),
        ParamType::Uint(256),
        ParamType::FixedBytes(32),
    ])
}

impl SignalProof {
    /// ABI-encodes the proof as a single tuple argument.
    pub fn abi_encode(&self) -> Bytes {
        abi::encode(&[self.clone().into_token()]).into()
    }

    /// Decodes an ABI-encoded signal proof tuple.
    pub fn abi_decode(data: &[u8]) -> Result<SignalProof, EncodingError> {
        let mut tokens = abi::decode(&[signal_proof_param_type()], data)?;
        let token = tokens.pop().ok_or(EncodingError::InvalidTokenShape)?;
        Ok(SignalProof::from_token(token)?)
    }
}

impl BlockHeader {
    /// ABI-encodes the header as a single tuple argument.
    pub fn abi_encode(&self) -> Bytes {
        abi::encode(&[self.clone().into_token()]).into()
    }

    /// Decodes an ABI-encoded block header tuple.
    pub fn abi_decode(data: &[u8]) -> Result<BlockHeader, EncodingError> {
        let mut tokens = abi::decode(&[block_header_param_type()], data)?;
        let token = tokens.pop().ok_or(EncodingError::InvalidTokenShape)?;
        Ok(BlockHeader::from_token(token)?)
    }
}
