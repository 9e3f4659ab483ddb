use ethers::{
    abi::Tokenizable,
    contract::abigen,
    types::{Address, Bytes, U256},
};
use serde::{Deserialize, Serialize};

use crate::{errors::EncodingError, ArcSignerMiddleware, ContractEvent, ContractFunctionCall};

abigen!(
    ERC1155Vault,
    "./abi/ERC1155Vault.json",
    derives(serde::Deserialize, serde::Serialize)
);

/// Descriptor for a cross-chain ERC1155 transfer through the vault
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenTransfer {
    dest_chain_id: u64,
    dest_owner: Address,
    to: Address,
    fee: u64,
    token: Address,
    gas_limit: u32,
    token_ids: Vec<U256>,
    amounts: Vec<U256>,
}

impl TokenTransfer {
    pub fn new(
        dest_chain_id: u64,
        dest_owner: Address,
        to: Address,
        fee: u64,
        token: Address,
        gas_limit: u32,
        token_ids: Vec<U256>,
        amounts: Vec<U256>,
    ) -> TokenTransfer {
        TokenTransfer {
            dest_chain_id,
            dest_owner,
            to,
            fee,
            token,
            gas_limit,
            token_ids,
            amounts,
        }
    }

    /// Constructs the `BridgeTransferOp` tuple for `sendToken`.
    pub fn bridge_transfer_op(&self) -> BridgeTransferOp {
        BridgeTransferOp {
            dest_chain_id: self.dest_chain_id,
            dest_owner: self.dest_owner,
            to: self.to,
            fee: self.fee,
            token: self.token,
            gas_limit: self.gas_limit,
            token_ids: self.token_ids.clone(),
            amounts: self.amounts.clone(),
        }
    }

    /// ABI-encodes `sendToken` calldata for this transfer.
    ///
    /// Token ids and amounts are parallel arrays; a length mismatch would
    /// revert on-chain with `VAULT_TOKEN_ARRAY_MISMATCH`, so it is rejected
    /// before encoding.
    pub fn calldata(&self) -> Result<Bytes, EncodingError> {
        if self.token_ids.len() != self.amounts.len() {
            return Err(EncodingError::TokenArrayMismatch);
        }
        let function = ERC1155VAULT_ABI.function("sendToken")?;
        let data = function.encode_input(&[self.bridge_transfer_op().into_token()])?;
        Ok(data.into())
    }

    /// Initiates `sendToken` contract call.
    pub fn send(&self, address: Address, signer: ArcSignerMiddleware) -> ContractFunctionCall {
        let contract = ERC1155Vault::new(address, signer);

        contract
            .method("sendToken", (self.bridge_transfer_op(),))
            .unwrap()
    }
}

/// Constructs a `TokenSent` event query for the vault at `address`.
pub fn token_sent_events(
    address: Address,
    client: ArcSignerMiddleware,
) -> ContractEvent<TokenSentFilter> {
    ERC1155Vault::new(address, client).event::<TokenSentFilter>()
}

/// Constructs a `TokenReceived` event query for the vault at `address`.
pub fn token_received_events(
    address: Address,
    client: ArcSignerMiddleware,
) -> ContractEvent<TokenReceivedFilter> {
    ERC1155Vault::new(address, client).event::<TokenReceivedFilter>()
}

/// Constructs a `TokenReleased` event query for the vault at `address`.
pub fn token_released_events(
    address: Address,
    client: ArcSignerMiddleware,
) -> ContractEvent<TokenReleasedFilter> {
    ERC1155Vault::new(address, client).event::<TokenReleasedFilter>()
}
