use ethers::{
    abi::Tokenizable,
    contract::abigen,
    types::{Address, Bytes, U256},
};
use serde::{Deserialize, Serialize};

use crate::{errors::EncodingError, ArcSignerMiddleware, ContractEvent, ContractFunctionCall};

abigen!(
    ERC20Vault,
    "./abi/ERC20Vault.json",
    derives(serde::Deserialize, serde::Serialize)
);

/// Descriptor for a cross-chain ERC20 transfer through the vault
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenTransfer {
    dest_chain_id: u64,
    to: Address,
    token: Address,
    amount: U256,
    gas_limit: U256,
    fee: U256,
    refund_to: Address,
    memo: String,
}

impl TokenTransfer {
    pub fn new(
        dest_chain_id: u64,
        to: Address,
        token: Address,
        amount: U256,
        gas_limit: U256,
        fee: U256,
        refund_to: Address,
        memo: String,
    ) -> TokenTransfer {
        TokenTransfer {
            dest_chain_id,
            to,
            token,
            amount,
            gas_limit,
            fee,
            refund_to,
            memo,
        }
    }

    /// Constructs the `BridgeTransferOp` tuple for `sendToken`.
    pub fn bridge_transfer_op(&self) -> BridgeTransferOp {
        BridgeTransferOp {
            dest_chain_id: self.dest_chain_id,
            to: self.to,
            token: self.token,
            amount: self.amount,
            gas_limit: self.gas_limit,
            fee: self.fee,
            refund_to: self.refund_to,
            memo: self.memo.clone(),
        }
    }

    /// ABI-encodes `sendToken` calldata for this transfer.
    pub fn calldata(&self) -> Result<Bytes, EncodingError> {
        let function = ERC20VAULT_ABI.function("sendToken")?;
        let data = function.encode_input(&[self.bridge_transfer_op().into_token()])?;
        Ok(data.into())
    }

    /// Initiates `sendToken` contract call.
    pub fn send(&self, address: Address, signer: ArcSignerMiddleware) -> ContractFunctionCall {
        let contract = ERC20Vault::new(address, signer);

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
    ERC20Vault::new(address, client).event::<TokenSentFilter>()
}

/// Constructs a `TokenReceived` event query for the vault at `address`.
pub fn token_received_events(
    address: Address,
    client: ArcSignerMiddleware,
) -> ContractEvent<TokenReceivedFilter> {
    ERC20Vault::new(address, client).event::<TokenReceivedFilter>()
}

/// Constructs a `TokenReleased` event query for the vault at `address`.
pub fn token_released_events(
    address: Address,
    client: ArcSignerMiddleware,
) -> ContractEvent<TokenReleasedFilter> {
    ERC20Vault::new(address, client).event::<TokenReleasedFilter>()
}
