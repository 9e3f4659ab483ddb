extern crate vault_evm_adapter;

use vault_evm_adapter::{erc1155_vault, erc20_vault};

#[cfg(test)]
mod tests {
    use super::*;
    use ethers::{
        abi::Tokenizable,
        contract::EthEvent,
        types::{Address, U256},
        utils::id,
    };
    use vault_evm_adapter::erc1155_vault::{TokenSentFilter, ERC1155VAULT_ABI};
    use vault_evm_adapter::erc20_vault::ERC20VAULT_ABI;
    use vault_evm_adapter::errors::EncodingError;

    fn transfer() -> erc1155_vault::TokenTransfer {
        erc1155_vault::TokenTransfer::new(
            167000,
            Address::repeat_byte(0x11),
            Address::repeat_byte(0x22),
            900_000_000,
            Address::repeat_byte(0x33),
            140_000,
            vec![U256::from(1), U256::from(5)],
            vec![U256::from(10), U256::from(1)],
        )
    }

    #[test]
    fn test_erc1155_abi_surface() {
        let abi = &ERC1155VAULT_ABI;

        assert!(abi.function("sendToken").is_ok());
        assert!(abi.function("onMessageRecalled").is_ok());
        assert!(abi.event("TokenSent").is_ok());
        assert!(abi.event("TokenReceived").is_ok());
        assert!(abi.event("TokenReleased").is_ok());
        assert!(abi.event("BridgedTokenDeployed").is_ok());

        // resolver lookup is overloaded on the chain id
        assert_eq!(abi.functions.get("resolve").map(Vec::len), Some(2));

        // custom revert reasons declared by the contract
        for name in [
            "VAULT_INVALID_TOKEN",
            "VAULT_PERMISSION_DENIED",
            "VAULT_MAX_TOKEN_PER_TXN_EXCEEDED",
            "VAULT_TOKEN_ARRAY_MISMATCH",
            "REENTRANT_CALL",
            "RESOLVER_ZERO_ADDR",
        ] {
            assert!(abi.errors.contains_key(name), "missing error {}", name);
        }
    }

    #[test]
    fn test_send_token_selector() {
        let function = ERC1155VAULT_ABI.function("sendToken").unwrap();
        let selector =
            id("sendToken((uint64,address,address,uint64,address,uint32,uint256[],uint256[]))");

        assert_eq!(function.short_signature(), selector);
    }

    #[test]
    fn test_send_token_calldata_roundtrip() {
        let transfer = transfer();
        let calldata = transfer.calldata().unwrap();

        let function = ERC1155VAULT_ABI.function("sendToken").unwrap();
        assert_eq!(&calldata[..4], &function.short_signature()[..]);

        let mut tokens = function.decode_input(&calldata[4..]).unwrap();
        let op = erc1155_vault::BridgeTransferOp::from_token(tokens.pop().unwrap()).unwrap();
        assert_eq!(op, transfer.bridge_transfer_op());
    }

    #[test]
    fn test_send_token_rejects_array_mismatch() {
        let transfer = erc1155_vault::TokenTransfer::new(
            167000,
            Address::repeat_byte(0x11),
            Address::repeat_byte(0x22),
            900_000_000,
            Address::repeat_byte(0x33),
            140_000,
            vec![U256::from(1), U256::from(5)],
            vec![U256::from(10)],
        );

        assert!(matches!(
            transfer.calldata(),
            Err(EncodingError::TokenArrayMismatch)
        ));
    }

    #[test]
    fn test_token_sent_event_signature() {
        let event = ERC1155VAULT_ABI.event("TokenSent").unwrap();
        assert_eq!(event.signature(), TokenSentFilter::signature());
    }

    #[test]
    fn test_erc20_send_token_selector() {
        let function = ERC20VAULT_ABI.function("sendToken").unwrap();
        let selector =
            id("sendToken((uint64,address,address,uint256,uint256,uint256,address,string))");

        assert_eq!(function.short_signature(), selector);
    }

    #[test]
    fn test_erc20_send_token_calldata() {
        let transfer = erc20_vault::TokenTransfer::new(
            167000,
            Address::repeat_byte(0x44),
            Address::repeat_byte(0x55),
            U256::from(1_000_000u64),
            U256::from(140_000u64),
            U256::from(900_000_000u64),
            Address::repeat_byte(0x44),
            "memo".to_string(),
        );

        let calldata = transfer.calldata().unwrap();
        let function = ERC20VAULT_ABI.function("sendToken").unwrap();
        assert_eq!(&calldata[..4], &function.short_signature()[..]);

        let mut tokens = function.decode_input(&calldata[4..]).unwrap();
        let op = erc20_vault::BridgeTransferOp::from_token(tokens.pop().unwrap()).unwrap();
        assert_eq!(op, transfer.bridge_transfer_op());
    }
}
