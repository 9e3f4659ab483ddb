use ethers::{
    core::k256::ecdsa::SigningKey,
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
    types::{Address, U256},
    utils::hex,
};
use eyre::Result;
use std::{convert::TryFrom, str::FromStr, sync::Arc, time::Duration};
use vault_evm_adapter::erc1155_vault::{self, TokenTransfer};

#[tokio::main]
async fn main() -> Result<()> {
    // Start against a local Anvil node (or any JSON-RPC endpoint).
    let provider = Provider::<Http>::try_from("http://localhost:8545")?;

    let block_number = provider.get_block_number().await?;
    println!("Latest Block Number: {:?}", block_number);

    // The private key as a hex string (Anvil default account)
    let from_key_bytes =
        hex::decode("0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d").unwrap();
    let from_signing_key = SigningKey::from_bytes(from_key_bytes.as_slice().into()).unwrap();
    let from_wallet: LocalWallet = LocalWallet::from(from_signing_key);

    let provider = Provider::<Http>::try_from(provider.url().to_string())?
        .interval(Duration::from_millis(10u64));
    let chain_id = provider.get_chainid().await?.as_u32();
    let signer = Arc::new(SignerMiddleware::new(
        provider,
        from_wallet.with_chain_id(chain_id),
    ));

    let vault_address = Address::from_str("0xaF145bc8cB52e2375CE1E87bB297aa946B5eb0b4").unwrap();
    let token_address = Address::from_str("0x39053D51B77DC0d36036Fc1fCc8Cb819df8Ef37A").unwrap();
    let recipient = Address::from_str("0x8943545177806ED17B9F23F0a21ee5948eCaa776").unwrap();

    let fee = 900000000000000u64;
    let transfer = TokenTransfer::new(
        167000,
        recipient,
        recipient,
        fee,
        token_address,
        140000,
        vec![U256::from(1)],
        vec![U256::from(2)],
    );

    println!("sending token");
    let tx = transfer
        .send(vault_address, signer.clone())
        .value(U256::from(fee));

    let pending_tx = match tx.send().await {
        Ok(pending_tx) => pending_tx,
        Err(err) => {
            if err.is_revert() {
                println!(
                    "Execution failed: {:?}",
                    err.decode_revert::<String>().unwrap()
                );
            } else {
                println!("Other error: {:?}", err);
            }
            return Ok(());
        }
    };

    println!("pending tx: {:?}", pending_tx);

    let mined_tx = pending_tx.await?;
    println!("Mined tx: {:?}", mined_tx);

    // Look back over recent blocks for TokenSent events from the vault.
    let latest = signer.get_block_number().await?.as_u64();
    let events = erc1155_vault::token_sent_events(vault_address, signer.clone())
        .from_block(latest.saturating_sub(100))
        .to_block(latest)
        .query()
        .await?;

    for event in events {
        println!(
            "TokenSent: msgHash={:?} to={:?} destChainId={} tokenIds={:?}",
            event.msg_hash, event.to, event.dest_chain_id, event.token_ids
        );
    }

    Ok(())
}
