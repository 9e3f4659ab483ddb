use clap::{Arg, Command};
use ethers::utils::hex;
use vault_evm_adapter::encoding::SignalProof;
use vault_evm_adapter::erc1155_vault::TokenTransfer;

fn main() {
    let matches = Command::new("vault_evm_adapter")
        .version("0.1.0")
        .about("EVM adapter for bridged token vaults and signal proofs")
        .subcommand(
            Command::new("encode-signal-proof")
                .about("ABI-encode a signal proof for submission to the bridge")
                .arg(
                    Arg::new("signal-proof-file")
                        .help("File path for signal proof json file")
                        .long("signal-proof-file")
                        .takes_value(true)
                        .required(true),
                )
                .arg(
                    Arg::new("output")
                        .help("File path for the hex encoded proof")
                        .long("output")
                        .takes_value(true)
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("decode-signal-proof")
                .about("Decode an ABI-encoded signal proof back to json")
                .arg(
                    Arg::new("encoded-file")
                        .help("File path for the hex encoded proof")
                        .long("encoded-file")
                        .takes_value(true)
                        .required(true),
                )
                .arg(
                    Arg::new("output")
                        .help("File path for the decoded signal proof json")
                        .long("output")
                        .takes_value(true)
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("send-token-calldata")
                .about("Build sendToken calldata for an ERC1155 token transfer")
                .arg(
                    Arg::new("transfer-file")
                        .help("File path for token transfer json file")
                        .long("transfer-file")
                        .takes_value(true)
                        .required(true),
                )
                .arg(
                    Arg::new("output")
                        .help("File path for the hex calldata")
                        .long("output")
                        .takes_value(true)
                        .required(true),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("encode-signal-proof", sub_matches)) => {
            let signal_proof_filepath = sub_matches.value_of("signal-proof-file").unwrap();
            let output_filepath = sub_matches.value_of("output").unwrap();

            // load signal proof from file
            let reader = std::fs::File::open(signal_proof_filepath).unwrap();
            let signal_proof: SignalProof = serde_json::from_reader(reader).unwrap();

            let encoded = signal_proof.abi_encode();
            std::fs::write(output_filepath, format!("0x{}", hex::encode(&encoded))).unwrap();

            println!("encoded signal proof wrote to {}", output_filepath);
        }
        Some(("decode-signal-proof", sub_matches)) => {
            let encoded_filepath = sub_matches.value_of("encoded-file").unwrap();
            let output_filepath = sub_matches.value_of("output").unwrap();

            let encoded_hex = std::fs::read_to_string(encoded_filepath).unwrap();
            let encoded = hex::decode(encoded_hex.trim().trim_start_matches("0x")).unwrap();

            let signal_proof = SignalProof::abi_decode(&encoded).unwrap();

            let signal_proof_json = serde_json::to_string_pretty(&signal_proof).unwrap();
            std::fs::write(output_filepath, signal_proof_json).unwrap();

            println!("decoded signal proof wrote to {}", output_filepath);
        }
        Some(("send-token-calldata", sub_matches)) => {
            let transfer_filepath = sub_matches.value_of("transfer-file").unwrap();
            let output_filepath = sub_matches.value_of("output").unwrap();

            let reader = std::fs::File::open(transfer_filepath).unwrap();
            let transfer: TokenTransfer = serde_json::from_reader(reader).unwrap();

            let calldata = transfer.calldata().unwrap();
            std::fs::write(output_filepath, format!("0x{}", hex::encode(&calldata))).unwrap();

            println!("sendToken calldata wrote to {}", output_filepath);
        }
        _ => unreachable!("Unhandled subcommand"),
    }
}
