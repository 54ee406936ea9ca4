//! Configuration parsing and validation tests

use solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey};
use std::io::Write;

use crate::config::{Config, RecipientEntry};

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_full_config_from_file() {
    let recipient = Pubkey::new_unique();
    let file = write_config(&format!(
        r#"
        [rpc]
        endpoint = "https://api.mainnet-beta.solana.com"
        timeout_secs = 10
        commitment = "finalized"

        [wallet]
        keypair_path = "/tmp/payer.json"

        [transfer]
        recipients = [
            {{ address = "{}", amount_sol = 1.5 }},
        ]
        "#,
        recipient
    ));

    let config = Config::from_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.rpc.endpoint, "https://api.mainnet-beta.solana.com");
    assert_eq!(config.rpc.timeout_secs, 10);
    assert_eq!(
        config.rpc.commitment_config().unwrap(),
        CommitmentConfig::finalized()
    );
    assert_eq!(config.wallet.keypair_path.as_deref(), Some("/tmp/payer.json"));

    let requests = config.transfer_requests().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].recipient, recipient);
}

#[test]
fn test_missing_sections_fall_back_to_defaults() {
    let file = write_config(
        r#"
        [rpc]

        [transfer]
        recipients = []
        "#,
    );

    let config = Config::from_file(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.rpc.endpoint, "https://api.devnet.solana.com");
    assert_eq!(config.rpc.timeout_secs, 30);
    assert_eq!(config.rpc.commitment, "confirmed");
    assert!(config.wallet.keypair_path.is_none());
    assert!(config.transfer_requests().unwrap().is_empty());
}

#[test]
fn test_malformed_toml_is_rejected() {
    let file = write_config("this is not toml [");
    assert!(Config::from_file(file.path().to_str().unwrap()).is_err());
}

#[test]
fn test_missing_file_is_rejected() {
    assert!(Config::from_file("/nonexistent/solbatch-config.toml").is_err());
}

#[test]
fn test_recipient_order_survives_parsing() {
    let recipients: Vec<Pubkey> = (0..4).map(|_| Pubkey::new_unique()).collect();
    let mut config = Config::default();
    for (i, recipient) in recipients.iter().enumerate() {
        config.transfer.recipients.push(RecipientEntry {
            address: recipient.to_string(),
            amount_sol: 0.1 * (i as f64 + 1.0),
        });
    }

    let requests = config.transfer_requests().unwrap();
    for (request, recipient) in requests.iter().zip(&recipients) {
        assert_eq!(&request.recipient, recipient);
    }
}
