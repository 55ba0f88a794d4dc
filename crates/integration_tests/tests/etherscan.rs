//! Whole Etherscan `txlist` and `txlistinternal` responses decoded against
//! the saved expected output.

use anyhow::{Context, Result};
use integration_tests::{FixtureLoader, compare_json, fixtures_dir, init_tracing};
use portfolio_ingest::types::TransactionRecord;
use portfolio_ingest::{ApiSource, ErrorPolicy, IngestError, decode_response};
use std::collections::HashSet;

fn loader() -> FixtureLoader {
    FixtureLoader::new(fixtures_dir())
}

#[test]
fn test_txlist_matches_expected_output() -> Result<()> {
    init_tracing();
    let loader = loader();
    let response = loader.response("etherscan_txlist")?;
    let expected = loader.expected("etherscan_txlist")?;

    let batch = decode_response(ApiSource::Etherscan, &response, ErrorPolicy::Abort)?;
    assert_eq!(batch.len(), 3);
    assert_eq!(batch.skipped, 0);

    let actual = batch.serialize();
    let result = compare_json(&actual, &expected, &[])?;
    assert!(result.is_match(), "{}", result.format_diff());
    Ok(())
}

#[test]
fn test_txlist_contract_creation_has_no_recipient() -> Result<()> {
    let response = loader().response("etherscan_txlist")?;
    let batch = decode_response(ApiSource::Etherscan, &response, ErrorPolicy::Abort)?;

    let creation = batch
        .transactions
        .iter()
        .find_map(|record| match record {
            TransactionRecord::Ethereum(tx) if tx.to_address.is_none() => Some(tx),
            _ => None,
        })
        .context("expected a contract creation")?;
    assert_eq!(creation.nonce, 1);
    assert_eq!(creation.input_data.hex(), "0x6080604052348015600f57600080fd5b50");
    Ok(())
}

#[test]
fn test_internal_transactions_match_expected_output() -> Result<()> {
    init_tracing();
    let loader = loader();
    let response = loader.response("etherscan_txlistinternal")?;
    let expected = loader.expected("etherscan_txlistinternal")?;

    let batch = decode_response(ApiSource::EtherscanInternal, &response, ErrorPolicy::Abort)?;
    let result = compare_json(&batch.serialize(), &expected, &[])?;
    assert!(result.is_match(), "{}", result.format_diff());

    // Two traces of one parent transaction stay distinct
    let identifiers: HashSet<_> = batch.transactions.iter().map(|r| r.identifier()).collect();
    assert_eq!(identifiers.len(), 3);
    Ok(())
}

#[test]
fn test_internal_entry_without_trace_id_defaults_to_zero() -> Result<()> {
    let response = loader().response("etherscan_txlistinternal")?;
    let batch = decode_response(ApiSource::EtherscanInternal, &response, ErrorPolicy::Abort)?;
    let last = batch.serialize()[2].clone();
    assert_eq!(last["trace_id"], 0);
    Ok(())
}

#[test]
fn test_same_transaction_from_two_responses_deduplicates() -> Result<()> {
    let response = loader().response("etherscan_txlist")?;
    let first = decode_response(ApiSource::Etherscan, &response, ErrorPolicy::Abort)?;
    let second = decode_response(ApiSource::Etherscan, &response, ErrorPolicy::Abort)?;

    let merged: HashSet<TransactionRecord> = first
        .transactions
        .into_iter()
        .chain(second.transactions)
        .collect();
    assert_eq!(merged.len(), 3);
    Ok(())
}

#[test]
fn test_invalid_entries_abort_by_default() -> Result<()> {
    let response = loader().response("etherscan_txlist_with_invalid")?;
    let err = decode_response(ApiSource::Etherscan, &response, ErrorPolicy::Abort)
        .expect_err("invalid hash must fail");

    let inner = match err {
        IngestError::Deserialization(inner) => inner,
        other => anyhow::bail!("unexpected error kind: {}", other),
    };
    assert_eq!(
        inner.to_string(),
        "Failed to read hash as a hash during etherscan transaction query"
    );
    assert!(inner.chain().len() >= 2);
    Ok(())
}

#[test]
fn test_invalid_entries_are_skipped_on_request() -> Result<()> {
    init_tracing();
    let response = loader().response("etherscan_txlist_with_invalid")?;
    let batch = decode_response(ApiSource::Etherscan, &response, ErrorPolicy::Skip)?;
    assert_eq!(batch.len(), 1);
    assert_eq!(batch.skipped, 2);
    Ok(())
}
