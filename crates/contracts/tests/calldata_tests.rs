//! Unit tests for calldata encoding.
//!
//! These tests verify correct ABI encoding of the vault enter/exit calls
//! and the ERC-20 calls without requiring RPC connections.

use alloy::primitives::{address, keccak256, Address, U256};
use alloy::sol_types::SolCall;
use vault_check_contracts::erc20::IERC20;
use vault_check_contracts::vault::IVault;

// ERC-20 function selectors (first 4 bytes of keccak256 hash)
// approve(address,uint256)
const APPROVE_SELECTOR: [u8; 4] = [0x09, 0x5e, 0xa7, 0xb3];
// transfer(address,uint256)
const TRANSFER_SELECTOR: [u8; 4] = [0xa9, 0x05, 0x9c, 0xbb];
// balanceOf(address)
const BALANCE_OF_SELECTOR: [u8; 4] = [0x70, 0xa0, 0x82, 0x31];

const TEST_TOKEN: Address = address!("8236a87084f8b84306f72007f36f2618a5634494");
const TEST_WALLET: Address = address!("1234567890123456789012345678901234567890");
const TEST_VAULT: Address = address!("BEEF01735c132Ada46AA9aA4c54623cAA92A64CB");

// ============================================================================
// Vault enter/exit Calldata Tests
// ============================================================================

#[test]
fn test_enter_selector_matches_signature() {
    let expected = keccak256("enter(address,address,uint256,address,uint256)".as_bytes());
    assert_eq!(IVault::enterCall::SELECTOR, expected[..4]);
}

#[test]
fn test_exit_selector_matches_signature() {
    let expected = keccak256("exit(address,address,uint256,address,uint256)".as_bytes());
    assert_eq!(IVault::exitCall::SELECTOR, expected[..4]);
}

#[test]
fn test_enter_calldata_encoding() {
    let asset_amount = U256::from(10u64);
    let share_amount = U256::from(7u64);

    let call = IVault::enterCall {
        depositor: TEST_WALLET,
        asset: TEST_TOKEN,
        assetAmount: asset_amount,
        beneficiary: TEST_WALLET,
        shareAmount: share_amount,
    };
    let calldata = call.abi_encode();

    // 4 (selector) + 5 * 32 (args) = 164 bytes
    assert_eq!(calldata.len(), 164);

    // depositor at words 0, asset at word 1 (addresses left-padded)
    assert_eq!(Address::from_slice(&calldata[16..36]), TEST_WALLET);
    assert_eq!(Address::from_slice(&calldata[48..68]), TEST_TOKEN);
    // assetAmount at word 2
    assert_eq!(U256::from_be_slice(&calldata[68..100]), asset_amount);
    // beneficiary at word 3
    assert_eq!(Address::from_slice(&calldata[112..132]), TEST_WALLET);
    // shareAmount at word 4
    assert_eq!(U256::from_be_slice(&calldata[132..164]), share_amount);
}

#[test]
fn test_exit_calldata_encoding() {
    let asset_amount = U256::from(9u64);
    let share_amount = U256::from(10u64);

    let call = IVault::exitCall {
        withdrawer: TEST_WALLET,
        asset: TEST_TOKEN,
        assetAmount: asset_amount,
        beneficiary: TEST_WALLET,
        shareAmount: share_amount,
    };
    let calldata = call.abi_encode();

    assert_eq!(calldata.len(), 164);
    assert_eq!(U256::from_be_slice(&calldata[68..100]), asset_amount);
    assert_eq!(U256::from_be_slice(&calldata[132..164]), share_amount);
}

#[test]
fn test_enter_large_share_amount() {
    // Large values must encode without truncation.
    let share_amount = U256::MAX / U256::from(2);
    let call = IVault::enterCall {
        depositor: TEST_WALLET,
        asset: TEST_TOKEN,
        assetAmount: U256::from(1u64),
        beneficiary: TEST_WALLET,
        shareAmount: share_amount,
    };
    let calldata = call.abi_encode();
    assert_eq!(U256::from_be_slice(&calldata[132..164]), share_amount);
}

// ============================================================================
// ERC-20 Calldata Tests
// ============================================================================

#[test]
fn test_approve_calldata() {
    let amount = U256::from(10u64);
    let call = IERC20::approveCall {
        spender: TEST_VAULT,
        amount,
    };
    let calldata = call.abi_encode();

    assert_eq!(&calldata[0..4], &APPROVE_SELECTOR);
    assert_eq!(calldata.len(), 68);
    assert_eq!(Address::from_slice(&calldata[16..36]), TEST_VAULT);
    assert_eq!(U256::from_be_slice(&calldata[36..68]), amount);
}

#[test]
fn test_transfer_calldata() {
    let amount = U256::from(1_000_000u64);
    let call = IERC20::transferCall {
        to: TEST_WALLET,
        amount,
    };
    let calldata = call.abi_encode();

    assert_eq!(&calldata[0..4], &TRANSFER_SELECTOR);
    assert_eq!(calldata.len(), 68);
    assert_eq!(Address::from_slice(&calldata[16..36]), TEST_WALLET);
    assert_eq!(U256::from_be_slice(&calldata[36..68]), amount);
}

#[test]
fn test_balance_of_calldata() {
    let call = IERC20::balanceOfCall {
        account: TEST_WALLET,
    };
    let calldata = call.abi_encode();

    assert_eq!(&calldata[0..4], &BALANCE_OF_SELECTOR);
    assert_eq!(calldata.len(), 36);
}
