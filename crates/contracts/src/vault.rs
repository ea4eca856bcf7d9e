//! Vault interface, metadata snapshot, and privileged enter/exit calls.

use alloy::{
    primitives::{Address, U256},
    rpc::types::TransactionReceipt,
    sol,
};

use crate::client::{confirm_receipt, ChainClient};
use crate::error::{ContractError, Result};

sol! {
    #[sol(rpc)]
    interface IVault {
        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function owner() external view returns (address);
        function balanceOf(address account) external view returns (uint256);
        function enter(address depositor, address asset, uint256 assetAmount, address beneficiary, uint256 shareAmount) external;
        function exit(address withdrawer, address asset, uint256 assetAmount, address beneficiary, uint256 shareAmount) external;
    }
}

/// Vault metadata read fresh at the start of a run.
///
/// `total_supply` is stale the instant any mutating transaction confirms;
/// re-read it through [`VaultClient::total_supply`] before quoting.
#[derive(Debug, Clone)]
pub struct VaultSnapshot {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: U256,
    pub owner: Address,
}

/// View over a single vault contract, plus its owner-gated operations.
pub struct VaultClient<'a> {
    client: &'a ChainClient,
    address: Address,
}

impl<'a> VaultClient<'a> {
    /// Create a vault view over `address`.
    pub fn new(client: &'a ChainClient, address: Address) -> Self {
        Self { client, address }
    }

    /// The vault contract address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Read the vault's metadata in one pass.
    pub async fn metadata(&self) -> Result<VaultSnapshot> {
        let contract = IVault::new(self.address, &self.client.provider);
        let name = contract
            .name()
            .call()
            .await
            .map_err(|e| ContractError::TransactionFailed(format!("Failed to get name: {}", e)))?;
        let symbol = contract.symbol().call().await.map_err(|e| {
            ContractError::TransactionFailed(format!("Failed to get symbol: {}", e))
        })?;
        let decimals = contract.decimals().call().await.map_err(|e| {
            ContractError::TransactionFailed(format!("Failed to get decimals: {}", e))
        })?;
        let total_supply = contract.totalSupply().call().await.map_err(|e| {
            ContractError::TransactionFailed(format!("Failed to get total supply: {}", e))
        })?;
        let owner = contract
            .owner()
            .call()
            .await
            .map_err(|e| ContractError::TransactionFailed(format!("Failed to get owner: {}", e)))?;

        Ok(VaultSnapshot {
            name,
            symbol,
            decimals,
            total_supply,
            owner,
        })
    }

    /// Get the current total share supply.
    pub async fn total_supply(&self) -> Result<U256> {
        let contract = IVault::new(self.address, &self.client.provider);
        contract.totalSupply().call().await.map_err(|e| {
            ContractError::TransactionFailed(format!("Failed to get total supply: {}", e))
        })
    }

    /// Get the share balance of a holder.
    pub async fn share_balance_of(&self, holder: Address) -> Result<U256> {
        let contract = IVault::new(self.address, &self.client.provider);
        contract.balanceOf(holder).call().await.map_err(|e| {
            ContractError::TransactionFailed(format!("Failed to get share balance: {}", e))
        })
    }

    /// Deposit assets and mint shares, signed as the vault owner.
    ///
    /// `owner` must currently be impersonated. The vault trusts the
    /// caller-supplied `share_amount`; a non-owner origin reverts.
    pub async fn enter_as(
        &self,
        owner: Address,
        depositor: Address,
        asset: Address,
        asset_amount: U256,
        beneficiary: Address,
        share_amount: U256,
    ) -> Result<TransactionReceipt> {
        let contract = IVault::new(self.address, &self.client.control);
        let pending = contract
            .enter(depositor, asset, asset_amount, beneficiary, share_amount)
            .from(owner)
            .send()
            .await
            .map_err(|e| {
                ContractError::TransactionFailed(format!("Failed to send enter: {}", e))
            })?;
        let receipt = pending.get_receipt().await.map_err(|e| {
            ContractError::TransactionFailed(format!("Failed to confirm enter: {}", e))
        })?;
        confirm_receipt(receipt, "enter")
    }

    /// Release assets and burn shares, signed as the vault owner.
    pub async fn exit_as(
        &self,
        owner: Address,
        withdrawer: Address,
        asset: Address,
        asset_amount: U256,
        beneficiary: Address,
        share_amount: U256,
    ) -> Result<TransactionReceipt> {
        let contract = IVault::new(self.address, &self.client.control);
        let pending = contract
            .exit(withdrawer, asset, asset_amount, beneficiary, share_amount)
            .from(owner)
            .send()
            .await
            .map_err(|e| ContractError::TransactionFailed(format!("Failed to send exit: {}", e)))?;
        let receipt = pending.get_receipt().await.map_err(|e| {
            ContractError::TransactionFailed(format!("Failed to confirm exit: {}", e))
        })?;
        confirm_receipt(receipt, "exit")
    }
}
