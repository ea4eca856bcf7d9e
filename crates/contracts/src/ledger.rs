//! Read-only view and privileged operations over an ERC20-like asset.

use alloy::{
    primitives::{Address, U256},
    rpc::types::TransactionReceipt,
};

use crate::client::{confirm_receipt, ChainClient};
use crate::erc20::IERC20;
use crate::error::{ContractError, Result};

/// Point-in-time accessor for an ERC20 token. Every call re-queries the
/// chain; nothing is cached.
pub struct AssetLedger<'a> {
    client: &'a ChainClient,
    token: Address,
}

impl<'a> AssetLedger<'a> {
    /// Create a ledger view over `token`.
    pub fn new(client: &'a ChainClient, token: Address) -> Self {
        Self { client, token }
    }

    /// The token address this view is bound to.
    pub fn token(&self) -> Address {
        self.token
    }

    /// Get the token balance of an address.
    pub async fn balance_of(&self, holder: Address) -> Result<U256> {
        let contract = IERC20::new(self.token, &self.client.provider);
        contract.balanceOf(holder).call().await.map_err(|e| {
            ContractError::TransactionFailed(format!("Failed to get balance: {}", e))
        })
    }

    /// Get the token's decimal precision.
    pub async fn decimals(&self) -> Result<u8> {
        let contract = IERC20::new(self.token, &self.client.provider);
        contract.decimals().call().await.map_err(|e| {
            ContractError::TransactionFailed(format!("Failed to get decimals: {}", e))
        })
    }

    /// Get the token's symbol.
    pub async fn symbol(&self) -> Result<String> {
        let contract = IERC20::new(self.token, &self.client.provider);
        contract
            .symbol()
            .call()
            .await
            .map_err(|e| ContractError::TransactionFailed(format!("Failed to get symbol: {}", e)))
    }

    /// Approve `spender` to pull `amount` from the test wallet.
    /// Blocks until the transaction is included.
    pub async fn approve(&self, spender: Address, amount: U256) -> Result<TransactionReceipt> {
        let contract = IERC20::new(self.token, &self.client.provider);
        let pending = contract.approve(spender, amount).send().await.map_err(|e| {
            ContractError::TransactionFailed(format!("Failed to send approve: {}", e))
        })?;
        let receipt = pending.get_receipt().await.map_err(|e| {
            ContractError::TransactionFailed(format!("Failed to confirm approve: {}", e))
        })?;
        confirm_receipt(receipt, "approve")
    }

    /// Transfer `amount` from `sender` to `to`, with `sender` as the
    /// transaction origin. `sender` must currently be impersonated; the
    /// test chain signs on its behalf.
    pub async fn transfer_as(
        &self,
        sender: Address,
        to: Address,
        amount: U256,
    ) -> Result<TransactionReceipt> {
        let contract = IERC20::new(self.token, &self.client.control);
        let pending = contract
            .transfer(to, amount)
            .from(sender)
            .send()
            .await
            .map_err(|e| {
                ContractError::TransactionFailed(format!("Failed to send transfer: {}", e))
            })?;
        let receipt = pending.get_receipt().await.map_err(|e| {
            ContractError::TransactionFailed(format!("Failed to confirm transfer: {}", e))
        })?;
        confirm_receipt(receipt, "transfer")
    }
}
