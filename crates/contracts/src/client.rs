//! Chain client over a forked test chain's JSON-RPC endpoint.
//!
//! The client owns two providers: a wallet-backed one for transactions
//! signed by the test wallet, and an unsigned one for chain-control calls
//! and impersonated transactions. Impersonation is exposed as a scoped
//! session so that at most one identity is impersonated at a time.

use std::sync::atomic::{AtomicBool, Ordering};

use alloy::{
    network::EthereumWallet,
    primitives::Address,
    providers::{ext::AnvilApi, ProviderBuilder},
    rpc::types::TransactionReceipt,
    signers::local::PrivateKeySigner,
};

use crate::error::{ContractError, Result};
use crate::provider::{ControlProvider, HttpProvider};

/// Client for reads, writes and chain-control calls against a forked chain.
pub struct ChainClient {
    pub(crate) provider: HttpProvider,
    pub(crate) control: ControlProvider,
    signer_address: Address,
    impersonating: AtomicBool,
}

impl ChainClient {
    /// Create a new chain client.
    pub fn new(rpc_url: &str, private_key: &str) -> Result<Self> {
        let signer: PrivateKeySigner = private_key
            .parse()
            .map_err(|_| ContractError::InvalidPrivateKey)?;
        let signer_address = signer.address();
        let wallet = EthereumWallet::from(signer);

        let url: url::Url = rpc_url
            .parse()
            .map_err(|e| ContractError::RpcConnection(format!("{}", e)))?;

        let provider = ProviderBuilder::new().wallet(wallet).connect_http(url.clone());
        let control = ProviderBuilder::new().connect_http(url);

        Ok(Self {
            provider,
            control,
            signer_address,
            impersonating: AtomicBool::new(false),
        })
    }

    /// Returns the test wallet's address.
    pub fn signer_address(&self) -> Address {
        self.signer_address
    }

    /// Begin impersonating `address` on the test chain.
    ///
    /// The returned session must be ended with [`ImpersonationSession::end`]
    /// after exactly one privileged operation. A second session while one is
    /// live is a discipline violation and is rejected.
    pub async fn impersonate(&self, address: Address) -> Result<ImpersonationSession<'_>> {
        self.acquire_session(address)?;

        if let Err(e) = self.control.anvil_impersonate_account(address).await {
            self.release_session();
            return Err(ContractError::ControlChannel(format!(
                "failed to impersonate {}: {} (is this a forked test chain?)",
                address, e
            )));
        }

        Ok(ImpersonationSession {
            client: self,
            address,
        })
    }

    /// Marks a session as active, rejecting overlap.
    fn acquire_session(&self, address: Address) -> Result<()> {
        if self
            .impersonating
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(ContractError::ControlChannel(format!(
                "impersonation session already active, cannot impersonate {}",
                address
            )));
        }
        Ok(())
    }

    fn release_session(&self) {
        self.impersonating.store(false, Ordering::SeqCst);
    }
}

/// A scoped impersonation capability: the chain accepts instructions as if
/// originating from the session's address until [`end`](Self::end) is called.
pub struct ImpersonationSession<'a> {
    client: &'a ChainClient,
    address: Address,
}

impl ImpersonationSession<'_> {
    /// The address currently being impersonated.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Stop impersonating and close the session.
    pub async fn end(self) -> Result<()> {
        self.client
            .control
            .anvil_stop_impersonating_account(self.address)
            .await
            .map_err(|e| {
                ContractError::ControlChannel(format!(
                    "failed to stop impersonating {}: {}",
                    self.address, e
                ))
            })
    }
}

impl Drop for ImpersonationSession<'_> {
    fn drop(&mut self) {
        // Frees the slot even if the run aborts between begin and end.
        self.client.release_session();
    }
}

/// Checks a confirmed receipt for reversion.
pub(crate) fn confirm_receipt(
    receipt: TransactionReceipt,
    what: &str,
) -> Result<TransactionReceipt> {
    if !receipt.status() {
        return Err(ContractError::TransactionFailed(format!(
            "{} reverted in tx {:#x}",
            what, receipt.transaction_hash
        )));
    }
    Ok(receipt)
}
