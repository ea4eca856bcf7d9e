//! Provider type definitions for the chain client.

use alloy::{
    network::EthereumWallet,
    providers::{
        fillers::{
            BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller,
            WalletFiller,
        },
        Identity, RootProvider,
    },
};

/// The recommended fillers type from `ProviderBuilder::new()`.
pub type RecommendedFillers =
    JoinFill<GasFiller, JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>>;

/// Wallet-backed provider for transactions signed by the test wallet.
/// This matches what `ProviderBuilder::new().wallet().connect_http()` returns.
pub type HttpProvider = FillProvider<
    JoinFill<JoinFill<Identity, RecommendedFillers>, WalletFiller<EthereumWallet>>,
    RootProvider,
>;

/// Unsigned provider for chain-control calls and impersonated transactions.
/// Sends from an impersonated address go through `eth_sendTransaction`, so
/// the test chain signs on the caller's behalf.
pub type ControlProvider = FillProvider<JoinFill<Identity, RecommendedFillers>, RootProvider>;
