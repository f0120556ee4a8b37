//! # Runtime Configuration
//!
//! Everything deployment-specific comes from `STAKEDASH_*` environment
//! variables, with defaults that match a local development node.

use std::env;

/// Application configuration resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// JSON-RPC endpoint of the wallet-agent node.
    pub rpc_url: String,
    /// Staking contract address (spender for approvals, NFT custodian).
    pub staking_address: String,
    /// Staking token contract address.
    pub token_address: String,
    /// NFT certificate contract address.
    pub nft_address: String,
    /// Account allowed to change the base APR.
    pub admin_address: String,
    /// Chain id the dashboard is built against; anything else is rejected.
    pub expected_chain_id: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            rpc_url: env_or("STAKEDASH_RPC_URL", "http://127.0.0.1:8545"),
            staking_address: env_or(
                "STAKEDASH_STAKING_ADDRESS",
                "0x5FbDB2315678afecb367f032d93F642f64180aa3",
            ),
            token_address: env_or(
                "STAKEDASH_TOKEN_ADDRESS",
                "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512",
            ),
            nft_address: env_or(
                "STAKEDASH_NFT_ADDRESS",
                "0x9fE46736679d2D9a65F0992F2272dE9f3c7fa6e0",
            ),
            admin_address: env_or(
                "STAKEDASH_ADMIN_ADDRESS",
                "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
            ),
            expected_chain_id: env::var("STAKEDASH_CHAIN_ID")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(97),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_or_falls_back_to_default() {
        assert_eq!(
            env_or("STAKEDASH_TEST_UNSET_VAR", "http://127.0.0.1:8545"),
            "http://127.0.0.1:8545"
        );
    }

    #[test]
    fn defaults_describe_a_local_deployment() {
        let config = AppConfig::from_env();
        assert!(config.rpc_url.starts_with("http"));
        assert!(config.staking_address.starts_with("0x"));
        assert!(config.admin_address.starts_with("0x"));
        assert!(config.expected_chain_id > 0);
    }
}
