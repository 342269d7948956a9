//! The signer capability the engine drives, and an adapter for alloy providers.
//!
//! Every method is a network round trip. The engine awaits them strictly in
//! order and never calls two at once for the same execution.

use crate::contracts::IERC20;
use crate::types::{Address, Bytes, B256, U256};
use alloy::providers::{PendingTransactionBuilder, Provider};
use alloy::rpc::types::TransactionRequest;
use alloy::transports::{RpcError, TransportErrorKind};
use std::future::Future;

/// Errors reported by a signer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignerError {
    /// The node executed the call and it reverted.
    #[error("execution reverted: {0}")]
    Reverted(String),

    /// The request never got a usable answer from the node.
    #[error("transport error: {0}")]
    Transport(String),

    /// Signing, broadcast or confirmation failed.
    #[error("transaction failed: {0}")]
    Failed(String),
}

/// JSON-RPC error code nodes use for execution reverts.
const EXECUTION_REVERTED_CODE: i64 = 3;

impl From<RpcError<TransportErrorKind>> for SignerError {
    fn from(err: RpcError<TransportErrorKind>) -> Self {
        let Some(payload) = err.as_error_resp() else {
            return SignerError::Transport(err.to_string());
        };
        let message = payload.message.to_string();
        if payload.code == EXECUTION_REVERTED_CODE
            || message.to_ascii_lowercase().contains("execution reverted")
        {
            SignerError::Reverted(message)
        } else {
            // Node rejected the request: funds, nonce, fee caps
            SignerError::Failed(message)
        }
    }
}

/// Wallet and chain access needed to execute a swap.
pub trait SwapSigner: Send + Sync {
    /// Address that signs and pays for transactions.
    fn address(&self) -> Address;

    /// ERC-20 allowance granted by `owner` to `spender`.
    fn allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> impl Future<Output = Result<U256, SignerError>> + Send;

    /// Broadcast `approve(spender, amount)` on `token`. Returns the transaction hash.
    fn send_approval(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
    ) -> impl Future<Output = Result<B256, SignerError>> + Send;

    /// Resolve once the transaction is mined successfully.
    fn wait_for_confirmation(
        &self,
        tx_hash: B256,
    ) -> impl Future<Output = Result<(), SignerError>> + Send;

    /// Execute the transaction against current state without broadcasting it.
    fn simulate(
        &self,
        tx: &TransactionRequest,
    ) -> impl Future<Output = Result<Bytes, SignerError>> + Send;

    fn estimate_gas(
        &self,
        tx: &TransactionRequest,
    ) -> impl Future<Output = Result<u64, SignerError>> + Send;

    /// Sign and broadcast. Returns the transaction hash.
    fn send_transaction(
        &self,
        tx: TransactionRequest,
    ) -> impl Future<Output = Result<B256, SignerError>> + Send;
}

/// [`SwapSigner`] backed by an alloy provider with a wallet attached.
#[derive(Debug, Clone)]
pub struct ProviderSigner<P> {
    provider: P,
    from: Address,
}

impl<P: Provider + Clone> ProviderSigner<P> {
    /// `from` must be an account the provider's wallet can sign for.
    pub fn new(provider: P, from: Address) -> Self {
        Self { provider, from }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P: Provider + Clone> SwapSigner for ProviderSigner<P> {
    fn address(&self) -> Address {
        self.from
    }

    async fn allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256, SignerError> {
        IERC20::new(token, self.provider.clone())
            .allowance(owner, spender)
            .call()
            .await
            .map_err(|e| SignerError::Transport(e.to_string()))
    }

    async fn send_approval(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
    ) -> Result<B256, SignerError> {
        let pending = IERC20::new(token, self.provider.clone())
            .approve(spender, amount)
            .from(self.from)
            .send()
            .await
            .map_err(|e| SignerError::Failed(e.to_string()))?;
        Ok(*pending.tx_hash())
    }

    async fn wait_for_confirmation(&self, tx_hash: B256) -> Result<(), SignerError> {
        let receipt = PendingTransactionBuilder::new(self.provider.root().clone(), tx_hash)
            .get_receipt()
            .await
            .map_err(|e| SignerError::Failed(e.to_string()))?;

        if !receipt.status() {
            return Err(SignerError::Reverted(format!(
                "transaction {tx_hash} mined with failed status"
            )));
        }
        Ok(())
    }

    async fn simulate(&self, tx: &TransactionRequest) -> Result<Bytes, SignerError> {
        Ok(self.provider.call(tx.clone()).await?)
    }

    async fn estimate_gas(&self, tx: &TransactionRequest) -> Result<u64, SignerError> {
        Ok(self.provider.estimate_gas(tx.clone()).await?)
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<B256, SignerError> {
        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| SignerError::Failed(e.to_string()))?;
        Ok(*pending.tx_hash())
    }
}


#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use parking_lot::Mutex;

    /// A signer call, recorded in the order it was made.
    #[derive(Debug, Clone, PartialEq)]
    pub enum Call {
        Allowance { token: Address, spender: Address },
        Approve { token: Address, spender: Address, amount: U256 },
        Confirm(B256),
        Simulate(TransactionRequest),
        Estimate,
        Send(TransactionRequest),
    }

    pub const APPROVAL_HASH: B256 = B256::repeat_byte(0xa1);
    pub const SWAP_HASH: B256 = B256::repeat_byte(0x5a);

    /// Scripted signer that records every call.
    pub struct MockSigner {
        pub address: Address,
        pub allowance: U256,
        pub gas_estimate: u64,
        pub fail_allowance: bool,
        pub fail_confirmation: bool,
        pub revert_simulation: Option<String>,
        pub fail_estimate: bool,
        pub fail_send: bool,
        calls: Mutex<Vec<Call>>,
    }

    impl MockSigner {
        pub fn new(allowance: U256) -> Self {
            Self {
                address: Address::repeat_byte(0xAA),
                allowance,
                gas_estimate: 100_000,
                fail_allowance: false,
                fail_confirmation: false,
                revert_simulation: None,
                fail_estimate: false,
                fail_send: false,
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> Vec<Call> {
            self.calls.lock().clone()
        }

        fn record(&self, call: Call) {
            self.calls.lock().push(call);
        }
    }

    impl SwapSigner for MockSigner {
        fn address(&self) -> Address {
            self.address
        }

        async fn allowance(
            &self,
            token: Address,
            _owner: Address,
            spender: Address,
        ) -> Result<U256, SignerError> {
            self.record(Call::Allowance { token, spender });
            if self.fail_allowance {
                return Err(SignerError::Transport("connection refused".to_string()));
            }
            Ok(self.allowance)
        }

        async fn send_approval(
            &self,
            token: Address,
            spender: Address,
            amount: U256,
        ) -> Result<B256, SignerError> {
            self.record(Call::Approve {
                token,
                spender,
                amount,
            });
            Ok(APPROVAL_HASH)
        }

        async fn wait_for_confirmation(&self, tx_hash: B256) -> Result<(), SignerError> {
            self.record(Call::Confirm(tx_hash));
            if self.fail_confirmation {
                return Err(SignerError::Reverted("approve reverted".to_string()));
            }
            Ok(())
        }

        async fn simulate(&self, tx: &TransactionRequest) -> Result<Bytes, SignerError> {
            self.record(Call::Simulate(tx.clone()));
            match &self.revert_simulation {
                Some(reason) => Err(SignerError::Reverted(reason.clone())),
                None => Ok(Bytes::new()),
            }
        }

        async fn estimate_gas(&self, _tx: &TransactionRequest) -> Result<u64, SignerError> {
            self.record(Call::Estimate);
            if self.fail_estimate {
                return Err(SignerError::Transport("gas required exceeds allowance".to_string()));
            }
            Ok(self.gas_estimate)
        }

        async fn send_transaction(&self, tx: TransactionRequest) -> Result<B256, SignerError> {
            self.record(Call::Send(tx));
            if self.fail_send {
                return Err(SignerError::Failed("nonce too low".to_string()));
            }
            Ok(SWAP_HASH)
        }
    }
}
