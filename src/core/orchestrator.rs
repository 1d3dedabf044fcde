//! Drives a single conversion from user input to a terminal result.
//!
//! State moves `Idle -> Loading -> {Success | Fail | Error}`. A terminal state
//! is reset to `Idle` by the next user action. Only the newest request is ever
//! published: starting a request aborts the previous one, and a result that
//! still arrives from an older request is dropped.

use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::connectivity::Connectivity;
use super::conversion::{
    ApiKey, ConversionClient, ConversionRequest, ConversionResult, ValidationError,
};
use super::currency::CurrencyCode;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConversionState {
    #[default]
    Idle,
    Loading,
    Success {
        converted_amount: Decimal,
    },
    Fail {
        reason: String,
    },
    Error {
        cause: String,
    },
}

impl ConversionState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ConversionState::Success { .. }
                | ConversionState::Fail { .. }
                | ConversionState::Error { .. }
        )
    }
}

impl From<ConversionResult> for ConversionState {
    fn from(result: ConversionResult) -> Self {
        match result {
            ConversionResult::Loading => ConversionState::Loading,
            ConversionResult::Success { converted_amount } => {
                ConversionState::Success { converted_amount }
            }
            ConversionResult::Fail { reason } => ConversionState::Fail { reason },
            ConversionResult::Error { cause } => ConversionState::Error { cause },
        }
    }
}

/// Handle to one in-flight conversion.
#[derive(Debug)]
pub struct PendingConversion {
    generation: u64,
    receiver: oneshot::Receiver<ConversionResult>,
}

impl PendingConversion {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The terminal result, or `None` if a newer request superseded this one.
    pub async fn outcome(self) -> Option<ConversionResult> {
        self.receiver.await.ok()
    }
}

pub struct ConversionOrchestrator {
    client: Arc<dyn ConversionClient>,
    connectivity: Arc<dyn Connectivity>,
    api_key: ApiKey,
    state: Arc<watch::Sender<ConversionState>>,
    converted_amount: Arc<watch::Sender<Option<Decimal>>>,
    generation: Arc<AtomicU64>,
    in_flight: Option<JoinHandle<()>>,
}

impl ConversionOrchestrator {
    pub fn new(
        client: Arc<dyn ConversionClient>,
        connectivity: Arc<dyn Connectivity>,
        api_key: ApiKey,
    ) -> Self {
        let (state, _) = watch::channel(ConversionState::Idle);
        let (converted_amount, _) = watch::channel(None);
        Self {
            client,
            connectivity,
            api_key,
            state: Arc::new(state),
            converted_amount: Arc::new(converted_amount),
            generation: Arc::new(AtomicU64::new(0)),
            in_flight: None,
        }
    }

    pub fn state(&self) -> ConversionState {
        self.state.borrow().clone()
    }

    pub fn subscribe_state(&self) -> watch::Receiver<ConversionState> {
        self.state.subscribe()
    }

    /// Last successfully converted amount, independent of the request state.
    pub fn converted_amount(&self) -> Option<Decimal> {
        *self.converted_amount.borrow()
    }

    pub fn subscribe_converted_amount(&self) -> watch::Receiver<Option<Decimal>> {
        self.converted_amount.subscribe()
    }

    /// Consults the injected connectivity check, then behaves like
    /// [`Self::request_conversion`]. An empty amount is rejected without
    /// touching the network.
    pub async fn convert(
        &mut self,
        amount_text: &str,
        from: CurrencyCode,
        to: CurrencyCode,
    ) -> Result<PendingConversion, ValidationError> {
        if let Err(e) = check_amount_present(amount_text) {
            self.reset_terminal_state();
            return Err(e);
        }
        let network_available = self.connectivity.is_available().await;
        self.request_conversion(amount_text, from, to, network_available)
    }

    /// Validates input and starts a conversion. Must be called inside a tokio
    /// runtime. On rejection nothing is sent and the state does not go to
    /// `Loading`.
    pub fn request_conversion(
        &mut self,
        amount_text: &str,
        from: CurrencyCode,
        to: CurrencyCode,
        network_available: bool,
    ) -> Result<PendingConversion, ValidationError> {
        self.reset_terminal_state();

        let request = self.validate(amount_text, from, to, network_available)?;

        if let Some(previous) = self.in_flight.take() {
            if !previous.is_finished() {
                debug!("Aborting superseded conversion");
                previous.abort();
            }
        }

        // Bumped under the state lock so a finishing task can never publish
        // between the bump and `Loading`.
        let mut generation = 0;
        self.state.send_modify(|state| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            *state = ConversionState::Loading;
        });
        info!(%from, %to, generation, "Starting conversion");

        let (tx, rx) = oneshot::channel();
        let client = Arc::clone(&self.client);
        let state = Arc::clone(&self.state);
        let converted_amount = Arc::clone(&self.converted_amount);
        let latest = Arc::clone(&self.generation);

        self.in_flight = Some(tokio::spawn(async move {
            let result = client.convert(&request).await;

            let mut published = false;
            state.send_if_modified(|current| {
                if latest.load(Ordering::SeqCst) != generation {
                    return false;
                }
                if let ConversionResult::Success { converted_amount: amount } = &result {
                    converted_amount.send_replace(Some(*amount));
                }
                *current = result.clone().into();
                published = true;
                true
            });

            if !published {
                debug!(generation, "Dropping result of superseded conversion");
                return;
            }
            match &result {
                ConversionResult::Error { cause } => warn!(cause = %cause, "Conversion failed"),
                other => debug!(result = ?other, "Conversion finished"),
            }
            let _ = tx.send(result);
        }));

        Ok(PendingConversion {
            generation,
            receiver: rx,
        })
    }

    fn validate(
        &self,
        amount_text: &str,
        from: CurrencyCode,
        to: CurrencyCode,
        network_available: bool,
    ) -> Result<ConversionRequest, ValidationError> {
        check_amount_present(amount_text)?;
        if !network_available {
            return Err(ValidationError::Offline);
        }
        let amount = Decimal::from_str(amount_text.trim())
            .map_err(|_| ValidationError::InvalidAmount(amount_text.to_string()))?;
        ConversionRequest::new(self.api_key.clone(), from, to, amount)
    }

    fn reset_terminal_state(&self) {
        self.state.send_if_modified(|state| {
            if state.is_terminal() {
                *state = ConversionState::Idle;
                true
            } else {
                false
            }
        });
    }
}

/// First validation step; needs neither the network nor a parsed amount.
fn check_amount_present(amount_text: &str) -> Result<(), ValidationError> {
    if amount_text.is_empty() || amount_text == "0" {
        return Err(ValidationError::EmptyAmount);
    }
    Ok(())
}

impl Drop for ConversionOrchestrator {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}
