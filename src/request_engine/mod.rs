pub mod gateway;
pub mod state;
#[cfg(test)]
mod tests;

use anyhow::anyhow;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::prompt::{self, SimulationParams};

use gateway::GenerationGateway;
use state::{CANCELLED_CAUSE, RequestState, format_error_message};

/// Observer invoked synchronously on every state transition. The rendering
/// layer subscribes here; observers must never call back into the controller.
pub trait StateObserver: Send {
    fn state_changed(&self, state: &RequestState);
}

/// Handle for one spawned exchange attempt. Cancelling aborts the in-flight
/// generation call; the attempt then reconciles to `Error`.
pub struct ExchangeHandle {
    token: CancellationToken,
    join: JoinHandle<()>,
}

impl ExchangeHandle {
    /// Clone of the token that aborts this attempt when cancelled.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub async fn finished(self) {
        let _ = self.join.await;
    }
}

/// Owns the request state machine. One controller per process; the state is
/// created `Idle` and re-entered on each new attempt, never destroyed.
pub struct ExchangeController {
    gateway: Arc<dyn GenerationGateway>,
    params: SimulationParams,
    state: Mutex<RequestState>,
    observers: Mutex<Vec<Box<dyn StateObserver>>>,
}

impl ExchangeController {
    pub fn new(gateway: Arc<dyn GenerationGateway>, params: SimulationParams) -> Self {
        Self {
            gateway,
            params,
            state: Mutex::new(RequestState::Idle),
            observers: Mutex::new(Vec::new()),
        }
    }

    pub fn subscribe(&self, observer: Box<dyn StateObserver>) {
        self.observers
            .lock()
            .expect("observer list poisoned")
            .push(observer);
    }

    pub fn state(&self) -> RequestState {
        self.state.lock().expect("request state poisoned").clone()
    }

    /// Starts a new exchange attempt. Returns `None` without issuing a
    /// request when an attempt is already in flight; the check and the
    /// transition to `Loading` happen atomically, so at most one `Loading`
    /// exists at any instant.
    pub fn start(self: &Arc<Self>) -> Option<ExchangeHandle> {
        {
            let mut state = self.state.lock().expect("request state poisoned");
            if state.is_loading() {
                debug!("start rejected: exchange already in flight");
                return None;
            }
            debug!(from = state.label(), to = "loading", "request state transition");
            *state = RequestState::Loading;
        }
        self.notify(&RequestState::Loading);

        let token = CancellationToken::new();
        let join = tokio::spawn(Arc::clone(self).drive(token.clone()));
        Some(ExchangeHandle { token, join })
    }

    async fn drive(self: Arc<Self>, token: CancellationToken) {
        let rendered = match prompt::render(&self.params) {
            Ok(rendered) => rendered,
            Err(err) => {
                self.transition(RequestState::Error {
                    message: format_error_message(&err),
                });
                return;
            }
        };

        let outcome = tokio::select! {
            result = self.gateway.generate(&rendered.system, &rendered.user) => result,
            _ = token.cancelled() => Err(anyhow!(CANCELLED_CAUSE)),
        };

        match outcome {
            Ok(text) => self.transition(RequestState::Success { text }),
            Err(err) => self.transition(RequestState::Error {
                message: format_error_message(&err),
            }),
        }
    }

    fn transition(&self, next: RequestState) {
        {
            let mut state = self.state.lock().expect("request state poisoned");
            debug!(from = state.label(), to = next.label(), "request state transition");
            *state = next.clone();
        }
        self.notify(&next);
    }

    fn notify(&self, state: &RequestState) {
        let observers = self.observers.lock().expect("observer list poisoned");
        for observer in observers.iter() {
            observer.state_changed(state);
        }
    }
}
