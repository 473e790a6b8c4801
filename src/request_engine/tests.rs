use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{Result, anyhow};
use tokio::sync::Notify;

use super::gateway::GenerationGateway;
use super::state::{CANCELLED_CAUSE, ERROR_MESSAGE_PREFIX, RequestState};
use super::{ExchangeController, StateObserver};
use crate::prompt::SimulationParams;
use crate::render;

enum Behavior {
    Reply(&'static str),
    Fail(&'static str),
    WaitThenReply(Arc<Notify>, &'static str),
    Pending,
}

struct StubGateway {
    behavior: Behavior,
    calls: AtomicUsize,
}

impl StubGateway {
    fn new(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl GenerationGateway for StubGateway {
    fn generate<'a>(
        &'a self,
        _system_prompt: &'a str,
        _user_prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            Behavior::Reply(text) => {
                let text = text.to_string();
                Box::pin(async move { Ok(text) })
            }
            Behavior::Fail(cause) => {
                let cause = *cause;
                Box::pin(async move { Err(anyhow!(cause)) })
            }
            Behavior::WaitThenReply(gate, text) => {
                let gate = Arc::clone(gate);
                let text = text.to_string();
                Box::pin(async move {
                    gate.notified().await;
                    Ok(text)
                })
            }
            Behavior::Pending => Box::pin(std::future::pending::<Result<String>>()),
        }
    }
}

struct Recorder(Arc<Mutex<Vec<RequestState>>>);

impl StateObserver for Recorder {
    fn state_changed(&self, state: &RequestState) {
        self.0.lock().unwrap().push(state.clone());
    }
}

fn controller_with(gateway: Arc<StubGateway>) -> Arc<ExchangeController> {
    Arc::new(ExchangeController::new(gateway, SimulationParams::default()))
}

#[tokio::test]
async fn success_payload_is_stored_verbatim() {
    let gateway = StubGateway::new(Behavior::Reply("<p>Key established</p>"));
    let controller = controller_with(Arc::clone(&gateway));

    assert_eq!(controller.state(), RequestState::Idle);
    let handle = controller.start().expect("idle controller must accept start");
    handle.finished().await;

    assert_eq!(
        controller.state(),
        RequestState::Success {
            text: "<p>Key established</p>".to_string()
        }
    );
    assert_eq!(gateway.call_count(), 1);
}

#[tokio::test]
async fn failure_maps_to_prefixed_error_and_fixed_fragment() {
    let gateway = StubGateway::new(Behavior::Fail("timeout"));
    let controller = controller_with(gateway);

    controller.start().unwrap().finished().await;

    let state = controller.state();
    assert_eq!(
        state,
        RequestState::Error {
            message: "Failed to establish quantum link. Error: timeout".to_string()
        }
    );
    assert_eq!(render::render(&state), render::FAILURE_FRAGMENT);
}

#[tokio::test]
async fn reentrant_start_is_rejected_while_loading() {
    let gate = Arc::new(Notify::new());
    let gateway = StubGateway::new(Behavior::WaitThenReply(Arc::clone(&gate), "<p>ok</p>"));
    let controller = controller_with(Arc::clone(&gateway));

    let handle = controller.start().expect("first start must be accepted");
    assert!(controller.state().is_loading());
    assert!(controller.start().is_none());
    assert!(controller.start().is_none());

    gate.notify_one();
    handle.finished().await;

    assert_eq!(gateway.call_count(), 1);
    assert!(matches!(controller.state(), RequestState::Success { .. }));
}

#[tokio::test]
async fn retrigger_after_success_passes_through_loading_again() {
    let gateway = StubGateway::new(Behavior::Reply("<p>narrative</p>"));
    let controller = controller_with(Arc::clone(&gateway));
    let recorded = Arc::new(Mutex::new(Vec::new()));
    controller.subscribe(Box::new(Recorder(Arc::clone(&recorded))));

    controller.start().unwrap().finished().await;
    controller.start().unwrap().finished().await;

    let states = recorded.lock().unwrap();
    assert_eq!(states.len(), 4);
    assert!(states[0].is_loading());
    assert!(matches!(states[1], RequestState::Success { .. }));
    assert!(states[2].is_loading());
    assert!(matches!(states[3], RequestState::Success { .. }));
    assert_eq!(gateway.call_count(), 2);
}

#[tokio::test]
async fn error_path_notifies_loading_then_error() {
    let gateway = StubGateway::new(Behavior::Fail("service unavailable"));
    let controller = controller_with(gateway);
    let recorded = Arc::new(Mutex::new(Vec::new()));
    controller.subscribe(Box::new(Recorder(Arc::clone(&recorded))));

    controller.start().unwrap().finished().await;

    let states = recorded.lock().unwrap();
    assert_eq!(states.len(), 2);
    assert!(states[0].is_loading());
    assert!(matches!(states[1], RequestState::Error { .. }));
}

#[tokio::test]
async fn cancellation_reconciles_to_error_and_allows_restart() {
    let gateway = StubGateway::new(Behavior::Pending);
    let controller = controller_with(gateway);

    let handle = controller.start().unwrap();
    handle.cancellation_token().cancel();
    handle.finished().await;

    let RequestState::Error { message } = controller.state() else {
        panic!("cancelled attempt must settle in Error state");
    };
    assert!(message.starts_with(ERROR_MESSAGE_PREFIX));
    assert!(message.contains(CANCELLED_CAUSE));

    let restarted = controller
        .start()
        .expect("controller must accept a new start after error");
    restarted.cancellation_token().cancel();
    restarted.finished().await;
}
