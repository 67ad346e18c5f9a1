//! Scripted gateway for orchestrator and state machine tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use futures::channel::oneshot;
use serde_json::Value;

use super::gateway::{EndpointGateway, FetchError};

type Reply = Result<Value, FetchError>;

/// Answers from a fixed table; endpoints without an entry return 404.
///
/// [`ScriptedGateway::defer`] queues a one-shot reply that the test resolves
/// later, which lets a test choose the completion order of concurrent loads.
#[derive(Default)]
pub struct ScriptedGateway {
    responses: RefCell<HashMap<String, Reply>>,
    deferred: RefCell<HashMap<String, VecDeque<oneshot::Receiver<Reply>>>>,
    calls: RefCell<Vec<String>>,
    posted: RefCell<Vec<(String, Value)>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, endpoint: &str, reply: Reply) {
        self.responses
            .borrow_mut()
            .insert(endpoint.to_string(), reply);
    }

    /// Next fetch of `endpoint` waits until the returned sender fires.
    pub fn defer(&self, endpoint: &str) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.deferred
            .borrow_mut()
            .entry(endpoint.to_string())
            .or_default()
            .push_back(rx);
        tx
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Bodies received by `post_json`, in call order
    pub fn posted(&self) -> Vec<(String, Value)> {
        self.posted.borrow().clone()
    }
}

#[async_trait(?Send)]
impl EndpointGateway for ScriptedGateway {
    async fn fetch_json(&self, endpoint: &str) -> Result<Value, FetchError> {
        self.calls.borrow_mut().push(endpoint.to_string());

        let pending = self
            .deferred
            .borrow_mut()
            .get_mut(endpoint)
            .and_then(VecDeque::pop_front);
        if let Some(rx) = pending {
            return rx
                .await
                .unwrap_or_else(|_| Err(FetchError::network(endpoint, "reply dropped")));
        }

        self.responses
            .borrow()
            .get(endpoint)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::http_status(endpoint, 404)))
    }

    async fn post_json(&self, endpoint: &str, body: &Value) -> Result<Value, FetchError> {
        self.posted
            .borrow_mut()
            .push((endpoint.to_string(), body.clone()));
        self.fetch_json(endpoint).await
    }
}
