//! Fake transport that records every request it receives

use async_trait::async_trait;
use bedrock_broker::core::transport::{
    BedrockTransport, InvokeModelRequest, InvokeModelResponse, TransportError,
};
use bytes::Bytes;
use serde_json::Value;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
enum Reply {
    Body(Bytes),
    Failure(TransportError),
}

/// Answers every call the same way and keeps the requests for inspection
#[derive(Debug, Clone)]
pub struct RecordingTransport {
    reply: Reply,
    requests: Arc<Mutex<Vec<InvokeModelRequest>>>,
}

impl RecordingTransport {
    /// Reply with `body` as the raw response
    pub fn replying(body: impl Into<Bytes>) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Body(body.into()),
            requests: Arc::default(),
        })
    }

    /// Fail every call with `error`
    pub fn failing(error: TransportError) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Failure(error),
            requests: Arc::default(),
        })
    }

    pub fn requests(&self) -> Vec<InvokeModelRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Body of the only request, parsed as JSON
    pub fn single_payload(&self) -> Value {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one backend call");
        serde_json::from_slice(&requests[0].body).expect("request body is JSON")
    }
}

#[async_trait]
impl BedrockTransport for RecordingTransport {
    async fn invoke_model(
        &self,
        request: InvokeModelRequest,
    ) -> Result<InvokeModelResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            Reply::Body(body) => Ok(InvokeModelResponse::new(body.clone())),
            Reply::Failure(error) => Err(error.clone()),
        }
    }
}
