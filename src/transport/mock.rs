use super::Transport;
use crate::models::ApiResponse;
use crate::request::Params;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// One request seen by [`MockTransport`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub endpoint: String,
    pub params: Params,
}

/// In-memory transport that records calls and replays canned envelopes.
#[derive(Clone)]
pub struct MockTransport {
    responses: Arc<Mutex<Vec<ApiResponse>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_response(self, response: ApiResponse) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn with_data(self, data: serde_json::Value) -> Self {
        self.with_response(ApiResponse {
            ret: 0,
            msg: "ok".to_string(),
            data,
        })
    }

    pub fn get_call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn get_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls.lock().unwrap().last().cloned()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(
        &self,
        endpoint: &str,
        app_key: &str,
        params: Params,
    ) -> Result<ApiResponse> {
        if app_key.is_empty() {
            return Err(Error::Configuration("app_key must not be empty".to_string()));
        }

        let mut calls = self.calls.lock().unwrap();
        calls.push(RecordedCall {
            endpoint: endpoint.to_string(),
            params,
        });

        let responses = self.responses.lock().unwrap();
        let response = if responses.is_empty() {
            ApiResponse {
                ret: 0,
                msg: "ok".to_string(),
                data: serde_json::Value::Object(Default::default()),
            }
        } else {
            let index = (calls.len() - 1) % responses.len();
            responses[index].clone()
        };

        if response.is_success() {
            Ok(response)
        } else {
            Err(Error::Remote {
                ret: response.ret,
                msg: response.msg,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_records_calls() {
        let transport = MockTransport::new();

        transport
            .request("/a", "k", Params::new().with("x", 1))
            .await
            .unwrap();
        transport.request("/b", "k", Params::new()).await.unwrap();

        assert_eq!(transport.get_call_count(), 2);
        let calls = transport.get_calls();
        assert_eq!(calls[0].endpoint, "/a");
        assert!(calls[0].params.contains_key("x"));
        assert_eq!(transport.last_call().unwrap().endpoint, "/b");
    }

    #[tokio::test]
    async fn test_mock_cycles_responses() {
        let transport = MockTransport::new()
            .with_data(serde_json::json!({ "n": 1 }))
            .with_data(serde_json::json!({ "n": 2 }));

        let first = transport.request("/x", "k", Params::new()).await.unwrap();
        let second = transport.request("/x", "k", Params::new()).await.unwrap();
        let third = transport.request("/x", "k", Params::new()).await.unwrap();

        assert_eq!(first.data["n"], 1);
        assert_eq!(second.data["n"], 2);
        assert_eq!(third.data["n"], 1);
    }

    #[tokio::test]
    async fn test_mock_error_response() {
        let transport = MockTransport::new().with_response(ApiResponse {
            ret: 4096,
            msg: "paramter invalid".to_string(),
            data: serde_json::Value::Null,
        });

        let err = transport.request("/x", "k", Params::new()).await.unwrap_err();
        assert!(matches!(err, Error::Remote { ret: 4096, .. }));
    }
}
