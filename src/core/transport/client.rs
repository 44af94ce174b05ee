//! Bedrock runtime HTTP client
//!
//! Sends `InvokeModel` requests over HTTPS, signed with SigV4.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, error};

use super::error::{BedrockErrorMapper, TransportError};
use super::sigv4::{SigV4Signer, uri_encode};
use super::{BedrockTransport, InvokeModelRequest, InvokeModelResponse};
use crate::config::AwsConfig;

/// Bedrock runtime client
#[derive(Debug, Clone)]
pub struct BedrockClient {
    http: Client,
    signer: Arc<SigV4Signer>,
    endpoint: String,
    error_mapper: BedrockErrorMapper,
}

impl BedrockClient {
    /// Create a new Bedrock client. Credentials and region are required.
    pub fn new(config: &AwsConfig) -> Result<Self, TransportError> {
        let access_key = required(&config.access_key_id, "AWS access key ID")?;
        let secret_key = required(&config.secret_access_key, "AWS secret access key")?;
        if config.region.trim().is_empty() {
            return Err(TransportError::Configuration(
                "AWS region is required".to_string(),
            ));
        }

        let endpoint = match &config.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://bedrock-runtime.{}.amazonaws.com", config.region),
        };

        let http = Client::builder().build().map_err(|e| {
            TransportError::Configuration(format!("Failed to build HTTP client: {}", e))
        })?;

        let signer = SigV4Signer::new(
            access_key,
            secret_key,
            config.session_token.clone().filter(|t| !t.is_empty()),
            config.region.clone(),
        );

        Ok(Self {
            http,
            signer: Arc::new(signer),
            endpoint,
            error_mapper: BedrockErrorMapper,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// `InvokeModel` URL for a model; the id is path encoded (`:` becomes `%3A`)
    pub fn build_url(&self, model_id: &str) -> String {
        format!("{}/model/{}/invoke", self.endpoint, uri_encode(model_id))
    }

    fn signed_headers(
        &self,
        url: &str,
        request: &InvokeModelRequest,
    ) -> Result<HeaderMap, TransportError> {
        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), request.content_type.clone());
        headers.insert("accept".to_string(), request.accept.clone());

        let signed = self
            .signer
            .sign_request("POST", url, &headers, &request.body, Utc::now())?;

        let mut header_map = HeaderMap::new();
        // reqwest derives Host from the URL itself
        for (key, value) in signed.iter().filter(|(key, _)| key.as_str() != "host") {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| TransportError::Signing(format!("Invalid header {}: {}", key, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| TransportError::Signing(format!("Invalid header {}: {}", key, e)))?;
            header_map.insert(name, value);
        }

        Ok(header_map)
    }
}

#[async_trait]
impl BedrockTransport for BedrockClient {
    async fn invoke_model(
        &self,
        request: InvokeModelRequest,
    ) -> Result<InvokeModelResponse, TransportError> {
        let url = self.build_url(&request.model_id);
        let headers = self.signed_headers(&url, &request)?;

        debug!("Bedrock request to {}", url);

        let response = self
            .http
            .post(&url)
            .headers(headers)
            .body(request.body)
            .send()
            .await
            .map_err(|e| self.error_mapper.map_network_error(&e))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Bedrock API error: {} - {}", status, error_body);
            return Err(self.error_mapper.map_http_error(status, &error_body));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.error_mapper.map_network_error(&e))?;
        debug!("Bedrock response: HTTP {}, {} bytes", status, body.len());

        Ok(InvokeModelResponse::new(body))
    }
}

fn required(value: &Option<String>, name: &str) -> Result<String, TransportError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| TransportError::Configuration(format!("{} is required", name)))
}
