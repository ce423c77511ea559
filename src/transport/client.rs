use super::Transport;
use crate::models::{ApiResponse, Config};
use crate::request::{sign, Params, SIGN_FIELD};
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::{Client, Proxy};

/// Build the reqwest client used for API calls and resource downloads.
pub fn build_http_client(config: &Config) -> Result<Client> {
    let mut builder = Client::builder().timeout(config.timeout);
    if let Some(proxy) = &config.proxy {
        builder = builder.proxy(Proxy::all(proxy.as_str())?);
    }
    Ok(builder.build()?)
}

pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::new_with_client(
            config.base_url.clone(),
            build_http_client(config)?,
        ))
    }

    pub fn new_with_client(base_url: String, client: Client) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(
        &self,
        endpoint: &str,
        app_key: &str,
        params: Params,
    ) -> Result<ApiResponse> {
        let signature = sign(&params, app_key)?;
        let mut form = params.to_pairs();
        form.push((SIGN_FIELD.to_string(), signature));

        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!("Sending request to {}", endpoint);

        let response = self
            .client
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to send request to {}: {}", endpoint, e);
                e
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!("Tencent AI HTTP error (status {}): {}", status, error_text);
            return Err(Error::Remote {
                ret: i64::from(status.as_u16()),
                msg: format!("HTTP status {}: {}", status, error_text),
            });
        }

        let body = response.text().await?;
        let envelope: ApiResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse response from {}: {}", endpoint, e);
            e
        })?;

        if !envelope.is_success() {
            tracing::error!(
                "Tencent AI error from {} (ret {}): {}",
                endpoint,
                envelope.ret,
                envelope.msg
            );
            return Err(Error::Remote {
                ret: envelope.ret,
                msg: envelope.msg,
            });
        }

        Ok(envelope)
    }
}
