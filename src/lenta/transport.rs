//! HTTP transport for the Lenta gateway using wreq for TLS fingerprint emulation.

use super::headers;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};
use wreq::{Client, Method, Response};
use wreq_util::Emulation;

/// Settings the transport needs from the process configuration.
#[derive(Debug, Clone, Default)]
pub struct TransportConfig {
    /// Authentication cookie sent with every request
    pub cookie: String,
    /// Forward proxy URL (e.g., http://host:port)
    pub proxy: Option<String>,
}

/// Issues requests with the gateway's header set, optionally through a proxy.
pub struct LentaTransport {
    client: Client,
    headers: Vec<(&'static str, String)>,
    proxied: bool,
}

impl LentaTransport {
    /// Builds the HTTP client. An unusable proxy is logged and skipped.
    pub fn new(config: &TransportConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10));

        let mut proxied = false;
        if let Some(proxy_url) = config.proxy.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
            match wreq::Proxy::all(proxy_url) {
                Ok(proxy) => {
                    debug!("Configuring proxy: {}", proxy_url);
                    builder = builder.proxy(proxy);
                    proxied = true;
                }
                Err(e) => warn!("Ignoring unparsable proxy {:?}: {}", proxy_url, e),
            }
        }

        let client = builder.build()?;

        Ok(Self { client, headers: headers::request_headers(&config.cookie), proxied })
    }

    /// Whether requests are routed through a proxy.
    pub fn is_proxied(&self) -> bool {
        self.proxied
    }

    /// Sends a request and returns the body of a 200 response.
    ///
    /// Any other status is turned into [`Error::Status`] carrying the body text.
    pub async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<ResponseBody> {
        debug!("{} {}", method, url);

        let mut request = self.client.request(method, url).emulation(Emulation::Chrome131);
        for (name, value) in &self.headers {
            request = request.header(*name, value.as_str());
        }
        if let Some(body) = body {
            request = request.header("Content-Type", "application/json").body(serde_json::to_vec(body)?);
        }

        let response = request.send().await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status.as_u16() != 200 {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Status { status: status.as_u16(), body });
        }

        Ok(ResponseBody { response })
    }
}

/// Body of a successful response. Dropping it releases the connection.
pub struct ResponseBody {
    response: Response,
}

impl ResponseBody {
    /// Reads the whole body and decodes it as JSON.
    pub async fn json<T: DeserializeOwned>(self) -> Result<T> {
        let bytes = self.response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
