//! `Transport` implementations.
//!
//! Client-side (csr): `BrowserTransport` performs real requests via
//! `gloo-net` and races them against a `gloo-timers` delay when the request
//! carries a timeout.
//! Elsewhere: `UnavailableTransport` fails every request. Unit tests use
//! `ScriptedTransport`, which replays canned responses while recording what
//! was sent.

#[cfg(test)]
use std::collections::VecDeque;
use std::sync::Arc;
#[cfg(test)]
use std::sync::Mutex;

use super::http::{HttpRequest, HttpResponse, Transport, TransportError};

/// The transport for the current build target.
pub fn default_transport() -> Arc<dyn Transport> {
    #[cfg(feature = "csr")]
    {
        Arc::new(BrowserTransport)
    }
    #[cfg(not(feature = "csr"))]
    {
        Arc::new(UnavailableTransport)
    }
}

#[cfg(feature = "csr")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserTransport;

#[cfg(feature = "csr")]
#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        use futures::future::{Either, select};

        let Some(limit) = request.timeout else {
            return exchange(request).await;
        };
        let exchange = std::pin::pin!(exchange(request));
        let timer = std::pin::pin!(gloo_timers::future::sleep(limit));
        match select(exchange, timer).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(TransportError::Timeout(limit)),
        }
    }
}

#[cfg(feature = "csr")]
async fn exchange(request: HttpRequest) -> Result<HttpResponse, TransportError> {
    use gloo_net::http::{Method as GlooMethod, RequestBuilder};

    use super::http::Method;

    let method = match request.method {
        Method::Get => GlooMethod::GET,
        Method::Post => GlooMethod::POST,
        Method::Put => GlooMethod::PUT,
        Method::Delete => GlooMethod::DELETE,
    };
    let mut builder = RequestBuilder::new(&request.url).method(method);
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    let outgoing = match request.body {
        Some(body) => builder.body(body),
        None => builder.build(),
    }
    .map_err(|e| TransportError::Failed(e.to_string()))?;

    log::debug!("{:?} {}", request.method, request.url);
    let response = outgoing
        .send()
        .await
        .map_err(|e| TransportError::Failed(e.to_string()))?;
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| TransportError::Failed(e.to_string()))?;
    Ok(HttpResponse { status, body })
}

/// Fails every request with [`TransportError::Unavailable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableTransport;

#[async_trait::async_trait(?Send)]
impl Transport for UnavailableTransport {
    async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, TransportError> {
        Err(TransportError::Unavailable)
    }
}

/// Replays queued outcomes in order and records every request.
///
/// Once the queue is exhausted further requests fail with
/// [`TransportError::Unavailable`].
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

#[cfg(test)]
impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with `status` and a JSON `body`.
    #[must_use]
    pub fn respond(self, status: u16, body: &serde_json::Value) -> Self {
        self.push(Ok(HttpResponse { status, body: body.to_string() }))
    }

    /// Queue a response with a raw text body.
    #[must_use]
    pub fn respond_raw(self, status: u16, body: &str) -> Self {
        self.push(Ok(HttpResponse { status, body: body.to_owned() }))
    }

    /// Queue a transport failure.
    #[must_use]
    pub fn fail(self, error: TransportError) -> Self {
        self.push(Err(error))
    }

    fn push(self, outcome: Result<HttpResponse, TransportError>) -> Self {
        if let Ok(mut outcomes) = self.outcomes.lock() {
            outcomes.push_back(outcome);
        }
        self
    }

    /// Requests sent so far, oldest first.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[async_trait::async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        self.outcomes
            .lock()
            .map_err(|e| TransportError::Failed(e.to_string()))?
            .pop_front()
            .unwrap_or(Err(TransportError::Unavailable))
    }
}
