//! The request helper.
//!
//! [`Fetcher`] wraps a [`Transport`] with JSON normalization, a loading
//! indicator and cancellation of outstanding calls.
//!
//! # Loading and cancellation
//! Loading is tracked with an in-flight counter rather than a single flag, so
//! overlapping calls keep [`Fetcher::is_loading`] true until the last one
//! settles. Every call gets its own [`AbortController`]; live controllers sit
//! in a registry and [`Fetcher::teardown`] aborts all of them.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::future::Future;

use serde::de::DeserializeOwned;

use crate::cancel::{AbortController, AbortSignal};
use crate::errors::TransportError;
use crate::log;
use crate::options::{APPLICATION_JSON, CONTENT_TYPE, Headers, PreparedRequest, RequestOptions};
use crate::response::FetchResponse;
use crate::transport::Transport;

type LoadingListener = Box<dyn Fn(bool)>;

#[derive(Default)]
struct CallRegistry {
    in_flight: Cell<usize>,
    next_id: Cell<u64>,
    controllers: RefCell<HashMap<u64, AbortController>>,
    on_loading_change: Option<LoadingListener>,
}

impl CallRegistry {
    fn notify(&self, loading: bool) {
        if let Some(listener) = &self.on_loading_change {
            listener(loading);
        }
    }

    fn begin(&self) -> (u64, AbortSignal) {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));

        let controller = AbortController::new();
        let signal = controller.signal();
        self.controllers.borrow_mut().insert(id, controller);

        let previous = self.in_flight.get();
        self.in_flight.set(previous + 1);
        if previous == 0 {
            self.notify(true);
        }

        (id, signal)
    }

    fn finish(&self, id: u64) {
        self.controllers.borrow_mut().remove(&id);

        let remaining = self.in_flight.get().saturating_sub(1);
        self.in_flight.set(remaining);
        if remaining == 0 {
            self.notify(false);
        }
    }
}

/// Settles a call's bookkeeping however the call ends, including when its
/// future is dropped before completion.
struct CallGuard<'a> {
    registry: &'a CallRegistry,
    id: u64,
}

impl Drop for CallGuard<'_> {
    fn drop(&mut self) {
        self.registry.finish(self.id);
    }
}

/// Stateful request helper bound to one UI owner.
///
/// ```no_run
/// use fetchkit::{Fetcher, GlooTransport, RequestOptions};
///
/// # async fn demo() {
/// let fetcher = Fetcher::new(GlooTransport::new()).with_base_url("http://localhost:3030/api/v1");
/// let response = fetcher
///     .request::<serde_json::Value>("/echo", RequestOptions::post(serde_json::json!({"hi": 1})))
///     .await;
/// assert!(response.is_success() || response.error.is_some());
/// # }
/// ```
pub struct Fetcher<T> {
    transport: T,
    base_url: String,
    default_headers: Headers,
    registry: CallRegistry,
}

impl<T> Fetcher<T>
where
    T: Transport,
{
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            base_url: String::new(),
            default_headers: Headers::new(),
            registry: CallRegistry::default(),
        }
    }

    /// Prefix joined to every endpoint. Nothing is validated.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Header sent with every request unless the call sets it itself.
    pub fn with_header(mut self, key: &str, value: impl Into<String>) -> Self {
        self.default_headers.insert(key, value);
        self
    }

    /// Called with `true` when the first call starts and `false` when the
    /// last outstanding call settles.
    pub fn on_loading_change(mut self, listener: impl Fn(bool) + 'static) -> Self {
        self.registry.on_loading_change = Some(Box::new(listener));
        self
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight() > 0
    }

    pub fn in_flight(&self) -> usize {
        self.registry.in_flight.get()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends a request and normalizes its outcome.
    ///
    /// The call is registered, and the loading state raised, before this
    /// returns; the work itself happens when the future is polled. The future
    /// never fails: transport errors, aborts and undecodable bodies all come
    /// back as [`FetchResponse::exception`].
    pub fn request<'a, R>(
        &'a self,
        endpoint: &str,
        options: RequestOptions,
    ) -> impl Future<Output = FetchResponse<R>> + use<'a, T, R>
    where
        R: DeserializeOwned,
    {
        let (id, signal) = self.registry.begin();
        let guard = CallGuard {
            registry: &self.registry,
            id,
        };
        let url = format!("{}{}", self.base_url, endpoint);

        async move {
            let _guard = guard;
            let method = options.method;
            log::debug!(%method, %url, "sending request");

            match self.execute(url.clone(), options, signal).await {
                Ok(response) => {
                    if response.error.is_some() {
                        log::debug!(%method, %url, status = response.status, "request returned an error status");
                    }
                    response
                }
                Err(err) => {
                    log::warn!(%method, %url, error = %err, "request failed");
                    FetchResponse::exception(err.to_string())
                }
            }
        }
    }

    /// Aborts every outstanding call. A no-op when nothing is in flight.
    pub fn teardown(&self) {
        let controllers: Vec<AbortController> = self
            .registry
            .controllers
            .borrow_mut()
            .drain()
            .map(|(_, controller)| controller)
            .collect();

        if controllers.is_empty() {
            return;
        }

        log::debug!(count = controllers.len(), "aborting outstanding requests");
        for controller in controllers {
            controller.abort();
        }
    }

    fn prepare(
        &self,
        url: String,
        options: RequestOptions,
        signal: AbortSignal,
    ) -> Result<PreparedRequest, TransportError> {
        let RequestOptions {
            method,
            mut headers,
            body,
            signal: _,
            credentials,
            mode,
            cache,
            redirect,
        } = options;

        headers.merge_missing(&self.default_headers);
        if !body.is_form() {
            headers.insert_missing(CONTENT_TYPE, APPLICATION_JSON);
        }

        Ok(PreparedRequest {
            url,
            method,
            headers,
            body: body.prepare()?,
            signal,
            credentials,
            mode,
            cache,
            redirect,
        })
    }

    async fn execute<R>(
        &self,
        url: String,
        options: RequestOptions,
        signal: AbortSignal,
    ) -> Result<FetchResponse<R>, TransportError>
    where
        R: DeserializeOwned,
    {
        let prepared = self.prepare(url, options, signal.clone())?;
        let response = signal.guard(self.transport.send(prepared)).await??;
        let body = response.json()?;

        if !response.ok() {
            return Ok(FetchResponse::failure(body, response.status));
        }

        let data = serde_json::from_value(body)?;
        Ok(FetchResponse::success(data, response.status))
    }
}

impl<T> std::fmt::Debug for Fetcher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher")
            .field("base_url", &self.base_url)
            .field("in_flight", &self.registry.in_flight.get())
            .finish_non_exhaustive()
    }
}
