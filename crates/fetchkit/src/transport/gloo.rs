//! Browser transport built on `gloo-net`.

use gloo_net::http::{Method, RequestBuilder};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag};

use crate::body::{FormData, FormValue, PreparedBody};
use crate::errors::TransportError;
use crate::options::{Cache, Credentials, HttpMethod, Mode, PreparedRequest, Redirect};
use crate::transport::{Transport, TransportResponse};

/// Sends requests through the browser's `fetch`.
///
/// Aborting the request's signal aborts the underlying browser request too.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

impl GlooTransport {
    pub fn new() -> Self {
        Self
    }
}

fn js_error(value: JsValue) -> TransportError {
    TransportError::Network(
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}")),
    )
}

fn method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
        HttpMethod::Head => Method::HEAD,
        HttpMethod::Options => Method::OPTIONS,
    }
}

fn credentials(credentials: Credentials) -> web_sys::RequestCredentials {
    match credentials {
        Credentials::Omit => web_sys::RequestCredentials::Omit,
        Credentials::SameOrigin => web_sys::RequestCredentials::SameOrigin,
        Credentials::Include => web_sys::RequestCredentials::Include,
    }
}

fn mode(mode: Mode) -> web_sys::RequestMode {
    match mode {
        Mode::SameOrigin => web_sys::RequestMode::SameOrigin,
        Mode::NoCors => web_sys::RequestMode::NoCors,
        Mode::Cors => web_sys::RequestMode::Cors,
    }
}

fn cache(cache: Cache) -> web_sys::RequestCache {
    match cache {
        Cache::Default => web_sys::RequestCache::Default,
        Cache::NoStore => web_sys::RequestCache::NoStore,
        Cache::Reload => web_sys::RequestCache::Reload,
        Cache::NoCache => web_sys::RequestCache::NoCache,
        Cache::ForceCache => web_sys::RequestCache::ForceCache,
        Cache::OnlyIfCached => web_sys::RequestCache::OnlyIfCached,
    }
}

fn redirect(redirect: Redirect) -> web_sys::RequestRedirect {
    match redirect {
        Redirect::Follow => web_sys::RequestRedirect::Follow,
        Redirect::Error => web_sys::RequestRedirect::Error,
        Redirect::Manual => web_sys::RequestRedirect::Manual,
    }
}

fn browser_form(form: &FormData) -> Result<web_sys::FormData, TransportError> {
    let browser = web_sys::FormData::new().map_err(js_error)?;
    for (name, value) in form.fields() {
        match value {
            FormValue::Text(text) => browser.append_with_str(name, text).map_err(js_error)?,
            FormValue::File {
                file_name,
                content_type,
                bytes,
            } => {
                let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes.as_slice()));
                let options = BlobPropertyBag::new();
                if let Some(content_type) = content_type {
                    options.set_type(content_type);
                }
                let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
                    .map_err(js_error)?;
                browser
                    .append_with_blob_and_filename(name, &blob, file_name)
                    .map_err(js_error)?;
            }
        }
    }
    Ok(browser)
}

#[async_trait::async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: PreparedRequest) -> Result<TransportResponse, TransportError> {
        let controller = web_sys::AbortController::new().map_err(js_error)?;
        let browser_signal = controller.signal();
        request.signal.on_abort(move || controller.abort());

        let mut builder = RequestBuilder::new(&request.url)
            .method(method(request.method))
            .abort_signal(Some(&browser_signal));

        for (key, value) in request.headers.iter() {
            builder = builder.header(key, value);
        }
        if let Some(value) = request.credentials {
            builder = builder.credentials(credentials(value));
        }
        if let Some(value) = request.mode {
            builder = builder.mode(mode(value));
        }
        if let Some(value) = request.cache {
            builder = builder.cache(cache(value));
        }
        if let Some(value) = request.redirect {
            builder = builder.redirect(redirect(value));
        }

        let outgoing = match request.body {
            Some(PreparedBody::Text(text)) => builder.body(text)?,
            Some(PreparedBody::Form(form)) => builder.body(browser_form(&form)?)?,
            None => builder.build()?,
        };

        let response = outgoing.send().await?;
        let status = response.status();
        let body = response.text().await?;

        Ok(TransportResponse { status, body })
    }
}
