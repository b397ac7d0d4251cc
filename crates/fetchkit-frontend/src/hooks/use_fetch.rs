use std::future::Future;
use std::rc::Rc;

use fetchkit::serde::de::DeserializeOwned;
use fetchkit::{FetchResponse, Fetcher, GlooTransport, RequestOptions};
use yew::prelude::*;

use crate::providers::ApiConfig;

/// Handle returned by [`use_fetch`].
///
/// Cloning is cheap; every clone talks to the same helper, so requests made
/// from spawned tasks still count towards `is_loading` and are still aborted
/// when the component unmounts.
#[derive(Clone)]
pub struct UseFetchHandle {
    fetcher: Rc<Fetcher<GlooTransport>>,
    is_loading: bool,
}

impl UseFetchHandle {
    /// Loading state as of the current render.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// See [`Fetcher::request`]. `endpoint` is joined to the provider's base URL.
    pub fn request<'a, T>(
        &'a self,
        endpoint: &str,
        options: RequestOptions,
    ) -> impl Future<Output = FetchResponse<T>> + use<'a, T>
    where
        T: DeserializeOwned,
    {
        self.fetcher.request(endpoint, options)
    }

    /// Aborts everything in flight without waiting for the unmount.
    pub fn cancel_all(&self) {
        self.fetcher.teardown();
    }
}

impl PartialEq for UseFetchHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.fetcher, &other.fetcher) && self.is_loading == other.is_loading
    }
}

/// Request helper scoped to the calling component.
///
/// The helper is created on mount and torn down on unmount, which aborts any
/// request still in flight. A new `ApiProvider` base URL builds a fresh
/// helper and tears the old one down. Loading changes re-render the component.
#[hook]
pub fn use_fetch() -> UseFetchHandle {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let is_loading = use_state_eq(|| false);

    let fetcher = {
        let set_loading = is_loading.setter();
        use_memo(config.base_url.clone(), move |base_url| {
            Fetcher::new(GlooTransport::new())
                .with_base_url(base_url.to_string())
                .on_loading_change(move |loading| set_loading.set(loading))
        })
    };

    // Runs on unmount and whenever the base URL swaps in a new helper.
    {
        let fetcher = fetcher.clone();
        use_effect_with(config.base_url.clone(), move |_| move || fetcher.teardown());
    }

    UseFetchHandle {
        fetcher,
        is_loading: *is_loading,
    }
}
