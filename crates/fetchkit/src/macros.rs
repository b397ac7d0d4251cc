#[macro_export]
/// Define an async Yew callback that clones its captures and spawns the body
/// with `wasm_bindgen_futures::spawn_local`.
///
/// Pairs with the `use_fetch` hook: the handle is cheap to clone, so it can
/// be listed as a capture like any other piece of state.
///
/// Without an event parameter:
/// ```compile_fail
/// let load = async_callback!([fetch, items] {
///     let response = fetch.request::<Vec<Item>>("/items", RequestOptions::get()).await;
///     if let Some(list) = response.data {
///         items.set(list);
///     }
/// });
/// ```
///
/// With an event parameter:
/// ```compile_fail
/// let submit = async_callback!([fetch, draft, last_response] |event| {
///     event.prevent_default();
///     let body = Body::json(&*draft).unwrap_or_default();
///     let response = fetch.request("/items", RequestOptions::post(body)).await;
///     last_response.set(Some(response));
/// });
/// ```
///
/// Expands to one clone per capture outside the closure and another inside
/// it, so the callback can fire any number of times.
macro_rules! async_callback {
    // Version without event parameter
    ([$($var:ident),* $(,)?] $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |_| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };

    // Version with event parameter
    ([$($var:ident),* $(,)?] |$event:ident| $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |$event| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body
                });
            })
        }
    };
}
