use gloo_storage::{LocalStorage, Storage};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use fetchkit::serde_json::{self, Value};
use fetchkit::{Body, FetchResponse, FormData, RequestOptions, async_callback, log};

use crate::components::ResponseView;
use crate::hooks::use_fetch;
use crate::routes::Route;

const DRAFT_KEY: &str = "fetchkit.draft";
const DEFAULT_DRAFT: &str = r#"{ "message": "hello" }"#;

/// A labelled outcome kept for display.
#[derive(Clone, PartialEq)]
struct Outcome {
    label: AttrValue,
    response: FetchResponse<Value>,
}

async fn read_file(file: web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read {}: {e:?}", file.name()))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

#[function_component(PlaygroundPage)]
pub fn playground_page() -> Html {
    let fetch = use_fetch();
    let draft = use_state(|| {
        LocalStorage::get::<String>(DRAFT_KEY).unwrap_or_else(|_| DEFAULT_DRAFT.to_string())
    });
    let outcome = use_state(|| None::<Outcome>);
    let file_input = use_node_ref();

    let on_draft_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                let value = area.value();
                if let Err(err) = LocalStorage::set(DRAFT_KEY, &value) {
                    log::warn!("Failed to persist draft: {err}");
                }
                draft.set(value);
            }
        })
    };

    let send_echo = async_callback!([fetch, draft, outcome] {
        let body = match serde_json::from_str::<Value>(&draft) {
            Ok(value) => Body::Json(value),
            Err(err) => {
                outcome.set(Some(Outcome {
                    label: "POST /echo".into(),
                    response: FetchResponse::exception(format!("Draft is not JSON: {err}")),
                }));
                return;
            }
        };
        let response = fetch.request("/echo", RequestOptions::post(body)).await;
        outcome.set(Some(Outcome { label: "POST /echo".into(), response }));
    });

    let send_not_found = async_callback!([fetch, outcome] {
        let response = fetch.request("/status/404", RequestOptions::get()).await;
        outcome.set(Some(Outcome { label: "GET /status/404".into(), response }));
    });

    let send_malformed = async_callback!([fetch, outcome] {
        let response = fetch.request("/malformed", RequestOptions::get()).await;
        outcome.set(Some(Outcome { label: "GET /malformed".into(), response }));
    });

    let send_slow = async_callback!([fetch, outcome] {
        let response = fetch.request("/slow?ms=5000", RequestOptions::get()).await;
        outcome.set(Some(Outcome { label: "GET /slow".into(), response }));
    });

    let send_upload = async_callback!([fetch, outcome, file_input] {
        let file = file_input
            .cast::<HtmlInputElement>()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        let Some(file) = file else {
            outcome.set(Some(Outcome {
                label: "POST /upload".into(),
                response: FetchResponse::exception("Pick a file first"),
            }));
            return;
        };

        let name = file.name();
        let content_type = Some(file.type_()).filter(|t| !t.is_empty());
        let response = match read_file(file).await {
            Ok(bytes) => {
                let form = FormData::new()
                    .text("source", "playground")
                    .file("file", name, content_type, bytes);
                fetch.request("/upload", RequestOptions::post(form)).await
            }
            Err(message) => FetchResponse::exception(message),
        };
        outcome.set(Some(Outcome { label: "POST /upload".into(), response }));
    });

    let cancel_all = {
        let fetch = fetch.clone();
        Callback::from(move |_: MouseEvent| fetch.cancel_all())
    };

    let button = "bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-700 cursor-pointer";

    html! {
        <div class="p-8">
            <h1 class="text-2xl font-bold mb-4">{ "fetchkit playground" }</h1>

            <div class="mb-4">
                <span class="font-medium">{ "Status: " }</span>
                if fetch.is_loading() {
                    <span class="text-yellow-600">{ "Loading..." }</span>
                } else {
                    <span class="text-gray-600">{ "Idle" }</span>
                }
            </div>

            <div class="mb-8 p-4 border border-gray-200 rounded">
                <h2 class="text-xl font-semibold mb-4">{ "JSON" }</h2>
                <textarea
                    class="w-full h-24 px-3 py-2 border border-gray-300 rounded font-mono"
                    value={(*draft).clone()}
                    oninput={on_draft_input}
                />
                <div class="mt-2 space-x-2">
                    <button class={button} onclick={send_echo}>{ "POST /echo" }</button>
                    <button class={button} onclick={send_not_found}>{ "GET /status/404" }</button>
                    <button class={button} onclick={send_malformed}>{ "GET /malformed" }</button>
                </div>
            </div>

            <div class="mb-8 p-4 border border-gray-200 rounded">
                <h2 class="text-xl font-semibold mb-4">{ "Cancellation" }</h2>
                <div class="space-x-2">
                    <button class={button} onclick={send_slow}>{ "GET /slow (5s)" }</button>
                    <button
                        class="bg-red-600 text-white px-4 py-2 rounded hover:bg-red-700 disabled:opacity-50"
                        onclick={cancel_all}
                        disabled={!fetch.is_loading()}
                    >
                        { "Cancel" }
                    </button>
                    <Link<Route> to={Route::About} classes="text-blue-600 underline">
                        { "Leave the page" }
                    </Link<Route>>
                </div>
            </div>

            <div class="mb-8 p-4 border border-gray-200 rounded">
                <h2 class="text-xl font-semibold mb-4">{ "Multipart" }</h2>
                <input type="file" ref={file_input} class="mr-2" />
                <button class={button} onclick={send_upload}>{ "POST /upload" }</button>
            </div>

            {
                if let Some(outcome) = outcome.as_ref() {
                    html! { <ResponseView label={outcome.label.clone()} response={outcome.response.clone()} /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
