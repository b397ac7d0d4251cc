use fetchkit::FetchResponse;
use fetchkit::serde_json::{self, Value};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResponseViewProps {
    pub label: AttrValue,
    pub response: FetchResponse<Value>,
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Shows a normalized response, colored by outcome.
#[function_component(ResponseView)]
pub fn response_view(props: &ResponseViewProps) -> Html {
    let response = &props.response;
    let tone = if response.is_success() {
        "bg-green-100 text-green-800"
    } else {
        "bg-red-100 text-red-700"
    };

    html! {
        <div class={classes!("mt-4", "p-4", "rounded", tone)}>
            <p class="font-medium">{ format!("{} → status {}", props.label, response.status) }</p>
            {
                match (&response.data, &response.error) {
                    (Some(data), _) => html! {
                        <pre class="mt-2 text-sm whitespace-pre-wrap">{ pretty(data) }</pre>
                    },
                    (None, Some(error)) => html! {
                        <pre class="mt-2 text-sm whitespace-pre-wrap">{ pretty(error) }</pre>
                    },
                    (None, None) => html! {},
                }
            }
        </div>
    }
}
