use yew::prelude::*;

/// Base URL of the demo backend during development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3030/api/v1";

/// API settings shared with every `use_fetch` below the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: AttrValue,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: AttrValue::Static(DEFAULT_BASE_URL),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ApiProviderProps {
    #[prop_or_default]
    pub base_url: Option<AttrValue>,
    pub children: Children,
}

#[function_component(ApiProvider)]
pub fn api_provider(props: &ApiProviderProps) -> Html {
    let config = ApiConfig {
        base_url: props
            .base_url
            .clone()
            .unwrap_or(AttrValue::Static(DEFAULT_BASE_URL)),
    };

    html! {
        <ContextProvider<ApiConfig> context={config}>
            { props.children.clone() }
        </ContextProvider<ApiConfig>>
    }
}
