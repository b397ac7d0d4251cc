use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{AboutPage, PlaygroundPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Playground,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Playground => html! { <PlaygroundPage /> },
        Route::About => html! { <AboutPage /> },
        Route::NotFound => html! { <div>{ "404 Not Found" }</div> },
    }
}
