use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <div class="p-8">
            <h1 class="text-2xl font-bold mb-4">{ "About" }</h1>
            <p class="mb-4">
                { "Leaving the playground unmounts it. Any request it still had in flight was aborted on the way out; check the console log." }
            </p>
            <Link<Route> to={Route::Playground} classes="text-blue-600 underline">
                { "Back to the playground" }
            </Link<Route>>
        </div>
    }
}
