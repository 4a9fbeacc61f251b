use yew::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="max-w-3xl mx-auto py-16 text-center">
            <h1 class="text-2xl font-bold text-gray-900">{"Team not found"}</h1>
            <p class="mt-2 text-gray-500">{"Check the link, or open settings from your team list."}</p>
        </div>
    }
}
