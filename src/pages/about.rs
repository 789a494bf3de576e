// frontend_redirect/src/pages/about.rs
use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section class="p-6">
            <h1 class="text-2xl font-bold mb-2">{ "About" }</h1>
            <p>{ "You landed here via the client-side redirect that fires once the app has mounted." }</p>
        </section>
    }
}
