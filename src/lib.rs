// frontend_redirect/src/lib.rs
pub mod components;
pub mod hooks;
pub mod mount;
pub mod pages;
pub mod redirect;
pub mod router;

use crate::router::AppRouter;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AppRouter />
    }
}
