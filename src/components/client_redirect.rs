// frontend_redirect/src/components/client_redirect.rs
use gloo::console::log;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::use_is_mounted;
use crate::redirect::{MountRedirect, Navigation};
use crate::router::Route;

/// Routes string paths through the yew-router navigator.
struct RouterNav {
    navigator: Navigator,
}

impl Navigation for RouterNav {
    fn push(&self, path: &str) {
        if let Some(route) = Route::recognize(path) {
            self.navigator.push(&route);
        }
    }
}

/// Behavior-only component: renders nothing and pushes the router to
/// `/about` once the component has mounted in the browser.
#[function_component(ClientRedirect)]
pub fn client_redirect() -> Html {
    let navigator = use_navigator().unwrap();
    let is_mounted = use_is_mounted();

    use_effect_with(is_mounted, move |mounted| {
        let redirect = MountRedirect::new(Route::About.to_path(), RouterNav { navigator })
            .with_diagnostic(|line| log!(line.to_string()));
        redirect.on_mount_change(*mounted);
        || ()
    });

    html! {}
}
