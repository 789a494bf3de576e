// frontend_redirect/src/hooks/use_is_mounted.rs
use yew::prelude::*;

/// Reports whether the component is attached to the live DOM.
///
/// Returns `false` during the first render, then `true` once the one-shot
/// mount effect has run. Flips at most once and never reverts while the
/// component is alive.
#[hook]
pub fn use_is_mounted() -> bool {
    let mounted = use_state(|| false);

    {
        let mounted = mounted.clone();
        use_effect_with((), move |_| {
            mounted.set(true);
            || ()
        });
    }

    *mounted
}
