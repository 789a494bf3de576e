use frontend_redirect::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
