mod components;
mod input;
mod model;
mod render;
mod state;
mod transport;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
