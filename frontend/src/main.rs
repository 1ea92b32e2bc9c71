use yew::prelude::*;
use log::{info, Level};

mod capture;
mod carousel;
mod config;
mod content;
mod countdown;
mod hooks;
mod lightbox;
mod scroll_lock;

mod components {
    pub mod lightbox;
}
mod pages {
    pub mod banner_offer;
    pub mod gallery;
    pub mod landing;
    pub mod reviews;
    pub mod reviews_proof;
    pub mod services;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    info!("Rendering Landing page");
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
