use yew::prelude::*;
use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollToOptions};

use crate::components::lightbox::Lightbox;
use crate::config;
use crate::content::GALLERY;
use crate::hooks::use_lightbox;
use crate::lightbox::LightboxAction;

/// Scrolls the mobile strip by 85% of its visible width in `direction`.
fn scroll_strip(scroller: &NodeRef, direction: f64) {
    let Some(el) = scroller.cast::<Element>() else {
        return;
    };
    let amount = (f64::from(el.client_width()) * 0.85).round() * direction;
    let options = ScrollToOptions::new();
    options.set_left(amount);
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_by_with_scroll_to_options(&options);
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let scroller = use_node_ref();
    let lightbox = use_lightbox("gallery", GALLERY.len());

    let open = |i: usize| {
        let lightbox = lightbox.clone();
        Callback::from(move |_: MouseEvent| lightbox.dispatch(LightboxAction::Open(i)))
    };

    let scroll_left = {
        let scroller = scroller.clone();
        Callback::from(move |_: MouseEvent| scroll_strip(&scroller, -1.0))
    };
    let scroll_right = {
        let scroller = scroller.clone();
        Callback::from(move |_: MouseEvent| scroll_strip(&scroller, 1.0))
    };

    html! {
        <section id="gallery" class="gallery-section">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"Our "}<span class="accent">{"Work Gallery"}</span></h2>
                    <p>{"Experience the shine, a glimpse of our premium auto detailing transformations."}</p>
                </div>

                <div class="gallery-mobile">
                    <div class="gallery-strip" ref={scroller}>
                        { for GALLERY.iter().enumerate().map(|(i, photo)| html! {
                            <button
                                key={photo.src}
                                class="gallery-strip-item"
                                aria-label={format!("Open image {}", i + 1)}
                                onclick={open(i)}
                            >
                                <img
                                    src={config::asset_url(photo.src)}
                                    alt={photo.alt}
                                    loading={if i < 1 { "eager" } else { "lazy" }}
                                />
                            </button>
                        }) }
                    </div>
                    <div class="carousel-nav">
                        <button class="round-button" aria-label="Scroll left" onclick={scroll_left}>{"‹"}</button>
                        <button class="round-button" aria-label="Scroll right" onclick={scroll_right}>{"›"}</button>
                    </div>
                </div>

                <ul class="gallery-grid">
                    { for GALLERY.iter().enumerate().map(|(i, photo)| html! {
                        <li key={format!("grid-{}", photo.src)} class="gallery-tile">
                            <button aria-label={format!("Open image {}", i + 1)} onclick={open(i)}>
                                <img src={config::asset_url(photo.src)} alt={photo.alt} loading="lazy" />
                            </button>
                        </li>
                    }) }
                </ul>
            </div>

            <Lightbox photos={GALLERY} state={lightbox.clone()} label="Gallery viewer" />

            <style>
                {r#"
                .gallery-mobile {
                    position: relative;
                }
                .gallery-strip {
                    display: flex;
                    gap: 0.9rem;
                    overflow-x: auto;
                    scroll-snap-type: x mandatory;
                    scrollbar-width: none;
                    padding-bottom: 0.4rem;
                }
                .gallery-strip::-webkit-scrollbar {
                    display: none;
                }
                .gallery-strip-item {
                    flex: 0 0 86%;
                    scroll-snap-align: center;
                    aspect-ratio: 16 / 10;
                    border: 1px solid rgba(226, 232, 240, 0.7);
                    border-radius: 0.75rem;
                    overflow: hidden;
                    padding: 0;
                    background: #ffffff;
                    cursor: pointer;
                }
                .gallery-strip-item img,
                .gallery-tile img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease-out;
                }
                .gallery-grid {
                    display: none;
                    list-style: none;
                    padding: 0;
                    gap: 1rem;
                    grid-template-columns: repeat(2, 1fr);
                }
                .gallery-tile {
                    aspect-ratio: 4 / 3;
                    overflow: hidden;
                    border: 1px solid rgba(226, 232, 240, 0.7);
                    border-radius: 0.75rem;
                }
                .gallery-tile button {
                    display: block;
                    width: 100%;
                    height: 100%;
                    padding: 0;
                    border: none;
                    cursor: pointer;
                }
                .gallery-tile:hover img {
                    transform: scale(1.05);
                }
                @media (min-width: 640px) {
                    .gallery-mobile { display: none; }
                    .gallery-grid { display: grid; }
                }
                @media (min-width: 768px) {
                    .gallery-grid { grid-template-columns: repeat(3, 1fr); }
                }
                @media (min-width: 1024px) {
                    .gallery-grid { grid-template-columns: repeat(4, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}
