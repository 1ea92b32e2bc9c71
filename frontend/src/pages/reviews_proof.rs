use yew::prelude::*;
use gloo_timers::callback::Timeout;
use web_sys::{HtmlElement, HtmlImageElement, KeyboardEvent, MouseEvent};

use crate::components::lightbox::Lightbox;
use crate::config;
use crate::content::SCREENSHOTS;
use crate::hooks::use_lightbox;
use crate::lightbox::LightboxAction;

#[function_component(ReviewsProof)]
pub fn reviews_proof() -> Html {
    let lightbox = use_lightbox("reviews-proof", SCREENSHOTS.len());
    let close_ref = use_node_ref();

    // Move focus into the dialog once it has rendered.
    {
        let close_ref = close_ref.clone();
        use_effect_with_deps(
            move |is_open| {
                if *is_open {
                    Timeout::new(0, move || {
                        if let Some(button) = close_ref.cast::<HtmlElement>() {
                            let _ = button.focus();
                        }
                    })
                    .forget();
                }
                || ()
            },
            lightbox.is_open(),
        );
    }

    // Warm the cache with the screenshots on either side of the open one.
    use_effect_with_deps(
        |neighbors| {
            if let Some((before, after)) = *neighbors {
                for index in [after, before] {
                    if let Ok(img) = HtmlImageElement::new() {
                        img.set_src(&config::asset_url(SCREENSHOTS[index].src));
                    }
                }
            }
            || ()
        },
        lightbox.neighbors(),
    );

    let open_on_click = |i: usize| {
        let lightbox = lightbox.clone();
        Callback::from(move |_: MouseEvent| lightbox.dispatch(LightboxAction::Open(i)))
    };
    let open_on_key = |i: usize| {
        let lightbox = lightbox.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                lightbox.dispatch(LightboxAction::Open(i));
            }
        })
    };

    let card = |i: usize| {
        let shot = &SCREENSHOTS[i];
        html! {
            <button
                class="proof-card"
                aria-label={format!("Open {}", shot.alt)}
                onclick={open_on_click(i)}
                onkeydown={open_on_key(i)}
            >
                <div class="proof-image">
                    <img
                        src={config::asset_url(shot.src)}
                        alt={shot.alt}
                        loading={if i < 2 { "eager" } else { "lazy" }}
                    />
                </div>
                <div class="proof-caption">{"Review Screenshot"}</div>
            </button>
        }
    };

    html! {
        <section class="proof-section">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"What Our "}<span class="accent">{"Clients Say"}</span></h2>
                    <p>{"Real review screenshots from happy customers, authentic results every time."}</p>
                </div>

                <div class="proof-strip">
                    { for (0..SCREENSHOTS.len()).map(|i| html! {
                        <div key={SCREENSHOTS[i].src} class="proof-strip-item">{card(i)}</div>
                    }) }
                </div>

                <div class="proof-grid">
                    { for (0..SCREENSHOTS.len()).map(|i| html! {
                        <div key={SCREENSHOTS[i].src}>{card(i)}</div>
                    }) }
                </div>
            </div>

            <Lightbox
                photos={SCREENSHOTS}
                state={lightbox.clone()}
                label="Review screenshot viewer"
                close_ref={close_ref}
            />

            <style>
                {r#"
                .proof-section {
                    background: linear-gradient(135deg, rgba(254, 242, 242, 0.5), #ffffff, rgba(254, 226, 226, 0.3));
                    padding: 3.5rem 0;
                }
                .proof-strip {
                    display: flex;
                    gap: 0.9rem;
                    overflow-x: auto;
                    scroll-snap-type: x mandatory;
                    scrollbar-width: none;
                }
                .proof-strip-item {
                    flex: 0 0 86%;
                    scroll-snap-align: center;
                }
                .proof-grid {
                    display: none;
                    gap: 0.75rem;
                    grid-template-columns: repeat(2, 1fr);
                }
                @media (min-width: 640px) {
                    .proof-strip { display: none; }
                    .proof-grid { display: grid; }
                }
                @media (min-width: 1024px) {
                    .proof-grid { grid-template-columns: repeat(3, 1fr); gap: 1rem; }
                }
                .proof-card {
                    position: relative;
                    width: 100%;
                    padding: 0;
                    overflow: hidden;
                    border: 1px solid rgba(226, 232, 240, 0.7);
                    border-radius: 0.75rem;
                    background: #ffffff;
                    cursor: pointer;
                    transition: transform 0.2s, box-shadow 0.2s;
                }
                .proof-card:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                }
                .proof-image {
                    aspect-ratio: 4 / 3;
                }
                .proof-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                    padding: 0.75rem;
                    box-sizing: border-box;
                }
                .proof-caption {
                    border-top: 1px solid rgba(226, 232, 240, 0.7);
                    background: #f8fafc;
                    padding: 0.6rem 1rem;
                    text-align: left;
                    font-size: 13px;
                    font-weight: 600;
                    color: #334155;
                }
                "#}
            </style>
        </section>
    }
}
