use yew::prelude::*;
use web_sys::MouseEvent;

use crate::config;
use crate::content::Photo;
use crate::lightbox::{Hit, LightboxAction, LightboxState};

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub photos: &'static [Photo],
    pub state: UseReducerHandle<LightboxState>,
    pub label: AttrValue,
    #[prop_or_default]
    pub close_ref: NodeRef,
}

/// Overlay viewer. Renders nothing while the state is closed.
#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let Some(active) = props.state.active() else {
        return html! {};
    };
    let Some(photo) = props.photos.get(active) else {
        return html! {};
    };

    let on_hit = |hit: Hit| {
        let state = props.state.clone();
        Callback::from(move |e: MouseEvent| {
            // Keep clicks inside the frame from reaching the backdrop.
            e.stop_propagation();
            if let Some(action) = LightboxAction::from_hit(hit) {
                state.dispatch(action);
            }
        })
    };

    html! {
        <div
            class="lightbox-backdrop"
            role="dialog"
            aria-modal="true"
            aria-label={props.label.clone()}
            onclick={on_hit(Hit::Backdrop)}
        >
            <div class="lightbox-frame" onclick={on_hit(Hit::Frame)}>
                <button
                    ref={props.close_ref.clone()}
                    class="lightbox-close"
                    aria-label="Close"
                    onclick={on_hit(Hit::CloseButton)}
                >
                    {"×"}
                </button>

                <div class="lightbox-image">
                    <img src={config::asset_url(photo.src)} alt={photo.alt} />
                </div>

                <div class="lightbox-arrows">
                    <button class="round-button" aria-label="Previous" onclick={on_hit(Hit::Prev)}>
                        {"‹"}
                    </button>
                    <button class="round-button" aria-label="Next" onclick={on_hit(Hit::Next)}>
                        {"›"}
                    </button>
                </div>

                <div class="lightbox-dots">
                    { for (0..props.photos.len()).map(|i| html! {
                        <button
                            key={i}
                            class={classes!("lightbox-dot", (i == active).then(|| "active"))}
                            aria-label={format!("Go to image {}", i + 1)}
                            onclick={on_hit(Hit::Dot(i))}
                        />
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .lightbox-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.7);
                    padding: 1rem;
                    animation: lightboxFade 0.2s ease-out;
                }
                @keyframes lightboxFade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                .lightbox-frame {
                    position: relative;
                    width: 100%;
                    max-width: 72rem;
                }
                .lightbox-close {
                    position: absolute;
                    top: -2.5rem;
                    right: 0;
                    border: none;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.95);
                    padding: 0.25rem 0.7rem;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .lightbox-image {
                    position: relative;
                    aspect-ratio: 16 / 10;
                    width: 100%;
                    overflow: hidden;
                    border-radius: 1rem;
                    background: #ffffff;
                }
                .lightbox-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                }
                .lightbox-arrows {
                    margin-top: 0.75rem;
                    display: flex;
                    justify-content: center;
                    gap: 0.6rem;
                }
                .lightbox-dots {
                    margin-top: 0.5rem;
                    display: flex;
                    justify-content: center;
                    gap: 0.4rem;
                }
                .lightbox-dot {
                    width: 0.6rem;
                    height: 0.6rem;
                    border: none;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.6);
                    cursor: pointer;
                }
                .lightbox-dot.active {
                    background: #dc2626;
                }
                "#}
            </style>
        </div>
    }
}
