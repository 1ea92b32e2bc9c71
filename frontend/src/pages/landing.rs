use yew::prelude::*;

use crate::hooks::{use_lightbox_host, LightboxHost};
use crate::pages::{
    banner_offer::BannerOffer,
    gallery::Gallery,
    reviews::Reviews,
    reviews_proof::ReviewsProof,
    services::Services,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    let lightbox_host = use_lightbox_host();

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <ContextProvider<LightboxHost> context={lightbox_host}>
            <main class="landing-page">
                <BannerOffer />
                <Services />
                <Reviews />
                <ReviewsProof />
                <Gallery />

                <style>
                    {r#"
                    html {
                        scroll-behavior: smooth;
                    }
                    body {
                        margin: 0;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        color: #0f172a;
                        background: #ffffff;
                    }
                    .section-inner {
                        position: relative;
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }
                    .reviews-section,
                    .gallery-section {
                        position: relative;
                        overflow: hidden;
                        padding: 3.5rem 0;
                    }
                    .section-heading {
                        margin-bottom: 2rem;
                        text-align: center;
                    }
                    .section-heading.left {
                        margin-bottom: 0;
                        text-align: left;
                    }
                    .section-heading h2 {
                        margin: 0;
                        font-size: 28px;
                        font-weight: 800;
                        line-height: 1.2;
                    }
                    .section-heading p {
                        max-width: 42rem;
                        margin: 0.75rem auto 0;
                        font-size: 15px;
                        line-height: 1.6;
                        color: #475569;
                    }
                    @media (min-width: 640px) {
                        .section-heading h2 { font-size: 2.25rem; }
                    }
                    .accent {
                        color: #dc2626;
                    }
                    .strong {
                        font-weight: 600;
                    }
                    .carousel-nav {
                        margin-top: 1.5rem;
                        display: flex;
                        justify-content: center;
                        gap: 0.75rem;
                    }
                    .round-button {
                        width: 2.75rem;
                        height: 2.75rem;
                        border: none;
                        border-radius: 9999px;
                        background: #dc2626;
                        color: #ffffff;
                        font-size: 1.5rem;
                        line-height: 1;
                        cursor: pointer;
                        transition: background 0.2s;
                    }
                    .round-button:hover {
                        background: #b91c1c;
                    }
                    @keyframes riseIn {
                        from { opacity: 0; transform: translateY(12px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @media (prefers-reduced-motion: reduce) {
                        * { animation-duration: 0.01s !important; }
                    }
                    "#}
                </style>
            </main>
        </ContextProvider<LightboxHost>>
    }
}
