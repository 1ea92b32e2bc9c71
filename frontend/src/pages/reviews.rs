use yew::prelude::*;
use web_sys::MouseEvent;

use crate::carousel::PagerAction;
use crate::config;
use crate::content::{Review, REVIEWS};
use crate::hooks::use_pager;

#[derive(Properties, PartialEq)]
struct ReviewCardProps {
    review: &'static Review,
    index: usize,
}

#[function_component(ReviewCard)]
fn review_card(props: &ReviewCardProps) -> Html {
    let review = props.review;
    let delay = format!("animation-delay: {:.2}s;", props.index as f64 * 0.05);

    html! {
        <li class="review-card" style={delay}>
            <div class="review-header">
                <img class="google-g" src={config::asset_url("/assets/google-g.svg")} alt="" aria-hidden="true" />
                <div class="review-meta">
                    <h3>{review.name}</h3>
                    <p>{review.time}</p>
                </div>
            </div>
            <div class="review-stars" aria-label={format!("{} out of 5 stars", review.stars)}>
                { for (0..review.stars).map(|_| html! { <span class="star">{"★"}</span> }) }
            </div>
            <p class="review-text">{format!("“{}”", review.text)}</p>
        </li>
    }
}

#[function_component(Reviews)]
pub fn reviews() -> Html {
    let pager = use_pager(REVIEWS.len());

    let next = {
        let pager = pager.clone();
        Callback::from(move |_: MouseEvent| pager.dispatch(PagerAction::Next))
    };
    let prev = {
        let pager = pager.clone();
        Callback::from(move |_: MouseEvent| pager.dispatch(PagerAction::Prev))
    };

    let start = pager.visible_range().start;

    html! {
        <section id="reviews" class="reviews-section">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"What Our "}<span class="accent">{"Clients Say"}</span></h2>
                    <p>
                        {"Real stories from real customers, see why drivers trust "}
                        <span class="accent strong">{"Royal Touch Detailing"}</span>
                        {"."}
                    </p>
                </div>

                // Keyed on page and page size so the list re-animates on every flip.
                <ul key={format!("{}-{}", pager.page(), pager.per_page())} class="review-grid">
                    { for pager.visible(REVIEWS).iter().enumerate().map(|(i, review)| html! {
                        <ReviewCard key={format!("{}-{}", review.name, start + i)} review={review} index={i} />
                    }) }
                </ul>

                <div class="carousel-nav">
                    <button class="round-button" aria-label="Previous reviews" onclick={prev}>{"‹"}</button>
                    <button class="round-button" aria-label="Next reviews" onclick={next}>{"›"}</button>
                </div>
            </div>

            <style>
                {r#"
                .review-grid {
                    display: grid;
                    gap: 1rem;
                    list-style: none;
                    padding: 0;
                    grid-template-columns: 1fr;
                    animation: riseIn 0.3s ease-out;
                }
                @media (min-width: 640px) {
                    .review-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (min-width: 1024px) {
                    .review-grid { grid-template-columns: repeat(3, 1fr); }
                }
                .review-card {
                    display: flex;
                    flex-direction: column;
                    border: 1px solid rgba(226, 232, 240, 0.7);
                    border-radius: 0.75rem;
                    background: #ffffff;
                    padding: 1.25rem;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    animation: riseIn 0.4s ease-out both;
                    transition: transform 0.2s, box-shadow 0.2s;
                }
                .review-card:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
                }
                .review-header {
                    display: flex;
                    gap: 0.5rem;
                    margin-bottom: 0.75rem;
                }
                .google-g {
                    width: 1.25rem;
                    height: 1.25rem;
                }
                .review-meta h3 {
                    margin: 0;
                    font-size: 15px;
                    color: #0f172a;
                }
                .review-meta p {
                    margin: 0;
                    font-size: 0.75rem;
                    color: #64748b;
                }
                .review-stars {
                    margin-bottom: 0.75rem;
                    color: #facc15;
                }
                .review-text {
                    font-size: 0.875rem;
                    line-height: 1.6;
                    color: #334155;
                }
                "#}
            </style>
        </section>
    }
}
