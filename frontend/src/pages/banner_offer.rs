use yew::prelude::*;

use crate::config;
use crate::hooks::use_countdown;

#[derive(Properties, PartialEq)]
pub struct BannerOfferProps {
    #[prop_or(config::PROMO_SECONDS)]
    pub seconds: u32,
}

/// Promo banner with a live countdown. The timer restarts on every page load.
#[function_component(BannerOffer)]
pub fn banner_offer(props: &BannerOfferProps) -> Html {
    let countdown = use_countdown(props.seconds);
    let mm = countdown.minutes();
    let ss = countdown.seconds();
    let progress = format!(
        "width: {:.2}%; transition: width 1s linear;",
        countdown.progress_percent()
    );

    html! {
        <section class="banner-offer">
            <div class="banner-inner">
                <div class="banner-card">
                    <div class="banner-copy">
                        <h3>{"Limited-Time Offer: "}<span class="underlined">{"30% OFF"}</span></h3>
                        <p>
                            {"Book within the next "}
                            <span class="strong">{countdown.label()}</span>
                            {" to lock in the discount."}
                        </p>
                    </div>

                    <div class="banner-timer" role="timer" aria-live="polite" aria-label="Time left on offer">
                        <div class="timer-tile">
                            <span class="timer-value">{mm}</span>
                            <span class="timer-unit">{"Minutes"}</span>
                        </div>
                        <div class="timer-separator">
                            <span>{":"}</span>
                            <div class="timer-track" aria-hidden="true">
                                <div class="timer-fill" style={progress}></div>
                            </div>
                        </div>
                        <div class="timer-tile">
                            <span class="timer-value">{ss}</span>
                            <span class="timer-unit">{"Seconds"}</span>
                        </div>
                    </div>

                    <div class="banner-actions">
                        <a href="#services" class="banner-cta" aria-label="View packages and pricing">
                            {"View Packages & Pricing"}
                        </a>
                        <nav class="banner-socials" aria-label="Follow Royal Touch Auto Detailing">
                            <a href={config::INSTAGRAM_URL} target="_blank" rel="noreferrer" aria-label="Instagram">{"IG"}</a>
                            <a href={config::FACEBOOK_URL} target="_blank" rel="noreferrer" aria-label="Facebook">{"f"}</a>
                        </nav>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .banner-offer {
                    position: relative;
                    overflow: hidden;
                    background: linear-gradient(90deg, #dc2626, #ef4444, #f43f5e);
                    color: #ffffff;
                }
                .banner-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1.5rem 1rem;
                    animation: bannerIn 0.5s ease-out;
                }
                @keyframes bannerIn {
                    from { opacity: 0; transform: translateY(-10px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @media (prefers-reduced-motion: reduce) {
                    .banner-inner { animation-duration: 0.2s; }
                }
                .banner-card {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1.25rem;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.1);
                    padding: 1.25rem;
                    backdrop-filter: blur(12px);
                }
                @media (min-width: 640px) {
                    .banner-card { flex-direction: row; }
                }
                .banner-copy h3 {
                    margin: 0;
                    font-size: 1.5rem;
                    font-weight: 800;
                }
                .underlined {
                    text-decoration: underline;
                }
                .banner-timer {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 0.5rem;
                    width: 16rem;
                }
                .timer-tile {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    border-radius: 0.75rem;
                    background: rgba(255, 255, 255, 0.15);
                    padding: 0.5rem 0.75rem;
                }
                .timer-value {
                    font-size: 1.25rem;
                    font-weight: 700;
                    font-variant-numeric: tabular-nums;
                }
                .timer-unit {
                    font-size: 10px;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    opacity: 0.8;
                }
                .timer-separator {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 0.25rem;
                    font-weight: 800;
                }
                .timer-track {
                    width: 6rem;
                    height: 0.375rem;
                    overflow: hidden;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.25);
                }
                .timer-fill {
                    height: 100%;
                    background: #ffffff;
                }
                .banner-actions {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .banner-cta {
                    border-radius: 9999px;
                    background: #ffffff;
                    color: #dc2626;
                    padding: 0.6rem 1.25rem;
                    font-size: 0.875rem;
                    font-weight: 600;
                    text-decoration: none;
                }
                .banner-socials a {
                    display: inline-flex;
                    width: 2.5rem;
                    height: 2.5rem;
                    align-items: center;
                    justify-content: center;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.15);
                    color: #ffffff;
                    text-decoration: none;
                    margin-left: 0.5rem;
                }
                "#}
            </style>
        </section>
    }
}
