use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};

use crate::capture::capture_or_alert;
use crate::config;
use crate::content::{ServicePackage, SERVICES};
use crate::hooks::use_countdown;

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    service: &'static ServicePackage,
    index: usize,
}

#[function_component(ServiceCard)]
fn service_card(props: &ServiceCardProps) -> Html {
    let service = props.service;

    html! {
        <article class="service-card" style={format!("animation-delay: {:.2}s;", props.index as f64 * 0.08)}>
            <div class="service-media">
                <img src={config::asset_url(service.image)} alt={service.title} loading="lazy" />
            </div>
            <div class="service-body">
                <h3>{service.title}</h3>
                <div class="service-price">
                    <span class="price-new">{service.price_new}</span>
                    <span class="price-old">{service.price_old}</span>
                    <span class="service-time">{service.time}</span>
                </div>
                <p class="service-description">{service.description}</p>
                <ul class="service-features" aria-label={format!("{} features", service.title)}>
                    { for service.features.iter().map(|feature| html! {
                        <li key={*feature}><span class="check">{"✓"}</span>{*feature}</li>
                    }) }
                </ul>
                <div class="cta-bottom">
                    <a
                        href={config::BOOKING_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="book-button"
                        aria-label={format!("Book {} (opens Calendly in a new tab)", service.title)}
                    >
                        {"Book Now"}
                    </a>
                </div>
            </div>
        </article>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let countdown = use_countdown(config::PROMO_SECONDS);
    let capture_ref = use_node_ref();

    let on_capture = {
        let capture_ref = capture_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(node) = capture_ref.cast::<Element>() else {
                gloo_console::warn!("capture target is not mounted");
                return;
            };
            let file_name = format!(
                "{}-{}.png",
                config::OFFER_CAPTURE_PREFIX,
                web_sys::js_sys::Date::now() as u64
            );
            spawn_local(capture_or_alert(node, file_name));
        })
    };

    html! {
        <section id="services" class="services-section">
            <div class="section-inner">
                <div class="services-heading">
                    <div class="section-heading left">
                        <h2>{"Our "}<span class="accent">{"Royal Services"}</span></h2>
                        <p>{"Choose a package tailored to your needs, crafted with care, precision, and the Royal Touch promise."}</p>
                    </div>
                    <div class="services-offer">
                        <span class="offer-timer">{format!("Offer ends in {}", countdown.label())}</span>
                        <button class="save-offer" onclick={on_capture}>{"Save offer"}</button>
                    </div>
                </div>

                <div ref={capture_ref}>
                    <div class="services-grid">
                        { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                            <ServiceCard key={service.title} service={service} index={i} />
                        }) }
                    </div>
                    <p class="capture-note" data-hide-in-screenshot="true">
                        {"Screenshot the offer above to claim the discount at booking."}
                    </p>
                </div>
            </div>

            <style>
                {r#"
                .services-section {
                    position: relative;
                    overflow: hidden;
                    background: #ffffff;
                    padding: 4rem 0;
                }
                .services-heading {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: space-between;
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                }
                @media (min-width: 640px) {
                    .services-heading { flex-direction: row; }
                }
                .services-offer {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .offer-timer {
                    font-variant-numeric: tabular-nums;
                    font-weight: 600;
                    color: #dc2626;
                }
                .save-offer {
                    border: 1px solid #fecaca;
                    border-radius: 9999px;
                    background: #fef2f2;
                    color: #b91c1c;
                    padding: 0.5rem 1rem;
                    cursor: pointer;
                }
                .services-grid {
                    display: grid;
                    gap: 1.5rem;
                    grid-template-columns: 1fr;
                }
                @media (min-width: 768px) {
                    .services-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (min-width: 1024px) {
                    .services-grid { grid-template-columns: repeat(3, 1fr); }
                }
                .service-card {
                    display: flex;
                    flex-direction: column;
                    overflow: hidden;
                    border: 1px solid #fee2e2;
                    border-radius: 1rem;
                    background: #ffffff;
                    animation: riseIn 0.5s ease-out both;
                }
                .service-media {
                    aspect-ratio: 16 / 10;
                    overflow: hidden;
                }
                .service-media img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.5s;
                }
                .service-card:hover .service-media img {
                    transform: scale(1.05);
                }
                .service-body {
                    display: flex;
                    flex: 1;
                    flex-direction: column;
                    padding: 1.25rem;
                }
                .service-price {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 0.5rem;
                }
                .price-new {
                    font-size: 1.875rem;
                    font-weight: 800;
                    color: #dc2626;
                }
                .price-old {
                    font-size: 0.875rem;
                    color: #94a3b8;
                    text-decoration: line-through;
                }
                .service-time {
                    border-radius: 9999px;
                    background: #fef2f2;
                    padding: 0.25rem 0.75rem;
                    font-size: 11px;
                    color: #b91c1c;
                }
                .service-features {
                    list-style: none;
                    padding: 0;
                    margin: 1.25rem 0 1rem;
                }
                .check {
                    margin-right: 0.6rem;
                    color: #dc2626;
                }
                .cta-bottom {
                    margin-top: auto;
                }
                .book-button {
                    display: inline-flex;
                    width: 100%;
                    justify-content: center;
                    border-radius: 9999px;
                    background: #dc2626;
                    color: #ffffff;
                    padding: 0.75rem 1.25rem;
                    font-weight: 600;
                    text-decoration: none;
                }
                .capture-note {
                    font-size: 0.8rem;
                    color: #64748b;
                }
                "#}
            </style>
        </section>
    }
}
