//! The single marketing page: hero, destinations, packages, gallery and the
//! footer with the newsletter form. Section markup carries the class names
//! the reveal/hover/letter effects target.

use gloo_console::log;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{HtmlButtonElement, HtmlFormElement, HtmlInputElement};
use yew::prelude::*;

use crate::components::lightbox::Lightbox;
use crate::effects;

const GALLERY_IMAGES: [&str; 6] = [
    "/assets/gallery-santorini.jpg",
    "/assets/gallery-kyoto.jpg",
    "/assets/gallery-patagonia.jpg",
    "/assets/gallery-sahara.jpg",
    "/assets/gallery-reykjavik.jpg",
    "/assets/gallery-bali.jpg",
];

const POPULAR_DESTINATIONS: [(&str, &str, &str); 3] = [
    (
        "/assets/popular-santorini.jpg",
        "Santorini, Greece",
        "Whitewashed villages above a caldera that turns gold at sunset.",
    ),
    (
        "/assets/popular-kyoto.jpg",
        "Kyoto, Japan",
        "Temples, tea houses and lantern-lit lanes in the old capital.",
    ),
    (
        "/assets/popular-patagonia.jpg",
        "Patagonia, Chile",
        "Granite towers and glacier fields at the end of the world.",
    ),
];

const PACKAGES: [(&str, &str, &str, &str); 3] = [
    (
        "/assets/package-island.jpg",
        "Island Hopper",
        "7 days across three islands with a private skipper.",
        "$1,290",
    ),
    (
        "/assets/package-trek.jpg",
        "High Trail Trek",
        "10 days of guided hiking, huts and hot springs.",
        "$1,840",
    ),
    (
        "/assets/package-city.jpg",
        "City Lights Weekend",
        "3 days of food tours, rooftops and late museums.",
        "$640",
    ),
];

/// The fake newsletter submit: fade, "Processing…", success flash, reset.
/// Purely presentational; nothing leaves the browser.
fn run_submit_sequence(form: HtmlFormElement) {
    let submit = match form
        .query_selector("button[type='submit']")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
    {
        Some(button) => button,
        None => return,
    };
    let original_text = submit.text_content().unwrap_or_default();

    let form_style = form.style();
    let _ = form_style.set_property("opacity", "0.5");
    let _ = form_style.set_property("transform", "scale(0.98)");
    let _ = form_style.set_property("transition", "all 0.3s ease");

    submit.set_text_content(Some("Processing..."));
    let _ = submit.style().set_property("opacity", "0.7");
    submit.set_disabled(true);

    Timeout::new(1_500, move || {
        let _ = form.style().set_property("opacity", "1");
        let _ = form.style().set_property("transform", "scale(1)");
        submit.set_text_content(Some("Success! ✓"));
        let _ = submit.style().set_property("background", "#4CAF50");
        let _ = submit.style().set_property("opacity", "1");

        Timeout::new(2_000, move || {
            let _ = form.style().set_property("opacity", "0.8");

            Timeout::new(300, move || {
                submit.set_text_content(Some(&original_text));
                let _ = submit.style().set_property("opacity", "1");
                let _ = submit.style().remove_property("background");
                submit.set_disabled(false);
                let _ = form.style().set_property("opacity", "1");
                let _ = form.style().set_property("transform", "scale(1)");
                form.reset();
            })
            .forget();
        })
        .forget();
    })
    .forget();
}

#[function_component(Home)]
pub fn home() -> Html {
    let lightbox_index = use_state(|| None::<usize>);

    // Wire the page-lifetime effects once the sections exist.
    use_effect_with_deps(
        move |_| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                effects::install(&document);
            }
            || ()
        },
        (),
    );

    let on_submit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        let form: HtmlFormElement = e.target_unchecked_into();
        if let Some(email) = form
            .query_selector("input[type='email']")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            log!("newsletter signup", email.value());
        }
        run_submit_sequence(form);
    });

    let on_lightbox_close = {
        let lightbox_index = lightbox_index.clone();
        Callback::from(move |_| lightbox_index.set(None))
    };
    let on_lightbox_select = {
        let lightbox_index = lightbox_index.clone();
        Callback::from(move |index: usize| lightbox_index.set(Some(index)))
    };

    let gallery_items = GALLERY_IMAGES.iter().enumerate().map(|(index, src)| {
        let open = {
            let lightbox_index = lightbox_index.clone();
            Callback::from(move |_: MouseEvent| lightbox_index.set(Some(index)))
        };
        html! {
            <figure class="gallery-item wander-image-container scale-rotate" onclick={open}>
                <img src={*src} alt="Travel gallery" loading="lazy" class="wander-hover-image" />
            </figure>
        }
    });

    let popular_cards = POPULAR_DESTINATIONS.iter().map(|(src, title, blurb)| {
        html! {
            <div class="popular-card parallax-hover">
                <figure class="card-banner wander-image-container">
                    <img src={*src} alt={*title} loading="lazy" class="wander-hover-image parallax-bg" />
                </figure>
                <div class="card-content parallax-content">
                    <h3 class="card-title">{*title}</h3>
                    <p class="card-text animate-text">{*blurb}</p>
                </div>
            </div>
        }
    });

    let package_cards = PACKAGES.iter().map(|(src, name, blurb, price)| {
        html! {
            <div class="package-card parallax-hover">
                <figure class="card-banner image-overlay-effect">
                    <img src={*src} alt={*name} loading="lazy" class="wander-hover-image" />
                    <div class="adventure-overlay">
                        <div class="overlay-title">{*name}</div>
                        <div class="overlay-text">{*price}</div>
                        <button class="overlay-button">{"Book Now"}</button>
                    </div>
                </figure>
                <div class="card-content">
                    <h3 class="card-title">{*name}</h3>
                    <p class="card-text animate-text">{*blurb}</p>
                    <div class="card-footer">
                        <span class="card-price">{*price}</span>
                        <button class="btn card-btn">{"Book Now"}</button>
                    </div>
                </div>
            </div>
        }
    });

    html! {
        <>
        <main>
            <section id="home" class="hero section-animate">
                <div class="hero-content">
                    <h1 class="hero-title section-title">{"Find Your Next Horizon"}</h1>
                    <p class="hero-subtitle animate-text">
                        {"Hand-picked destinations, honest guides and trips that feel like yours."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="btn btn-primary">{"Start Exploring"}</button>
                        <button class="btn btn-secondary">{"Watch the Film"}</button>
                    </div>
                </div>
            </section>

            <section id="destination" class="destination section-animate">
                <p class="section-subtitle animate-text">{"Uncover Places"}</p>
                <h2 class="section-title">{"Popular Destinations"}</h2>
                <div class="popular-grid">
                    { for popular_cards }
                </div>
            </section>

            <section id="packages" class="packages section-animate">
                <p class="section-subtitle animate-text">{"Curated For You"}</p>
                <h2 class="section-title">{"Travel Packages"}</h2>
                <div class="package-grid">
                    { for package_cards }
                </div>
            </section>

            <section id="gallery" class="gallery section-animate">
                <p class="section-subtitle animate-text">{"Through the Lens"}</p>
                <h2 class="section-title">{"Traveller Gallery"}</h2>
                <div class="gallery-list">
                    { for gallery_items }
                </div>
            </section>
        </main>

        <footer id="contact" class="footer section-animate">
            <div class="footer-top">
                <div class="footer-brand">
                    <span class="logo">{"WanderWise"}</span>
                    <p class="footer-text animate-text">
                        {"Small-group adventures and honest travel advice since 2016."}
                    </p>
                </div>
                <div class="footer-contact">
                    <h4 class="footer-heading">{"Contact Us"}</h4>
                    <p>{"hello@wanderwise.example"}</p>
                    <p>{crate::config::SUPPORT_PHONE}</p>
                </div>
                <div class="footer-form">
                    <h4 class="footer-heading">{"Get travel ideas in your inbox"}</h4>
                    <form class="form-wrapper" onsubmit={on_submit}>
                        <input
                            type="email"
                            name="email"
                            required=true
                            placeholder="Enter your email"
                            class="form-input"
                        />
                        <button type="submit" class="btn btn-secondary">{"Subscribe"}</button>
                    </form>
                </div>
            </div>
            <p class="copyright">{"© 2025 WanderWise. All rights reserved."}</p>
        </footer>

        <Lightbox
            images={GALLERY_IMAGES.iter().map(|src| AttrValue::from(*src)).collect::<Vec<_>>()}
            index={*lightbox_index}
            on_close={on_lightbox_close}
            on_select={on_lightbox_select}
        />
        </>
    }
}
