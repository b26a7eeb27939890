use log::{info, Level};
use stylist::yew::Global;
use stylist::StyleSource;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod effects;
mod loader;
mod theme;

mod components {
    pub mod floating_buttons;
    pub mod lightbox;
    pub mod navbar;
}
mod pages {
    pub mod home;
}

use components::floating_buttons::FloatingButtons;
use components::navbar::Navbar;
use loader::{LoaderConfig, LoaderControls, LoaderOverlay};
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            html! {
                <main class="not-found">
                    <h1>{"404"}</h1>
                    <p>{"That trail doesn't exist. Head back to the homepage."}</p>
                    <a href="/" class="btn btn-primary">{"Back Home"}</a>
                </main>
            }
        }
    }
}

/// Behavioral CSS shared by the effect modules: the animations the reveal,
/// hover, ripple and letter effects toggle at runtime.
const EFFECT_CSS: &str = r#"
    body {
        margin: 0;
        font-family: 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;
        background: var(--page-bg, #fafcff);
        color: var(--page-fg, #14202e);
    }
    body.fade {
        overflow: hidden;
    }
    :root[data-theme="dark"] {
        --page-bg: #101822;
        --page-fg: #e8eef5;
    }

    main {
        transition: opacity 0.3s ease, transform 0.3s ease;
    }

    /* Scroll-reveal states */
    .section-transition {
        opacity: 0;
        transform: translateY(30px);
        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
    }
    .section-transition.visible,
    .section-animate.in-view {
        opacity: 1;
        transform: translateY(0);
    }

    .animate-text {
        opacity: 0;
        transform: translateY(20px);
        animation: fade-up-text 0.6s ease forwards;
        animation-play-state: paused;
    }
    @keyframes fade-up-text {
        to { opacity: 1; transform: translateY(0); }
    }

    .popular-card,
    .package-card,
    .gallery-item,
    .footer-brand,
    .footer-contact,
    .footer-form {
        opacity: 0;
        transform: translateY(24px);
        transition: opacity 0.6s ease, transform 0.6s ease, box-shadow 0.3s ease;
    }
    .animate-in {
        opacity: 1;
        transform: translateY(0);
    }

    img {
        opacity: 0;
        transition: opacity 0.6s ease;
    }
    img.loaded {
        opacity: 1;
    }
    @keyframes imageLoad {
        from { opacity: 0; transform: scale(1.03); }
        to { opacity: 1; transform: scale(1); }
    }

    /* Click ripple, attached dynamically to buttons */
    @keyframes ripple {
        to { transform: scale(2); opacity: 0; }
    }
    @keyframes bounce {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-8px); }
    }

    /* Letter-by-letter titles */
    .letter-animate .letter {
        display: inline-block;
        opacity: 0;
        animation: letter-fade-up 0.6s ease forwards;
        animation-delay: calc(var(--i) * 0.08s);
    }
    @keyframes letter-fade-up {
        from { opacity: 0; transform: translateY(0.6em); }
        to { opacity: 1; transform: translateY(0); }
    }
    .letter-glow .letter {
        animation-name: letter-glow-in;
    }
    @keyframes letter-glow-in {
        from { opacity: 0; text-shadow: none; }
        50% { text-shadow: 0 0 14px rgba(32, 178, 255, 0.8); }
        to { opacity: 1; text-shadow: 0 0 4px rgba(32, 178, 255, 0.3); }
    }
    .letter-slide .letter {
        animation-name: letter-slide-in;
    }
    @keyframes letter-slide-in {
        from { opacity: 0; transform: translateX(-0.6em); }
        to { opacity: 1; transform: translateX(0); }
    }
    .letter-premium .letter {
        animation-name: letter-premium-in;
    }
    @keyframes letter-premium-in {
        from { opacity: 0; transform: translateY(0.4em) scale(1.2); filter: blur(3px); }
        to { opacity: 1; transform: translateY(0) scale(1); filter: blur(0); }
    }
    .letter-capital {
        font-weight: 700;
    }
    .letter-punctuation {
        color: #20b2ff;
    }

    /* Header / navigation chrome */
    .header {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 800;
        padding: 18px 24px;
        transition: background 0.3s ease, box-shadow 0.3s ease;
    }
    .header.active {
        background: var(--page-bg, #fafcff);
        box-shadow: 0 4px 18px rgba(0, 0, 0, 0.12);
    }
    .header-content {
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .logo {
        font-weight: 700;
        font-size: 1.3rem;
        text-decoration: none;
        color: inherit;
    }
    .navbar-link {
        margin: 0 10px;
        text-decoration: none;
        color: inherit;
        transition: color 0.3s ease;
    }
    .navbar-link.active {
        color: #20b2ff;
    }
    .overlay {
        position: fixed;
        inset: 0;
        z-index: 700;
        background: rgba(0, 0, 0, 0.5);
        opacity: 0;
        pointer-events: none;
        transition: opacity 0.3s ease;
    }
    .overlay.active {
        opacity: 1;
        pointer-events: auto;
    }
    .go-top {
        position: fixed;
        right: 24px;
        bottom: 24px;
        z-index: 850;
        width: 44px;
        height: 44px;
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 50%;
        background: #20b2ff;
        color: #fff;
        text-decoration: none;
        opacity: 0;
        pointer-events: none;
        transition: opacity 0.3s ease, transform 0.3s ease;
    }
    .go-top.active {
        opacity: 1;
        pointer-events: auto;
    }
    .theme-toggle {
        border: none;
        background: transparent;
        font-size: 1.2rem;
        cursor: pointer;
        transition: transform 0.3s ease;
    }

    .floating-buttons {
        position: fixed;
        left: 24px;
        bottom: 24px;
        z-index: 850;
        display: flex;
        flex-direction: column;
        gap: 10px;
    }
    .floating-btn {
        width: 46px;
        height: 46px;
        border: none;
        border-radius: 50%;
        background: #fff;
        box-shadow: 0 6px 18px rgba(0, 0, 0, 0.18);
        cursor: pointer;
        font-size: 1.1rem;
    }

    section, .footer {
        padding: 80px 24px;
    }
    .hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        text-align: center;
    }
"#;

#[function_component]
fn App() -> Html {
    let controls = use_state(LoaderControls::new);

    {
        let controls = (*controls).clone();
        use_effect_with_deps(
            move |_| {
                // Persisted theme first so the splash already matches it.
                theme::apply_saved_theme();
                controls.mount(LoaderConfig::default());
                || ()
            },
            (),
        );
    }

    html! {
        <ContextProvider<LoaderControls> context={(*controls).clone()}>
            <Global css={EFFECT_CSS} />
            <LoaderOverlay />
            <BrowserRouter>
                <Navbar />
                <Switch<Route> render={switch} />
            </BrowserRouter>
            <FloatingButtons />
        </ContextProvider<LoaderControls>>
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
