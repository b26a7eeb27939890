use web_sys::js_sys;
use yew::prelude::*;

use super::sequence::{ADVENTURE_QUOTES, LOADING_MESSAGES};
use super::LoaderControls;

const PARTICLE_COUNT: usize = 20;

/// Full-screen overlay shown while the loading sequence runs. The sequencer
/// drives it purely through the ids/classes below; the markup renders once
/// and is removed from the document at the end of the hide step.
#[function_component(LoaderOverlay)]
pub fn loader_overlay() -> Html {
    let controls = use_context::<LoaderControls>();
    let on_skip = Callback::from(move |_: MouseEvent| {
        if let Some(controls) = &controls {
            controls.force_complete();
        }
    });

    let particles = (0..PARTICLE_COUNT).map(|_| {
        let left = js_sys::Math::random() * 100.0;
        let delay = js_sys::Math::random() * 4.0;
        let duration = 3.0 + js_sys::Math::random() * 2.0;
        html! {
            <div
                class="particle"
                style={format!(
                    "left: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
                    left, delay, duration
                )}
            ></div>
        }
    });

    html! {
        <div id="page-loader" class="page-loader loader-option-1">
            <style>
                {r#"
                    .page-loader {
                        position: fixed;
                        inset: 0;
                        z-index: 9000;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(135deg, #0b2545 0%, #13315c 55%, #1d4e89 100%);
                        opacity: 1;
                        transition: opacity 0.5s ease;
                        overflow: hidden;
                    }
                    .page-loader.fade-out {
                        opacity: 0;
                        pointer-events: none;
                    }
                    .loader-content {
                        position: relative;
                        z-index: 2;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 18px;
                        color: #fff;
                        text-align: center;
                    }
                    .loader-logo {
                        font-size: 2rem;
                        font-weight: 700;
                        letter-spacing: 2px;
                    }
                    .loader-spinner,
                    .loader-dots,
                    .loader-bars {
                        display: none;
                        height: 48px;
                    }
                    .loader-option-1 .loader-spinner { display: block; }
                    .loader-option-2 .loader-dots { display: flex; }
                    .loader-option-3 .loader-bars { display: flex; }
                    .loader-spinner {
                        width: 48px;
                        border: 4px solid rgba(255, 255, 255, 0.2);
                        border-top-color: #20b2ff;
                        border-radius: 50%;
                        animation: loader-spin 1s linear infinite;
                    }
                    .loader-dots {
                        align-items: center;
                        gap: 10px;
                    }
                    .loader-dots span {
                        width: 12px;
                        height: 12px;
                        border-radius: 50%;
                        background: #20b2ff;
                        animation: loader-bounce 0.9s ease-in-out infinite;
                    }
                    .loader-dots span:nth-child(2) { animation-delay: 0.15s; }
                    .loader-dots span:nth-child(3) { animation-delay: 0.3s; }
                    .loader-bars {
                        align-items: flex-end;
                        gap: 6px;
                    }
                    .loader-bars span {
                        width: 8px;
                        height: 36px;
                        background: #20b2ff;
                        animation: loader-stretch 1s ease-in-out infinite;
                    }
                    .loader-bars span:nth-child(2) { animation-delay: 0.1s; }
                    .loader-bars span:nth-child(3) { animation-delay: 0.2s; }
                    .loader-bars span:nth-child(4) { animation-delay: 0.3s; }
                    .loader-bars span:nth-child(5) { animation-delay: 0.4s; }
                    .loader-text {
                        font-size: 1.2rem;
                        min-height: 1.6em;
                        opacity: 1;
                        transition: opacity 0.2s ease;
                    }
                    .loader-progress-track {
                        width: 260px;
                        height: 6px;
                        border-radius: 3px;
                        background: rgba(255, 255, 255, 0.15);
                        overflow: hidden;
                    }
                    .loader-progress {
                        width: 0%;
                        height: 100%;
                        border-radius: 3px;
                        background: linear-gradient(90deg, #20b2ff, #7fd8ff);
                        transition: width 0.15s ease-out;
                    }
                    .loader-percentage {
                        font-size: 0.9rem;
                        opacity: 0.9;
                    }
                    .loader-message {
                        font-size: 0.85rem;
                        opacity: 0.8;
                        min-height: 1.4em;
                        transition: opacity 0.3s ease;
                    }
                    .loader-particles {
                        position: absolute;
                        inset: 0;
                        z-index: 1;
                        pointer-events: none;
                    }
                    .loader-skip {
                        position: absolute;
                        right: 24px;
                        bottom: 24px;
                        z-index: 3;
                        padding: 8px 18px;
                        border: 1px solid rgba(255, 255, 255, 0.4);
                        border-radius: 18px;
                        background: transparent;
                        color: rgba(255, 255, 255, 0.8);
                        cursor: pointer;
                        transition: background 0.3s ease;
                    }
                    .loader-skip:hover {
                        background: rgba(255, 255, 255, 0.15);
                    }
                    .loader-particles .particle {
                        position: absolute;
                        bottom: -10px;
                        width: 6px;
                        height: 6px;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.35);
                        animation: loader-float 4s linear infinite;
                    }
                    @keyframes loader-spin {
                        to { transform: rotate(360deg); }
                    }
                    @keyframes loader-bounce {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-14px); }
                    }
                    @keyframes loader-stretch {
                        0%, 100% { transform: scaleY(0.4); }
                        50% { transform: scaleY(1); }
                    }
                    @keyframes loader-float {
                        0% { transform: translateY(0); opacity: 0; }
                        10% { opacity: 1; }
                        100% { transform: translateY(-100vh); opacity: 0; }
                    }
                "#}
            </style>
            <div class="loader-content">
                <div class="loader-logo">{"WanderWise"}</div>
                <div class="loader-spinner"></div>
                <div class="loader-dots">
                    <span></span><span></span><span></span>
                </div>
                <div class="loader-bars">
                    <span></span><span></span><span></span><span></span><span></span>
                </div>
                <p class="loader-text">{ADVENTURE_QUOTES[0]}</p>
                <div class="loader-progress-track">
                    <div class="loader-progress"></div>
                </div>
                <span class="loader-percentage">{"0%"}</span>
                <p class="loader-message">{LOADING_MESSAGES[0]}</p>
            </div>
            <div id="loader-particles" class="loader-particles">
                { for particles }
            </div>
            <button class="loader-skip" onclick={on_skip}>{"Skip"}</button>
        </div>
    }
}
