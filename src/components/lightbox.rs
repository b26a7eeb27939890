//! Gallery lightbox: one image at a time with wrap-around navigation.

use yew::prelude::*;

pub fn next_index(current: usize, len: usize) -> usize {
    (current + 1) % len
}

pub fn prev_index(current: usize, len: usize) -> usize {
    (current + len - 1) % len
}

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub images: Vec<AttrValue>,
    /// `None` keeps the lightbox closed.
    pub index: Option<usize>,
    pub on_close: Callback<()>,
    pub on_select: Callback<usize>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let index = match props.index {
        Some(index) if !props.images.is_empty() => index % props.images.len(),
        _ => return html! {},
    };
    let src = props.images[index].clone();
    let len = props.images.len();

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let prev = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_select.emit(prev_index(index, len));
        })
    };
    let next = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_select.emit(next_index(index, len));
        })
    };
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="wander-lightbox" onclick={close.clone()}>
            <style>
                {r#"
                    .wander-lightbox {
                        position: fixed;
                        inset: 0;
                        z-index: 9999;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: rgba(0, 0, 0, 0.9);
                        animation: lightbox-fade 0.3s ease;
                    }
                    .lightbox-content {
                        position: relative;
                        max-width: 90%;
                        max-height: 90%;
                    }
                    .lightbox-image {
                        max-width: 100%;
                        max-height: 100%;
                        object-fit: contain;
                        border-radius: 10px;
                    }
                    .lightbox-close {
                        position: absolute;
                        top: -40px;
                        right: 0;
                        color: white;
                        font-size: 30px;
                        cursor: pointer;
                        transition: opacity 0.3s ease;
                    }
                    .lightbox-close:hover {
                        opacity: 0.7;
                    }
                    .lightbox-nav {
                        position: absolute;
                        top: 50%;
                        transform: translateY(-50%);
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        pointer-events: none;
                    }
                    .lightbox-prev,
                    .lightbox-next {
                        background: rgba(255, 255, 255, 0.2);
                        color: white;
                        border: none;
                        padding: 10px 15px;
                        cursor: pointer;
                        font-size: 18px;
                        border-radius: 5px;
                        pointer-events: auto;
                        transition: background 0.3s ease;
                    }
                    .lightbox-prev:hover,
                    .lightbox-next:hover {
                        background: rgba(255, 255, 255, 0.4);
                    }
                    @keyframes lightbox-fade {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                "#}
            </style>
            <div class="lightbox-content" onclick={swallow}>
                <span class="lightbox-close" onclick={close}>{"×"}</span>
                <img class="lightbox-image" {src} alt="Gallery view" />
                <div class="lightbox-nav">
                    <button class="lightbox-prev" onclick={prev}>{"❮"}</button>
                    <button class="lightbox-next" onclick={next}>{"❯"}</button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_wraps_in_both_directions() {
        assert_eq!(next_index(0, 6), 1);
        assert_eq!(next_index(5, 6), 0);
        assert_eq!(prev_index(0, 6), 5);
        assert_eq!(prev_index(3, 6), 2);
    }

    #[test]
    fn single_image_gallery_stays_put() {
        assert_eq!(next_index(0, 1), 0);
        assert_eq!(prev_index(0, 1), 0);
    }
}
