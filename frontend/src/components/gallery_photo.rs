use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GalleryPhotoProps {
    pub src: AttrValue,
    pub caption: AttrValue,
}

/// One gallery image. A failed load swaps the image for a textual
/// placeholder instead of surfacing an alert.
#[function_component(GalleryPhoto)]
pub fn gallery_photo(props: &GalleryPhotoProps) -> Html {
    let load_failed = use_state(|| false);

    let on_error = {
        let load_failed = load_failed.clone();
        Callback::from(move |_: Event| load_failed.set(true))
    };

    html! {
        <figure class="gallery-photo">
            {if *load_failed {
                html! {
                    <div class="gallery-photo-placeholder">
                        {"사진을 불러오지 못했습니다"}
                    </div>
                }
            } else {
                html! {
                    <img
                        src={props.src.clone()}
                        alt={props.caption.clone()}
                        onerror={on_error}
                    />
                }
            }}
            <figcaption>{props.caption.clone()}</figcaption>
        </figure>
    }
}
