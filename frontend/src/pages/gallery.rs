use yew::prelude::*;

use crate::components::{ComingSoonBanner, GalleryPhoto, PageLayout};

/// Photos shown once the studio delivers them; the placeholder assets
/// keep the layout honest until then.
const PHOTOS: [(&str, &str); 5] = [
    ("/assets/gallery/photo-01.jpg", "함께한 첫 여행"),
    ("/assets/gallery/photo-02.jpg", "프로포즈 순간"),
    ("/assets/gallery/photo-03.jpg", "우리의 추억"),
    ("/assets/gallery/photo-04.jpg", "특별한 날"),
    ("/assets/gallery/photo-05.jpg", "행복한 시간"),
];

#[function_component(GalleryPage)]
pub fn gallery_page() -> Html {
    html! {
        <PageLayout>
            <ComingSoonBanner />

            <h1 class="page-title">{"우리의 이야기"}</h1>

            <div class="gallery-grid">
                {for PHOTOS.iter().map(|(src, caption)| html! {
                    <GalleryPhoto src={*src} caption={*caption} />
                })}
            </div>

            <section class="card gallery-story">
                <h2>{"우리의 아름다운 추억"}</h2>
                <p>
                    {"유예찬과 박수희의 특별한 순간들을 담은 사진들입니다. \
                      오랜 시간 함께해온 우리의 이야기가 이 사진들 속에 담겨 있습니다."}
                </p>
                <div class="gallery-tags">
                    {for ["첫 만남", "여행", "프로포즈", "데이트"].iter().map(|tag| html! {
                        <span class="gallery-tag">{*tag}</span>
                    })}
                </div>
            </section>

            <p class="gallery-closing">{"\"그리고 이제 새로운 이야기가 시작됩니다\""}</p>
        </PageLayout>
    }
}
