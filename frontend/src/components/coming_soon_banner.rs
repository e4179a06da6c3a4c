use yew::prelude::*;

/// Overlay shown while the wedding photos are not ready yet.
#[function_component(ComingSoonBanner)]
pub fn coming_soon_banner() -> Html {
    html! {
        <div class="coming-soon-backdrop">
            <div class="coming-soon-card">
                <div class="coming-soon-spark">{"✨"}</div>
                <h2>{"준비 중입니다"}</h2>
                <p>
                    {"조금만 기다려주세요!"}<br />
                    {"웨딩 사진은 6월 3일에 올라올 예정입니다."}
                </p>
            </div>
        </div>
    }
}
