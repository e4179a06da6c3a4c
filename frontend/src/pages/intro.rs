use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::PageLayout;
use crate::hooks::use_countdown::now_millis;
use crate::hooks::use_wedding;
use crate::Route;

#[function_component(IntroPage)]
pub fn intro_page() -> Html {
    let info = use_wedding();
    let days_remaining = info.days_remaining(now_millis());

    html! {
        <PageLayout show_navigation={false}>
            <div class="intro">
                <h1 class="intro-title">{"결혼합니다"}</h1>

                <div class="intro-parents">
                    <p>
                        <strong>{format!("{} • {}", info.groom_parents.father, info.groom_parents.mother)}</strong>
                        {"의 장남 "}
                        <span class="intro-name">{info.groom_short_name()}</span>
                    </p>
                    <p>
                        <strong>{format!("{} • {}", info.bride_parents.father, info.bride_parents.mother)}</strong>
                        {"의 장녀 "}
                        <span class="intro-name">{info.bride_short_name()}</span>
                    </p>
                </div>

                <div class="intro-poem">
                    <p>
                        {"\"따사로운 햇살 속에 시작된 이야기"}<br />
                        {"여름밤 별이 증인이 되어 줍니다"}<br />
                        {"이제 맞이할 모든 계절도"}<br />
                        {"늘 함께하며 깊어져가겠습니다."}<br />
                        {"함께 자리하여 축복해주세요.\""}
                    </p>
                </div>

                <div class="intro-when-where">
                    <div class="intro-date">{&info.date_display}</div>
                    <div class="intro-time">{&info.time_display}</div>
                    <div class="intro-venue">
                        {format!("{} {} / {}", info.venue, info.floor, info.address)}
                    </div>
                    <div class="intro-dday">{format!("D-{}", days_remaining)}</div>
                </div>

                <Link<Route> to={Route::Main} classes="intro-open-btn">
                    {"초대장 열기"}
                    <span class="intro-arrow">{"→"}</span>
                </Link<Route>>
            </div>
        </PageLayout>
    }
}
