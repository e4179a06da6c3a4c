use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::{CalendarDisplay, CountdownTimer, PageLayout, RsvpModal};
use crate::hooks::use_wedding;
use crate::services::platform;

/// How long the "copied" indicator stays next to an account entry.
const COPIED_INDICATOR_MILLIS: u32 = 2_000;

#[function_component(MainPage)]
pub fn main_page() -> Html {
    let info = use_wedding();
    let rsvp_open = use_state(|| false);
    let copied_account = use_state(|| Option::<String>::None);

    let open_rsvp = {
        let rsvp_open = rsvp_open.clone();
        Callback::from(move |_: MouseEvent| rsvp_open.set(true))
    };

    let close_rsvp = {
        let rsvp_open = rsvp_open.clone();
        Callback::from(move |_: ()| rsvp_open.set(false))
    };

    let copy_account = {
        let copied_account = copied_account.clone();
        Callback::from(move |(label, number): (String, String)| {
            platform::copy_to_clipboard(&number);
            copied_account.set(Some(label));

            let copied_account = copied_account.clone();
            spawn_local(async move {
                TimeoutFuture::new(COPIED_INDICATOR_MILLIS).await;
                copied_account.set(None);
            });
        })
    };

    html! {
        <PageLayout>
            <h1 class="page-title">{"Our Wedding"}</h1>

            <section class="card countdown-section">
                <CountdownTimer
                    target_millis={info.event_millis()}
                    couple_label={info.couple_label()}
                />
                <div class="event-when">
                    <div class="event-date">{&info.date_display}</div>
                    <div class="event-time">{&info.time_display}</div>
                </div>
            </section>

            <section class="card calendar-section">
                <CalendarDisplay anchor={info.event_date()} highlight_day={info.event_day()} />
            </section>

            <section class="card venue-section">
                <h2>{"오시는 길"}</h2>
                <h3>{format!("{} {}", info.venue, info.floor)}</h3>
                <p class="venue-address">{&info.address}</p>

                <div class="map-links">
                    <a
                        href="https://naver.me/F9N45Mo5"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="map-link naver"
                    >
                        {"네이버 지도"}
                    </a>
                    <a
                        href="https://place.map.kakao.com/2098354524"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="map-link kakao"
                    >
                        {"카카오 지도"}
                    </a>
                </div>

                <div class="transit-guide">
                    <h3>{"교통 안내"}</h3>
                    <p><strong>{"지하철"}</strong>{": 신림역 5번 출구"}</p>
                    <p><strong>{"셔틀버스"}</strong>{": 신림역 5번 출구 앞 10분마다 운행"}</p>
                    <p><strong>{"버스"}</strong>{": 503, 504, 6515, 6516 (신림역 하차)"}</p>
                </div>
            </section>

            <section class="card contacts-section">
                <h2>{"연락처"}</h2>
                <div class="contact-grid">
                    {for info.contacts.iter().map(|contact| {
                        let phone = contact.phone.clone();
                        let on_call = Callback::from(move |_: MouseEvent| {
                            platform::open_dialer(&phone);
                        });
                        html! {
                            <button class="contact-button" onclick={on_call}>
                                <span class="contact-role">{&contact.role}</span>
                                <span class="contact-name">{&contact.name}</span>
                            </button>
                        }
                    })}
                </div>
            </section>

            <section class="card accounts-section">
                <h2>{"마음 전하실 곳"}</h2>
                <div class="account-list">
                    {for info.accounts.iter().map(|account| {
                        let label = account.label.clone();
                        let number = account.account_number.clone();
                        let copy_account = copy_account.clone();
                        let on_copy = Callback::from(move |_: MouseEvent| {
                            copy_account.emit((label.clone(), number.clone()));
                        });
                        let just_copied =
                            copied_account.as_deref() == Some(account.label.as_str());
                        html! {
                            <button class="account-button" onclick={on_copy}>
                                <div class="account-info">
                                    <div class="account-label">{&account.label}</div>
                                    <div class="account-number">
                                        {format!("{} {}", account.bank, account.account_number)}
                                    </div>
                                    <div class="account-holder">{&account.holder}</div>
                                </div>
                                <div class="account-copy">
                                    {if just_copied { "복사 완료!" } else { "복사" }}
                                </div>
                            </button>
                        }
                    })}
                </div>
            </section>

            <section class="rsvp-section">
                <button class="btn btn-primary rsvp-open-btn" onclick={open_rsvp}>
                    {"참석 의사 전달하기"}
                </button>
            </section>

            <RsvpModal open={*rsvp_open} on_close={close_rsvp} />
        </PageLayout>
    }
}
