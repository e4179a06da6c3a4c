use shared::days_until;
use yew::prelude::*;

use crate::hooks::use_countdown;
use crate::hooks::use_countdown::now_millis;

#[derive(Properties, PartialEq)]
pub struct CountdownTimerProps {
    /// Ceremony instant in epoch milliseconds
    pub target_millis: i64,
    /// Optional "신랑 ♥ 신부" line under the tiles
    #[prop_or_default]
    pub couple_label: Option<AttrValue>,
}

/// Four-tile countdown (days/hours/minutes/seconds) ticking once per
/// second. Stays at zero once the ceremony has begun.
#[function_component(CountdownTimer)]
pub fn countdown_timer(props: &CountdownTimerProps) -> Html {
    let remaining = use_countdown(props.target_millis);
    let d_day = days_until(props.target_millis, now_millis()).max(0);

    let tiles = [
        ("일", remaining.days),
        ("시간", remaining.hours),
        ("분", remaining.minutes),
        ("초", remaining.seconds),
    ];

    html! {
        <div class="countdown">
            <div class="countdown-heading">
                <h3>{format!("D-{}", d_day)}</h3>
                <p>{"우리의 새로운 시작까지!"}</p>
            </div>

            <div class="countdown-tiles">
                {for tiles.iter().map(|(label, value)| html! {
                    <div class="countdown-tile">
                        <span class="countdown-value">{format!("{:02}", value)}</span>
                        <span class="countdown-label">{*label}</span>
                    </div>
                })}
            </div>

            {if let Some(couple) = props.couple_label.as_ref() {
                html! {
                    <div class="countdown-couple">
                        {format!("{}의 결혼식이 {}일 남았습니다.", couple, remaining.days)}
                    </div>
                }
            } else { html! {} }}
        </div>
    }
}
