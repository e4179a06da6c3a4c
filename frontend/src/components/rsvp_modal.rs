use gloo::timers::future::TimeoutFuture;
use shared::{GuestSide, RsvpDraft, MAX_PARTY_SIZE, MIN_PARTY_SIZE};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::services::api::ApiClient;

/// How long the thank-you acknowledgement stays up before the modal
/// resets and closes.
pub const ACK_DISPLAY_MILLIS: u32 = 2_000;

/// Hold the acknowledgement on screen, then hand back the blank draft
/// the form returns to. Every field goes back to its initial value; a
/// later reopen never shows the previous guest's entries.
async fn hold_ack_then_blank_draft() -> RsvpDraft {
    TimeoutFuture::new(ACK_DISPLAY_MILLIS).await;
    RsvpDraft::default()
}

#[derive(Properties, PartialEq)]
pub struct RsvpModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

/// The RSVP form. Validates the draft locally, performs exactly one
/// store write per valid submission, and either shows a thank-you state
/// (then resets and closes) or keeps the draft for another attempt.
#[function_component(RsvpModal)]
pub fn rsvp_modal(props: &RsvpModalProps) -> Html {
    let draft = use_state(RsvpDraft::default);
    let submitting = use_state(|| false);
    let submitted = use_state(|| false);
    let form_error = use_state(|| Option::<String>::None);
    let api_client = use_memo((), |_| ApiClient::new());

    let on_side_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            draft.set(RsvpDraft {
                side: GuestSide::from_str_or_default(&select.value()),
                ..(*draft).clone()
            });
        })
    };

    let on_name_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(RsvpDraft {
                name: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_phone_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(RsvpDraft {
                phone: input.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_count_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let attend_count = select.value().parse::<u32>().unwrap_or(MIN_PARTY_SIZE);
            draft.set(RsvpDraft {
                attend_count,
                ..(*draft).clone()
            });
        })
    };

    let on_message_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(RsvpDraft {
                message: textarea.value(),
                ..(*draft).clone()
            });
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let submitting = submitting.clone();
        let submitted = submitted.clone();
        let form_error = form_error.clone();
        let api_client = api_client.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // Field-level validation blocks the write entirely.
            if let Err(validation_error) = draft.validate() {
                form_error.set(Some(validation_error.to_string()));
                return;
            }

            let created_at = String::from(js_sys::Date::new_0().to_iso_string());
            let request = (*draft).clone().into_request(created_at);

            let draft = draft.clone();
            let submitting = submitting.clone();
            let submitted = submitted.clone();
            let form_error = form_error.clone();
            let api_client = api_client.clone();
            let on_close = on_close.clone();

            spawn_local(async move {
                form_error.set(None);
                submitting.set(true);

                match api_client.submit_rsvp(request).await {
                    Ok(_) => {
                        submitted.set(true);

                        draft.set(hold_ack_then_blank_draft().await);
                        submitted.set(false);
                        on_close.emit(());
                    }
                    Err(e) => {
                        gloo::console::error!("RSVP submission failed:", e);
                        // Generic notice; the draft stays editable so the
                        // guest can resubmit.
                        form_error.set(Some(
                            "전송에 실패했습니다. 잠시 후 다시 시도해주세요.".to_string(),
                        ));
                    }
                }

                submitting.set(false);
            });
        })
    };

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    if !props.open {
        return html! {};
    }

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal-card" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                {if *submitted {
                    html! {
                        <div class="modal-ack">
                            <div class="modal-ack-mark">{"✓"}</div>
                            <h3>{"감사합니다"}</h3>
                            <p>{"참석 의사가 성공적으로 전달되었습니다."}</p>
                        </div>
                    }
                } else {
                    html! {
                        <>
                            <div class="modal-header">
                                <h2>{"참석 의사 전달하기"}</h2>
                            </div>

                            {if let Some(error) = (*form_error).as_ref() {
                                html! { <div class="form-message error">{error}</div> }
                            } else { html! {} }}

                            <form class="rsvp-form" onsubmit={on_submit}>
                                <div class="form-group">
                                    <label for="side">{"구분"}</label>
                                    <select
                                        id="side"
                                        value={draft.side.as_str()}
                                        onchange={on_side_change}
                                        disabled={*submitting}
                                    >
                                        {for [GuestSide::GroomSide, GuestSide::BrideSide].iter().map(|side| html! {
                                            <option value={side.as_str()} selected={draft.side == *side}>
                                                {side.label()}
                                            </option>
                                        })}
                                    </select>
                                </div>

                                <div class="form-group">
                                    <label for="name">{"이름"}</label>
                                    <input
                                        type="text"
                                        id="name"
                                        value={draft.name.clone()}
                                        onchange={on_name_change}
                                        disabled={*submitting}
                                    />
                                </div>

                                <div class="form-group">
                                    <label for="phone">{"연락처"}</label>
                                    <input
                                        type="tel"
                                        id="phone"
                                        placeholder="010-1234-5678"
                                        value={draft.phone.clone()}
                                        onchange={on_phone_change}
                                        disabled={*submitting}
                                    />
                                </div>

                                <div class="form-group">
                                    <label for="attend-count">{"참석 인원"}</label>
                                    <select
                                        id="attend-count"
                                        onchange={on_count_change}
                                        disabled={*submitting}
                                    >
                                        {for (MIN_PARTY_SIZE..=MAX_PARTY_SIZE).map(|count| html! {
                                            <option
                                                value={count.to_string()}
                                                selected={draft.attend_count == count}
                                            >
                                                {format!("{}명", count)}
                                            </option>
                                        })}
                                    </select>
                                </div>

                                <div class="form-group">
                                    <label for="message">{"메시지 (선택사항)"}</label>
                                    <textarea
                                        id="message"
                                        rows="3"
                                        value={draft.message.clone()}
                                        onchange={on_message_change}
                                        disabled={*submitting}
                                    />
                                </div>

                                <div class="form-actions">
                                    <button
                                        type="button"
                                        class="btn btn-secondary"
                                        onclick={on_cancel}
                                        disabled={*submitting}
                                    >
                                        {"취소"}
                                    </button>
                                    <button
                                        type="submit"
                                        class="btn btn-primary"
                                        disabled={*submitting}
                                    >
                                        {if *submitting { "전송 중..." } else { "전송하기" }}
                                    </button>
                                </div>
                            </form>
                        </>
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_acknowledgement_resets_every_field() {
        // The draft a guest just submitted
        let filled = RsvpDraft {
            side: GuestSide::BrideSide,
            name: "홍길동".to_string(),
            phone: "010-1234-5678".to_string(),
            attend_count: 4,
            message: "축하합니다!".to_string(),
        };

        let blank = hold_ack_then_blank_draft().await;

        // Nothing of the previous submission survives the acknowledgement
        assert_ne!(blank, filled);
        assert_eq!(blank, RsvpDraft::default());
        assert!(blank.name.is_empty());
        assert!(blank.phone.is_empty());
        assert!(blank.message.is_empty());
        assert_eq!(blank.attend_count, MIN_PARTY_SIZE);
        assert_eq!(blank.side, GuestSide::GroomSide);
    }
}
