use gloo::timers::callback::Interval;
use shared::{compute_time_remaining, TimeRemaining};
use yew::prelude::*;

/// Current wall-clock time in epoch milliseconds.
pub fn now_millis() -> i64 {
    js_sys::Date::now() as i64
}

/// Recompute the distance to `target_millis` once per second while the
/// calling component is mounted.
///
/// The interval is owned by the effect and dropped in its cleanup, so no
/// timer outlives the view. Once the target passes the value stays
/// all-zero; the tick keeps running but never produces a negative field.
#[hook]
pub fn use_countdown(target_millis: i64) -> TimeRemaining {
    let remaining = use_state(|| compute_time_remaining(target_millis, now_millis()));

    {
        let remaining = remaining.clone();
        use_effect_with(target_millis, move |&target| {
            remaining.set(compute_time_remaining(target, now_millis()));

            let interval = {
                let remaining = remaining.clone();
                Interval::new(1_000, move || {
                    remaining.set(compute_time_remaining(target, now_millis()));
                })
            };

            move || drop(interval)
        });
    }

    *remaining
}

#[cfg(test)]
mod tests {
    use shared::{compute_time_remaining, MILLIS_PER_DAY};

    #[test]
    fn test_tick_computation_matches_shared_logic() {
        let target = 1_750_000_000_000;
        let remaining = compute_time_remaining(target, target - MILLIS_PER_DAY);
        assert_eq!(remaining.days, 1);
        assert!(compute_time_remaining(target, target + 1).is_elapsed());
    }
}
