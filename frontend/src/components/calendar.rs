use chrono::{Datelike, NaiveDate};
use shared::build_calendar;
use yew::prelude::*;

/// Korean weekday name for a date (일/월/화/수/목/금/토).
fn weekday_korean(date: NaiveDate) -> &'static str {
    const NAMES: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];
    NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// Today's date according to the browser clock.
fn today() -> Option<NaiveDate> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
}

#[derive(Properties, PartialEq)]
pub struct CalendarDisplayProps {
    /// Any date inside the month to display
    pub anchor: NaiveDate,
    /// Day-of-month to mark as the wedding day
    pub highlight_day: u32,
}

/// A 6×7 month grid with the wedding day highlighted. The grid itself
/// comes from `shared::build_calendar`; this component only decides how
/// each cell is drawn.
#[function_component(CalendarDisplay)]
pub fn calendar_display(props: &CalendarDisplayProps) -> Html {
    let grid = use_memo(props.anchor, |anchor| build_calendar(*anchor));
    let today = today();

    let header = NaiveDate::from_ymd_opt(grid.year, grid.month, props.highlight_day)
        .map(|date| {
            format!(
                "{}년 {}월 {}일 {}요일",
                grid.year,
                grid.month,
                props.highlight_day,
                weekday_korean(date)
            )
        })
        .unwrap_or_else(|| format!("{}년 {}월", grid.year, grid.month));

    let weekday_labels = ["S", "M", "T", "W", "T", "F", "S"];

    html! {
        <div class="calendar-card">
            <div class="calendar-title">{header}</div>

            <div class="calendar-weekdays">
                {for weekday_labels.iter().enumerate().map(|(index, label)| {
                    let class = match index {
                        0 => "weekday sunday",
                        6 => "weekday saturday",
                        _ => "weekday",
                    };
                    html! { <div class={class}>{*label}</div> }
                })}
            </div>

            <div class="calendar-grid">
                {for grid.weeks.iter().map(|week| html! {
                    <div class="calendar-week">
                        {for week.iter().map(|cell| {
                            let is_wedding_day =
                                cell.in_displayed_month && cell.day == props.highlight_day;
                            let is_today = cell.in_displayed_month
                                && today.map_or(false, |t| {
                                    t.year() == grid.year
                                        && t.month() == grid.month
                                        && t.day() == cell.day
                                });

                            let mut class = classes!("calendar-day");
                            if !cell.in_displayed_month {
                                class.push("other-month");
                            }
                            if is_today {
                                class.push("today");
                            }
                            if is_wedding_day {
                                class.push("wedding-day");
                            }

                            html! { <div class={class}>{cell.day}</div> }
                        })}
                    </div>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_korean() {
        // The wedding falls on a Saturday.
        let date = NaiveDate::from_ymd_opt(2025, 6, 28).unwrap();
        assert_eq!(weekday_korean(date), "토");
        assert_eq!(weekday_korean(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()), "일");
    }
}
