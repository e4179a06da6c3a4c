use chrono::{DateTime, Datelike, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_MINUTE: i64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: i64 = 24 * MILLIS_PER_HOUR;

/// Names of one pair of parents as printed on the invitation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentNames {
    pub father: String,
    pub mother: String,
}

/// A person guests can call directly from the info page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactEntry {
    /// Relationship label shown above the name (e.g. "신랑", "신부 아버지")
    pub role: String,
    pub name: String,
    pub phone: String,
}

/// A congratulatory-money account guests can copy to the clipboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftAccount {
    /// Which side of the family the account belongs to
    pub label: String,
    pub bank: String,
    pub account_number: String,
    pub holder: String,
}

/// Static wedding facts shared by every page.
///
/// Constructed once at startup and provided through a context; never
/// mutated afterwards. All countdown and calendar-highlight computations
/// derive from `event_instant`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeddingInfo {
    pub groom_name: String,
    pub bride_name: String,
    pub groom_parents: ParentNames,
    pub bride_parents: ParentNames,
    pub venue: String,
    pub address: String,
    /// Floor designator shown next to the venue name, e.g. "(7F)"
    pub floor: String,
    /// Human-readable date line, e.g. "2025년 6월 28일 토요일"
    pub date_display: String,
    /// Human-readable time line, e.g. "오후 4시 10분"
    pub time_display: String,
    /// The canonical, timezone-qualified instant of the ceremony
    pub event_instant: DateTime<FixedOffset>,
    pub contacts: Vec<ContactEntry>,
    pub accounts: Vec<GiftAccount>,
}

impl WeddingInfo {
    /// Epoch milliseconds of the ceremony instant.
    pub fn event_millis(&self) -> i64 {
        self.event_instant.timestamp_millis()
    }

    /// Day-of-month of the ceremony in its own timezone (for calendar highlighting).
    pub fn event_day(&self) -> u32 {
        self.event_instant.day()
    }

    /// Calendar date of the ceremony in its own timezone.
    pub fn event_date(&self) -> NaiveDate {
        self.event_instant.date_naive()
    }

    /// "D-n" day count, rounded up so that any part of a day still counts.
    pub fn days_remaining(&self, now_millis: i64) -> i64 {
        days_until(self.event_millis(), now_millis)
    }

    /// Countdown decomposition at the given instant.
    pub fn time_remaining(&self, now_millis: i64) -> TimeRemaining {
        compute_time_remaining(self.event_millis(), now_millis)
    }

    /// The groom's Korean name without the romanized part in parentheses.
    pub fn groom_short_name(&self) -> &str {
        short_name(&self.groom_name)
    }

    /// The bride's Korean name without the romanized part in parentheses.
    pub fn bride_short_name(&self) -> &str {
        short_name(&self.bride_name)
    }

    /// "신랑 ♥ 신부" pairing of the couple's Korean names, without the
    /// romanized parts in parentheses.
    pub fn couple_label(&self) -> String {
        format!("{} ♥ {}", self.groom_short_name(), self.bride_short_name())
    }
}

/// First word of a display name; drops a trailing "(ROMANIZED NAME)".
fn short_name(full_name: &str) -> &str {
    full_name.split(' ').next().unwrap_or(full_name)
}

impl Default for WeddingInfo {
    fn default() -> Self {
        Self {
            groom_name: "유예찬 (YECHAN YU)".to_string(),
            bride_name: "박수희 (SOOHEE PARK)".to_string(),
            groom_parents: ParentNames {
                father: "유병윤".to_string(),
                mother: "김경숙".to_string(),
            },
            bride_parents: ParentNames {
                father: "박성진".to_string(),
                mother: "송덕심".to_string(),
            },
            venue: "그레이스파티, 그레이스파티홀".to_string(),
            address: "서울특별시 관악구 신림동 1485-1번지".to_string(),
            floor: "(7F)".to_string(),
            date_display: "2025년 6월 28일 토요일".to_string(),
            time_display: "오후 4시 10분".to_string(),
            event_instant: DateTime::parse_from_rfc3339("2025-06-28T16:10:00+09:00")
                .expect("wedding date literal is valid RFC 3339"),
            contacts: vec![
                ContactEntry {
                    role: "신랑".to_string(),
                    name: "유예찬".to_string(),
                    phone: "01012345678".to_string(),
                },
                ContactEntry {
                    role: "신부".to_string(),
                    name: "박수희".to_string(),
                    phone: "01023456789".to_string(),
                },
                ContactEntry {
                    role: "신랑 아버지".to_string(),
                    name: "유병윤".to_string(),
                    phone: "01034567890".to_string(),
                },
                ContactEntry {
                    role: "신부 아버지".to_string(),
                    name: "박성진".to_string(),
                    phone: "01045678901".to_string(),
                },
                ContactEntry {
                    role: "신랑 어머니".to_string(),
                    name: "김경숙".to_string(),
                    phone: "01056789012".to_string(),
                },
                ContactEntry {
                    role: "신부 어머니".to_string(),
                    name: "송덕심".to_string(),
                    phone: "01067890123".to_string(),
                },
            ],
            accounts: vec![
                GiftAccount {
                    label: "신랑측".to_string(),
                    bank: "신한은행".to_string(),
                    account_number: "110-123-456789".to_string(),
                    holder: "유예찬".to_string(),
                },
                GiftAccount {
                    label: "신부측".to_string(),
                    bank: "국민은행".to_string(),
                    account_number: "110-987-654321".to_string(),
                    holder: "박수희".to_string(),
                },
                GiftAccount {
                    label: "신랑 부모님".to_string(),
                    bank: "우리은행".to_string(),
                    account_number: "110-234-567890".to_string(),
                    holder: "유병윤".to_string(),
                },
                GiftAccount {
                    label: "신부 부모님".to_string(),
                    bank: "하나은행".to_string(),
                    account_number: "110-345-678901".to_string(),
                    holder: "박성진".to_string(),
                },
            ],
        }
    }
}

// ============================================================================
// Calendar grid
// ============================================================================

pub const CALENDAR_WEEKS: usize = 6;
pub const DAYS_PER_WEEK: usize = 7;

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Day-of-month number (1..=31)
    pub day: u32,
    /// False for the leading/trailing filler cells borrowed from the
    /// neighbouring months
    pub in_displayed_month: bool,
}

/// A fixed 6-row × 7-column month view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Vec<CalendarDay>>,
}

/// Build the month grid for the month containing `anchor`.
///
/// The grid always holds exactly 42 cells: the tail of the previous month
/// up to the weekday of the 1st (Sunday = column 0), every day of the
/// target month, then the head of the next month as padding. Pure and
/// total for any valid date.
pub fn build_calendar(anchor: NaiveDate) -> CalendarMonth {
    let year = anchor.year();
    let month = anchor.month();

    let leading = first_weekday_of_month(year, month);
    let (prev_year, prev_month) = if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    };
    let prev_month_len = days_in_month(prev_year, prev_month);

    let mut cells = Vec::with_capacity(CALENDAR_WEEKS * DAYS_PER_WEEK);

    for offset in (0..leading).rev() {
        cells.push(CalendarDay {
            day: prev_month_len - offset,
            in_displayed_month: false,
        });
    }

    for day in 1..=days_in_month(year, month) {
        cells.push(CalendarDay {
            day,
            in_displayed_month: true,
        });
    }

    let mut next_day = 1;
    while cells.len() < CALENDAR_WEEKS * DAYS_PER_WEEK {
        cells.push(CalendarDay {
            day: next_day,
            in_displayed_month: false,
        });
        next_day += 1;
    }

    let weeks = cells
        .chunks(DAYS_PER_WEEK)
        .map(|week| week.to_vec())
        .collect();

    CalendarMonth { year, month, weeks }
}

/// Number of days in a month, accounting for leap years.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Weekday column of the 1st of the month (0 = Sunday .. 6 = Saturday).
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

// ============================================================================
// Countdown
// ============================================================================

/// Non-negative countdown decomposition; all-zero once the target passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeRemaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeRemaining {
    pub fn is_elapsed(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    /// Total whole seconds represented by this decomposition.
    pub fn total_seconds(&self) -> u64 {
        ((self.days * 24 + self.hours) * 60 + self.minutes) * 60 + self.seconds
    }
}

/// Decompose the distance from `now_millis` to `target_millis`.
///
/// Floor division throughout; once the delta is zero or negative the
/// result stays all-zero for the rest of the session (the target instant
/// never moves).
pub fn compute_time_remaining(target_millis: i64, now_millis: i64) -> TimeRemaining {
    let delta = target_millis - now_millis;
    if delta <= 0 {
        return TimeRemaining::default();
    }

    TimeRemaining {
        days: (delta / MILLIS_PER_DAY) as u64,
        hours: (delta / MILLIS_PER_HOUR % 24) as u64,
        minutes: (delta / MILLIS_PER_MINUTE % 60) as u64,
        seconds: (delta / MILLIS_PER_SECOND % 60) as u64,
    }
}

/// Whole days until the target, rounded up ("D-n" semantics: the morning
/// of the day before the ceremony still reads D-1).
pub fn days_until(target_millis: i64, now_millis: i64) -> i64 {
    let delta = target_millis - now_millis;
    let days = delta.div_euclid(MILLIS_PER_DAY);
    if delta.rem_euclid(MILLIS_PER_DAY) != 0 {
        days + 1
    } else {
        days
    }
}

// ============================================================================
// RSVP
// ============================================================================

pub const MIN_PARTY_SIZE: u32 = 1;
pub const MAX_PARTY_SIZE: u32 = 10;

/// Which family the guest belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuestSide {
    GroomSide,
    BrideSide,
}

impl GuestSide {
    /// Stable string form used on the wire and in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            GuestSide::GroomSide => "groom_side",
            GuestSide::BrideSide => "bride_side",
        }
    }

    pub fn from_str_or_default(value: &str) -> Self {
        match value {
            "bride_side" => GuestSide::BrideSide,
            _ => GuestSide::GroomSide,
        }
    }

    /// Korean label shown in the form.
    pub fn label(&self) -> &'static str {
        match self {
            GuestSide::GroomSide => "신랑측",
            GuestSide::BrideSide => "신부측",
        }
    }
}

impl fmt::Display for GuestSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-memory state of the RSVP form before submission.
#[derive(Debug, Clone, PartialEq)]
pub struct RsvpDraft {
    pub side: GuestSide,
    pub name: String,
    pub phone: String,
    pub attend_count: u32,
    pub message: String,
}

impl Default for RsvpDraft {
    fn default() -> Self {
        Self {
            side: GuestSide::GroomSide,
            name: String::new(),
            phone: String::new(),
            attend_count: 1,
            message: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsvpValidationError {
    #[error("이름을 입력해주세요")]
    EmptyName,
    #[error("올바른 연락처 형식이 아닙니다 (예: 010-1234-5678)")]
    InvalidPhone,
    #[error("참석 인원은 {MIN_PARTY_SIZE}명에서 {MAX_PARTY_SIZE}명까지 선택할 수 있습니다")]
    PartySizeOutOfRange,
}

impl RsvpDraft {
    /// Field-level validation; the first failing field wins.
    pub fn validate(&self) -> Result<(), RsvpValidationError> {
        validate_rsvp_fields(&self.name, &self.phone, self.attend_count)
    }

    /// Turn a validated draft into the wire request. `created_at` is the
    /// submission timestamp in RFC 3339.
    pub fn into_request(self, created_at: String) -> CreateRsvpRequest {
        let message = self.message.trim().to_string();
        CreateRsvpRequest {
            side: self.side,
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            attend_count: self.attend_count,
            message: if message.is_empty() { None } else { Some(message) },
            created_at,
        }
    }
}

fn validate_rsvp_fields(
    name: &str,
    phone: &str,
    attend_count: u32,
) -> Result<(), RsvpValidationError> {
    if name.trim().is_empty() {
        return Err(RsvpValidationError::EmptyName);
    }
    if !is_valid_phone(phone.trim()) {
        return Err(RsvpValidationError::InvalidPhone);
    }
    if !(MIN_PARTY_SIZE..=MAX_PARTY_SIZE).contains(&attend_count) {
        return Err(RsvpValidationError::PartySizeOutOfRange);
    }
    Ok(())
}

/// Superficial check for a Korean phone number, hyphenated or not.
///
/// Accepts mobile numbers (010/011/016/017/018/019 + 3-4 digit exchange +
/// 4 digit subscriber) and landlines (02 or 0xx area codes). Anything
/// without a recognized prefix or with a wrong digit count is rejected.
pub fn is_valid_phone(phone: &str) -> bool {
    let digits: String = phone.chars().filter(|c| *c != '-').collect();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    let len = digits.len();
    if len >= 3
        && matches!(&digits[..3], "010" | "011" | "016" | "017" | "018" | "019")
    {
        // mobile: 3 digit prefix + 3-4 digit exchange + 4 digit subscriber
        len == 10 || len == 11
    } else if digits.starts_with("02") {
        // Seoul: 2 digit area code + 3-4 digit exchange + 4 digit subscriber
        len == 9 || len == 10
    } else if len >= 3 && digits.starts_with('0') && matches!(digits.as_bytes()[1], b'3'..=b'6') {
        // regional: 3 digit area code + 3-4 digit exchange + 4 digit subscriber
        len == 10 || len == 11
    } else {
        false
    }
}

/// Document appended to the RSVP collection; the store assigns identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRsvpRequest {
    pub side: GuestSide,
    pub name: String,
    pub phone: String,
    pub attend_count: u32,
    pub message: Option<String>,
    /// Client-side submission timestamp (RFC 3339)
    pub created_at: String,
}

impl CreateRsvpRequest {
    /// Server-side re-validation of an incoming document.
    pub fn validate(&self) -> Result<(), RsvpValidationError> {
        validate_rsvp_fields(&self.name, &self.phone, self.attend_count)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateRsvpResponse {
    /// Store-assigned record id
    pub id: String,
    pub success_message: String,
}

/// A stored RSVP as read back from the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RsvpRecord {
    pub id: String,
    pub side: GuestSide,
    pub name: String,
    pub phone: String,
    pub attend_count: u32,
    pub message: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RsvpListResponse {
    pub rsvps: Vec<RsvpRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wedding_millis() -> i64 {
        DateTime::parse_from_rfc3339("2025-06-28T16:10:00+09:00")
            .unwrap()
            .timestamp_millis()
    }

    #[test]
    fn test_calendar_always_has_42_cells() {
        let months = [
            (2025, 6),  // starts on a Sunday
            (2025, 2),  // shortest month, non-leap
            (2024, 2),  // leap February
            (2025, 8),  // 31 days starting late in the week
            (2026, 1),
            (2025, 12),
        ];
        for (year, month) in months {
            let anchor = NaiveDate::from_ymd_opt(year, month, 15).unwrap();
            let grid = build_calendar(anchor);
            assert_eq!(grid.weeks.len(), CALENDAR_WEEKS, "{}-{}", year, month);
            for week in &grid.weeks {
                assert_eq!(week.len(), DAYS_PER_WEEK, "{}-{}", year, month);
            }
        }
    }

    #[test]
    fn test_calendar_in_month_cell_count_matches_month_length() {
        for year in [2024, 2025] {
            for month in 1..=12 {
                let anchor = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
                let grid = build_calendar(anchor);
                let in_month = grid
                    .weeks
                    .iter()
                    .flatten()
                    .filter(|cell| cell.in_displayed_month)
                    .count() as u32;
                assert_eq!(in_month, days_in_month(year, month), "{}-{}", year, month);
            }
        }
    }

    #[test]
    fn test_calendar_june_2025_layout() {
        // June 1st 2025 is a Sunday, so there are no leading filler cells
        // and the wedding day (28th) lands on the Saturday of week 4.
        let grid = build_calendar(NaiveDate::from_ymd_opt(2025, 6, 28).unwrap());
        assert_eq!(grid.year, 2025);
        assert_eq!(grid.month, 6);
        assert_eq!(
            grid.weeks[0][0],
            CalendarDay { day: 1, in_displayed_month: true }
        );
        assert_eq!(
            grid.weeks[3][6],
            CalendarDay { day: 28, in_displayed_month: true }
        );
        // trailing cells roll into July
        assert_eq!(
            grid.weeks[4][1],
            CalendarDay { day: 30, in_displayed_month: true }
        );
        assert_eq!(
            grid.weeks[4][2],
            CalendarDay { day: 1, in_displayed_month: false }
        );
    }

    #[test]
    fn test_calendar_leading_cells_come_from_previous_month() {
        // March 2025 starts on a Saturday; six leading cells from February.
        let grid = build_calendar(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(
            grid.weeks[0][0],
            CalendarDay { day: 23, in_displayed_month: false }
        );
        assert_eq!(
            grid.weeks[0][5],
            CalendarDay { day: 28, in_displayed_month: false }
        );
        assert_eq!(
            grid.weeks[0][6],
            CalendarDay { day: 1, in_displayed_month: true }
        );
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
    }

    #[test]
    fn test_is_leap_year() {
        assert!(!is_leap_year(2025));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900)); // divisible by 100 but not 400
        assert!(is_leap_year(2000));
    }

    #[test]
    fn test_countdown_one_day_before() {
        let target = wedding_millis();
        let now = target - MILLIS_PER_DAY;
        assert_eq!(
            compute_time_remaining(target, now),
            TimeRemaining { days: 1, hours: 0, minutes: 0, seconds: 0 }
        );
    }

    #[test]
    fn test_countdown_decomposition() {
        let target = wedding_millis();
        let now = target - (2 * MILLIS_PER_DAY + 3 * MILLIS_PER_HOUR + 4 * MILLIS_PER_MINUTE + 5 * MILLIS_PER_SECOND);
        assert_eq!(
            compute_time_remaining(target, now),
            TimeRemaining { days: 2, hours: 3, minutes: 4, seconds: 5 }
        );
    }

    #[test]
    fn test_countdown_clamps_to_zero_after_target() {
        let target = wedding_millis();
        assert_eq!(compute_time_remaining(target, target), TimeRemaining::default());
        assert_eq!(
            compute_time_remaining(target, target + 1_000),
            TimeRemaining::default()
        );
        assert!(compute_time_remaining(target, target + 1_000).is_elapsed());
    }

    #[test]
    fn test_countdown_is_non_increasing() {
        let target = wedding_millis();
        let mut previous = u64::MAX;
        for step in 0..10 {
            let now = target - 5 * MILLIS_PER_DAY + step * 11 * MILLIS_PER_HOUR;
            let total = compute_time_remaining(target, now).total_seconds();
            assert!(total <= previous);
            previous = total;
        }
    }

    #[test]
    fn test_days_until_rounds_up() {
        let target = wedding_millis();
        assert_eq!(days_until(target, target - MILLIS_PER_DAY), 1);
        assert_eq!(days_until(target, target - MILLIS_PER_DAY - 1), 2);
        assert_eq!(days_until(target, target - 1), 1);
        assert_eq!(days_until(target, target), 0);
    }

    #[test]
    fn test_phone_validation() {
        assert!(is_valid_phone("010-1234-5678"));
        assert!(is_valid_phone("01012345678"));
        assert!(is_valid_phone("011-123-4567"));
        assert!(is_valid_phone("02-1234-5678"));
        assert!(is_valid_phone("031-123-4567"));

        assert!(!is_valid_phone("123-4567"));
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("010-1234-56789"));
        assert!(!is_valid_phone("010-abcd-5678"));
        assert!(!is_valid_phone("099-1234-5678"));
    }

    #[test]
    fn test_draft_validation_rejects_empty_name() {
        let draft = RsvpDraft {
            phone: "010-1234-5678".to_string(),
            ..RsvpDraft::default()
        };
        assert_eq!(draft.validate(), Err(RsvpValidationError::EmptyName));
    }

    #[test]
    fn test_draft_validation_rejects_party_size_out_of_range() {
        let mut draft = RsvpDraft {
            name: "홍길동".to_string(),
            phone: "010-1234-5678".to_string(),
            ..RsvpDraft::default()
        };
        draft.attend_count = 0;
        assert_eq!(draft.validate(), Err(RsvpValidationError::PartySizeOutOfRange));
        draft.attend_count = MAX_PARTY_SIZE + 1;
        assert_eq!(draft.validate(), Err(RsvpValidationError::PartySizeOutOfRange));
        draft.attend_count = MAX_PARTY_SIZE;
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn test_draft_into_request_trims_and_drops_empty_message() {
        let draft = RsvpDraft {
            side: GuestSide::BrideSide,
            name: " 홍길동 ".to_string(),
            phone: "010-1234-5678".to_string(),
            attend_count: 2,
            message: "   ".to_string(),
        };
        let request = draft.into_request("2025-06-01T12:00:00+09:00".to_string());
        assert_eq!(request.name, "홍길동");
        assert_eq!(request.message, None);
        assert_eq!(request.side, GuestSide::BrideSide);
    }

    #[test]
    fn test_guest_side_serialization() {
        assert_eq!(
            serde_json::to_string(&GuestSide::GroomSide).unwrap(),
            "\"groom_side\""
        );
        assert_eq!(GuestSide::from_str_or_default("bride_side"), GuestSide::BrideSide);
        assert_eq!(GuestSide::from_str_or_default("unknown"), GuestSide::GroomSide);
    }

    #[test]
    fn test_wedding_info_defaults() {
        let info = WeddingInfo::default();
        assert_eq!(info.event_day(), 28);
        assert_eq!(info.event_date(), NaiveDate::from_ymd_opt(2025, 6, 28).unwrap());
        // a full day out reads D-1, the ceremony instant itself reads D-0
        assert_eq!(info.days_remaining(info.event_millis() - MILLIS_PER_DAY), 1);
        assert_eq!(info.days_remaining(info.event_millis()), 0);
        assert_eq!(info.couple_label(), "유예찬 ♥ 박수희");
    }

    #[test]
    fn test_short_names_drop_romanization() {
        let info = WeddingInfo::default();
        assert_eq!(info.groom_short_name(), "유예찬");
        assert_eq!(info.bride_short_name(), "박수희");

        let info = WeddingInfo {
            bride_name: "박수희".to_string(),
            ..info
        };
        assert_eq!(info.bride_short_name(), "박수희");
    }
}
