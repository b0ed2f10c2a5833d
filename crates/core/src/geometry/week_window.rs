use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Days shown on either side of the reference date in the date strip.
pub const WEEK_RADIUS: u32 = 3;

/// One chip in the rolling date strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayDescriptor {
    pub date: NaiveDate,
    /// Offset in days from the reference date.
    pub offset: i64,
    pub day_of_month: u32,
    /// Three-letter English weekday, e.g. `"Mon"`.
    pub weekday_name: String,
    /// Three-letter English month, e.g. `"Jan"`.
    pub month_name: String,
    /// Set on the reference date itself.
    pub is_selected_today: bool,
}

impl DayDescriptor {
    fn new(date: NaiveDate, offset: i64) -> Self {
        Self {
            date,
            offset,
            day_of_month: date.day(),
            weekday_name: date.format("%a").to_string(),
            month_name: date.format("%b").to_string(),
            is_selected_today: offset == 0,
        }
    }

    /// Zero-padded day of month as shown on the chip: `"01"`.
    pub fn chip_label(&self) -> String {
        format!("{:02}", self.day_of_month)
    }
}

/// The 7-day window centered on `reference`.
pub fn week_window(reference: NaiveDate) -> Vec<DayDescriptor> {
    week_window_with_radius(reference, WEEK_RADIUS)
}

/// `2 * radius + 1` days centered on `reference`, oldest first.
///
/// Days that fall outside the representable calendar range are omitted.
pub fn week_window_with_radius(reference: NaiveDate, radius: u32) -> Vec<DayDescriptor> {
    let radius = i64::from(radius);
    (-radius..=radius)
        .filter_map(|offset| shift(reference, offset).map(|d| DayDescriptor::new(d, offset)))
        .collect()
}

/// The date represented by chip `index` of the 7-day window, or `None`
/// when `index` is outside the window.
pub fn date_for_index(reference: NaiveDate, index: usize) -> Option<NaiveDate> {
    let width = 2 * WEEK_RADIUS as usize + 1;
    if index >= width {
        return None;
    }
    shift(reference, index as i64 - i64::from(WEEK_RADIUS))
}

fn shift(date: NaiveDate, offset: i64) -> Option<NaiveDate> {
    let days = Days::new(offset.unsigned_abs());
    if offset < 0 {
        date.checked_sub_days(days)
    } else {
        date.checked_add_days(days)
    }
}
