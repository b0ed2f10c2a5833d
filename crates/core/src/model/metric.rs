use serde::{Deserialize, Serialize};

/// A tracked activity metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Steps,
    Calories,
    /// Active time in minutes.
    Duration,
    /// Distance in miles.
    Distance,
    /// Water intake in fluid ounces.
    Water,
}

impl Metric {
    /// Section heading on the report screen.
    pub fn title(self) -> &'static str {
        match self {
            Metric::Steps => "Walking",
            Metric::Calories => "Calories",
            Metric::Duration => "Duration",
            Metric::Distance => "Distance",
            Metric::Water => "Water",
        }
    }

    /// Format a value for display on a card or ring center.
    pub fn format_value(self, value: f64) -> String {
        match self {
            Metric::Steps => group_thousands(value.round()),
            Metric::Calories => {
                if value >= 1000.0 {
                    group_thousands(value.round())
                } else {
                    format!("{value:.1}")
                }
            }
            Metric::Duration => {
                let total = value.max(0.0).round() as u64;
                let (hours, minutes) = (total / 60, total % 60);
                if hours > 0 {
                    format!("{hours}h {minutes}m")
                } else {
                    format!("{minutes}m")
                }
            }
            Metric::Distance => format!("{value:.1} mi"),
            Metric::Water => format!("{value:.0} oz"),
        }
    }
}

/// `12345.0` -> `"12,345"`.
fn group_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
