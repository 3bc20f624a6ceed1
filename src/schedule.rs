use crate::config::ListingsConfig;
use crate::result::Result;

use regex::Regex;

/// Converts the pixel positions the listings grid lays cells out with into
/// channel slot keys and "HH:MM" display times.
pub struct Geometry {
    start_hour: i64,
    start_minute: i64,
    minutes_per_pixel: f64,
    rx_style: Regex,
}

impl Geometry {
    pub fn new(config: &ListingsConfig) -> Result<Geometry> {
        Ok(Geometry {
            start_hour: config.start_hour,
            start_minute: config.start_minute,
            minutes_per_pixel: config.minutes_per_pixel,
            rx_style: Regex::new(r"^top: (\d*)px; left: (\d*(?:\.\d*)?)px")?,
        })
    }

    /// Extracts `(top, left)` from a cell's inline style. `top` stays a string
    /// because channel slots are keyed by the literal offset text. Styles that
    /// don't match the grid layout yield `None` and the cell is dropped.
    pub fn parse_style(&self, style: &str) -> Option<(String, f64)> {
        let caps = self.rx_style.captures(style)?;
        let top = caps.get(1)?.as_str().to_owned();
        let left = caps.get(2)?.as_str().parse::<f64>().ok()?;
        Some((top, left))
    }

    pub fn offset_minutes(&self, left: f64) -> f64 {
        left * self.minutes_per_pixel
    }

    /// Adds an elapsed-minutes offset to the schedule start time and renders
    /// the result as "HH:MM".
    ///
    /// The minute component is snapped to the nearest multiple of ten to paper
    /// over pixel precision errors, so 19:58 or 20:04 both become 20:00. A
    /// remainder of exactly 5 is left untouched, and single-character values
    /// get a trailing "0" appended rather than a leading one (minute 5 renders
    /// as "50"). Both quirks are kept for output compatibility.
    pub fn time_string(&self, offset: f64) -> String {
        let mut hour = (offset / 60.0) as i64;
        let mut minute = (offset % 60.0) as i64;

        let error = minute % 10;
        if error > 0 && error < 5 {
            minute -= error;
        } else if error > 5 && error < 10 {
            minute += 10 - error;
            if minute == 60 {
                minute = 0;
                hour += 1;
            }
        }

        let mut actual_hour = (self.start_hour + hour).to_string();
        let mut actual_minute = (self.start_minute + minute).to_string();

        if actual_hour.len() == 1 {
            actual_hour.push('0');
        }
        if actual_minute.len() == 1 {
            actual_minute.push('0');
        }

        format!("{}:{}", actual_hour, actual_minute)
    }
}
