//! Wall-clock time of day.

use std::fmt;

/// A time of day on the 24-hour clock, minute precision.
///
/// Construction validates both components, so a `ClockTime` always holds an
/// hour in `0..=23` and a minute in `0..=59`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// Creates a `ClockTime`.
    ///
    /// Returns `None` if either component is out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use duhorilo::ClockTime;
    ///
    /// assert!(ClockTime::new(13, 30).is_some());
    /// assert!(ClockTime::new(24, 0).is_none());
    /// ```
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// Parses an `"HH:MM"` string. The minute part may be omitted and
    /// defaults to 0.
    ///
    /// Returns `None` for empty or malformed input, or when a component is
    /// out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use duhorilo::ClockTime;
    ///
    /// let time = ClockTime::parse("09:05").unwrap();
    /// assert_eq!((9, 5), (time.hour(), time.minute()));
    ///
    /// assert_eq!(ClockTime::new(7, 0), ClockTime::parse("7"));
    /// assert_eq!(None, ClockTime::parse("25:00"));
    /// ```
    pub fn parse(time: &str) -> Option<Self> {
        let mut parts = time.trim().splitn(2, ':');
        let hour = parts.next()?.parse().ok()?;
        let minute = match parts.next() {
            Some(minute) => minute.parse().ok()?,
            None => 0,
        };
        Self::new(hour, minute)
    }

    /// Returns the current local wall-clock time.
    pub fn now() -> Self {
        use chrono::Timelike;

        let now = chrono::Local::now();
        Self {
            hour: now.hour(),
            minute: now.minute(),
        }
    }

    /// The hour component, `0..=23`.
    pub fn hour(&self) -> u32 {
        self.hour
    }
    /// The minute component, `0..=59`.
    pub fn minute(&self) -> u32 {
        self.minute
    }
}

impl fmt::Display for ClockTime {
    /// Formats as zero-padded `"HH:MM"`.
    ///
    /// # Example
    ///
    /// ```
    /// use duhorilo::ClockTime;
    ///
    /// assert_eq!("07:05", ClockTime::new(7, 5).unwrap().to_string());
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_checks_ranges() {
        assert!(ClockTime::new(0, 0).is_some());
        assert!(ClockTime::new(23, 59).is_some());
        assert!(ClockTime::new(24, 0).is_none());
        assert!(ClockTime::new(0, 60).is_none());
    }

    #[test]
    fn parse() {
        for (std, input) in [
            (ClockTime::new(0, 0), "00:00"),
            (ClockTime::new(9, 5), "09:05"),
            (ClockTime::new(23, 59), "23:59"),
            (ClockTime::new(7, 0), "7"),
            (ClockTime::new(7, 0), "7:00"),
            (ClockTime::new(13, 30), " 13:30 "),
            (None, ""),
            (None, ":"),
            (None, "ab:cd"),
            (None, "24:00"),
            (None, "12:60"),
            (None, "-1:00"),
        ] {
            assert_eq!(std, ClockTime::parse(input), "{input:?}");
        }
    }

    #[test]
    fn display() {
        for (std, (h, m)) in [("00:00", (0, 0)), ("09:05", (9, 5)), ("23:59", (23, 59))] {
            assert_eq!(std, ClockTime::new(h, m).unwrap().to_string());
        }
    }
}
