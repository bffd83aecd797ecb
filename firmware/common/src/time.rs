//! Time-of-day values and the fixed-width `HH:MM:SS` string.
//!
//! The time source itself is a collaborator: on hardware it is the RTC after
//! an NTP sync, in the simulator it is the host wall clock. The core only
//! consumes [`TimeSource::local_time`].

use core::fmt;

// =============================================================================
// Time Source
// =============================================================================

/// The time source could not report the current time (e.g. not synced yet).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeUnavailable;

impl fmt::Display for TimeUnavailable {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str("failed to obtain time")
    }
}

/// Local wall-clock time provider.
pub trait TimeSource {
    /// Current local time, or [`TimeUnavailable`] if it cannot be determined.
    fn local_time(&mut self) -> Result<TimeOfDay, TimeUnavailable>;
}

// =============================================================================
// Time of Day
// =============================================================================

/// Seconds in one day.
pub const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// A validated 24-hour clock reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// Create a time of day. Returns `None` for out-of-range fields.
    pub const fn new(
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Option<Self> {
        if hour < 24 && minute < 60 && second < 60 {
            Some(Self { hour, minute, second })
        } else {
            None
        }
    }

    /// Time of day for a count of seconds since midnight (wraps past 24h).
    pub const fn from_seconds_of_day(seconds: u32) -> Self {
        let seconds = seconds % SECONDS_PER_DAY;
        Self {
            hour: (seconds / 3600) as u8,
            minute: ((seconds / 60) % 60) as u8,
            second: (seconds % 60) as u8,
        }
    }

    #[inline]
    pub const fn hour(self) -> u8 { self.hour }

    #[inline]
    pub const fn minute(self) -> u8 { self.minute }

    #[inline]
    pub const fn second(self) -> u8 { self.second }
}

// =============================================================================
// Time String
// =============================================================================

/// Number of glyph cells in a [`TimeString`].
pub const TIME_STRING_LEN: usize = 8;

/// Why a string could not become a [`TimeString`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeStringError {
    /// Input was not exactly 8 bytes long.
    Length(usize),
    /// Input contained a byte outside printable ASCII.
    NotPrintable(u8),
}

impl fmt::Display for TimeStringError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Length(len) => write!(f, "time string must be {TIME_STRING_LEN} characters, got {len}"),
            Self::NotPrintable(byte) => write!(f, "time string contains non-printable byte 0x{byte:02x}"),
        }
    }
}

/// Exactly eight printable ASCII characters, normally `HH:MM:SS`.
///
/// The renderer compares these byte by byte; the colons sit at indices 2 and 5
/// so they never change between ticks and are only drawn once.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeString([u8; TIME_STRING_LEN]);

impl TimeString {
    /// All-blank sentinel. Differs from every real time in every digit cell,
    /// so the first render draws the whole string.
    pub const BLANK: Self = Self([b' '; TIME_STRING_LEN]);

    /// Zero-padded `HH:MM:SS` for a time of day.
    pub const fn from_time(time: TimeOfDay) -> Self {
        const fn digit(value: u8) -> u8 { b'0' + value }
        Self([
            digit(time.hour / 10),
            digit(time.hour % 10),
            b':',
            digit(time.minute / 10),
            digit(time.minute % 10),
            b':',
            digit(time.second / 10),
            digit(time.second % 10),
        ])
    }

    /// Character in glyph cell `index`.
    #[inline]
    pub const fn cell(
        &self,
        index: usize,
    ) -> char {
        self.0[index] as char
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; TIME_STRING_LEN] { &self.0 }

    pub fn as_str(&self) -> &str {
        // Construction only admits printable ASCII.
        core::str::from_utf8(&self.0).unwrap_or("")
    }

    /// Indices of the cells that differ from `other`.
    pub fn changed_cells<'a>(
        &'a self,
        other: &Self,
    ) -> impl Iterator<Item = usize> + use<'a> {
        let other = *other;
        (0..TIME_STRING_LEN).filter(move |&i| self.0[i] != other.0[i])
    }

    #[inline]
    pub(crate) fn set_cell(
        &mut self,
        index: usize,
        byte: u8,
    ) {
        self.0[index] = byte;
    }
}

impl Default for TimeString {
    fn default() -> Self { Self::BLANK }
}

impl From<TimeOfDay> for TimeString {
    fn from(time: TimeOfDay) -> Self { Self::from_time(time) }
}

impl TryFrom<&str> for TimeString {
    type Error = TimeStringError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let bytes = value.as_bytes();
        if bytes.len() != TIME_STRING_LEN {
            return Err(TimeStringError::Length(bytes.len()));
        }
        if let Some(&bad) = bytes.iter().find(|b| !(b' '..=b'~').contains(*b)) {
            return Err(TimeStringError::NotPrintable(bad));
        }

        let mut cells = [b' '; TIME_STRING_LEN];
        cells.copy_from_slice(bytes);
        Ok(Self(cells))
    }
}

impl fmt::Debug for TimeString {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "TimeString({:?})", self.as_str())
    }
}

impl fmt::Display for TimeString {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 0, 0, "00:00:00")]
    #[case(9, 5, 7, "09:05:07")]
    #[case(10, 15, 30, "10:15:30")]
    #[case(23, 59, 59, "23:59:59")]
    fn test_format_zero_padded(
        #[case] hour: u8,
        #[case] minute: u8,
        #[case] second: u8,
        #[case] expected: &str,
    ) {
        let time = TimeOfDay::new(hour, minute, second).unwrap();
        assert_eq!(TimeString::from_time(time).as_str(), expected);
    }

    #[test]
    fn test_colons_at_fixed_positions() {
        let s = TimeString::from_time(TimeOfDay::from_seconds_of_day(45_296));
        assert_eq!(s.cell(2), ':');
        assert_eq!(s.cell(5), ':');
    }

    #[rstest]
    #[case(24, 0, 0)]
    #[case(0, 60, 0)]
    #[case(0, 0, 60)]
    fn test_time_of_day_rejects_out_of_range(
        #[case] hour: u8,
        #[case] minute: u8,
        #[case] second: u8,
    ) {
        assert_eq!(TimeOfDay::new(hour, minute, second), None);
    }

    #[test]
    fn test_from_seconds_of_day_wraps() {
        let t = TimeOfDay::from_seconds_of_day(SECONDS_PER_DAY + 3661);
        assert_eq!((t.hour(), t.minute(), t.second()), (1, 1, 1));
    }

    #[test]
    fn test_blank_sentinel() {
        assert_eq!(TimeString::BLANK.as_str(), "        ");
        assert_eq!(TimeString::default(), TimeString::BLANK);
    }

    #[test]
    fn test_try_from_accepts_partial_strings() {
        let s = TimeString::try_from("10:15:3 ").unwrap();
        assert_eq!(s.cell(7), ' ');
    }

    #[test]
    fn test_try_from_rejects_bad_input() {
        assert_eq!(TimeString::try_from("10:15"), Err(TimeStringError::Length(5)));
        assert_eq!(TimeString::try_from("10:15:3\n"), Err(TimeStringError::NotPrintable(b'\n')));
        assert_eq!(TimeString::try_from("10:15:3é"), Err(TimeStringError::Length(9)));
    }

    #[test]
    fn test_changed_cells() {
        let prev = TimeString::try_from("10:15:29").unwrap();
        let next = TimeString::try_from("10:15:30").unwrap();
        let changed: Vec<usize> = next.changed_cells(&prev).collect();
        assert_eq!(changed, vec![6, 7]);
    }
}
