/// Format a millisecond duration as zero-padded `HH:MM:SS`.
///
/// Hours are unbounded: a long session renders as "27:03:10", not wrapped
/// at 24. The sub-second remainder is truncated, never rounded up.
pub fn format_duration(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Discrete color band for an elapsed duration, used to tint timer
/// displays. Exactly one band applies to every duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorBand {
    Blue,
    Green,
    Orange,
    Red,
    Purple,
}

impl ColorBand {
    /// Band thresholds sit at 2h, 4h, 8h and 10h.
    pub fn for_ms(ms: u64) -> Self {
        let hours = ms as f64 / 3_600_000.0;
        if hours < 2.0 {
            Self::Blue
        } else if hours < 4.0 {
            Self::Green
        } else if hours < 8.0 {
            Self::Orange
        } else if hours < 10.0 {
            Self::Red
        } else {
            Self::Purple
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(0), "00:00:00");
    }

    #[test]
    fn test_format_duration_mixed_fields() {
        assert_eq!(format_duration(3_661_000), "01:01:01");
        assert_eq!(format_duration(36_000_000), "10:00:00");
    }

    #[test]
    fn test_format_duration_truncates_subsecond() {
        assert_eq!(format_duration(999), "00:00:00");
        assert_eq!(format_duration(1_999), "00:00:01");
    }

    #[test]
    fn test_format_duration_hours_unbounded() {
        // 27h 3m 10s does not wrap at 24
        assert_eq!(format_duration(97_390_000), "27:03:10");
    }

    #[test]
    fn test_color_band_boundaries() {
        // Each crossing at exactly the threshold millisecond
        assert_eq!(ColorBand::for_ms(0), ColorBand::Blue);
        assert_eq!(ColorBand::for_ms(7_199_999), ColorBand::Blue);
        assert_eq!(ColorBand::for_ms(7_200_000), ColorBand::Green);
        assert_eq!(ColorBand::for_ms(14_399_999), ColorBand::Green);
        assert_eq!(ColorBand::for_ms(14_400_000), ColorBand::Orange);
        assert_eq!(ColorBand::for_ms(28_799_999), ColorBand::Orange);
        assert_eq!(ColorBand::for_ms(28_800_000), ColorBand::Red);
        assert_eq!(ColorBand::for_ms(35_999_999), ColorBand::Red);
        assert_eq!(ColorBand::for_ms(36_000_000), ColorBand::Purple);
    }
}
