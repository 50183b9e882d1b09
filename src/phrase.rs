//! Natural-language time phrasing.
//!
//! Maps an (hour, minute) clock reading to a spoken phrase in the idiom
//! "nearness qualifier + five-minute name + hour name + day part", e.g.
//! "a little after twenty to three in the afternoon".

use thiserror::Error;

/// One phrase per 5-minute bucket around the hour. Bucket 12 wraps back to
/// the next hour's "the hour of", so minute 58 announces the coming hour.
const FIVE_MINUTE_NAMES: [&str; 13] = [
    "the hour of",
    "five past",
    "ten past",
    "quarter past",
    "twenty past",
    "twenty-five past",
    "half past",
    "twenty-five to",
    "twenty to",
    "quarter to",
    "ten to",
    "five to",
    "the hour of",
];

/// Qualifier for the -2..=+2 minute offset from the nearest 5-minute tick.
const NEARNESS_NAMES: [&str; 5] = ["soon to be", "almost", "exactly", "just after", "a little after"];

/// Spoken hour names as a two-cycle list (0-12 repeated through 24) so that
/// hour rollover can index `hour + 1` directly, without modulo at the call site.
const HOUR_NAMES: [&str; 25] = [
    "twelve", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    "ten", "eleven", "twelve",
];

const DAY_PART_NAMES: [&str; 4] = ["at night", "in the morning", "in the afternoon", "in the evening"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhraseError {
    #[error("hour out of range: {0} (expected 0..=23)")]
    HourOutOfRange(u32),

    #[error("minute out of range: {0} (expected 0..=59)")]
    MinuteOutOfRange(u32),

    /// An index computed by the formatter fell outside a phrase table.
    /// Cannot happen for a validated reading; surfaced rather than swallowed
    /// so a boundary-arithmetic defect is loud.
    #[error("phrase table lookup out of bounds: {table}[{index}]")]
    TableLookup { table: &'static str, index: usize },
}

/// A validated hour/minute pair taken from the system clock (or supplied
/// directly in tests). Out-of-range values are rejected at construction,
/// never clamped or wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    hour: u8,
    minute: u8,
}

impl ClockReading {
    pub fn new(hour: u32, minute: u32) -> Result<Self, PhraseError> {
        if hour > 23 {
            return Err(PhraseError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(PhraseError::MinuteOutOfRange(minute));
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

fn lookup(table: &'static [&'static str], name: &'static str, index: usize) -> Result<&'static str, PhraseError> {
    table
        .get(index)
        .copied()
        .ok_or(PhraseError::TableLookup { table: name, index })
}

/// Round a minute to the nearest multiple of 5, in 0..=60.
///
/// 60 is a valid result: it represents rollover into the next hour's
/// "the hour of" bucket. Tie-break: an offset of 2 rounds down (2 -> 0)
/// and 3 rounds up (3 -> 5), so the result is always within 2 minutes.
pub fn round_to_five(minute: u8) -> u8 {
    ((minute + 2) / 5) * 5
}

/// Nearness qualifier and five-minute name for a minute value.
///
/// The nearness index is the minute's offset from its rounded tick shifted
/// into 0..=4 (`minute - round_to_five(minute) + 2`).
pub fn five_minute_parts(minute: u8) -> Result<(&'static str, &'static str), PhraseError> {
    let rounded = round_to_five(minute);
    let five_index = usize::from(rounded / 5);
    let nearness_index = (i16::from(minute) - i16::from(rounded) + 2) as usize;

    let nearness = lookup(&NEARNESS_NAMES, "NEARNESS_NAMES", nearness_index)?;
    let five_name = lookup(&FIVE_MINUTE_NAMES, "FIVE_MINUTE_NAMES", five_index)?;
    Ok((nearness, five_name))
}

/// Spoken name of the announced hour.
///
/// Past the half hour the announced hour rolls forward ("twenty to four"
/// rather than "forty past three"). The cutover sits at minute 33, not 30:
/// the five-minute ticks are centered on the hour, not split symmetrically.
/// This threshold is preserved behavior, not something to re-derive.
pub fn hour_name(hour: u8, minute: u8) -> Result<&'static str, PhraseError> {
    let index = if minute < 33 {
        usize::from(hour)
    } else {
        usize::from(hour) + 1
    };
    lookup(&HOUR_NAMES, "HOUR_NAMES", index)
}

/// Day-part phrase for an hour: night covers 0..=5 and 22..=23, then
/// morning 6..=11, afternoon 12..=17, evening 18..=21.
pub fn day_part_name(hour: u8) -> &'static str {
    match hour {
        6..=11 => DAY_PART_NAMES[1],
        12..=17 => DAY_PART_NAMES[2],
        18..=21 => DAY_PART_NAMES[3],
        _ => DAY_PART_NAMES[0],
    }
}

/// Assemble the full spoken phrase for a clock reading.
///
/// With a date context (produced by [`crate::calendar::date_context`]) the
/// phrase reads "{context} the time is ..."; without one it is capitalised
/// as a standalone sentence. Pure: identical input yields identical output.
pub fn compose_phrase(reading: ClockReading, date_context: Option<&str>) -> Result<String, PhraseError> {
    let (nearness, five_name) = five_minute_parts(reading.minute)?;
    let hour = hour_name(reading.hour, reading.minute)?;
    let day_part = day_part_name(reading.hour);

    let phrase = match date_context {
        Some(context) => {
            format!("{context} the time is {nearness} {five_name} {hour} {day_part}.")
        }
        None => format!("The time is {nearness} {five_name} {hour} {day_part}."),
    };
    Ok(phrase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_five_is_a_close_multiple_of_five() {
        for minute in 0u8..60 {
            let rounded = round_to_five(minute);
            assert_eq!(rounded % 5, 0, "minute {minute}");
            assert!(rounded <= 60, "minute {minute}");
            let distance = (i16::from(minute) - i16::from(rounded)).abs();
            assert!(distance <= 2, "minute {minute} rounded to {rounded}");
        }
    }

    #[test]
    fn round_to_five_tie_break() {
        // Offset 2 rounds down, offset 3 rounds up.
        assert_eq!(round_to_five(2), 0);
        assert_eq!(round_to_five(3), 5);
        assert_eq!(round_to_five(57), 55);
        assert_eq!(round_to_five(58), 60);
    }

    #[test]
    fn five_minute_parts_in_bounds_for_every_minute() {
        for minute in 0u8..60 {
            five_minute_parts(minute).unwrap();
        }
    }

    #[test]
    fn nearness_qualifiers_by_offset() {
        assert_eq!(five_minute_parts(0).unwrap().0, "exactly");
        assert_eq!(five_minute_parts(1).unwrap().0, "just after");
        assert_eq!(five_minute_parts(2).unwrap().0, "a little after");
        assert_eq!(five_minute_parts(3).unwrap().0, "soon to be");
        assert_eq!(five_minute_parts(4).unwrap().0, "almost");
    }

    #[test]
    fn minute_58_wraps_to_next_hour_bucket() {
        let (nearness, five_name) = five_minute_parts(58).unwrap();
        assert_eq!(nearness, "soon to be");
        assert_eq!(five_name, "the hour of");
    }

    #[test]
    fn hour_name_rolls_forward_at_minute_33() {
        for hour in 0u8..24 {
            for minute in 0u8..33 {
                assert_eq!(hour_name(hour, minute).unwrap(), HOUR_NAMES[usize::from(hour)]);
            }
            for minute in 33u8..60 {
                assert_eq!(
                    hour_name(hour, minute).unwrap(),
                    HOUR_NAMES[usize::from(hour) + 1]
                );
            }
        }
    }

    #[test]
    fn hour_23_rolls_over_to_twelve() {
        assert_eq!(hour_name(23, 45).unwrap(), "twelve");
    }

    #[test]
    fn day_parts_partition_the_day() {
        for hour in 0u8..24 {
            let expected = match hour {
                0..=5 | 22 | 23 => "at night",
                6..=11 => "in the morning",
                12..=17 => "in the afternoon",
                _ => "in the evening",
            };
            assert_eq!(day_part_name(hour), expected, "hour {hour}");
        }
    }

    #[test]
    fn compose_succeeds_for_all_1440_readings() {
        for hour in 0u32..24 {
            for minute in 0u32..60 {
                let reading = ClockReading::new(hour, minute).unwrap();
                compose_phrase(reading, None).unwrap();
            }
        }
    }

    #[test]
    fn compose_three_oclock() {
        let reading = ClockReading::new(3, 0).unwrap();
        assert_eq!(
            compose_phrase(reading, None).unwrap(),
            "The time is exactly the hour of three at night."
        );
    }

    #[test]
    fn compose_fourteen_forty_seven() {
        let reading = ClockReading::new(14, 47).unwrap();
        assert_eq!(
            compose_phrase(reading, None).unwrap(),
            "The time is a little after twenty to three in the afternoon."
        );
    }

    #[test]
    fn compose_just_before_midnight() {
        let reading = ClockReading::new(23, 58).unwrap();
        assert_eq!(
            compose_phrase(reading, None).unwrap(),
            "The time is soon to be the hour of twelve at night."
        );
    }

    #[test]
    fn compose_with_date_context() {
        let reading = ClockReading::new(14, 47).unwrap();
        assert_eq!(
            compose_phrase(reading, Some("February the 14th of 2019 is Thursday and")).unwrap(),
            "February the 14th of 2019 is Thursday and the time is \
             a little after twenty to three in the afternoon."
        );
    }

    #[test]
    fn compose_is_deterministic() {
        let reading = ClockReading::new(9, 13).unwrap();
        let first = compose_phrase(reading, None).unwrap();
        let second = compose_phrase(reading, None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn out_of_range_input_is_rejected() {
        assert_eq!(ClockReading::new(24, 0), Err(PhraseError::HourOutOfRange(24)));
        assert_eq!(ClockReading::new(0, 60), Err(PhraseError::MinuteOutOfRange(60)));
        assert_eq!(
            ClockReading::new(100, 100),
            Err(PhraseError::HourOutOfRange(100))
        );
    }
}
