use chrono::{Datelike, NaiveDate};

/// Nepali month names, Baisakh first.
const BS_MONTHS: [&str; 12] = [
    "Baisakh", "Jestha", "Ashadh", "Shrawan", "Bhadra", "Ashwin", "Kartik", "Mangsir", "Poush",
    "Magh", "Falgun", "Chaitra",
];

/// Formats a Gregorian date as a Bikram Sambat display string, e.g.
/// "2079 Bhadra 18".
///
/// This is a rough display approximation, not calendar arithmetic: BS runs
/// about 56.7 years ahead of the Gregorian calendar, so the year is shifted
/// by 56, the month index by 8, and the day is carried as-is. Month lengths
/// differ between the calendars, so days near month boundaries can be off.
pub fn to_bikram_sambat(date: NaiveDate) -> String {
    let bs_year = date.year() + 56;
    let bs_month = (date.month0() + 8) % 12;
    format!("{} {} {}", bs_year, BS_MONTHS[bs_month as usize], date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn shifts_year_and_month() {
        // September (month0 = 8) lands on index 4 after the +8 shift.
        assert_eq!(to_bikram_sambat(date(2023, 9, 18)), "2079 Bhadra 18");
        assert_eq!(to_bikram_sambat(date(2023, 1, 1)), "2079 Poush 1");
    }

    #[test]
    fn month_offset_wraps_within_the_table() {
        // April (month0 = 3) maps to index 11, the last table entry.
        assert_eq!(to_bikram_sambat(date(2023, 4, 10)), "2079 Chaitra 10");
        // May wraps back to the first entry.
        assert_eq!(to_bikram_sambat(date(2023, 5, 10)), "2079 Baisakh 10");
    }
}
