/// Generates the next display id in a zero-padded sequence, e.g.
/// `sequential_id("TR", Some("TR009"))` is `"TR010"`.
///
/// The caller supplies the last id issued; an absent or unparsable last id
/// restarts the sequence at 1. Ids longer than three digits keep growing
/// without truncation.
pub fn sequential_id(prefix: &str, last: Option<&str>) -> String {
    let next = last
        .and_then(|id| id.strip_prefix(prefix))
        .and_then(|digits| digits.parse::<u32>().ok())
        .map(|n| n + 1)
        .unwrap_or(1);
    format!("{prefix}{next:03}")
}

/// Generates a record number in the form the transaction form displays,
/// e.g. `"R-1042"`. The sequence number is caller-supplied and wraps within
/// the four-digit display range.
pub fn record_no(seq: u32) -> String {
    format!("R-{}", 1000 + seq % 9000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments_and_pads() {
        assert_eq!(sequential_id("TR", Some("TR009")), "TR010");
        assert_eq!(sequential_id("TR", Some("TR001")), "TR002");
        assert_eq!(sequential_id("CL", Some("CL099")), "CL100");
    }

    #[test]
    fn restarts_on_missing_or_foreign_last_id() {
        assert_eq!(sequential_id("TR", None), "TR001");
        assert_eq!(sequential_id("TR", Some("CL005")), "TR001");
        assert_eq!(sequential_id("TR", Some("TR-abc")), "TR001");
    }

    #[test]
    fn grows_past_three_digits() {
        assert_eq!(sequential_id("TR", Some("TR999")), "TR1000");
        assert_eq!(sequential_id("TR", Some("TR1000")), "TR1001");
    }

    #[test]
    fn record_numbers_stay_four_digits() {
        assert_eq!(record_no(0), "R-1000");
        assert_eq!(record_no(42), "R-1042");
        assert_eq!(record_no(9000), "R-1000");
    }
}
