use quelio::errors::AppError;
use quelio::utils::time::{format_minutes, parse_clock, parse_hhmm};

#[test]
fn test_parse_hhmm_basic() {
    assert_eq!(parse_hhmm("08:00").unwrap(), 480);
    assert_eq!(parse_hhmm("00:00").unwrap(), 0);
    assert_eq!(parse_hhmm("23:59").unwrap(), 1439);
    assert_eq!(parse_hhmm(" 12:30 ").unwrap(), 750);
}

#[test]
fn test_parse_hhmm_no_range_check() {
    // fields are only required to be digits
    assert_eq!(parse_hhmm("100:75").unwrap(), 6075);
    assert_eq!(parse_hhmm("8:5").unwrap(), 485);
}

#[test]
fn test_parse_hhmm_negative() {
    assert_eq!(parse_hhmm("-01:30").unwrap(), -90);
    assert_eq!(parse_hhmm("-00:05").unwrap(), -5);
}

#[test]
fn test_parse_hhmm_malformed() {
    for bad in ["", "8", "08:", ":30", "08:00:00", "ab:cd", "08h00", "+08:00", "-", "08:-5", "1 2:00"] {
        match parse_hhmm(bad) {
            Err(AppError::MalformedDuration(s)) => assert_eq!(s, bad),
            other => panic!("expected MalformedDuration for {:?}, got {:?}", bad, other),
        }
    }
}

#[test]
fn test_format_minutes() {
    assert_eq!(format_minutes(0), "00:00");
    assert_eq!(format_minutes(485), "08:05");
    assert_eq!(format_minutes(-90), "-01:30");
    assert_eq!(format_minutes(6000), "100:00");
}

#[test]
fn test_format_then_parse_is_identity() {
    let samples = [0, 1, -1, 59, 60, -61, 1439, 2280, -2280, 123_456, i64::MAX, i64::MIN];
    for m in samples {
        assert_eq!(parse_hhmm(&format_minutes(m)).unwrap(), m, "round trip of {}", m);
    }
}

#[test]
fn test_parse_then_format_well_formed_clock() {
    for s in ["00:00", "07:42", "10:30", "23:59"] {
        assert_eq!(format_minutes(parse_hhmm(s).unwrap()), s);
    }
}

#[test]
fn test_parse_clock_is_strict() {
    assert!(parse_clock("10:30").is_some());
    assert!(parse_clock("24:00").is_none());
    assert!(parse_clock("10:60").is_none());
}
