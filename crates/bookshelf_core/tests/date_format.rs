use bookshelf_core::{parse_date, year, InvalidDateReason};

#[test]
fn leap_day_parses_and_reports_year() {
    let date = parse_date("29/02/2016").unwrap();
    assert_eq!(year(&date), "2016");
}

#[test]
fn impossible_day_fails_instead_of_rolling_over() {
    let err = parse_date("31/02/2016").unwrap_err();
    assert_eq!(err.input, "31/02/2016");
    assert_eq!(err.reason, InvalidDateReason::OutOfRange);
}

#[test]
fn non_leap_february_29_fails() {
    let err = parse_date("29/02/2015").unwrap_err();
    assert_eq!(err.reason, InvalidDateReason::OutOfRange);
}

#[test]
fn other_separators_and_orders_are_malformed() {
    for input in ["2015-06-04", "04-06-2015", "2015/06/04", "04/06/15", "", "aa/bb/cccc"] {
        let err = parse_date(input).unwrap_err();
        assert_eq!(err.reason, InvalidDateReason::Malformed, "input: {input}");
    }
}

#[test]
fn error_message_names_expected_format() {
    let err = parse_date("June 4th").unwrap_err();
    assert!(err.to_string().contains("dd/MM/yyyy"), "unexpected: {err}");
}

#[test]
fn catalog_dates_resolve_to_expected_years() {
    assert_eq!(year(&parse_date("04/06/2015").unwrap()), "2015");
    assert_eq!(year(&parse_date("06/10/2011").unwrap()), "2011");
}
