use chart_rebase::core::{
    RangeClass, RangePreset, RangeRequest, TimeAxis, TimeExtent, classify_range,
    default_full_range_tolerance,
};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};

fn ymd_hms(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("valid timestamp")
}

fn extent() -> Option<TimeExtent> {
    Some(TimeExtent {
        min: ymd_hms(2024, 1, 1, 0, 0),
        max: ymd_hms(2024, 12, 31, 0, 0),
    })
}

#[test]
fn all_sentinel_is_full_range_even_without_extent() {
    let class = classify_range(RangeRequest::All, None, default_full_range_tolerance());
    assert_eq!(class, RangeClass::FullRange);
}

#[test]
fn exact_extent_is_full_range() {
    let request = RangeRequest::window(ymd_hms(2024, 1, 1, 0, 0), ymd_hms(2024, 12, 31, 0, 0));
    assert_eq!(
        classify_range(request, extent(), default_full_range_tolerance()),
        RangeClass::FullRange
    );
}

#[test]
fn sub_day_jitter_is_still_full_range() {
    let request = RangeRequest::window(
        ymd_hms(2023, 12, 31, 12, 0),
        ymd_hms(2024, 12, 31, 23, 59),
    );
    assert_eq!(
        classify_range(request, extent(), default_full_range_tolerance()),
        RangeClass::FullRange
    );
}

#[test]
fn exactly_one_day_off_is_sub_range() {
    let start = ymd_hms(2024, 1, 2, 0, 0);
    let end = ymd_hms(2024, 12, 31, 0, 0);
    let request = RangeRequest::window(start, end);
    assert_eq!(
        classify_range(request, extent(), default_full_range_tolerance()),
        RangeClass::SubRange {
            start: Some(start),
            end: Some(end)
        }
    );
}

#[test]
fn strictly_inside_window_is_sub_range() {
    let start = ymd_hms(2024, 3, 1, 0, 0);
    let end = ymd_hms(2024, 6, 1, 0, 0);
    let class = classify_range(
        RangeRequest::window(start, end),
        extent(),
        default_full_range_tolerance(),
    );
    assert!(matches!(class, RangeClass::SubRange { .. }));
}

#[test]
fn reversed_window_is_normalized() {
    let start = ymd_hms(2024, 3, 1, 0, 0);
    let end = ymd_hms(2024, 6, 1, 0, 0);
    let class = classify_range(
        RangeRequest::window(end, start),
        extent(),
        default_full_range_tolerance(),
    );
    assert_eq!(
        class,
        RangeClass::SubRange {
            start: Some(start),
            end: Some(end)
        }
    );
}

#[test]
fn unparsed_bound_is_never_full_range() {
    let request = RangeRequest::from_labels("2024-01-01", "not-a-date");
    assert!(matches!(
        classify_range(request, extent(), default_full_range_tolerance()),
        RangeClass::SubRange { end: None, .. }
    ));
}

#[test]
fn classification_is_reevaluated_per_request() {
    let tolerance = TimeDelta::hours(1);
    let full = RangeRequest::window(ymd_hms(2024, 1, 1, 0, 30), ymd_hms(2024, 12, 31, 0, 0));
    let sub = RangeRequest::window(ymd_hms(2024, 1, 1, 2, 0), ymd_hms(2024, 12, 31, 0, 0));
    for _ in 0..3 {
        assert_eq!(classify_range(full, extent(), tolerance), RangeClass::FullRange);
        assert!(matches!(
            classify_range(sub, extent(), tolerance),
            RangeClass::SubRange { .. }
        ));
    }
}

#[test]
fn presets_step_back_by_calendar_months_from_latest_point() {
    let axis = TimeAxis::parse(&["2023-01-15", "2024-03-31"]);
    let extent = axis.extent();

    assert_eq!(
        RangePreset::Months(1).to_request(extent),
        RangeRequest::window(ymd_hms(2024, 2, 29, 0, 0), ymd_hms(2024, 3, 31, 0, 0))
    );
    assert_eq!(
        RangePreset::Years(1).to_request(extent),
        RangeRequest::window(ymd_hms(2023, 3, 31, 0, 0), ymd_hms(2024, 3, 31, 0, 0))
    );
    assert_eq!(RangePreset::All.to_request(extent), RangeRequest::All);
    assert_eq!(RangePreset::Months(3).to_request(None), RangeRequest::All);
}

#[test]
fn preset_labels_round_trip_for_standard_buttons() {
    let labels: Vec<String> = RangePreset::STANDARD.iter().map(|p| p.label()).collect();
    assert_eq!(labels, vec!["1M", "3M", "6M", "1Y", "All"]);
    for preset in RangePreset::STANDARD {
        assert_eq!(RangePreset::parse_label(&preset.label()), Some(preset));
    }
    assert_eq!(RangePreset::parse_label("all"), Some(RangePreset::All));
    assert_eq!(RangePreset::parse_label("0M"), None);
    assert_eq!(RangePreset::parse_label("3W"), None);
    assert_eq!(RangePreset::parse_label(""), None);
}
