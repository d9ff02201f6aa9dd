use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::core::{RangeRequest, parse_timestamp, timestamp_from_unix_millis};

const AUTORANGE_KEY: &str = "xaxis.autorange";
const RANGE_START_KEY: &str = "xaxis.range[0]";
const RANGE_END_KEY: &str = "xaxis.range[1]";
const RANGE_KEY: &str = "xaxis.range";

/// Decodes a chart-layer relayout payload into a range request.
///
/// Priority: autorange reset, split range keys, range array, then the
/// layout's current x range (`layout_range`, a two-element array). Returns
/// `None` when the payload carries no x-axis range, e.g. a y-axis-only
/// relayout. Bounds may be date labels or epoch milliseconds.
#[must_use]
pub fn decode_relayout_event(event: &Value, layout_range: Option<&Value>) -> Option<RangeRequest> {
    if event.get(AUTORANGE_KEY).and_then(Value::as_bool) == Some(true) {
        return Some(RangeRequest::All);
    }

    if let (Some(start), Some(end)) = (event.get(RANGE_START_KEY), event.get(RANGE_END_KEY)) {
        return Some(window_from_bounds(start, end));
    }

    event
        .get(RANGE_KEY)
        .and_then(range_pair)
        .or_else(|| layout_range.and_then(range_pair))
}

fn range_pair(value: &Value) -> Option<RangeRequest> {
    match value.as_array()?.as_slice() {
        [start, end] => Some(window_from_bounds(start, end)),
        _ => None,
    }
}

fn window_from_bounds(start: &Value, end: &Value) -> RangeRequest {
    RangeRequest::Window {
        start: bound_to_timestamp(start),
        end: bound_to_timestamp(end),
    }
}

fn bound_to_timestamp(bound: &Value) -> Option<DateTime<Utc>> {
    match bound {
        Value::String(label) => parse_timestamp(label),
        Value::Number(millis) => millis.as_f64().and_then(timestamp_from_unix_millis),
        _ => None,
    }
}
