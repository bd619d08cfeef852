use super::StatsRecord;

/// The report column header, fixed 8-character fields.
///
/// The `99.99%` label names the p99.9 quantile; the mismatch is kept
/// verbatim so existing consumers of the results file keep working.
pub fn header_line() -> &'static str {
    "   Bytes, Samples,   stdev,    mean,     min,     50%,     90%,     99%,  99.99%,     max"
}

/// Render one record as a fixed-width report row.
///
/// Byte count and sample count are unsigned integers, every other field is a
/// float with two decimal places; all fields are right-aligned to 8
/// characters.
pub fn record_line(record: &StatsRecord) -> String {
    let s = &record.summary;
    format!(
        "{:>8},{:>8},{:>8.2},{:>8.2},{:>8.2},{:>8.2},{:>8.2},{:>8.2},{:>8.2},{:>8.2}",
        record.payload_bytes,
        s.sample_count,
        s.std_dev,
        s.mean,
        s.min,
        s.p50,
        s.p90,
        s.p99,
        s.p99_9,
        s.max,
    )
}
