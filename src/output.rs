//! Output formatting for text, CSV, and JSON formats.

use crate::data::{OutputFormat, Parameters};
use crate::error::OutputError;
use geodist::distance::PairDistance;
use std::io::Write;

fn kilometers(record: &PairDistance) -> f64 {
    (record.meters / 1000.0 * 100.0).round() / 100.0
}

fn format_text(record: &PairDistance, show_inputs: bool) -> String {
    if show_inputs {
        format!(
            "{} -> {}: {:.2} m ({:.2} km)\n",
            record.point1,
            record.point2,
            record.meters,
            kilometers(record)
        )
    } else {
        format!("{:.2} m ({:.2} km)\n", record.meters, kilometers(record))
    }
}

fn format_csv(record: &PairDistance, show_inputs: bool, headers: bool, first: bool) -> String {
    let mut output = String::new();

    if first && headers {
        if show_inputs {
            output.push_str("latitude1,longitude1,latitude2,longitude2,meters,kilometers\n");
        } else {
            output.push_str("meters,kilometers\n");
        }
    }

    if show_inputs {
        output.push_str(&format!(
            "{:.5},{:.5},{:.5},{:.5},{:.2},{:.2}\n",
            record.point1.lat,
            record.point1.lng,
            record.point2.lat,
            record.point2.lng,
            record.meters,
            kilometers(record)
        ));
    } else {
        output.push_str(&format!(
            "{:.2},{:.2}\n",
            record.meters,
            kilometers(record)
        ));
    }

    output
}

fn format_json(record: &PairDistance, show_inputs: bool) -> String {
    if show_inputs {
        format!(
            r#"{{"latitude1":{},"longitude1":{},"latitude2":{},"longitude2":{},"meters":{},"kilometers":{}}}"#,
            record.point1.lat,
            record.point1.lng,
            record.point2.lat,
            record.point2.lng,
            record.meters,
            kilometers(record)
        ) + "\n"
    } else {
        format!(
            r#"{{"meters":{},"kilometers":{}}}"#,
            record.meters,
            kilometers(record)
        ) + "\n"
    }
}

/// Writes every record to stdout in the requested format and returns the
/// record count. The first stream error aborts the run.
pub fn dispatch_output(
    results: impl Iterator<Item = Result<PairDistance, String>>,
    params: &Parameters,
) -> Result<usize, OutputError> {
    let show_inputs = params.output.show_inputs.unwrap_or(false);
    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    let mut count = 0;

    for result in results {
        let record = result.map_err(OutputError::from)?;
        let row = match params.output.format {
            OutputFormat::Text => format_text(&record, show_inputs),
            OutputFormat::Csv => {
                format_csv(&record, show_inputs, params.output.headers, count == 0)
            }
            OutputFormat::Json => format_json(&record, show_inputs),
        };
        writer.write_all(row.as_bytes())?;
        count += 1;
    }

    writer.flush()?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geodist::types::GeoPoint;

    fn sample() -> PairDistance {
        PairDistance {
            point1: GeoPoint {
                lat: 26.86296,
                lng: 81.04288,
            },
            point2: GeoPoint {
                lat: 26.86343,
                lng: 81.04136,
            },
            meters: 159.58,
        }
    }

    #[test]
    fn text_without_inputs() {
        assert_eq!(format_text(&sample(), false), "159.58 m (0.16 km)\n");
    }

    #[test]
    fn text_with_inputs() {
        assert_eq!(
            format_text(&sample(), true),
            "26.86296°, 81.04288° -> 26.86343°, 81.04136°: 159.58 m (0.16 km)\n"
        );
    }

    #[test]
    fn csv_headers_only_on_first_row() {
        let first = format_csv(&sample(), false, true, true);
        assert_eq!(first, "meters,kilometers\n159.58,0.16\n");
        let rest = format_csv(&sample(), false, true, false);
        assert_eq!(rest, "159.58,0.16\n");
    }

    #[test]
    fn csv_with_inputs() {
        let row = format_csv(&sample(), true, false, true);
        assert_eq!(
            row,
            "26.86296,81.04288,26.86343,81.04136,159.58,0.16\n"
        );
    }

    #[test]
    fn json_shape() {
        assert_eq!(
            format_json(&sample(), false),
            "{\"meters\":159.58,\"kilometers\":0.16}\n"
        );
        assert!(format_json(&sample(), true).starts_with("{\"latitude1\":26.86296,"));
    }
}
