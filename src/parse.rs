use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::warn;

use crate::error::Error;

pub const UNKNOWN_LABEL: &str = "?";

#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub x1: f64,
    pub x2: f64,
    pub label: String,
}

impl DataPoint {
    pub fn new(x1: f64, x2: f64, label: impl Into<String>) -> Self {
        Self {
            x1,
            x2,
            label: label.into(),
        }
    }

    /// The point carries the `"?"` sentinel instead of a true label.
    pub fn is_unlabeled(&self) -> bool {
        self.label == UNKNOWN_LABEL
    }
}

/// Parses one `<x1> <x2> <label>` line. Returns `None` for lines with
/// fewer than three whitespace-separated tokens or non-finite coordinates.
fn parse_line(line: &str) -> Option<DataPoint> {
    let mut tokens = line.split_whitespace();

    let x1 = tokens.next()?.parse::<f64>().ok()?;
    let x2 = tokens.next()?.parse::<f64>().ok()?;
    let label = tokens.next()?;

    if !x1.is_finite() || !x2.is_finite() {
        return None;
    }

    Some(DataPoint::new(x1, x2, label))
}

/// Reads data points line by line, skipping malformed lines with a warning.
///
/// Only a failure of the underlying reader is an error; malformed content
/// never is.
pub fn load(reader: impl BufRead) -> std::io::Result<Vec<DataPoint>> {
    let mut points = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;

        match parse_line(&line) {
            Some(point) => points.push(point),
            None => warn!(line_number = index + 1, line = %line, "skipping malformed line"),
        }
    }

    Ok(points)
}

pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<DataPoint>, Error> {
    let path = path.as_ref();

    let into_error = |source| Error::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(into_error)?;

    load(BufReader::new(file)).map_err(into_error)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::io::Write;

    use super::*;

    fn load_str(input: &str) -> Vec<DataPoint> {
        load(Cursor::new(input)).unwrap()
    }

    #[test]
    fn parses_whitespace_separated_fields() {
        let points = load_str("1.0 2.0 A\n  -3.5\t4.25   B  \n");

        assert_eq!(
            points,
            vec![
                DataPoint::new(1.0, 2.0, "A"),
                DataPoint::new(-3.5, 4.25, "B"),
            ]
        );
    }

    #[test]
    fn skips_malformed_lines_and_keeps_valid_order() {
        let points = load_str("abc def\n1.0 2.0 A\n3.0\n4.0 x B\n5.0 6.0 C\n");

        assert_eq!(
            points,
            vec![DataPoint::new(1.0, 2.0, "A"), DataPoint::new(5.0, 6.0, "C")]
        );
    }

    #[test]
    fn single_malformed_plus_single_valid_yields_one_point() {
        let points = load_str("abc def\n1.0 2.0 A\n");

        assert_eq!(points, vec![DataPoint::new(1.0, 2.0, "A")]);
    }

    #[test]
    fn drops_non_finite_coordinates() {
        let points = load_str("NaN 1.0 A\ninf 2.0 B\n0.0 1.0 C\n");

        assert_eq!(points, vec![DataPoint::new(0.0, 1.0, "C")]);
    }

    #[test]
    fn recognizes_unknown_label_sentinel() {
        let points = load_str("1.0 2.0 ?\n1.0 2.0 A\n");

        assert!(points[0].is_unlabeled());
        assert!(!points[1].is_unlabeled());
    }

    #[test]
    fn missing_file_is_source_unavailable() {
        let error = load_file("no_such_data_file.txt").unwrap_err();

        assert!(matches!(error, Error::SourceUnavailable { .. }));
    }

    #[test]
    fn loads_from_a_real_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0.0 0.0 A\n10.0 10.0 B").unwrap();

        let points = load_file(file.path()).unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[1].label, "B");
    }
}
