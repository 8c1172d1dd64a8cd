use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::evaluation::Prediction;

fn prediction_line(prediction: &Prediction) -> String {
    let point = &prediction.point;

    if point.is_unlabeled() {
        format!(
            "Test point ({}, {}) predicted class: {}",
            point.x1, point.x2, prediction.predicted
        )
    } else {
        format!(
            "Test point ({}, {}) true label: {}, predicted class: {}",
            point.x1, point.x2, point.label, prediction.predicted
        )
    }
}

/// Writes one line per test point followed by the accuracy summary.
pub fn print_report(
    out: &mut impl Write,
    predictions: &[Prediction],
    accuracy: f64,
) -> io::Result<()> {
    for prediction in predictions {
        writeln!(out, "{}", prediction_line(prediction))?;
    }

    writeln!(out, "Accuracy = {}%", accuracy * 100.0)
}

pub fn write_accuracy_file(path: impl AsRef<Path>, accuracy: f64) -> io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "Accuracy: {}%", accuracy * 100.0)
}
