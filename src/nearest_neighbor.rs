use std::collections::HashMap;

use crate::error::Error;
use crate::parse::DataPoint;

pub fn euclidean_distance(p: &DataPoint, q: &DataPoint) -> f64 {
    ((p.x1 - q.x1).powi(2) + (p.x2 - q.x2).powi(2)).sqrt()
}

/// Predicts a label for `query` by majority vote among its `k` nearest
/// training points.
///
/// Requires `1 <= k <= training.len()`; anything else is `Error::InvalidK`.
pub fn classify(query: &DataPoint, training: &[DataPoint], k: usize) -> Result<String, Error> {
    if k == 0 || k > training.len() {
        return Err(Error::InvalidK {
            k,
            training_len: training.len(),
        });
    }

    let mut neighbors: Vec<(f64, &DataPoint)> = training
        .iter()
        .map(|point| (euclidean_distance(query, point), point))
        .collect();

    // Stable sort: equal distances keep their training-set order, which
    // makes tie-breaking reproducible.
    neighbors.sort_by(|(a, _), (b, _)| a.total_cmp(b));

    let nearest_labels: Vec<&str> = neighbors[..k]
        .iter()
        .map(|(_, point)| point.label.as_str())
        .collect();

    Ok(majority_label(&nearest_labels).to_owned())
}

/// Returns the most frequent label; among equal counts, the label seen
/// first in `labels` wins.
fn majority_label<'a>(labels: &[&'a str]) -> &'a str {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for &label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }

    let mut best = labels[0];
    let mut best_count = 0;
    for &label in labels {
        let count = counts[label];
        if count > best_count {
            best = label;
            best_count = count;
        }
    }

    best
}
