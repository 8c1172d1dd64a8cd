use crate::error::Error;
use crate::nearest_neighbor::classify;
use crate::parse::DataPoint;

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub point: DataPoint,
    pub predicted: String,
}

impl Prediction {
    /// `None` for points with an unknown true label, otherwise whether the
    /// prediction matched it.
    pub fn is_correct(&self) -> Option<bool> {
        if self.point.is_unlabeled() {
            None
        } else {
            Some(self.point.label == self.predicted)
        }
    }
}

/// Classifies every test point against the training set.
pub fn predict_all(
    test: &[DataPoint],
    training: &[DataPoint],
    k: usize,
) -> Result<Vec<Prediction>, Error> {
    // Validate k even when there is nothing to classify.
    if k == 0 || k > training.len() {
        return Err(Error::InvalidK {
            k,
            training_len: training.len(),
        });
    }

    test.iter()
        .map(|point| {
            classify(point, training, k).map(|predicted| Prediction {
                point: point.clone(),
                predicted,
            })
        })
        .collect()
}

/// Fraction of predictions for labeled points that matched the true label.
/// Returns `0.0` when no test point is labeled.
pub fn accuracy(predictions: &[Prediction]) -> f64 {
    let mut correct = 0_usize;
    let mut total = 0_usize;

    for prediction in predictions {
        if let Some(hit) = prediction.is_correct() {
            total += 1;
            correct += usize::from(hit);
        }
    }

    if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64
    }
}

pub fn evaluate(test: &[DataPoint], training: &[DataPoint], k: usize) -> Result<f64, Error> {
    Ok(accuracy(&predict_all(test, training, k)?))
}
