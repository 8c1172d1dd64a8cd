use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read data source {}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid neighbor count k = {k} for a training set of {training_len} points (need 1 <= k <= {training_len})")]
    InvalidK { k: usize, training_len: usize },
}
