use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("unable to load {resource}: {reason}")]
    Load { resource: String, reason: String },

    #[error("malformed quote at line {line}: {reason}")]
    Parse { line: u64, reason: String },
}

pub type Result<T> = std::result::Result<T, ChartError>;
