use thiserror::Error;

pub type VizResult<T> = Result<T, VizError>;

#[derive(Debug, Error)]
pub enum VizError {
    #[error("degenerate scale domain: {0}")]
    DegenerateDomain(String),

    #[error("duplicate category key `{key}`")]
    DuplicateCategory { key: String },

    #[error("unknown category key `{key}`")]
    UnknownCategory { key: String },

    #[error("geometry fetch failed: {0}")]
    GeometryFetch(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
