use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Fixture(#[from] hsph_fixtures::FixtureError),

    #[error("failed to serialize render value: {0}")]
    Render(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
