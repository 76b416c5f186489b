use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScreenError {
    #[error("Unsupported disease for marker screening: {0}")]
    UnsupportedDisease(String),
    #[error("Invalid genotype code '{0}': expected exactly two alleles")]
    InvalidGenotype(String),
}
