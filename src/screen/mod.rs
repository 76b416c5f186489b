pub mod classify;
pub mod error;
pub mod family;
pub mod genotype;
pub mod punnett;
pub mod sequence;
pub mod writers;

pub use classify::{Call, Disease};
pub use error::ScreenError;
pub use family::{Family, FamilyRole, FAMILY_ROLES};
pub use genotype::{aggregate, AggregateResult};
pub use punnett::{couple_squares, punnett, PunnettSquare};
pub use sequence::reverse_complement;
