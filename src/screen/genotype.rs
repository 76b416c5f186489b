use crate::screen::classify::{Call, Disease};
use crate::screen::error::ScreenError;
use crate::screen::family::Family;
use arrayvec::ArrayVec;

/// Calls for one member: original strand first, complement second.
pub type GenotypeCalls = ArrayVec<Call, 2>;

/// Per-member classifier calls for one screening run, in family order.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    pub calls: Vec<GenotypeCalls>,
}

impl AggregateResult {
    /// Encodes the twelve calls as a result string, member-major with the
    /// original strand before the complement. Indeterminate calls keep
    /// their own symbol instead of collapsing into either side.
    pub fn encode(&self) -> String {
        self.calls
            .iter()
            .flat_map(|genotype| genotype.iter().map(Call::symbol))
            .collect()
    }
}

/// Runs the classifier selected by `disease` over every member's original
/// and complement strands, in the fixed screening order.
pub fn aggregate(disease: Disease, family: &Family) -> Result<AggregateResult, ScreenError> {
    let classify = disease.classifier()?;
    let calls = family
        .members()
        .iter()
        .map(|member| {
            let mut genotype = GenotypeCalls::new();
            genotype.push(classify(&member.sequence));
            genotype.push(classify(&member.complement));
            log::debug!(
                "{}: {}{}",
                member.role.label(),
                genotype[0].symbol(),
                genotype[1].symbol()
            );
            genotype
        })
        .collect();
    Ok(AggregateResult { calls })
}
