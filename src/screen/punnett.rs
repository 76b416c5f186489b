use crate::screen::error::ScreenError;
use crate::screen::family::FamilyRole;
use itertools::Itertools;

/// The four allele combinations of one cross, row-major over
/// (parent1 allele, parent2 allele).
pub type PunnettSquare = Vec<String>;

/// The three couples crossed in a screening run. Grandparent couples are
/// never combined with each other or with the parents.
pub const COUPLES: [(FamilyRole, FamilyRole); 3] = [
    (FamilyRole::Father, FamilyRole::Mother),
    (FamilyRole::PaternalGrandfather, FamilyRole::PaternalGrandmother),
    (FamilyRole::MaternalGrandfather, FamilyRole::MaternalGrandmother),
];

/// Enumerates the 2x2 cross of two genotype codes.
///
/// Codes must hold exactly two alleles; their characters are not validated,
/// so an indeterminate `?` allele flows into the square.
pub fn punnett(parent1: &str, parent2: &str) -> Result<PunnettSquare, ScreenError> {
    for code in [parent1, parent2] {
        if code.chars().count() != 2 {
            return Err(ScreenError::InvalidGenotype(code.to_string()));
        }
    }

    Ok(parent1
        .chars()
        .cartesian_product(parent2.chars())
        .map(|(allele1, allele2)| format!("{}{}", allele1, allele2))
        .collect())
}

/// Genotype code of one member inside an encoded result string: the calls
/// for the original and complement strands, in that order.
pub fn member_code(results: &str, role: FamilyRole) -> &str {
    let start = 2 * role.index();
    results.get(start..start + 2).unwrap_or("")
}

/// Slices an encoded result string into per-member genotype codes and
/// crosses the three couples.
pub fn couple_squares(results: &str) -> Result<Vec<PunnettSquare>, ScreenError> {
    COUPLES
        .iter()
        .map(|(parent1, parent2)| {
            punnett(member_code(results, *parent1), member_code(results, *parent2))
        })
        .collect()
}
