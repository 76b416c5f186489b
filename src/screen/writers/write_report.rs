use crate::screen::classify::Disease;
use crate::screen::family::FAMILY_ROLES;
use crate::screen::punnett::{member_code, PunnettSquare, COUPLES};
use crate::utils::Result;
use std::io::Write;

/// Writes the screening report: the encoded result string, each member's
/// genotype code, and the three couple Punnett squares.
pub fn write_report<W: Write>(
    out: &mut W,
    disease: Disease,
    results: &str,
    squares: &[PunnettSquare],
) -> Result<()> {
    out.write_all(render(disease, results, squares).as_bytes())
        .map_err(|e| format!("Failed to write report: {}", e))
}

fn render(disease: Disease, results: &str, squares: &[PunnettSquare]) -> String {
    let mut report = String::new();
    report.push_str(&format!("Disease: {}\n", disease.name()));
    report.push_str(&format!("Results: {}\n", results));

    report.push_str("\nGenotypes:\n");
    for role in FAMILY_ROLES {
        report.push_str(&format!("  {}: {}\n", role.label(), member_code(results, role)));
    }

    for ((parent1, parent2), square) in COUPLES.iter().zip(squares) {
        report.push_str(&format!(
            "\nPunnett Square for {} and {}:\n",
            parent1.label(),
            parent2.label()
        ));
        for row in square.chunks(2) {
            report.push_str(&format!("  {}\n", row.join("\t")));
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::punnett::couple_squares;

    #[test]
    fn report_lists_genotypes_and_squares() {
        let results = "010011100111";
        let squares = couple_squares(results).unwrap();
        let mut out = Vec::new();
        write_report(&mut out, Disease::MuscularDystrophy, results, &squares).unwrap();

        let report = String::from_utf8(out).unwrap();
        assert!(report.contains("Disease: Muscular Dystrophy"));
        assert!(report.contains("Results: 010011100111"));
        assert!(report.contains("  Father: 01"));
        assert!(report.contains("  Maternal Grandmother: 11"));
        assert!(report.contains("Punnett Square for Father and Mother:"));
        assert!(report.contains("Punnett Square for Paternal Grandfather and Paternal Grandmother:"));
        assert!(report.contains("  00\t00\n  10\t10\n"));
    }

    #[test]
    fn squares_are_laid_out_two_by_two() {
        let squares = couple_squares("?00000000000").unwrap();
        let mut out = Vec::new();
        write_report(&mut out, Disease::Huntington, "?00000000000", &squares).unwrap();

        let report = String::from_utf8(out).unwrap();
        assert!(report.contains("  Father: ?0"));
        assert!(report.contains("  ?0\t?0\n  00\t00\n"));
    }
}
