/// Returns the reverse complement of a nucleotide sequence.
///
/// Bases pair A-T and C-G; any other character (lowercase letters, gap and
/// insertion markers, whitespace) is carried through unchanged at its read
/// position before the reversal.
pub fn reverse_complement(sequence: &str) -> String {
    sequence.chars().rev().map(complement_base).collect()
}

fn complement_base(base: char) -> char {
    match base {
        'A' => 'T',
        'T' => 'A',
        'C' => 'G',
        'G' => 'C',
        other => other,
    }
}

/// Uppercases a sequence and strips ASCII spaces. Gap and insertion markers
/// are kept in place.
pub fn normalize(sequence: &str) -> String {
    sequence
        .chars()
        .filter(|base| *base != ' ')
        .map(|base| base.to_ascii_uppercase())
        .collect()
}
