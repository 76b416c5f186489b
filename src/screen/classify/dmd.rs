use super::Call;
use crate::screen::sequence::normalize;

const STOP_CODONS: [&[u8]; 3] = [b"TGA", b"TAG", b"TAA"];
const DELETION_MARKER: &str = "---";

/// Scans for the three dystrophy mutation signatures: a premature stop codon
/// in the reading frame anchored at offset 0, a three-base deletion gap, or
/// an insertion marker. Any one of them is sufficient for a Positive call.
pub fn classify(sequence: &str) -> Call {
    let cleaned = normalize(sequence);

    // A trailing partial codon never forms a stop.
    for codon in cleaned.as_bytes().chunks_exact(3) {
        if STOP_CODONS.contains(&codon) {
            return Call::Positive;
        }
    }

    if cleaned.contains(DELETION_MARKER) {
        return Call::Positive;
    }

    if cleaned.contains('+') {
        return Call::Positive;
    }

    Call::Negative
}
