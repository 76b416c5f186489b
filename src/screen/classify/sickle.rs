use super::Call;

const START_CODON: &str = "ATG";

/// Offset from the A of the start codon to the sickle variant position (the
/// 17th base, counting the A itself as the first).
const VARIANT_OFFSET: usize = 14;

/// Checks the sickle point mutation downstream of the first start codon.
///
/// Operates on the sequence exactly as given, without case normalization.
/// A missing start codon, or a sequence too short to reach the variant
/// position, is a Negative call.
pub fn classify(sequence: &str) -> Call {
    let start = match sequence.find(START_CODON) {
        Some(index) => index,
        None => return Call::Negative,
    };

    match sequence.as_bytes().get(start + VARIANT_OFFSET) {
        Some(b'T') => Call::Positive,
        _ => Call::Negative,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_base_is_positive() {
        let sequence = format!("ATG{}T", "C".repeat(VARIANT_OFFSET - 3));
        assert_eq!(classify(&sequence), Call::Positive);
    }

    #[test]
    fn wild_type_base_is_negative() {
        let sequence = format!("ATG{}A", "C".repeat(VARIANT_OFFSET - 3));
        assert_eq!(classify(&sequence), Call::Negative);
    }

    #[test]
    fn offset_is_anchored_to_the_first_start_codon() {
        let sequence = format!("CCATG{}T", "G".repeat(VARIANT_OFFSET - 3));
        assert_eq!(classify(&sequence), Call::Positive);
    }

    #[test]
    fn sequence_too_short_is_negative() {
        let sequence = format!("ATG{}", "C".repeat(VARIANT_OFFSET - 3));
        assert_eq!(classify(&sequence), Call::Negative);
    }

    #[test]
    fn missing_start_codon_is_negative() {
        assert_eq!(classify("CCCCCCCCCCCCCCCCCC"), Call::Negative);
        assert_eq!(classify(""), Call::Negative);
    }

    #[test]
    fn lowercase_start_codon_is_not_recognized() {
        let sequence = format!("atg{}T", "C".repeat(VARIANT_OFFSET - 3));
        assert_eq!(classify(&sequence), Call::Negative);
    }
}
