use crate::screen::error::ScreenError;
use std::fmt;
use std::str::FromStr;

pub mod dmd;
pub mod huntington;
pub mod sickle;

/// Outcome of one classifier call on one strand variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Negative,
    Positive,
    /// Borderline outcome; only the Huntingtin classifier produces it.
    Indeterminate,
}

impl Call {
    /// Symbol used in the encoded result string: `0` for Negative, `1` for
    /// Positive, and `?` for calls on the intermediate-allele boundary.
    pub fn symbol(&self) -> char {
        match self {
            Call::Negative => '0',
            Call::Positive => '1',
            Call::Indeterminate => '?',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disease {
    Huntington,
    SickleCell,
    MuscularDystrophy,
    /// Placeholder category; accepted on the command line but not screenable.
    Other,
}

impl Disease {
    pub fn name(&self) -> &'static str {
        match self {
            Disease::Huntington => "Huntington's Disease",
            Disease::SickleCell => "Sickle Cell Anemia",
            Disease::MuscularDystrophy => "Muscular Dystrophy",
            Disease::Other => "Other",
        }
    }

    /// Classifier matching this disease, or an error for the unsupported
    /// placeholder category.
    pub fn classifier(&self) -> Result<fn(&str) -> Call, ScreenError> {
        match self {
            Disease::Huntington => Ok(huntington::classify),
            Disease::SickleCell => Ok(sickle::classify),
            Disease::MuscularDystrophy => Ok(dmd::classify),
            Disease::Other => Err(ScreenError::UnsupportedDisease(self.name().to_string())),
        }
    }
}

impl FromStr for Disease {
    type Err = String;

    fn from_str(disease: &str) -> Result<Self, Self::Err> {
        match disease {
            "huntington" | "Huntington's Disease" => Ok(Disease::Huntington),
            "sickle-cell" | "Sickle Cell Anemia" => Ok(Disease::SickleCell),
            "dmd" | "Muscular Dystrophy" => Ok(Disease::MuscularDystrophy),
            "other" => Ok(Disease::Other),
            _ => Err(format!("Unknown disease: {}", disease)),
        }
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
