use crate::screen::sequence::reverse_complement;

/// Family members in the fixed screening order. The aggregate result string
/// and the run history columns both depend on this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyRole {
    Father,
    Mother,
    PaternalGrandfather,
    PaternalGrandmother,
    MaternalGrandfather,
    MaternalGrandmother,
}

pub const FAMILY_ROLES: [FamilyRole; 6] = [
    FamilyRole::Father,
    FamilyRole::Mother,
    FamilyRole::PaternalGrandfather,
    FamilyRole::PaternalGrandmother,
    FamilyRole::MaternalGrandfather,
    FamilyRole::MaternalGrandmother,
];

impl FamilyRole {
    pub fn label(&self) -> &'static str {
        match self {
            FamilyRole::Father => "Father",
            FamilyRole::Mother => "Mother",
            FamilyRole::PaternalGrandfather => "Paternal Grandfather",
            FamilyRole::PaternalGrandmother => "Paternal Grandmother",
            FamilyRole::MaternalGrandfather => "Maternal Grandfather",
            FamilyRole::MaternalGrandmother => "Maternal Grandmother",
        }
    }

    /// Position in the screening order.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// One member's sequence and its derived complement strand.
#[derive(Debug, Clone)]
pub struct Member {
    pub role: FamilyRole,
    pub sequence: String,
    pub complement: String,
}

/// The six family members of one screening run, complements included.
#[derive(Debug, Clone)]
pub struct Family {
    members: Vec<Member>,
}

impl Family {
    /// Builds a family from the six sequences given in screening order,
    /// deriving each member's complement strand.
    pub fn new(sequences: [String; 6]) -> Self {
        let members = FAMILY_ROLES
            .iter()
            .zip(sequences)
            .map(|(role, sequence)| {
                let complement = reverse_complement(&sequence);
                Member {
                    role: *role,
                    sequence,
                    complement,
                }
            })
            .collect();
        Family { members }
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }
}
