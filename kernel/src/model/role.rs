use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    Staff,
    Union,
    Student,
}

impl Role {
    /// Display label used by the account listing.
    pub fn label(self) -> &'static str {
        match self {
            Role::Staff => "Academic Staff",
            Role::Union => "Faculty Union Member",
            Role::Student => "Student",
        }
    }
}
