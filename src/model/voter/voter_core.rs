use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single validated voter entry, as displayed in the roll.
///
/// Records are immutable once created: the search pipeline only ever derives
/// filtered views of a record slice, it never mutates one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoterRecord {
    /// Position of the record in the source roll.
    pub serial_no: u64,
    pub name: String,
    pub guardian_name: String,
    /// Old ward number / house number, kept as free text ("12/4" etc.).
    pub old_ward_house_no: String,
    pub house_name: String,
    pub gender: Gender,
    pub age: u8,
    pub id_card_no: String,
}

impl VoterRecord {
    /// The lowercased concatenation of all eight field values in declaration
    /// order, joined with single spaces. Free-text search matches a record
    /// iff the lowercased query is a substring of this.
    pub fn haystack(&self) -> String {
        format!(
            "{} {} {} {} {} {} {} {}",
            self.serial_no,
            self.name,
            self.guardian_name,
            self.old_ward_house_no,
            self.house_name,
            self.gender,
            self.age,
            self.id_card_no,
        )
        .to_lowercase()
    }
}

/// The gender options offered by the entry form.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl Gender {
    /// The exact label shown on (and submitted by) the form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
            Self::PreferNotToSay => "Prefer not to say",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unrecognised gender option: '{0}'")]
pub struct ParseGenderError(String);

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Self::Male),
            "Female" => Ok(Self::Female),
            "Other" => Ok(Self::Other),
            "Prefer not to say" => Ok(Self::PreferNotToSay),
            _ => Err(ParseGenderError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = ParseGenderError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Gender> for String {
    fn from(gender: Gender) -> Self {
        gender.as_str().to_string()
    }
}
