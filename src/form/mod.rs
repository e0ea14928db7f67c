//! The voter entry form: raw field state, the per-keystroke edit policy,
//! and submission-time validation.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::model::{Gender, VoterRecord};

/// The form's fields, in display order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    SerialNo,
    Name,
    GuardianName,
    OldWardHouseNo,
    HouseName,
    Gender,
    Age,
    IdCardNo,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::SerialNo,
        Field::Name,
        Field::GuardianName,
        Field::OldWardHouseNo,
        Field::HouseName,
        Field::Gender,
        Field::Age,
        Field::IdCardNo,
    ];

    /// The field's key in the record's JSON representation.
    pub fn name(self) -> &'static str {
        match self {
            Field::SerialNo => "serialNo",
            Field::Name => "name",
            Field::GuardianName => "guardianName",
            Field::OldWardHouseNo => "oldWardHouseNo",
            Field::HouseName => "houseName",
            Field::Gender => "gender",
            Field::Age => "age",
            Field::IdCardNo => "idCardNo",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Field-level validation messages, keyed by the offending field.
/// Validation outcomes are always data; nothing here is ever thrown.
pub type FieldErrors = BTreeMap<Field, &'static str>;

/// Entry-form state: the raw string value of every field plus the errors
/// from the most recent failed submission.
///
/// This is ordinary component-local state. The form never touches the roll;
/// a successful submission hands the normalized record to the caller's
/// callback and what happens to it after that is the caller's business.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VoterForm {
    serial_no: String,
    name: String,
    guardian_name: String,
    old_ward_house_no: String,
    house_name: String,
    gender: String,
    age: String,
    id_card_no: String,
    #[serde(skip)]
    errors: FieldErrors,
}

impl VoterForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one edit to a field, enforcing the live input policy:
    /// `SerialNo` only ever holds digits, `Age` at most three digits.
    /// A rejected edit leaves the field (and its error) untouched.
    /// Returns whether the edit was accepted.
    pub fn set_field(&mut self, field: Field, value: &str) -> bool {
        let accepted = match field {
            Field::SerialNo => value.chars().all(|c| c.is_ascii_digit()),
            Field::Age => value.len() <= 3 && value.chars().all(|c| c.is_ascii_digit()),
            _ => true,
        };
        if !accepted {
            return false;
        }
        *self.field_mut(field) = value.to_string();
        // An accepted edit supersedes the field's displayed error.
        self.errors.remove(&field);
        true
    }

    /// The current raw value of a field.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::SerialNo => &self.serial_no,
            Field::Name => &self.name,
            Field::GuardianName => &self.guardian_name,
            Field::OldWardHouseNo => &self.old_ward_house_no,
            Field::HouseName => &self.house_name,
            Field::Gender => &self.gender,
            Field::Age => &self.age,
            Field::IdCardNo => &self.id_card_no,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::SerialNo => &mut self.serial_no,
            Field::Name => &mut self.name,
            Field::GuardianName => &mut self.guardian_name,
            Field::OldWardHouseNo => &mut self.old_ward_house_no,
            Field::HouseName => &mut self.house_name,
            Field::Gender => &mut self.gender,
            Field::Age => &mut self.age,
            Field::IdCardNo => &mut self.id_card_no,
        }
    }

    /// Errors from the most recent failed submission.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Check every field and either build the normalized record or report
    /// every failing field at once. Does not modify the form.
    pub fn validate(&self) -> Result<VoterRecord, FieldErrors> {
        let mut errors = FieldErrors::new();

        let serial_no = if self.serial_no.is_empty() {
            errors.insert(Field::SerialNo, "Serial No is required");
            None
        } else {
            match self.serial_no.parse::<u64>() {
                Ok(n) => Some(n),
                Err(_) => {
                    errors.insert(Field::SerialNo, "Serial No must be a number");
                    None
                }
            }
        };

        if self.name.trim().is_empty() {
            errors.insert(Field::Name, "Name is required");
        }
        if self.guardian_name.trim().is_empty() {
            errors.insert(Field::GuardianName, "Guardian's Name is required");
        }
        if self.old_ward_house_no.trim().is_empty() {
            errors.insert(Field::OldWardHouseNo, "Old Ward No / House No is required");
        }
        if self.house_name.trim().is_empty() {
            errors.insert(Field::HouseName, "House Name is required");
        }

        let gender = if self.gender.is_empty() {
            errors.insert(Field::Gender, "Gender is required");
            None
        } else {
            match self.gender.parse::<Gender>() {
                Ok(gender) => Some(gender),
                Err(_) => {
                    errors.insert(
                        Field::Gender,
                        "Gender must be Male, Female, Other, or Prefer not to say",
                    );
                    None
                }
            }
        };

        let age = if self.age.is_empty() {
            errors.insert(Field::Age, "Age is required");
            None
        } else {
            match self.age.parse::<u16>() {
                Ok(n) if n <= 130 => Some(n as u8),
                _ => {
                    errors.insert(Field::Age, "Age must be between 0 and 130");
                    None
                }
            }
        };

        if self.id_card_no.trim().is_empty() {
            errors.insert(Field::IdCardNo, "ID Card No is required");
        }

        match (serial_no, gender, age) {
            (Some(serial_no), Some(gender), Some(age)) if errors.is_empty() => Ok(VoterRecord {
                serial_no,
                name: self.name.trim().to_string(),
                guardian_name: self.guardian_name.trim().to_string(),
                old_ward_house_no: self.old_ward_house_no.trim().to_string(),
                house_name: self.house_name.trim().to_string(),
                gender,
                age,
                id_card_no: self.id_card_no.trim().to_string(),
            }),
            _ => Err(errors),
        }
    }

    /// Validate and, on success, hand the normalized record to `on_submit`
    /// and reset the form. On failure the callback never fires; the fields
    /// keep their values and the errors are retained for display.
    /// Returns whether the submission succeeded.
    pub fn submit<F: FnOnce(VoterRecord)>(&mut self, on_submit: F) -> bool {
        match self.validate() {
            Ok(record) => {
                debug!("Accepted submission for serial no {}", record.serial_no);
                on_submit(record);
                self.reset();
                true
            }
            Err(errors) => {
                debug!("Rejected submission: {} field error(s)", errors.len());
                self.errors = errors;
                false
            }
        }
    }

    /// Clear every field and every error. No validation runs.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl VoterForm {
        /// A fully valid filled-in form, with the untrimmed whitespace a
        /// real user leaves behind.
        pub fn filled_example() -> Self {
            Self {
                serial_no: "1".to_string(),
                name: "  Anita Kumari ".to_string(),
                guardian_name: "Ramesh Kumar".to_string(),
                old_ward_house_no: " 12/4".to_string(),
                house_name: "Lakshmi Nivas ".to_string(),
                gender: "Female".to_string(),
                age: "34".to_string(),
                id_card_no: " ABC1234567 ".to_string(),
                errors: FieldErrors::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_fails_with_an_error_per_field() {
        let errors = VoterForm::new().validate().unwrap_err();
        assert_eq!(errors.len(), Field::ALL.len());
        assert_eq!(errors[&Field::SerialNo], "Serial No is required");
        assert_eq!(errors[&Field::Name], "Name is required");
        assert_eq!(errors[&Field::GuardianName], "Guardian's Name is required");
        assert_eq!(
            errors[&Field::OldWardHouseNo],
            "Old Ward No / House No is required"
        );
        assert_eq!(errors[&Field::HouseName], "House Name is required");
        assert_eq!(errors[&Field::Gender], "Gender is required");
        assert_eq!(errors[&Field::Age], "Age is required");
        assert_eq!(errors[&Field::IdCardNo], "ID Card No is required");
    }

    #[test]
    fn whitespace_only_text_counts_as_empty() {
        let mut form = VoterForm::filled_example();
        assert!(form.set_field(Field::Name, "   "));
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&Field::Name], "Name is required");
    }

    #[test]
    fn only_the_empty_fields_get_errors() {
        let mut form = VoterForm::filled_example();
        assert!(form.set_field(Field::GuardianName, ""));
        assert!(form.set_field(Field::IdCardNo, ""));
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains_key(&Field::GuardianName));
        assert!(errors.contains_key(&Field::IdCardNo));
    }

    #[test]
    fn age_outside_range_gets_the_range_error() {
        let mut form = VoterForm::filled_example();
        assert!(form.set_field(Field::Age, "131"));
        let errors = form.validate().unwrap_err();
        assert_eq!(errors[&Field::Age], "Age must be between 0 and 130");

        // The bounds themselves are valid.
        for age in ["0", "130"] {
            assert!(form.set_field(Field::Age, age));
            assert!(form.validate().is_ok());
        }
    }

    #[test]
    fn serial_no_edits_reject_non_digits() {
        let mut form = VoterForm::new();
        assert!(form.set_field(Field::SerialNo, "42"));
        assert!(!form.set_field(Field::SerialNo, "42a"));
        assert!(!form.set_field(Field::SerialNo, "-1"));
        assert_eq!(form.field(Field::SerialNo), "42");
    }

    #[test]
    fn age_edits_reject_non_digits_and_long_input() {
        let mut form = VoterForm::new();
        assert!(form.set_field(Field::Age, "130"));
        assert!(!form.set_field(Field::Age, "1304"));
        assert!(!form.set_field(Field::Age, "13y"));
        assert_eq!(form.field(Field::Age), "130");
    }

    #[test]
    fn free_text_fields_accept_anything() {
        let mut form = VoterForm::new();
        assert!(form.set_field(Field::Name, "Mary-Jane O'Neill (Jr.)"));
        assert_eq!(form.field(Field::Name), "Mary-Jane O'Neill (Jr.)");
    }

    #[test]
    fn successful_submit_normalises_fires_once_and_resets() {
        let mut form = VoterForm::filled_example();
        let mut submitted = Vec::new();
        assert!(form.submit(|record| submitted.push(record)));

        assert_eq!(submitted.len(), 1);
        let record = &submitted[0];
        assert_eq!(record.serial_no, 1);
        assert_eq!(record.name, "Anita Kumari");
        assert_eq!(record.old_ward_house_no, "12/4");
        assert_eq!(record.house_name, "Lakshmi Nivas");
        assert_eq!(record.gender, crate::model::Gender::Female);
        assert_eq!(record.age, 34);
        assert_eq!(record.id_card_no, "ABC1234567");

        // Back to the empty initial state, with no errors.
        assert_eq!(form, VoterForm::new());
    }

    #[test]
    fn failed_submit_keeps_fields_and_errors_and_never_calls_back() {
        let mut form = VoterForm::filled_example();
        assert!(form.set_field(Field::Name, ""));

        let mut called = false;
        assert!(!form.submit(|_| called = true));
        assert!(!called);

        assert_eq!(form.field(Field::SerialNo), "1");
        assert_eq!(form.error(Field::Name), Some("Name is required"));

        // Editing the offending field clears its error; others persist.
        assert!(form.set_field(Field::IdCardNo, ""));
        assert!(!form.submit(|_| called = true));
        assert!(form.set_field(Field::IdCardNo, "DEF555"));
        assert_eq!(form.error(Field::IdCardNo), None);
        assert_eq!(form.error(Field::Name), Some("Name is required"));
    }

    #[test]
    fn reset_clears_fields_and_errors_unconditionally() {
        let mut form = VoterForm::filled_example();
        assert!(form.set_field(Field::Age, ""));
        let _ = form.submit(|_| {});
        assert!(!form.errors().is_empty());

        form.reset();
        assert_eq!(form, VoterForm::new());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn raw_form_deserialises_from_camel_case_json() {
        let form: VoterForm = serde_json::from_str(
            r#"{
                "serialNo": "7",
                "name": "Suresh Babu",
                "guardianName": "Krishnan Nair",
                "oldWardHouseNo": "7/19",
                "houseName": "Puthen Veedu",
                "gender": "Male",
                "age": "61",
                "idCardNo": "XYZ9876543"
            }"#,
        )
        .unwrap();
        let record = form.validate().unwrap();
        assert_eq!(record.serial_no, 7);
        assert_eq!(record.age, 61);
    }

    #[test]
    fn missing_json_keys_default_to_empty_fields() {
        let form: VoterForm = serde_json::from_str(r#"{"name": "Suresh Babu"}"#).unwrap();
        let errors = form.validate().unwrap_err();
        assert!(!errors.contains_key(&Field::Name));
        assert!(errors.contains_key(&Field::SerialNo));
    }
}
