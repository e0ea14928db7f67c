mod voter_core;

pub use voter_core::{Gender, ParseGenderError, VoterRecord};
