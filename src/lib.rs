//! Voter record entry and roll browsing.
//!
//! Two independent components over the same domain entity:
//!
//! * [`form::VoterForm`]: data-entry state with a per-keystroke input
//!   policy and submission-time validation, producing normalized
//!   [`model::VoterRecord`]s for a caller-supplied callback.
//! * [`roll::RollView`]: free-text search plus fixed-size pagination over
//!   a read-only, in-memory slice of records.
//!
//! The two never call each other: the form hands records to its caller, and
//! the roll view renders whatever collection it is given.

pub mod error;
pub mod form;
pub mod model;
pub mod roll;

pub use error::{Error, Result};
