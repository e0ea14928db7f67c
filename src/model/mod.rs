pub mod pagination;
pub mod voter;

pub use pagination::{Pagination, PaginationResult, PAGE_SIZE};
pub use voter::{Gender, ParseGenderError, VoterRecord};
