pub mod athletes;
pub mod categories;
pub mod eligibility;
pub mod grouping;
pub mod rounds;
pub mod tournaments;
