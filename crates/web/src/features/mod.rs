pub mod athletes;
pub mod categories;
pub mod clubs;
pub mod rounds;
pub mod tournaments;
