pub mod athlete;
pub mod category;
pub mod club;
pub mod round;
pub mod tournament;
