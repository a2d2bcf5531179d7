pub mod athlete;
pub mod club;
pub mod coach;
pub mod enums;
pub mod round;
pub mod tournament;
pub mod weight_category;

pub use athlete::Athlete;
pub use club::Club;
pub use coach::Coach;
pub use enums::{BeltRank, Gender, KarateStyle, TournamentKind};
pub use round::Round;
pub use tournament::Tournament;
pub use weight_category::WeightCategory;
