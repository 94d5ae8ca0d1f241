pub mod category;
pub mod models;

pub use category::{Category, CategoryFilter, CategoryTable};
pub use models::{Fact, FactId, InvalidFact, NewFact, VoteKind, MAX_TEXT_LEN};
