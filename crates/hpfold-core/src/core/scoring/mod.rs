pub mod contact;
pub mod score;

pub use score::{Evaluation, NOT_EVALUABLE, Score};
