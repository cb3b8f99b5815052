pub mod direction;
pub mod fold;
pub mod point;
pub mod sequence;
