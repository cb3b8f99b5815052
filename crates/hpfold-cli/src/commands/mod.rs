pub mod evaluate;
pub mod evolve;
