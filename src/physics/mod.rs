pub mod rapier;
pub mod sync;
