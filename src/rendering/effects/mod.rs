pub mod celebration;
pub mod particles;
