pub mod duration;
pub mod week;
