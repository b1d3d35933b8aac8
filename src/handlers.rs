pub mod fred;
pub mod health;
pub mod indicators;
