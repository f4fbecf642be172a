pub mod alphabet;
pub mod analysis;
pub mod api;
pub mod candidates;
pub mod config;
pub mod error;
pub mod text;
pub mod vigenere;
// cmd and reports are binary modules; they live next to main.rs.
