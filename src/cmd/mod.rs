pub mod analyze;
pub mod encrypt;
