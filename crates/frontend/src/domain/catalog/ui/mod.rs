pub mod browser;
pub mod details;
