pub mod config;
pub mod cstr;
pub mod error;
