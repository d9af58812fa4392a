pub mod cipher;
pub mod config;
pub mod error;
pub mod key;
pub mod optimizer;
pub mod scorer;
