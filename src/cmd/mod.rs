pub mod decrypt;
pub mod search;
