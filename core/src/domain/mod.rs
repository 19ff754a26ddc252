pub mod capture;
pub mod common;
pub mod journal;
pub mod nutrition;
