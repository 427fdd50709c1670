pub mod calculator;
pub mod logic;
pub mod policy;
pub mod summary;
