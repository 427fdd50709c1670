pub mod config;
pub mod dashboard;
pub mod logout;
pub mod setup;
pub mod status;
