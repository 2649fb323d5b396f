pub mod config;
pub mod driver;
pub mod report;
pub mod runner;
pub mod stats;
