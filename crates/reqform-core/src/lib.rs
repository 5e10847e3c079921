pub mod config;
pub mod logging;

pub mod calculator;
pub mod probe;
pub mod rules;
