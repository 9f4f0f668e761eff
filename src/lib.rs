pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod rates;
pub mod zips;
