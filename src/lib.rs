pub mod category;
pub mod config;
pub mod error;
pub mod fetch;
pub mod history;
pub mod output;
pub mod parser;
pub mod reading;
pub mod report;
pub mod select;
