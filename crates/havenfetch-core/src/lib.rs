pub mod config;
pub mod logging;

pub mod batch;
pub mod catalog;
pub mod downloader;
pub mod resolution;
pub mod scanner;
pub mod url_model;
