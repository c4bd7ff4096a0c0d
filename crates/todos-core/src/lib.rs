pub mod config;
pub mod encoding;
pub mod error;
pub mod logging;
pub mod output;
pub mod scan;
pub mod site;
pub mod version;
