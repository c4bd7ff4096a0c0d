//! Version information for the application and its XML file format.

/// Version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version of the XML output format. Bumped independently of the application.
pub const XML_FORMAT_VERSION: &str = "0.1.0";

/// Project homepage, linked from the HTML report and the website logo.
pub const HOMEPAGE: &str = "http://todos.sourceforge.net/";
