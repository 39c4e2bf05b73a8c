//! sutility library exports for testing

pub mod core;
pub mod logging;
pub mod sysinfo;
pub mod tui;

#[cfg(test)]
pub mod test_support;
