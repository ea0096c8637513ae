//! Layout components for the ruleIQ shell.

mod page_header;
mod shell;

pub use page_header::PageHeader;
pub use shell::Shell;
