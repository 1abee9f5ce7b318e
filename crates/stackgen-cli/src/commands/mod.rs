//! Command handlers. Each translates parsed arguments into calls on the
//! core and renders the result; no business logic lives here.

pub mod completions;
pub mod create;
pub mod init;
