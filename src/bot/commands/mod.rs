//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// General utility commands
pub mod general;

/// Receipt recording, browsing and editing commands
pub mod receipt;

/// Home summary and warranty reminder commands
pub mod reminders;

// Export commands
pub use general::*;
pub use receipt::*;
pub use reminders::*;
