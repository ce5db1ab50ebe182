/// Exit codes for chatmark
///
/// These exit codes let scripts distinguish a lookup that found nothing
/// from a genuine failure.
/// Success - Everything requested was resolved
pub const SUCCESS: i32 = 0;

/// Not resolved - A language, extension or cursor query came back negative
pub const NOT_RESOLVED: i32 = 1;

/// Tool error - Configuration error, file access error, or internal error
pub const TOOL_ERROR: i32 = 2;

/// Helper functions for consistent exit behavior
pub mod exit {
    use super::{NOT_RESOLVED, SUCCESS, TOOL_ERROR};

    /// Exit with success code (0)
    pub fn success() -> ! {
        std::process::exit(SUCCESS);
    }

    /// Exit with not-resolved code (1)
    pub fn not_resolved() -> ! {
        std::process::exit(NOT_RESOLVED);
    }

    /// Exit with tool error code (2)
    pub fn tool_error() -> ! {
        std::process::exit(TOOL_ERROR);
    }
}
