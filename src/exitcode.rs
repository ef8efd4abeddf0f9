//! Exit codes (BSD sysexits.h compatible)

/// Command line usage error, e.g. no corpus given
pub const USAGE: i32 = 64;

/// Corpus file malformed or empty
pub const DATAERR: i32 = 65;

/// Internal software error
pub const SOFTWARE: i32 = 70;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
