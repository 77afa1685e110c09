/// Error code registry for lessonkit
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 3000-3999: Storage errors (reading snapshots from disk)
/// - 7000-7999: Validation errors
/// - 9000-9999: Other errors
#[allow(dead_code)]
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_GENERIC: u16 = 1000;
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_TOML: u16 = 1002;
    pub const CONFIG_INVALID_VALUE: u16 = 1005;

    // Storage errors (3000-3999)
    pub const STORAGE_GENERIC: u16 = 3000;
    pub const STORAGE_IO_ERROR: u16 = 3001;
    pub const STORAGE_PERMISSION_DENIED: u16 = 3002;
    pub const STORAGE_NOT_FOUND: u16 = 3004;

    // Validation errors (7000-7999)
    pub const VALIDATION_GENERIC: u16 = 7000;
    pub const VALIDATION_CONTENT_REQUIRED: u16 = 7001;
    pub const VALIDATION_MEDIA_ID_REQUIRED: u16 = 7002;
    pub const VALIDATION_NO_CORRECT_ANSWER: u16 = 7003;
    pub const VALIDATION_EMPTY_OPTION_TEXT: u16 = 7004;
    pub const VALIDATION_INVALID_INPUT: u16 = 7008;

    // Other errors (9000-9999)
    pub const OTHER_GENERIC: u16 = 9000;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        // Configuration errors
        1000 => "Generic configuration error",
        1001 => "Configuration file not found",
        1002 => "Invalid TOML syntax in configuration",
        1005 => "Invalid value in configuration",

        // Storage errors
        3000 => "Generic storage error",
        3001 => "Storage I/O error",
        3002 => "Storage permission denied",
        3004 => "Storage item not found",

        // Validation errors
        7000 => "Generic validation error",
        7001 => "Lesson content is required",
        7002 => "Lesson media reference is required",
        7003 => "Quiz question has no correct answer",
        7004 => "Quiz option text is empty",
        7008 => "Invalid input",

        // Other errors
        9000 => "Generic error",

        _ => "Unknown error code",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_ranges() {
        assert!(ErrorCode::CONFIG_GENERIC >= 1000 && ErrorCode::CONFIG_GENERIC < 2000);
        assert!(ErrorCode::STORAGE_GENERIC >= 3000 && ErrorCode::STORAGE_GENERIC < 4000);
        assert!(ErrorCode::VALIDATION_GENERIC >= 7000 && ErrorCode::VALIDATION_GENERIC < 8000);
        assert!(ErrorCode::OTHER_GENERIC >= 9000 && ErrorCode::OTHER_GENERIC < 10000);
    }

    #[test]
    fn test_error_code_descriptions() {
        assert_eq!(describe_error_code(1001), "Configuration file not found");
        assert_eq!(describe_error_code(7003), "Quiz question has no correct answer");
        assert_eq!(describe_error_code(65535), "Unknown error code");
    }
}
