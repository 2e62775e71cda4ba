//! Tests for error formatting and source chaining

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use subtiling::TilingError;
    use subtiling::io::error::{configuration_error, invalid_parameter};

    // Tests display messages for the configuration variants
    // Verified by dropping the index from the palette message
    #[test]
    fn test_display_messages() {
        let palette = TilingError::UnknownPalette {
            index: 6,
            available: 4,
        };
        assert_eq!(
            palette.to_string(),
            "Unknown color palette index 6 (expected 0..4)"
        );

        let parameter = invalid_parameter("threshold", &12, &"must be between 0 and 10");
        assert_eq!(
            parameter.to_string(),
            "Invalid parameter 'threshold' = '12': must be between 0 and 10"
        );

        let conflict = configuration_error(&"pick one");
        assert_eq!(conflict.to_string(), "Invalid configuration: pick one");

        let color = TilingError::InvalidColor {
            value: "xyz".to_string(),
        };
        assert!(color.to_string().contains("'xyz'"));

        let table = TilingError::InvalidRepartition {
            counts: vec![1, 2],
            reason: "too short".to_string(),
        };
        assert!(table.to_string().contains("[1, 2]"));
    }

    // Tests that file system errors expose their I/O source
    // Verified by returning None from source()
    #[test]
    fn test_file_system_source() {
        let error = TilingError::FileSystem {
            path: PathBuf::from("out/tiling.svg"),
            operation: "create output file",
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("create output file"));
        assert!(error.to_string().contains("out/tiling.svg"));
        assert!(configuration_error(&"x").source().is_none());
    }

    // Tests conversion from a bare I/O error
    // Verified by mapping to a configuration error
    #[test]
    fn test_from_io_error() {
        let error: TilingError = std::io::Error::other("disk full").into();
        assert!(matches!(error, TilingError::FileSystem { operation: "unknown", .. }));
    }
}
