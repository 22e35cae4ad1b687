//! Tests for the typed error handling system
//!
//! These tests verify that:
//! - Errors carry the expected error codes
//! - Error messages are properly formatted
//! - Error conversions work correctly

use insights::prelude::*;
use std::error::Error;

mod error_code_tests {
    use super::*;

    #[test]
    fn test_invalid_configuration_code() {
        let err = InsightsError::Table(TableError::InvalidConfiguration {
            field: "page_size".to_string(),
            value: "0".to_string(),
            message: "page size must be at least 1".to_string(),
        });
        assert_eq!(err.error_code(), "INVALID_CONFIGURATION");
    }

    #[test]
    fn test_category_codes() {
        let config: InsightsError = ConfigError::FileNotFound {
            path: "table.yaml".to_string(),
        }
        .into();
        let validation: InsightsError = ValidationError::InvalidSortSpec {
            value: ":".to_string(),
            message: "missing field name".to_string(),
        }
        .into();
        let export: InsightsError = ExportError::Io {
            path: "/tmp/x.csv".to_string(),
            message: "denied".to_string(),
        }
        .into();

        assert_eq!(config.error_code(), "CONFIG_ERROR");
        assert_eq!(validation.error_code(), "VALIDATION_ERROR");
        assert_eq!(export.error_code(), "EXPORT_ERROR");
        assert_eq!(
            InsightsError::Internal("boom".to_string()).error_code(),
            "INTERNAL_ERROR"
        );
    }
}

mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_sort_parse_error_converts() {
        fn parse(expr: &str) -> Result<SortSpec, InsightsError> {
            Ok(expr.parse::<SortSpec>()?)
        }

        let err = parse("budget:up").unwrap_err();
        assert!(matches!(
            err,
            InsightsError::Validation(ValidationError::InvalidSortSpec { .. })
        ));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_engine_error_is_matchable() {
        let mut table = TableEngine::new(sample_campaigns());
        match table.set_page_size(0) {
            Err(InsightsError::Table(TableError::InvalidConfiguration { field, value, .. })) => {
                assert_eq!(field, "page_size");
                assert_eq!(value, "0");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_error_works_with_anyhow() {
        fn run() -> anyhow::Result<()> {
            let mut table = TableEngine::new(sample_campaigns());
            table.set_page_size(0)?;
            Ok(())
        }

        let err = run().unwrap_err();
        assert!(err.downcast_ref::<InsightsError>().is_some());
    }
}

mod error_display_tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = InsightsError::Table(TableError::InvalidConfiguration {
            field: "page_size".to_string(),
            value: "0".to_string(),
            message: "page size must be at least 1".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Invalid table configuration 'page_size' = '0': page size must be at least 1"
        );

        let err = ValidationError::InvalidSortSpec {
            value: "x:y".to_string(),
            message: "direction must be 'asc' or 'desc'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid sort expression 'x:y': direction must be 'asc' or 'desc'"
        );
    }
}
