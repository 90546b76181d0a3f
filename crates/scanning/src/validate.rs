use once_cell::sync::Lazy;
use regex::Regex;

use tradewind_core::{WorkflowError, WorkflowResult};

/// What a scan is for; each purpose has its own format rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanPurpose {
    /// Product lookup: numeric product codes or internal SKU barcodes.
    Product,
    /// Free location scanning: short shelf codes.
    Location,
    /// Destination capture inside the shelf-move workflow; stricter than
    /// free location scanning.
    LocationMove,
}

impl ScanPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanPurpose::Product => "product",
            ScanPurpose::Location => "location",
            ScanPurpose::LocationMove => "location-move",
        }
    }
}

static PRODUCT_NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{8,13}$").unwrap());
static PRODUCT_SKU: Lazy<Regex> = Lazy::new(|| Regex::new(r"^TWD-\d{8}-\d{5}$").unwrap());
static LOCATION_SHORT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Z]-\d{2}|[A-Z]\d{2})$").unwrap());
static LOCATION_MOVE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]-\d+-\d+$").unwrap());

/// Minimum length for a move-capture code (`A-1-5` is the shortest valid).
const LOCATION_MOVE_MIN_LEN: usize = 5;

/// Check a scanned payload against the rule for its purpose.
pub fn validate_scan(purpose: ScanPurpose, raw: &str) -> WorkflowResult<()> {
    let ok = match purpose {
        ScanPurpose::Product => PRODUCT_NUMERIC.is_match(raw) || PRODUCT_SKU.is_match(raw),
        ScanPurpose::Location => LOCATION_SHORT.is_match(raw),
        ScanPurpose::LocationMove => {
            raw.len() >= LOCATION_MOVE_MIN_LEN && LOCATION_MOVE.is_match(raw)
        }
    };

    if ok {
        Ok(())
    } else {
        Err(WorkflowError::validation(format!(
            "scanned value {raw:?} does not match the {} format",
            purpose.as_str()
        )))
    }
}

/// True when `raw` is a complete move-capture code.
pub fn matches_move_capture(raw: &str) -> bool {
    validate_scan(ScanPurpose::LocationMove, raw).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_digit_product_code_is_accepted() {
        assert!(validate_scan(ScanPurpose::Product, "12345678").is_ok());
        assert!(validate_scan(ScanPurpose::Product, "1234567890123").is_ok());
    }

    #[test]
    fn short_or_long_numeric_codes_are_rejected() {
        assert!(validate_scan(ScanPurpose::Product, "1234567").is_err());
        assert!(validate_scan(ScanPurpose::Product, "12345678901234").is_err());
    }

    #[test]
    fn internal_sku_barcode_is_accepted_regardless_of_the_numeric_rule() {
        assert!(validate_scan(ScanPurpose::Product, "TWD-20240101-00012").is_ok());
        // Wrong segment widths fail.
        assert!(validate_scan(ScanPurpose::Product, "TWD-2024-00012").is_err());
        assert!(validate_scan(ScanPurpose::Product, "TWD-20240101-012").is_err());
    }

    #[test]
    fn short_shelf_codes_are_accepted_for_location() {
        assert!(validate_scan(ScanPurpose::Location, "A-01").is_ok());
        assert!(validate_scan(ScanPurpose::Location, "B12").is_ok());
        assert!(validate_scan(ScanPurpose::Location, "a-01").is_err());
        assert!(validate_scan(ScanPurpose::Location, "A-1").is_err());
        assert!(validate_scan(ScanPurpose::Location, "A-123").is_err());
    }

    #[test]
    fn move_capture_needs_three_segments_and_minimum_length() {
        assert!(validate_scan(ScanPurpose::LocationMove, "A-1-5").is_ok());
        assert!(validate_scan(ScanPurpose::LocationMove, "B-12-34").is_ok());
        assert!(validate_scan(ScanPurpose::LocationMove, "A-01").is_err());
        assert!(validate_scan(ScanPurpose::LocationMove, "A-1-").is_err());
        assert!(validate_scan(ScanPurpose::LocationMove, "AB-1-5").is_err());
    }

    #[test]
    fn rejection_is_a_validation_error_naming_the_purpose() {
        let err = validate_scan(ScanPurpose::Product, "xyz").unwrap_err();
        match err {
            WorkflowError::Validation(msg) => assert!(msg.contains("product")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
