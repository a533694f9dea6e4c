//! Field-level validation for listing writes

use rust_decimal::Decimal;

use crate::error::{CoreError, FieldError};
use crate::listing::{ListingDraft, ListingPatch};

/// Maximum length of a listing title, in characters
pub const MAX_TITLE_LEN: usize = 200;
/// Maximum length of a listing location, in characters
pub const MAX_LOCATION_LEN: usize = 100;
/// Maximum total digits in a price
pub const PRICE_MAX_DIGITS: u32 = 10;
/// Maximum fractional digits in a price
pub const PRICE_SCALE: u32 = 2;

impl ListingDraft {
    /// Validate all writable fields, collecting every failure
    ///
    /// # Errors
    /// Returns `CoreError::Validation` listing each offending field.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut errors = Vec::new();
        check_title(&self.title, &mut errors);
        check_location(&self.location, &mut errors);
        check_price(self.price, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(errors))
        }
    }
}

impl ListingPatch {
    /// Validate the fields present in the patch
    ///
    /// An empty patch is itself a validation error: a PATCH that changes
    /// nothing is almost always a client bug.
    ///
    /// # Errors
    /// Returns `CoreError::Validation` listing each offending field.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.is_empty() {
            return Err(CoreError::Validation(vec![FieldError::new(
                "body",
                "at least one field must be provided",
            )]));
        }
        let mut errors = Vec::new();
        if let Some(title) = &self.title {
            check_title(title, &mut errors);
        }
        if let Some(location) = &self.location {
            check_location(location, &mut errors);
        }
        if let Some(price) = self.price {
            check_price(price, &mut errors);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(errors))
        }
    }
}

fn check_title(title: &str, errors: &mut Vec<FieldError>) {
    if title.trim().is_empty() {
        errors.push(FieldError::new("title", "must not be empty"));
    } else if title.chars().count() > MAX_TITLE_LEN {
        errors.push(FieldError::new(
            "title",
            format!("must be at most {MAX_TITLE_LEN} characters"),
        ));
    }
}

fn check_location(location: &str, errors: &mut Vec<FieldError>) {
    if location.trim().is_empty() {
        errors.push(FieldError::new("location", "must not be empty"));
    } else if location.chars().count() > MAX_LOCATION_LEN {
        errors.push(FieldError::new(
            "location",
            format!("must be at most {MAX_LOCATION_LEN} characters"),
        ));
    }
}

fn check_price(price: Decimal, errors: &mut Vec<FieldError>) {
    if price.is_sign_negative() {
        errors.push(FieldError::new("price", "must not be negative"));
        return;
    }
    let normalized = price.normalize();
    if normalized.scale() > PRICE_SCALE {
        errors.push(FieldError::new(
            "price",
            format!("must have at most {PRICE_SCALE} decimal places"),
        ));
    }
    // NUMERIC(10, 2) leaves 8 integer digits
    let integer_digit_limit = Decimal::from(10_i64.pow(PRICE_MAX_DIGITS - PRICE_SCALE));
    if normalized.trunc() >= integer_digit_limit {
        errors.push(FieldError::new(
            "price",
            format!("must have at most {PRICE_MAX_DIGITS} digits"),
        ));
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::listing::ListingStatus;

    fn draft() -> ListingDraft {
        ListingDraft {
            title: "Lakeside cabin".to_string(),
            description: "Two bedrooms on the north shore".to_string(),
            location: "Duluth, MN".to_string(),
            price: Decimal::new(12_550, 2),
            status: ListingStatus::Pending,
        }
    }

    fn field_names(err: CoreError) -> Vec<String> {
        match err {
            CoreError::Validation(fields) => fields.into_iter().map(|f| f.field).collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut d = draft();
        d.title = "   ".to_string();
        assert_eq!(field_names(d.validate().unwrap_err()), vec!["title"]);
    }

    #[test]
    fn overlong_title_is_rejected() {
        let mut d = draft();
        d.title = "x".repeat(MAX_TITLE_LEN + 1);
        assert_eq!(field_names(d.validate().unwrap_err()), vec!["title"]);
    }

    #[test]
    fn title_at_limit_passes() {
        let mut d = draft();
        d.title = "x".repeat(MAX_TITLE_LEN);
        assert!(d.validate().is_ok());
    }

    #[test]
    fn overlong_location_is_rejected() {
        let mut d = draft();
        d.location = "x".repeat(MAX_LOCATION_LEN + 1);
        assert_eq!(field_names(d.validate().unwrap_err()), vec!["location"]);
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut d = draft();
        d.price = Decimal::new(-100, 2);
        assert_eq!(field_names(d.validate().unwrap_err()), vec!["price"]);
    }

    #[test]
    fn price_with_three_decimal_places_is_rejected() {
        let mut d = draft();
        d.price = Decimal::new(12_345, 3);
        assert_eq!(field_names(d.validate().unwrap_err()), vec!["price"]);
    }

    #[test]
    fn trailing_zero_scale_is_tolerated() {
        let mut d = draft();
        // 125.500 normalizes to 125.5
        d.price = Decimal::new(125_500, 3);
        assert!(d.validate().is_ok());
    }

    #[test]
    fn price_over_ten_digits_is_rejected() {
        let mut d = draft();
        d.price = Decimal::from(100_000_000_u64);
        assert_eq!(field_names(d.validate().unwrap_err()), vec!["price"]);
    }

    #[test]
    fn price_at_digit_limit_passes() {
        let mut d = draft();
        d.price = Decimal::new(9_999_999_999, 2);
        assert!(d.validate().is_ok());
    }

    #[test]
    fn multiple_failures_are_collected() {
        let mut d = draft();
        d.title = String::new();
        d.location = String::new();
        d.price = Decimal::new(-1, 0);
        assert_eq!(
            field_names(d.validate().unwrap_err()),
            vec!["title", "location", "price"]
        );
    }

    #[test]
    fn empty_patch_is_rejected() {
        let err = ListingPatch::default().validate().unwrap_err();
        assert_eq!(field_names(err), vec!["body"]);
    }

    #[test]
    fn patch_validates_present_fields_only() {
        let patch = ListingPatch {
            price: Some(Decimal::new(9_900, 2)),
            ..Default::default()
        };
        assert!(patch.validate().is_ok());

        let patch = ListingPatch {
            title: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(field_names(patch.validate().unwrap_err()), vec!["title"]);
    }
}
