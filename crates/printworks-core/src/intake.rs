//! # Order Intake
//!
//! The order form exactly as it is submitted: every field a string, possibly
//! missing. [`OrderForm`] is the only place raw input is interpreted.
//!
//! ## Flow
//! ```text
//! POST /orders (urlencoded)            printworks-quote --pages ...
//!         │                                     │
//!         └──────────────┬──────────────────────┘
//!                        ▼
//!                   OrderForm (raw strings)
//!                        │
//!         ┌──────────────┼──────────────────┐
//!         ▼              ▼                  ▼
//!  pricing_input()  customer_details()  into_order()
//!  OrderPricingInput CustomerDetails    PrintOrder (priced)
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::pricing::RateCard;
use crate::types::{BookCover, CustomerDetails, OrderPricingInput, PaperType, PrintOrder};
use crate::validation::{parse_positive_int, validate_customer_details};

// =============================================================================
// Order Form
// =============================================================================

/// Raw order form fields, named as the HTML form names them.
///
/// Missing fields deserialize as empty strings so they fail validation as
/// "required" rather than as a deserialization error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderForm {
    pub name_surname: String,
    pub email: String,
    pub street_address: String,
    pub city: String,
    pub country: String,
    pub book_cover: String,
    pub page_amount: String,
    pub paper_type: String,
    pub book_quantity: String,
}

// =============================================================================
// Form Parsing
// =============================================================================

impl OrderForm {
    /// Parses the four pricing fields.
    ///
    /// Counts must be positive integers; cover and paper never fail (unknown
    /// values mean "no surcharge").
    ///
    /// ## Example
    /// ```rust
    /// use printworks_core::{BookCover, OrderForm};
    ///
    /// let form = OrderForm {
    ///     page_amount: "100".into(),
    ///     book_quantity: "abc".into(),
    ///     book_cover: "hard_cover".into(),
    ///     ..OrderForm::default()
    /// };
    /// assert!(form.pricing_input().is_err());
    /// ```
    pub fn pricing_input(&self) -> CoreResult<OrderPricingInput> {
        let page_amount = parse_positive_int("page_amount", &self.page_amount)?;
        let book_quantity = parse_positive_int("book_quantity", &self.book_quantity)?;

        OrderPricingInput::new(
            i64::from(page_amount),
            i64::from(book_quantity),
            BookCover::from_form_value(&self.book_cover),
            PaperType::from_form_value(&self.paper_type),
        )
    }

    /// Validates and trims the customer/shipping fields.
    pub fn customer_details(&self) -> CoreResult<CustomerDetails> {
        let raw = CustomerDetails {
            name_surname: self.name_surname.clone(),
            email: self.email.clone(),
            street_address: self.street_address.clone(),
            city: self.city.clone(),
            country: self.country.clone(),
        };
        Ok(validate_customer_details(&raw)?)
    }

    /// Validates the whole form and prices it with the standard rate card.
    pub fn into_order(self) -> CoreResult<PrintOrder> {
        self.into_order_with_rates(&RateCard::standard())
    }

    /// Validates the whole form and prices it against `rates`.
    ///
    /// Pricing fields are checked before customer details, so a bad count is
    /// the error reported when both are wrong.
    pub fn into_order_with_rates(self, rates: &RateCard) -> CoreResult<PrintOrder> {
        let pricing = self.pricing_input()?;
        let customer = self.customer_details()?;
        Ok(PrintOrder::place_with_rates(customer, pricing, rates))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};
    use crate::money::Money;

    fn form() -> OrderForm {
        OrderForm {
            name_surname: "Anna Berzina".into(),
            email: "anna@example.com".into(),
            street_address: "Brivibas iela 1".into(),
            city: "Riga".into(),
            country: "Latvia".into(),
            book_cover: "hard_cover".into(),
            page_amount: "100".into(),
            paper_type: "plain".into(),
            book_quantity: "2".into(),
        }
    }

    fn invalid_field(err: CoreError) -> String {
        match err {
            CoreError::InvalidInput(e) => e.field().to_string(),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_pricing_input_from_form() {
        let input = form().pricing_input().unwrap();
        assert_eq!(input.page_amount(), 100);
        assert_eq!(input.book_quantity(), 2);
        assert_eq!(input.book_cover(), BookCover::HardCover);
        assert_eq!(input.paper_type(), PaperType::None);
    }

    #[test]
    fn test_bad_counts_are_invalid_input() {
        for (pages, copies, field) in [
            ("0", "1", "page_amount"),
            ("-5", "1", "page_amount"),
            ("", "1", "page_amount"),
            ("12.5", "1", "page_amount"),
            ("100", "abc", "book_quantity"),
            ("100", "0", "book_quantity"),
            ("100", "", "book_quantity"),
        ] {
            let form = OrderForm {
                page_amount: pages.into(),
                book_quantity: copies.into(),
                ..form()
            };
            let err = form.pricing_input().unwrap_err();
            assert_eq!(invalid_field(err), field, "pages={pages:?} copies={copies:?}");
        }
    }

    #[test]
    fn test_into_order_prices_the_form() {
        let order = form().into_order().unwrap();
        assert_eq!(order.total(), Money::from_major_minor(26, 0));
        assert_eq!(order.customer.email, "anna@example.com");
    }

    #[test]
    fn test_into_order_with_custom_rates() {
        let rates = RateCard::new(
            vec![],
            Money::from_cents(1),
            Money::from_cents(100),
            Money::zero(),
            Money::zero(),
        )
        .unwrap();
        let order = form().into_order_with_rates(&rates).unwrap();
        // 0.01 × 100 × 2 + 1.00 × 2
        assert_eq!(order.total(), Money::from_cents(400));
    }

    #[test]
    fn test_largest_accepted_counts_are_priced() {
        let order = OrderForm {
            page_amount: "4294967295".into(),
            book_quantity: "4294967295".into(),
            book_cover: "none".into(),
            ..form()
        }
        .into_order()
        .unwrap();
        let count = i128::from(u32::MAX);
        assert_eq!(order.total().cents(), 5 * count * count);

        let too_many = OrderForm {
            page_amount: "4294967296".into(),
            ..form()
        };
        assert!(matches!(
            too_many.into_order(),
            Err(CoreError::InvalidInput(ValidationError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_pricing_errors_win_over_customer_errors() {
        let form = OrderForm {
            email: "not-an-email".into(),
            page_amount: "zero".into(),
            ..form()
        };
        assert_eq!(invalid_field(form.into_order().unwrap_err()), "page_amount");
    }

    #[test]
    fn test_customer_errors_are_invalid_input() {
        let form = OrderForm {
            email: "not-an-email".into(),
            ..form()
        };
        let err = form.into_order().unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidInput(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_missing_fields_deserialize_as_required() {
        let form: OrderForm = serde_json::from_str(r#"{"page_amount": "120"}"#).unwrap();
        let err = form.pricing_input().unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidInput(ValidationError::Required { ref field }) if field == "book_quantity"
        ));
    }
}
