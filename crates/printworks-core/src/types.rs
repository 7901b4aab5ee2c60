//! # Domain Types
//!
//! Core domain types used throughout Printworks.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌────────────────────┐   ┌─────────────────┐   ┌─────────────────┐    │
//! │  │ OrderPricingInput  │   │   PriceResult   │   │ CustomerDetails │    │
//! │  │  ────────────────  │   │  ─────────────  │   │  ─────────────  │    │
//! │  │  page_amount  > 0  │──►│  unit_rate      │   │  name_surname   │    │
//! │  │  book_quantity > 0 │   │  base           │   │  email          │    │
//! │  │  book_cover        │   │  cover_surcharge│   │  street_address │    │
//! │  │  paper_type        │   │  paper_surcharge│   │  city, country  │    │
//! │  └────────────────────┘   │  total          │   └─────────────────┘    │
//! │                           └─────────────────┘                           │
//! │                                    │                                    │
//! │                                    ▼                                    │
//! │                           ┌─────────────────┐                           │
//! │                           │   PrintOrder    │                           │
//! │                           │  id, customer,  │                           │
//! │                           │  pricing, price │                           │
//! │                           └─────────────────┘                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreResult;
use crate::money::Money;
use crate::pricing::RateCard;
use crate::validation::validate_positive;

// =============================================================================
// Book Cover
// =============================================================================

/// Binding type of the printed book.
///
/// Intake is permissive: any value other than the two known literals maps
/// to [`BookCover::None`] and carries no surcharge, typos included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BookCover {
    /// `hard_cover` - 6.00 per copy.
    HardCover,
    /// `soft_cover` - 3.00 per copy.
    SoftCover,
    /// Anything else - no cover surcharge.
    #[default]
    None,
}

impl BookCover {
    /// Maps a raw form value by exact match. Never fails.
    ///
    /// ## Example
    /// ```rust
    /// use printworks_core::BookCover;
    ///
    /// assert_eq!(BookCover::from_form_value("hard_cover"), BookCover::HardCover);
    /// assert_eq!(BookCover::from_form_value("Hard_Cover"), BookCover::None);
    /// ```
    pub fn from_form_value(value: &str) -> Self {
        match value {
            "hard_cover" => BookCover::HardCover,
            "soft_cover" => BookCover::SoftCover,
            other => {
                debug!(book_cover = %other, "Unrecognized book cover, no cover surcharge");
                BookCover::None
            }
        }
    }

    /// Wire name, as stored and shown in confirmations.
    pub const fn as_str(&self) -> &'static str {
        match self {
            BookCover::HardCover => "hard_cover",
            BookCover::SoftCover => "soft_cover",
            BookCover::None => "none",
        }
    }
}

impl fmt::Display for BookCover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Paper Type
// =============================================================================

/// Paper stock of the printed book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaperType {
    /// `coated_book_paper` - 0.07 per page, once per order.
    CoatedBookPaper,
    /// Anything else - no paper surcharge.
    #[default]
    None,
}

impl PaperType {
    /// Maps a raw form value by exact match. Never fails.
    pub fn from_form_value(value: &str) -> Self {
        match value {
            "coated_book_paper" => PaperType::CoatedBookPaper,
            other => {
                debug!(paper_type = %other, "Unrecognized paper type, no paper surcharge");
                PaperType::None
            }
        }
    }

    /// Wire name, as stored and shown in confirmations.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PaperType::CoatedBookPaper => "coated_book_paper",
            PaperType::None => "none",
        }
    }
}

impl fmt::Display for PaperType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Order Pricing Input
// =============================================================================

/// The four order attributes the price depends on.
///
/// Fields are private: the only way to get one is through [`OrderPricingInput::new`]
/// (or [`OrderForm`](crate::OrderForm)), which rejects zero and negative counts.
/// Holding an `OrderPricingInput` therefore means both counts are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
pub struct OrderPricingInput {
    page_amount: u32,
    book_quantity: u32,
    book_cover: BookCover,
    paper_type: PaperType,
}

impl OrderPricingInput {
    /// Validates the counts and builds the input.
    ///
    /// ## Errors
    /// [`CoreError::InvalidInput`](crate::CoreError::InvalidInput) if either
    /// count is zero, negative or above `u32::MAX`.
    ///
    /// ## Example
    /// ```rust
    /// use printworks_core::{BookCover, OrderPricingInput, PaperType};
    ///
    /// assert!(OrderPricingInput::new(150, 1, BookCover::SoftCover, PaperType::CoatedBookPaper).is_ok());
    /// assert!(OrderPricingInput::new(0, 1, BookCover::HardCover, PaperType::None).is_err());
    /// assert!(OrderPricingInput::new(-5, 1, BookCover::HardCover, PaperType::None).is_err());
    /// ```
    pub fn new(
        page_amount: i64,
        book_quantity: i64,
        book_cover: BookCover,
        paper_type: PaperType,
    ) -> CoreResult<Self> {
        Ok(OrderPricingInput {
            page_amount: validate_positive("page_amount", page_amount)?,
            book_quantity: validate_positive("book_quantity", book_quantity)?,
            book_cover,
            paper_type,
        })
    }

    /// Pages per book (always > 0).
    #[inline]
    pub const fn page_amount(&self) -> u32 {
        self.page_amount
    }

    /// Number of copies (always > 0).
    #[inline]
    pub const fn book_quantity(&self) -> u32 {
        self.book_quantity
    }

    #[inline]
    pub const fn book_cover(&self) -> BookCover {
        self.book_cover
    }

    #[inline]
    pub const fn paper_type(&self) -> PaperType {
        self.paper_type
    }
}

// =============================================================================
// Price Result
// =============================================================================

/// The computed price of an order, with its components.
///
/// Invariant: `total == base + cover_surcharge + paper_surcharge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceResult {
    /// Per-page rate of the tier the page count fell into.
    pub unit_rate: Money,

    /// `unit_rate × page_amount × book_quantity`.
    pub base: Money,

    /// Cover fee per copy × `book_quantity`.
    pub cover_surcharge: Money,

    /// Paper fee per page × `page_amount`, charged once per order.
    pub paper_surcharge: Money,

    /// Amount the customer pays.
    pub total: Money,
}

// =============================================================================
// Customer Details
// =============================================================================

/// Who the order is for and where it ships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomerDetails {
    pub name_surname: String,
    pub email: String,
    pub street_address: String,
    pub city: String,
    pub country: String,
}

// =============================================================================
// Print Order
// =============================================================================

/// A validated, priced order, ready for the persistence and notification
/// layers.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct PrintOrder {
    /// Unique identifier (UUID v4).
    pub id: String,

    pub customer: CustomerDetails,

    pub pricing: OrderPricingInput,

    /// Price at the time the order was placed.
    pub price: PriceResult,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl PrintOrder {
    /// Prices the order with the standard rate card and stamps it.
    pub fn place(customer: CustomerDetails, pricing: OrderPricingInput) -> Self {
        Self::place_with_rates(customer, pricing, &RateCard::standard())
    }

    /// Prices the order against `rates` and stamps it.
    pub fn place_with_rates(
        customer: CustomerDetails,
        pricing: OrderPricingInput,
        rates: &RateCard,
    ) -> Self {
        let price = rates.price(&pricing);
        PrintOrder {
            id: Uuid::new_v4().to_string(),
            customer,
            pricing,
            price,
            created_at: Utc::now(),
        }
    }

    /// Total amount due.
    pub fn total(&self) -> Money {
        self.price.total
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};

    fn customer() -> CustomerDetails {
        CustomerDetails {
            name_surname: "Anna Berzina".to_string(),
            email: "anna@example.com".to_string(),
            street_address: "Brivibas iela 1".to_string(),
            city: "Riga".to_string(),
            country: "Latvia".to_string(),
        }
    }

    #[test]
    fn test_book_cover_exact_match() {
        assert_eq!(BookCover::from_form_value("hard_cover"), BookCover::HardCover);
        assert_eq!(BookCover::from_form_value("soft_cover"), BookCover::SoftCover);
        assert_eq!(BookCover::from_form_value("none"), BookCover::None);
        assert_eq!(BookCover::from_form_value(""), BookCover::None);
        // Typos and case variants are tolerated as "no cover"
        assert_eq!(BookCover::from_form_value("hardcover"), BookCover::None);
        assert_eq!(BookCover::from_form_value("HARD_COVER"), BookCover::None);
        assert_eq!(BookCover::from_form_value(" hard_cover"), BookCover::None);
    }

    #[test]
    fn test_paper_type_exact_match() {
        assert_eq!(
            PaperType::from_form_value("coated_book_paper"),
            PaperType::CoatedBookPaper
        );
        assert_eq!(PaperType::from_form_value("plain"), PaperType::None);
        assert_eq!(PaperType::from_form_value("coated"), PaperType::None);
    }

    #[test]
    fn test_wire_names_match_serde() {
        assert_eq!(
            serde_json::to_string(&BookCover::HardCover).unwrap(),
            format!("\"{}\"", BookCover::HardCover)
        );
        assert_eq!(
            serde_json::to_string(&PaperType::CoatedBookPaper).unwrap(),
            format!("\"{}\"", PaperType::CoatedBookPaper)
        );
        assert_eq!(serde_json::to_string(&BookCover::None).unwrap(), "\"none\"");
    }

    #[test]
    fn test_defaults_are_no_surcharge() {
        assert_eq!(BookCover::default(), BookCover::None);
        assert_eq!(PaperType::default(), PaperType::None);
    }

    #[test]
    fn test_pricing_input_rejects_non_positive_counts() {
        let err = OrderPricingInput::new(0, 1, BookCover::HardCover, PaperType::None).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidInput(ValidationError::MustBePositive { ref field }) if field == "page_amount"
        ));

        let err = OrderPricingInput::new(10, -3, BookCover::None, PaperType::None).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidInput(ValidationError::MustBePositive { ref field }) if field == "book_quantity"
        ));

        let too_many = i64::from(u32::MAX) + 1;
        assert!(OrderPricingInput::new(too_many, 1, BookCover::None, PaperType::None).is_err());
    }

    #[test]
    fn test_pricing_input_accessors() {
        let input =
            OrderPricingInput::new(150, 3, BookCover::SoftCover, PaperType::CoatedBookPaper).unwrap();
        assert_eq!(input.page_amount(), 150);
        assert_eq!(input.book_quantity(), 3);
        assert_eq!(input.book_cover(), BookCover::SoftCover);
        assert_eq!(input.paper_type(), PaperType::CoatedBookPaper);
    }

    #[test]
    fn test_place_order_prices_and_stamps() {
        let pricing = OrderPricingInput::new(100, 2, BookCover::HardCover, PaperType::None).unwrap();
        let order = PrintOrder::place(customer(), pricing);

        assert_eq!(order.total(), Money::from_cents(2600));
        assert!(Uuid::parse_str(&order.id).is_ok());
        assert_eq!(order.customer.city, "Riga");

        let other = PrintOrder::place(customer(), pricing);
        assert_ne!(order.id, other.id);
        assert_eq!(order.price, other.price);
    }

    #[test]
    fn test_order_serializes_with_wire_names() {
        let pricing =
            OrderPricingInput::new(150, 1, BookCover::SoftCover, PaperType::CoatedBookPaper).unwrap();
        let order = PrintOrder::place(customer(), pricing);
        let json = serde_json::to_value(&order).unwrap();

        assert_eq!(json["pricing"]["book_cover"], "soft_cover");
        assert_eq!(json["pricing"]["paper_type"], "coated_book_paper");
        assert_eq!(json["pricing"]["page_amount"], 150);
        assert_eq!(json["price"]["total"], 2250);
    }
}
