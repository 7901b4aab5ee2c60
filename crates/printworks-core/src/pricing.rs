//! # Pricing Engine
//!
//! Turns an [`OrderPricingInput`] into a [`PriceResult`].
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Price of a print order                           │
//! │                                                                         │
//! │  1. unit rate by page tier (inclusive bounds, first match wins)        │
//! │        pages ≤ 100  → 0.07                                             │
//! │        pages ≤ 200  → 0.06                                             │
//! │        pages > 200  → 0.05                                             │
//! │                                                                         │
//! │  2. base  = unit rate × pages × copies                                 │
//! │                                                                         │
//! │  3. cover = per-copy fee × copies                                      │
//! │        hard_cover → 6.00   soft_cover → 3.00   other → 0               │
//! │                                                                         │
//! │  4. paper = per-page fee × pages        (ONCE per order, not per copy) │
//! │        coated_book_paper → 0.07   other → 0                            │
//! │                                                                         │
//! │  5. total = base + cover + paper                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Paper surcharge is not multiplied by copies
//! Ordering 50 copies on coated paper costs the same paper surcharge as one
//! copy. The shop has always priced it this way and existing quotes depend
//! on it, so it is kept as-is. It looks like it may be a mistake;
//! `test_paper_surcharge_is_charged_once_per_order` pins the current rule so
//! any change to it is deliberate.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{BookCover, OrderPricingInput, PaperType, PriceResult};

// =============================================================================
// Standard Rates
// =============================================================================

/// Per-page rate tiers, ascending by inclusive upper bound.
pub const STANDARD_PAGE_TIERS: [PageTier; 2] = [
    PageTier::new(100, Money::from_cents(7)),
    PageTier::new(200, Money::from_cents(6)),
];

/// Per-page rate above the last tier.
pub const STANDARD_RATE_BEYOND_TIERS: Money = Money::from_cents(5);

/// Per-copy fee for `hard_cover`.
pub const STANDARD_HARD_COVER_FEE: Money = Money::from_cents(600);

/// Per-copy fee for `soft_cover`.
pub const STANDARD_SOFT_COVER_FEE: Money = Money::from_cents(300);

/// Per-page fee for `coated_book_paper`, charged once per order.
pub const STANDARD_COATED_PAPER_FEE: Money = Money::from_cents(7);

/// Largest rate a [`RateCard`] accepts (1,000,000.00). Keeps
/// `MAX_RATE × u32::MAX × u32::MAX` well inside [`Money`].
pub const MAX_RATE: Money = Money::from_major_minor(1_000_000, 0);

// =============================================================================
// Page Tier
// =============================================================================

/// One row of the tier table: page counts up to and including `up_to`
/// cost `per_page` each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTier {
    pub up_to: u32,
    pub per_page: Money,
}

impl PageTier {
    pub const fn new(up_to: u32, per_page: Money) -> Self {
        PageTier { up_to, per_page }
    }
}

// =============================================================================
// Rate Card
// =============================================================================

/// The complete set of printing rates.
///
/// A `RateCard` is always well-formed: tiers strictly ascending with
/// positive bounds, amounts between zero and [`MAX_RATE`]. Deserialization goes through the
/// same check, so a config file can't smuggle in a broken card.
///
/// ## Config Format (amounts in cents)
/// ```toml
/// beyond_tiers_per_page = 5
/// hard_cover_per_copy = 600
/// soft_cover_per_copy = 300
/// coated_paper_per_page = 7
///
/// [[tiers]]
/// up_to = 100
/// per_page = 7
///
/// [[tiers]]
/// up_to = 200
/// per_page = 6
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RateCardFields")]
pub struct RateCard {
    tiers: Vec<PageTier>,
    beyond_tiers_per_page: Money,
    hard_cover_per_copy: Money,
    soft_cover_per_copy: Money,
    coated_paper_per_page: Money,
}

#[derive(Deserialize)]
struct RateCardFields {
    tiers: Vec<PageTier>,
    beyond_tiers_per_page: Money,
    hard_cover_per_copy: Money,
    soft_cover_per_copy: Money,
    coated_paper_per_page: Money,
}

impl TryFrom<RateCardFields> for RateCard {
    type Error = CoreError;

    fn try_from(fields: RateCardFields) -> CoreResult<Self> {
        RateCard::new(
            fields.tiers,
            fields.beyond_tiers_per_page,
            fields.hard_cover_per_copy,
            fields.soft_cover_per_copy,
            fields.coated_paper_per_page,
        )
    }
}

impl RateCard {
    /// Builds a validated rate card.
    ///
    /// ## Errors
    /// [`CoreError::InvalidRateCard`] if a tier bound is zero, the bounds are
    /// not strictly ascending, or any amount is negative or above
    /// [`MAX_RATE`].
    pub fn new(
        tiers: Vec<PageTier>,
        beyond_tiers_per_page: Money,
        hard_cover_per_copy: Money,
        soft_cover_per_copy: Money,
        coated_paper_per_page: Money,
    ) -> CoreResult<Self> {
        let invalid = |reason: String| CoreError::InvalidRateCard { reason };

        if let Some(tier) = tiers.iter().find(|t| t.up_to == 0) {
            return Err(invalid(format!(
                "tier bound must be positive, got {}",
                tier.up_to
            )));
        }

        if let Some(pair) = tiers.windows(2).find(|w| w[0].up_to >= w[1].up_to) {
            return Err(invalid(format!(
                "tier bounds must be strictly ascending, got {} then {}",
                pair[0].up_to, pair[1].up_to
            )));
        }

        let amounts = [
            ("beyond_tiers_per_page", beyond_tiers_per_page),
            ("hard_cover_per_copy", hard_cover_per_copy),
            ("soft_cover_per_copy", soft_cover_per_copy),
            ("coated_paper_per_page", coated_paper_per_page),
        ];
        let tier_amounts = tiers.iter().map(|t| ("tier per_page", t.per_page));
        for (name, amount) in amounts.into_iter().chain(tier_amounts) {
            if amount.is_negative() {
                return Err(invalid(format!("{name} must not be negative, got {amount}")));
            }
            if amount > MAX_RATE {
                return Err(invalid(format!(
                    "{name} must be at most {MAX_RATE}, got {amount}"
                )));
            }
        }

        Ok(RateCard {
            tiers,
            beyond_tiers_per_page,
            hard_cover_per_copy,
            soft_cover_per_copy,
            coated_paper_per_page,
        })
    }

    /// The shop's published rates.
    pub fn standard() -> Self {
        RateCard {
            tiers: STANDARD_PAGE_TIERS.to_vec(),
            beyond_tiers_per_page: STANDARD_RATE_BEYOND_TIERS,
            hard_cover_per_copy: STANDARD_HARD_COVER_FEE,
            soft_cover_per_copy: STANDARD_SOFT_COVER_FEE,
            coated_paper_per_page: STANDARD_COATED_PAPER_FEE,
        }
    }

    pub fn tiers(&self) -> &[PageTier] {
        &self.tiers
    }

    /// Per-page rate for a book of `page_amount` pages.
    ///
    /// ## Example
    /// ```rust
    /// use printworks_core::{Money, RateCard};
    ///
    /// let rates = RateCard::standard();
    /// assert_eq!(rates.unit_rate(100), Money::from_cents(7));
    /// assert_eq!(rates.unit_rate(101), Money::from_cents(6));
    /// assert_eq!(rates.unit_rate(201), Money::from_cents(5));
    /// ```
    pub fn unit_rate(&self, page_amount: u32) -> Money {
        self.tiers
            .iter()
            .find(|tier| page_amount <= tier.up_to)
            .map_or(self.beyond_tiers_per_page, |tier| tier.per_page)
    }

    /// Per-copy fee for a cover.
    pub fn cover_fee(&self, cover: BookCover) -> Money {
        match cover {
            BookCover::HardCover => self.hard_cover_per_copy,
            BookCover::SoftCover => self.soft_cover_per_copy,
            BookCover::None => Money::zero(),
        }
    }

    /// Per-page fee for a paper type.
    pub fn paper_fee(&self, paper: PaperType) -> Money {
        match paper {
            PaperType::CoatedBookPaper => self.coated_paper_per_page,
            PaperType::None => Money::zero(),
        }
    }

    /// Prices an order against this card.
    ///
    /// Never fails: counts are at most `u32::MAX` and every rate at most
    /// [`MAX_RATE`], so the largest possible total is far inside [`Money`].
    pub fn price(&self, input: &OrderPricingInput) -> PriceResult {
        let pages = input.page_amount();
        let copies = input.book_quantity();
        let page_count = i128::from(pages);
        let copy_count = i128::from(copies);

        let unit_rate = self.unit_rate(pages);
        let base = Money::from_cents(unit_rate.cents() * page_count * copy_count);
        let cover_surcharge =
            Money::from_cents(self.cover_fee(input.book_cover()).cents() * copy_count);
        // Once per order; see module docs
        let paper_surcharge =
            Money::from_cents(self.paper_fee(input.paper_type()).cents() * page_count);
        let total =
            Money::from_cents(base.cents() + cover_surcharge.cents() + paper_surcharge.cents());

        debug!(
            page_amount = pages,
            book_quantity = copies,
            book_cover = %input.book_cover(),
            paper_type = %input.paper_type(),
            %total,
            "Priced order"
        );

        PriceResult {
            unit_rate,
            base,
            cover_surcharge,
            paper_surcharge,
            total,
        }
    }
}

impl Default for RateCard {
    fn default() -> Self {
        RateCard::standard()
    }
}

// =============================================================================
// Entry Point
// =============================================================================

/// Computes the price of an order with the standard rate card.
///
/// Pure: same input, same output, safe to call from any thread.
///
/// ## Example
/// ```rust
/// use printworks_core::{compute_price, BookCover, OrderPricingInput, PaperType};
///
/// let input =
///     OrderPricingInput::new(150, 1, BookCover::SoftCover, PaperType::CoatedBookPaper).unwrap();
/// let price = compute_price(&input);
///
/// assert_eq!(price.base.to_string(), "9.00");
/// assert_eq!(price.cover_surcharge.to_string(), "3.00");
/// assert_eq!(price.paper_surcharge.to_string(), "10.50");
/// assert_eq!(price.total.to_string(), "22.50");
/// ```
///
/// Invalid counts never reach this point: [`OrderPricingInput::new`] and
/// [`OrderForm::pricing_input`](crate::OrderForm::pricing_input) reject them
/// with [`CoreError::InvalidInput`].
pub fn compute_price(input: &OrderPricingInput) -> PriceResult {
    RateCard::standard().price(input)
}

// =============================================================================
// Unit Tests
// =============================================================================
