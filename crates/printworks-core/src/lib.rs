//! # printworks-core: Pure Pricing Logic for Printworks
//!
//! This crate is the **heart** of Printworks, a print-on-demand book shop.
//! It turns a submitted order into a price, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Printworks Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Order Intake (HTTP form, CLI args)              │   │
//! │  │    page_amount, book_quantity, book_cover, paper_type (raw)     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ OrderForm                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ printworks-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌────────────┐  │   │
//! │  │   │  intake   │  │  pricing  │  │   money   │  │confirmation│  │   │
//! │  │   │ OrderForm │─►│ RateCard  │─►│   Money   │─►│  message   │  │   │
//! │  │   │ validate  │  │ compute   │  │  (cents)  │  │   body     │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ PriceResult / PrintOrder               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │        Persistence • Email notification • Page rendering        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (OrderPricingInput, PriceResult, PrintOrder, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - The pricing engine and its rate card
//! - [`intake`] - Raw form parsing into typed input
//! - [`validation`] - Field validation rules
//! - [`confirmation`] - Order confirmation message text
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: the price is a deterministic function of four inputs
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: every rate is a whole number of cents, so totals are exact
//! 4. **Explicit Errors**: invalid numbers fail loudly instead of pricing as garbage
//!
//! ## Example Usage
//!
//! ```rust
//! use printworks_core::{compute_price, BookCover, OrderPricingInput, PaperType};
//!
//! let input = OrderPricingInput::new(100, 2, BookCover::HardCover, PaperType::None).unwrap();
//! let price = compute_price(&input);
//!
//! // 0.07 × 100 × 2 + 6.00 × 2
//! assert_eq!(price.total.to_string(), "26.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod confirmation;
pub mod error;
pub mod intake;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use intake::OrderForm;
pub use money::Money;
pub use pricing::{compute_price, PageTier, RateCard};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of free-text customer fields (name, street, city, country).
pub const MAX_TEXT_FIELD_LEN: usize = 200;

/// Maximum length of an email address (RFC 5321 path limit).
pub const MAX_EMAIL_LEN: usize = 254;
