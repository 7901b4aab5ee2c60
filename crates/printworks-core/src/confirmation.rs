//! # Order Confirmation
//!
//! Builds the confirmation message sent to the customer after an order is
//! placed. Only the text lives here; delivery belongs to the mailer.

use serde::Serialize;

use crate::types::PrintOrder;

/// Subject line of every order confirmation.
pub const CONFIRMATION_SUBJECT: &str = "Order confirmation";

/// A rendered confirmation, ready to hand to a mailer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderConfirmation {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl OrderConfirmation {
    pub fn for_order(order: &PrintOrder) -> Self {
        OrderConfirmation {
            to: order.customer.email.clone(),
            subject: CONFIRMATION_SUBJECT.to_string(),
            body: render_confirmation(order),
        }
    }
}

/// Renders the plain-text confirmation body.
///
/// ## Format
/// ```text
/// Your order has been received and is being processed.
///
/// Order Details:
/// Name/Surname: Anna Berzina
/// ...
/// Book Quantity: 2
/// Total: 26.00
///
/// Thank you for your order!
/// ```
pub fn render_confirmation(order: &PrintOrder) -> String {
    let customer = &order.customer;
    let pricing = &order.pricing;

    let lines = [
        ("Name/Surname", customer.name_surname.clone()),
        ("Email", customer.email.clone()),
        ("Street Address", customer.street_address.clone()),
        ("City", customer.city.clone()),
        ("Country", customer.country.clone()),
        ("Book Cover", pricing.book_cover().to_string()),
        ("Page Amount", pricing.page_amount().to_string()),
        ("Paper Type", pricing.paper_type().to_string()),
        ("Book Quantity", pricing.book_quantity().to_string()),
        ("Total", order.total().to_string()),
    ];

    let mut body = String::from("Your order has been received and is being processed.\n\n");
    body.push_str("Order Details:\n");
    for (label, value) in lines {
        body.push_str(&format!("{label}: {value}\n"));
    }
    body.push_str("\nThank you for your order!\n");
    body
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::OrderForm;

    fn order() -> PrintOrder {
        OrderForm {
            name_surname: "Anna Berzina".into(),
            email: "anna@example.com".into(),
            street_address: "Brivibas iela 1".into(),
            city: "Riga".into(),
            country: "Latvia".into(),
            book_cover: "soft_cover".into(),
            page_amount: "150".into(),
            paper_type: "coated_book_paper".into(),
            book_quantity: "1".into(),
        }
        .into_order()
        .unwrap()
    }

    #[test]
    fn test_render_confirmation() {
        let body = render_confirmation(&order());
        let expected = "\
Your order has been received and is being processed.

Order Details:
Name/Surname: Anna Berzina
Email: anna@example.com
Street Address: Brivibas iela 1
City: Riga
Country: Latvia
Book Cover: soft_cover
Page Amount: 150
Paper Type: coated_book_paper
Book Quantity: 1
Total: 22.50

Thank you for your order!
";
        assert_eq!(body, expected);
    }

    #[test]
    fn test_every_detail_is_on_its_own_line() {
        let body = render_confirmation(&order());
        let details: Vec<&str> = body
            .lines()
            .skip_while(|line| *line != "Order Details:")
            .skip(1)
            .take_while(|line| !line.is_empty())
            .collect();
        assert_eq!(details.len(), 10);
        assert!(details.iter().all(|line| line.contains(": ")));
        assert_eq!(details.last(), Some(&"Total: 22.50"));
        assert!(body.ends_with("Thank you for your order!\n"));
    }

    #[test]
    fn test_confirmation_is_addressed_to_customer() {
        let confirmation = OrderConfirmation::for_order(&order());
        assert_eq!(confirmation.to, "anna@example.com");
        assert_eq!(confirmation.subject, "Order confirmation");
        assert!(confirmation.body.contains("Total: 22.50"));
    }

    #[test]
    fn test_unknown_cover_shows_as_none() {
        let mut order = order();
        order.pricing = crate::OrderPricingInput::new(
            10,
            1,
            crate::BookCover::from_form_value("spiral"),
            crate::PaperType::None,
        )
        .unwrap();
        let body = render_confirmation(&order);
        assert!(body.contains("Book Cover: none\n"));
        assert!(body.contains("Paper Type: none\n"));
    }
}
