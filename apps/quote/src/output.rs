//! Quote rendering for stdout.

use printworks_core::{OrderPricingInput, PriceResult};
use serde::Serialize;

/// JSON shape: the priced input next to its price.
#[derive(Debug, Serialize)]
pub struct Quote<'a> {
    pub order: &'a OrderPricingInput,
    pub price: &'a PriceResult,
}

/// Aligned, human-readable breakdown.
pub fn render_text(order: &OrderPricingInput, price: &PriceResult) -> String {
    let rows = [
        (
            "Base",
            price.base.to_string(),
            format!(
                "{} pages x {} copies @ {}",
                order.page_amount(),
                order.book_quantity(),
                price.unit_rate
            ),
        ),
        (
            "Cover",
            price.cover_surcharge.to_string(),
            order.book_cover().to_string(),
        ),
        (
            "Paper",
            price.paper_surcharge.to_string(),
            order.paper_type().to_string(),
        ),
        ("Total", price.total.to_string(), String::new()),
    ];

    let width = rows.iter().map(|(_, amount, _)| amount.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(label, amount, note)| {
            let line = format!("{label:<6} {amount:>width$}  {note}");
            format!("{}\n", line.trim_end())
        })
        .collect()
}

pub fn render_json(order: &OrderPricingInput, price: &PriceResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Quote { order, price })
}

#[cfg(test)]
mod tests {
    use super::*;
    use printworks_core::{compute_price, BookCover, PaperType};

    fn quote() -> (OrderPricingInput, PriceResult) {
        let order = OrderPricingInput::new(100, 2, BookCover::HardCover, PaperType::None).unwrap();
        let price = compute_price(&order);
        (order, price)
    }

    #[test]
    fn test_render_text() {
        let (order, price) = quote();
        let expected = "\
Base   14.00  100 pages x 2 copies @ 0.07
Cover  12.00  hard_cover
Paper   0.00  none
Total  26.00
";
        assert_eq!(render_text(&order, &price), expected);
    }

    #[test]
    fn test_render_json() {
        let (order, price) = quote();
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&order, &price).unwrap()).unwrap();
        assert_eq!(json["order"]["page_amount"], 100);
        assert_eq!(json["order"]["book_cover"], "hard_cover");
        assert_eq!(json["price"]["total"], 2600);
        assert_eq!(json["price"]["cover_surcharge"], 1200);
    }
}
