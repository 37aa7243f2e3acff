//! Text rendering of a quote for the display region.
use crate::quote::RideQuoteResponse;

/// Currency symbol prefixed to the cost.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Render a quote as three lines with two-decimal rounding.
pub fn render_quote(quote: &RideQuoteResponse) -> String {
    format!(
        "ETA: {:.2} minutes\nEstimated Cost: {}{:.2}\nDemand Level: {:.2}\n",
        quote.eta, CURRENCY_SYMBOL, quote.cost, quote.demand
    )
}
