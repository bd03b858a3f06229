//! Invoice listing filter
//!
//! A stateless predicate over invoices and the identification numbers of
//! their parties. The product search is diacritic- and case-insensitive;
//! every criterion left unset matches everything.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{text, PersonId};

use crate::invoice::Invoice;

/// Listing filter, serializable as part of the list view state
///
/// Field names mirror the query-string parameters of the listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceFilter {
    #[serde(rename = "buyerID")]
    pub buyer_id: Option<PersonId>,
    #[serde(rename = "sellerID")]
    pub seller_id: Option<PersonId>,
    #[serde(rename = "buyerIC")]
    pub buyer_ic: Option<String>,
    #[serde(rename = "sellerIC")]
    pub seller_ic: Option<String>,
    /// Exact product name, as picked from the dropdown
    pub product: Option<String>,
    /// Diacritic-insensitive product substring
    #[serde(rename = "productSearch")]
    pub product_search: Option<String>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<Decimal>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<Decimal>,
    /// Result-count cap, applied after matching
    pub limit: Option<usize>,
}

impl InvoiceFilter {
    /// True when no criterion is set (the limit alone still counts as one)
    pub fn is_empty(&self) -> bool {
        *self == InvoiceFilter::default()
    }

    /// Tests one invoice; the caller resolves the parties' identification
    /// numbers
    pub fn matches(
        &self,
        invoice: &Invoice,
        seller_identification: &str,
        buyer_identification: &str,
    ) -> bool {
        if let Some(buyer_id) = self.buyer_id {
            if invoice.buyer != buyer_id {
                return false;
            }
        }
        if let Some(seller_id) = self.seller_id {
            if invoice.seller != seller_id {
                return false;
            }
        }
        if let Some(ic) = &self.buyer_ic {
            if !buyer_identification.contains(ic.as_str()) {
                return false;
            }
        }
        if let Some(ic) = &self.seller_ic {
            if !seller_identification.contains(ic.as_str()) {
                return false;
            }
        }
        if let Some(product) = &self.product {
            if invoice.product != *product {
                return false;
            }
        }
        if let Some(search) = &self.product_search {
            if !text::contains_folded(&invoice.product, search) {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if invoice.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if invoice.price > max {
                return false;
            }
        }
        true
    }

    /// Applies the result-count cap
    pub fn clamp(&self, mut invoices: Vec<Invoice>) -> Vec<Invoice> {
        if let Some(limit) = self.limit {
            invoices.truncate(limit);
        }
        invoices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_kernel::InvoiceId;
    use rust_decimal_macros::dec;

    use crate::invoice::InvoiceFields;

    fn invoice(product: &str, price: Decimal) -> Invoice {
        Invoice::from_fields(
            InvoiceId::new(1),
            InvoiceFields {
                invoice_number: "2024001".to_string(),
                seller: PersonId::new(1),
                buyer: PersonId::new(2),
                issued: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                due_date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
                product: product.to_string(),
                price,
                vat: dec!(21),
                note: None,
            },
        )
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = InvoiceFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&invoice("konzultace", dec!(1000)), "111", "222"));
    }

    #[test]
    fn test_party_filters() {
        let filter = InvoiceFilter {
            buyer_id: Some(PersonId::new(2)),
            seller_id: Some(PersonId::new(9)),
            ..Default::default()
        };
        assert!(!filter.matches(&invoice("konzultace", dec!(1000)), "111", "222"));
    }

    #[test]
    fn test_identification_is_a_substring_match() {
        let filter = InvoiceFilter {
            seller_ic: Some("11".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&invoice("konzultace", dec!(1000)), "0112", "222"));
    }

    #[test]
    fn test_product_search_ignores_diacritics() {
        let filter = InvoiceFilter {
            product_search: Some("skoleni".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&invoice("Školení BOZP", dec!(1000)), "111", "222"));
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let filter = InvoiceFilter {
            min_price: Some(dec!(1000)),
            max_price: Some(dec!(1000)),
            ..Default::default()
        };
        assert!(filter.matches(&invoice("konzultace", dec!(1000)), "111", "222"));
        assert!(!filter.matches(&invoice("konzultace", dec!(999.99)), "111", "222"));
    }

    #[test]
    fn test_limit_caps_results() {
        let filter = InvoiceFilter {
            limit: Some(1),
            ..Default::default()
        };
        let results = filter.clamp(vec![
            invoice("a", dec!(1)),
            invoice("b", dec!(2)),
        ]);
        assert_eq!(results.len(), 1);
    }
}
