//! List search
//!
//! Each list screen filters its rows by a case-insensitive substring match
//! over a handful of fields, OR-ed together.

use crate::models::{DealerOrder, DealerRevenue, DebtReport, Delivery, Order, Payment};

/// A record that can be matched against a search term
pub trait Searchable {
    /// Field values the search term is matched against
    fn search_fields(&self) -> Vec<String>;

    /// True if any field contains `term` (case-insensitive); blank matches all
    fn matches(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Rows matching `term`, in their original order
pub fn filter_by_search<'a, T: Searchable>(items: &'a [T], term: &str) -> Vec<&'a T> {
    items.iter().filter(|item| item.matches(term)).collect()
}

fn opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

impl Searchable for Order {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.order_id.to_string(),
            self.user_id.to_string(),
            self.vehicle_id.to_string(),
            self.status.to_string(),
            opt(&self.color),
        ]
    }
}

impl Searchable for DealerOrder {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.dealer_order_id.to_string(),
            self.order_id.to_string(),
            self.user_id.to_string(),
            self.vehicle_id.to_string(),
            self.status.to_string(),
            self.payment_status.to_string(),
            opt(&self.color),
        ]
    }
}

impl Searchable for Payment {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.payment_id.to_string(),
            self.order_id.to_string(),
            self.method.to_string(),
            self.status.to_string(),
        ]
    }
}

impl Searchable for Delivery {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.delivery_id.to_string(),
            self.order_id.to_string(),
            self.user_id.to_string(),
            self.vehicle_id.to_string(),
            self.delivery_status.to_string(),
            opt(&self.notes),
        ]
    }
}

impl Searchable for DebtReport {
    fn search_fields(&self) -> Vec<String> {
        vec![opt(&self.name)]
    }
}

impl Searchable for DealerRevenue {
    fn search_fields(&self) -> Vec<String> {
        vec![opt(&self.dealer_name)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::OrderStatus;

    fn sample_orders() -> Vec<Order> {
        vec![
            Order {
                order_id: 1,
                status: OrderStatus::Pending,
                user_id: 10,
                vehicle_id: 1,
                ..Default::default()
            },
            Order {
                order_id: 2,
                status: OrderStatus::Approved,
                user_id: 20,
                vehicle_id: 2,
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_search_by_status() {
        let orders = sample_orders();
        let hits = filter_by_search(&orders, "approved");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].order_id, 2);

        // Case-insensitive against the PENDING wire value
        let hits = filter_by_search(&orders, "pend");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].order_id, 1);
    }

    #[test]
    fn test_search_numeric_substring_hits_any_field() {
        let orders = sample_orders();
        // orderId 2, userId 20 and vehicleId 2 all contain "2"; order 1 has none
        let hits = filter_by_search(&orders, "2");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].order_id, 2);
        assert!(hits[0].search_fields().iter().filter(|f| f.contains('2')).count() >= 3);

        // "0" hits userId 10 and userId 20
        assert_eq!(filter_by_search(&orders, "0").len(), 2);
    }

    #[test]
    fn test_blank_term_matches_all() {
        let orders = sample_orders();
        assert_eq!(filter_by_search(&orders, "  ").len(), 2);
        assert!(filter_by_search(&orders, "xyz").is_empty());
    }

    #[test]
    fn test_reports_search_by_name() {
        let reports = vec![
            DebtReport {
                name: Some("Đại lý Hà Nội".into()),
                ..Default::default()
            },
            DebtReport {
                name: Some("Đại lý Đà Nẵng".into()),
                ..Default::default()
            },
        ];
        let hits = filter_by_search(&reports, "hà nội");
        assert_eq!(hits.len(), 1);
    }
}
