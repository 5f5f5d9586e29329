//! Dashboard aggregation views.
//!
//! All pure and synchronous: they take slices of the in-memory collections
//! and never touch the network, so the dashboard can recompute them on
//! every render.

use chrono::NaiveDate;
use mw_core::{Appointment, AppointmentStatus, Product};
use rust_decimal::Decimal;

/// How many catalog entries the dashboard's recent-products panel shows.
const RECENT_PRODUCTS: usize = 3;

/// Which slice of the appointment book a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    All,
    Pending,
    Completed,
}

/// One point of the appointments-per-day chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub count: usize,
}

#[must_use]
pub fn total_appointments(appointments: &[Appointment]) -> usize {
    appointments.len()
}

#[must_use]
pub fn pending_appointments(appointments: &[Appointment]) -> usize {
    count_with_status(appointments, AppointmentStatus::Pending)
}

#[must_use]
pub fn completed_appointments(appointments: &[Appointment]) -> usize {
    count_with_status(appointments, AppointmentStatus::Completed)
}

fn count_with_status(appointments: &[Appointment], status: AppointmentStatus) -> usize {
    appointments.iter().filter(|a| a.status == status).count()
}

/// Total value of stock on hand: Σ price × stock over the catalog.
///
/// Negative stock (a store-side correction artifact) subtracts, which is
/// what an estimate should do.
#[must_use]
pub fn estimated_inventory_value(products: &[Product]) -> Decimal {
    products
        .iter()
        .map(|p| p.price * Decimal::from(p.stock))
        .sum()
}

/// Appointments per calendar date, ascending by date.
///
/// Dates are merged regardless of the order appointments arrive in; the
/// chart is chronological even when the store is not.
#[must_use]
pub fn chart_series(appointments: &[Appointment]) -> Vec<ChartPoint> {
    let mut by_date = std::collections::BTreeMap::new();
    for appointment in appointments {
        *by_date.entry(appointment.date).or_insert(0usize) += 1;
    }
    by_date
        .into_iter()
        .map(|(date, count)| ChartPoint { date, count })
        .collect()
}

/// Filter the appointment book for a report.
#[must_use]
pub fn report_filter(appointments: &[Appointment], kind: ReportKind) -> Vec<&Appointment> {
    appointments
        .iter()
        .filter(|a| match kind {
            ReportKind::All => true,
            ReportKind::Pending => a.status == AppointmentStatus::Pending,
            ReportKind::Completed => a.status == AppointmentStatus::Completed,
        })
        .collect()
}

/// The most recently added catalog entries, newest last.
///
/// "Recent" follows store insertion order, which is how the collection is
/// fetched.
#[must_use]
pub fn recent(products: &[Product]) -> &[Product] {
    let start = products.len().saturating_sub(RECENT_PRODUCTS);
    &products[start..]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mw_core::{AppointmentId, ProductId};
    use chrono::NaiveTime;

    fn appointment(date: &str, status: AppointmentStatus) -> Appointment {
        Appointment {
            id: AppointmentId::new("a-1"),
            client_name: "Ana".to_owned(),
            date: date.parse().unwrap(),
            time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            service: "Mantenimiento".to_owned(),
            status,
            notes: None,
            seller_id: None,
        }
    }

    fn product(name: &str, price: &str, stock: i32) -> Product {
        Product {
            id: ProductId::new(name),
            name: name.to_owned(),
            price: price.parse().unwrap(),
            category: "General".to_owned(),
            description: String::new(),
            images: Vec::new(),
            stock,
        }
    }

    #[test]
    fn test_counts_ignore_confirmed_and_cancelled() {
        let book = vec![
            appointment("2026-03-01", AppointmentStatus::Pending),
            appointment("2026-03-01", AppointmentStatus::Confirmed),
            appointment("2026-03-02", AppointmentStatus::Completed),
            appointment("2026-03-02", AppointmentStatus::Cancelled),
        ];
        assert_eq!(total_appointments(&book), 4);
        assert_eq!(pending_appointments(&book), 1);
        assert_eq!(completed_appointments(&book), 1);
        assert!(pending_appointments(&book) + completed_appointments(&book) <= total_appointments(&book));
    }

    #[test]
    fn test_inventory_value_sums_price_times_stock() {
        let catalog = vec![product("p1", "100.50", 2), product("p2", "9.99", 10)];
        assert_eq!(
            estimated_inventory_value(&catalog),
            "300.90".parse::<Decimal>().unwrap()
        );
    }

    #[test]
    fn test_inventory_value_empty_catalog_is_zero() {
        assert_eq!(estimated_inventory_value(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_chart_series_merges_and_sorts() {
        // Insertion order deliberately scrambled.
        let book = vec![
            appointment("2026-03-05", AppointmentStatus::Pending),
            appointment("2026-03-01", AppointmentStatus::Completed),
            appointment("2026-03-05", AppointmentStatus::Confirmed),
        ];
        let series = chart_series(&book);
        assert_eq!(
            series,
            vec![
                ChartPoint {
                    date: "2026-03-01".parse().unwrap(),
                    count: 1
                },
                ChartPoint {
                    date: "2026-03-05".parse().unwrap(),
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn test_report_filter_kinds() {
        let book = vec![
            appointment("2026-03-01", AppointmentStatus::Pending),
            appointment("2026-03-02", AppointmentStatus::Completed),
            appointment("2026-03-03", AppointmentStatus::Cancelled),
        ];
        assert_eq!(report_filter(&book, ReportKind::All).len(), 3);
        assert_eq!(report_filter(&book, ReportKind::Pending).len(), 1);
        assert_eq!(report_filter(&book, ReportKind::Completed).len(), 1);
    }

    #[test]
    fn test_recent_takes_last_three() {
        let catalog = vec![
            product("a", "1", 1),
            product("b", "1", 1),
            product("c", "1", 1),
            product("d", "1", 1),
        ];
        let names: Vec<_> = recent(&catalog).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c", "d"]);
    }

    #[test]
    fn test_recent_short_catalog_is_whole_catalog() {
        let catalog = vec![product("a", "1", 1)];
        assert_eq!(recent(&catalog).len(), 1);
    }
}
