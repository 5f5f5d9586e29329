//! Dashboard command: counters, chart, recent products, AI summary.

use mw_backoffice::stats::{self, ReportKind};
use mw_backoffice::{AppState, DataCache};

use super::{CliError, require_session};

pub async fn show(state: &AppState, report: ReportKind) -> Result<(), CliError> {
    let seller = require_session(state)?;
    let cache = DataCache::load(state.store()).await?;

    println!("MW Servicio Comercial - {}", seller.name);
    println!();
    println!(
        "Appointments: {} total, {} pending, {} completed",
        stats::total_appointments(cache.appointments()),
        stats::pending_appointments(cache.appointments()),
        stats::completed_appointments(cache.appointments()),
    );
    println!(
        "Inventory value: ${}",
        stats::estimated_inventory_value(cache.products())
    );

    let series = stats::chart_series(cache.appointments());
    if !series.is_empty() {
        println!();
        println!("Appointments per day:");
        for point in &series {
            println!("  {}  {}", point.date, "#".repeat(point.count));
        }
    }

    let recent = stats::recent(cache.products());
    if !recent.is_empty() {
        println!();
        println!("Recent products:");
        for p in recent {
            println!("  {}  ${}", p.name, p.price);
        }
    }

    let filtered = stats::report_filter(cache.appointments(), report);
    println!();
    println!("Report ({} appointments):", filtered.len());
    for a in filtered {
        println!(
            "  {} {}  [{}]  {} - {}",
            a.date,
            a.time.format("%H:%M"),
            a.status,
            a.client_name,
            a.service,
        );
    }

    // Decorative; prints nothing when the AI service is unconfigured.
    let summary = state.insights().schedule_summary(cache.appointments()).await;
    if !summary.is_empty() {
        println!();
        println!("{summary}");
    }

    Ok(())
}
