use chrono::Local;
use tianzi_scraper::DynastySummary;

/// Render the per-dynasty summaries as a console report.
pub fn generate_batch_report(summaries: &[DynastySummary]) -> String {
    let mut report = String::new();
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");
    report.push_str("# Summary:\n");
    report.push_str(&format!("  Dynasties processed: {}\n", summaries.len()));

    let total_seen: usize = summaries.iter().map(|s| s.rulers_seen).sum();
    report.push_str(&format!("  Rulers seen: {}\n", total_seen));

    let total_saved: usize = summaries.iter().map(|s| s.downloads_succeeded).sum();
    report.push_str(&format!("  Portraits saved: {}\n", total_saved));

    report.push_str(&format!(
        "  Generated: {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));

    report.push_str("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    for summary in summaries {
        // Color code: green complete, yellow partial, red nothing saved.
        let count_str = if summary.rulers_seen > 0
            && summary.downloads_succeeded == summary.rulers_seen
        {
            format!("\x1b[32m{}/{}\x1b[0m", summary.downloads_succeeded, summary.rulers_seen)
        } else if summary.downloads_succeeded > 0 {
            format!("\x1b[33m{}/{}\x1b[0m", summary.downloads_succeeded, summary.rulers_seen)
        } else {
            format!("\x1b[31m{}/{}\x1b[0m", summary.downloads_succeeded, summary.rulers_seen)
        };

        report.push_str(&format!("  {} {}\n", count_str, summary.dynasty));
    }

    report
}
