use halalfinder_core::{data_health_report, CheckStatus, DataHealthReport, ListingRef};
use halalfinder_sheets::LoadedAppData;

pub(crate) fn print_health(loaded: &LoadedAppData) {
    let report = data_health_report(&loaded.data);
    print!("{}", render_health(&report, loaded.source.as_str()));
}

fn status_tag(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Ok => "OK",
        CheckStatus::Warn => "WARN",
        CheckStatus::Error => "ERROR",
        CheckStatus::Info => "INFO",
    }
}

fn render_listing(out: &mut String, r: &ListingRef) {
    let suggestion = r
        .suggested_slug
        .as_deref()
        .map(|s| format!("  (suggested: {s})"))
        .unwrap_or_default();
    let slug = if r.slug.is_empty() { "<empty>" } else { &r.slug };
    out.push_str(&format!("  {:<8}{:<32}{slug}{suggestion}\n", r.id, r.name));
}

pub(crate) fn render_health(report: &DataHealthReport, source: &str) -> String {
    let mut out = format!(
        "data source: {source}\noverall: {}\n\n",
        status_tag(report.overall())
    );

    for check in &report.checks {
        out.push_str(&format!(
            "{:<7}{:<32}{}\n",
            status_tag(check.status),
            check.label,
            check.value
        ));
    }

    if !report.missing_slugs.is_empty() {
        out.push_str("\nactive restaurants without a slug:\n");
        for r in &report.missing_slugs {
            render_listing(&mut out, r);
        }
    }

    if !report.unsafe_slugs.is_empty() {
        out.push_str("\nslugs that are not URL-safe:\n");
        for r in &report.unsafe_slugs {
            render_listing(&mut out, r);
        }
    }

    if !report.duplicate_slugs.is_empty() {
        out.push_str(&format!(
            "\nduplicate slugs: {}\n",
            report.duplicate_slugs.join(", ")
        ));
    }

    out.push_str("\nsite settings:\n");
    for (key, value) in &report.site_settings {
        out.push_str(&format!("  {key:<24}{value}\n"));
    }
    out
}
