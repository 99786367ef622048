use super::SearchHit;
use colored::Colorize;
use std::fmt::Write;

const KEY_WIDTH: usize = 14;

/// Render a listing, or an explicit notice when there is nothing to show.
pub fn render(hits: &[SearchHit], query: &str) -> String {
    if hits.is_empty() {
        return format!("{}\n", format!("No packages found for '{}'.", query).yellow());
    }

    let mut out = String::new();
    for hit in hits {
        let _ = writeln!(out, "{}", "---".yellow());
        for (key, value) in fields(hit) {
            let label = format!("{:<width$}", format!("{}:", key), width = KEY_WIDTH);
            let _ = writeln!(out, "{}{}", label.green(), value);
        }
    }
    out
}

/// Non-empty fields in display order.
fn fields(hit: &SearchHit) -> Vec<(&'static str, &str)> {
    let optional = [
        ("Description", &hit.description),
        ("Version", &hit.version),
        ("License", &hit.license),
        ("Type", &hit.kind),
        ("Homepage", &hit.homepage),
        ("Source", &hit.source),
        ("Author", &hit.author),
    ];

    std::iter::once(("Name", hit.name.as_str()))
        .chain(
            optional
                .into_iter()
                .filter_map(|(key, value)| value.as_deref().map(|v| (key, v))),
        )
        .filter(|(_, value)| !value.trim().is_empty())
        .collect()
}
