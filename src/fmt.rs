//! Human-friendly CLI output formatters.
//!
//! Each `fmt_*` function formats one tool's output for terminal display.
//! When `color` is true, ANSI escape codes are emitted via `owo_colors`.

use crate::error::ErrorPayload;
use crate::tools::{
    CodeSearchOutput, ContentScanOutput, DocOutput, ListOutput, SearchOutput, SourceOutput,
};
use crate::types::Relevance;
use owo_colors::OwoColorize;
use std::io::{self, Write};

// ── list ────────────────────────────────────────────────────────────────────

pub fn fmt_list(w: &mut impl Write, out: &ListOutput, color: bool) -> io::Result<()> {
    for route in &out.routes {
        writeln!(w, "{route}")?;
    }

    let summary = format!("{} routes ({})", out.count, out.strategy);
    if color {
        writeln!(w, "{}", summary.dimmed())?;
    } else {
        writeln!(w, "{summary}")?;
    }
    Ok(())
}

// ── source ──────────────────────────────────────────────────────────────────

pub fn fmt_source(w: &mut impl Write, out: &SourceOutput, color: bool) -> io::Result<()> {
    let header = format!("{} ({})", out.route, out.variant);
    if color {
        writeln!(w, "{}  {}", header.bold(), out.github_url.dimmed())?;
    } else {
        writeln!(w, "{header}  {}", out.github_url)?;
    }
    writeln!(w)?;
    write!(w, "{}", out.content)?;
    if !out.content.ends_with('\n') {
        writeln!(w)?;
    }
    Ok(())
}

// ── doc ─────────────────────────────────────────────────────────────────────

pub fn fmt_doc(w: &mut impl Write, out: &DocOutput, color: bool) -> io::Result<()> {
    if color {
        writeln!(w, "{}  {}", out.route.bold(), out.github_url.dimmed())?;
    } else {
        writeln!(w, "{}  {}", out.route, out.github_url)?;
    }
    writeln!(w)?;
    writeln!(w, "{}", out.text)?;

    if let Some(rendered) = &out.rendered_text {
        writeln!(w)?;
        if color {
            writeln!(w, "{}", "── rendered ──".dimmed())?;
        } else {
            writeln!(w, "── rendered ──")?;
        }
        writeln!(w, "{rendered}")?;
    }
    Ok(())
}

// ── search ──────────────────────────────────────────────────────────────────

pub fn fmt_search(w: &mut impl Write, out: &SearchOutput, color: bool) -> io::Result<()> {
    match out {
        SearchOutput::CodeSearch(out) => fmt_code_search(w, out, color),
        SearchOutput::ContentScan(out) => fmt_content_scan(w, out, color),
    }
}

fn fmt_code_search(w: &mut impl Write, out: &CodeSearchOutput, color: bool) -> io::Result<()> {
    for hit in &out.results {
        let route = hit.route.as_deref().unwrap_or("-");
        if color {
            writeln!(w, "{}  ({:.2})", route.bold(), hit.score)?;
            writeln!(w, "  {}", hit.path.dimmed())?;
        } else {
            writeln!(w, "{route}  ({:.2})", hit.score)?;
            writeln!(w, "  {}", hit.path)?;
        }
    }

    if out.total_count as usize > out.results.len() {
        let more = format!("... {} matches total", out.total_count);
        if color {
            writeln!(w, "{}", more.dimmed())?;
        } else {
            writeln!(w, "{more}")?;
        }
    }
    Ok(())
}

fn fmt_content_scan(w: &mut impl Write, out: &ContentScanOutput, color: bool) -> io::Result<()> {
    for hit in &out.results {
        if color {
            let tier = match hit.relevance {
                Relevance::High => format!("{:<6}", hit.relevance).green().to_string(),
                Relevance::Medium => format!("{:<6}", hit.relevance).yellow().to_string(),
            };
            writeln!(w, "{tier} {}", hit.route.bold())?;
        } else {
            writeln!(w, "{:<6} {}", hit.relevance, hit.route)?;
        }

        if let Some(preview) = &hit.preview {
            if color {
                writeln!(w, "       {}", preview.dimmed())?;
            } else {
                writeln!(w, "       {preview}")?;
            }
        }
    }

    let summary = format!(
        "{} hits across {} routes",
        out.total_count, out.routes_scanned
    );
    if color {
        writeln!(w, "{}", summary.dimmed())?;
    } else {
        writeln!(w, "{summary}")?;
    }
    Ok(())
}

// ── errors ──────────────────────────────────────────────────────────────────

pub fn fmt_error(w: &mut impl Write, err: &ErrorPayload, color: bool) -> io::Result<()> {
    let head = format!("error[{}]: {}", err.code, err.error);
    if color {
        writeln!(w, "{}", head.red().bold())?;
    } else {
        writeln!(w, "{head}")?;
    }

    let fields = [
        ("route", err.route.clone()),
        ("type", err.variant.map(|v| v.to_string())),
        ("url", err.url.clone()),
        ("status", err.status.map(|s| s.to_string())),
        ("details", err.details.clone()),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            writeln!(w, "  {label}: {value}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocsError;
    use crate::types::{MatchType, SourceVariant};
    use crate::tools::ScanHit;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_fmt_list_plain() {
        let out = ListOutput {
            count: 2,
            routes: vec!["/docs/components/Axis".into(), "/docs/examples/Area".into()],
            strategy: "directory".into(),
        };
        let text = render(|w| fmt_list(w, &out, false));
        assert_eq!(
            text,
            "/docs/components/Axis\n/docs/examples/Area\n2 routes (directory)\n"
        );
    }

    #[test]
    fn test_fmt_content_scan_plain() {
        let out = SearchOutput::ContentScan(ContentScanOutput {
            query: "bar".into(),
            routes_scanned: 3,
            total_count: 1,
            results: vec![ScanHit {
                route: "/docs/components/BarChart".into(),
                relevance: Relevance::High,
                match_type: MatchType::RouteName,
                preview: None,
            }],
        });
        let text = render(|w| fmt_search(w, &out, false));
        assert!(text.starts_with("high   /docs/components/BarChart\n"));
        assert!(text.ends_with("1 hits across 3 routes\n"));
    }

    #[test]
    fn test_fmt_error_lists_fields() {
        let payload = DocsError::UnmappableRoute {
            route: "/docs/examples/Area".into(),
            variant: SourceVariant::Implementation,
        }
        .payload();
        let text = render(|w| fmt_error(w, &payload, false));
        assert!(text.starts_with("error[UNMAPPABLE_ROUTE]"));
        assert!(text.contains("  route: /docs/examples/Area\n"));
        assert!(text.contains("  type: implementation\n"));
    }
}
