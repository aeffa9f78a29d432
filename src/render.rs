//! HTML markup for showing a report inside an editor dialog.
//!
//! Each finding becomes a link carrying its key in `data-index`, which the
//! host passes to [`FindingIndex::resolve`](crate::FindingIndex::resolve)
//! when the link is clicked.

use crate::report::{Finding, FindingGroup, Report};

pub fn render_html(report: &Report) -> String {
    let mut html = String::from("<div style=\"word-wrap: break-word;\"><div>");

    for group in &report.groups {
        render_group(group, &mut html);
    }

    if let Some(message) = &report.placeholder {
        html.push_str(&format!("<p>{}</p>", escape(message)));
    }

    html.push_str("</div></div>");
    html
}

fn render_group(group: &FindingGroup, html: &mut String) {
    if group.findings.is_empty() {
        return;
    }

    html.push_str(&format!("<p>{}", escape(&group.heading)));
    html.push_str("<ol class=\"accessibilitywarnings\">");
    for finding in &group.findings {
        render_finding(finding, html);
    }
    html.push_str("</ol></p>");
}

fn render_finding(finding: &Finding, html: &mut String) {
    let key = escape(&finding.key);
    let label = escape(&finding.label);

    if finding.is_image() {
        html.push_str(&format!(
            "<li><a data-index=\"{key}\" href=\"#\"><img data-index=\"{key}\" src=\"{label}\" /> {label}</a></li>"
        ));
    } else {
        html.push_str(&format!(
            "<li><a href=\"#\" data-index=\"{key}\">{label}</a></li>"
        ));
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
