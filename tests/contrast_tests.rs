use accessibility_checker::dom::NodeExt;
use accessibility_checker::{AccessibilityChecker, CheckerOptions, Finding, FindingCategory};

fn contrast_findings(checker: &AccessibilityChecker, html: &str) -> Vec<Finding> {
    let result = checker.check_html(html).unwrap();
    result
        .report
        .findings()
        .filter(|f| f.category == FindingCategory::LowContrast)
        .cloned()
        .collect()
}

#[test]
fn test_black_on_white_passes() {
    let checker = AccessibilityChecker::default();
    let html = r#"<p style="color: #000000; background-color: #ffffff">Readable text</p>"#;
    let result = checker.check_html(html).unwrap();
    assert!(result.report.is_clean());
    assert!(result.index.is_empty());
    assert_eq!(
        result.report.placeholder.as_deref(),
        Some(checker.options().no_warnings_message.as_str())
    );
}

#[test]
fn test_same_colours_fail() {
    let checker = AccessibilityChecker::default();
    let html = r#"<p style="color: #336699; background-color: #336699">Invisible</p>"#;
    let findings = contrast_findings(&checker, html);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].key, "text_0");
    assert_eq!(findings[0].label, "Invisible");

    let detail = findings[0].contrast.as_ref().unwrap();
    assert!((detail.ratio - 1.0).abs() < 1e-9);
    assert_eq!(detail.foreground, "#336699");
    assert_eq!(detail.background, "#336699");
}

#[test]
fn test_topmost_failing_node_wins() {
    let checker = AccessibilityChecker::default();
    let html = r#"<p style="color: #777777; background-color: #888888">Hello <span style="color: #777777; background-color: #888888">world</span></p>"#;
    let result = checker.check_html(html).unwrap();
    let findings: Vec<_> = result.report.findings().collect();

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].key, "text_0");
    assert_eq!(findings[0].label, "Hello world");

    let node = result.resolve("text_0").unwrap();
    assert_eq!(node.tag_name(), Some("p"));
}

#[test]
fn test_failing_child_of_passing_parent_is_reported() {
    let checker = AccessibilityChecker::default();
    let html = r#"<div>Intro <span style="color: #eeeeee">faint</span></div>"#;
    let findings = contrast_findings(&checker, html);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].label, "faint");
}

#[test]
fn test_inherited_colour_reports_only_the_ancestor() {
    let checker = AccessibilityChecker::default();
    let html = r#"<div style="color: #dddddd"><p>Faded <em>text</em></p></div>"#;
    let result = checker.check_html(html).unwrap();
    let findings: Vec<_> = result.report.findings().collect();

    assert_eq!(findings.len(), 1);
    assert_eq!(result.resolve("text_0").unwrap().tag_name(), Some("div"));
}

#[test]
fn test_independent_regions_are_reported_in_order() {
    let checker = AccessibilityChecker::default();
    let html = r#"
        <p style="color: yellow">First</p>
        <p>Fine</p>
        <p style="color: white; background: silver">Second</p>
    "#;
    let findings = contrast_findings(&checker, html);
    let keys: Vec<_> = findings
        .iter()
        .map(|f| (f.key.as_str(), f.label.as_str()))
        .collect();
    assert_eq!(keys, vec![("text_0", "First"), ("text_1", "Second")]);
}

#[test]
fn test_unparseable_foreground_is_skipped() {
    let checker = AccessibilityChecker::default();
    let html = r#"<p style="color: hsl(0, 0%, 95%)">Unknown colour</p>"#;
    assert!(contrast_findings(&checker, html).is_empty());
}

#[test]
fn test_transparent_background_counts_as_white() {
    let checker = AccessibilityChecker::default();
    let html = r#"
        <p style="color: #000; background-color: rgba(0, 0, 0, 0)">Dark on clear</p>
        <p style="color: #fff; background-color: transparent">Light on clear</p>
    "#;
    let findings = contrast_findings(&checker, html);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].label, "Light on clear");
}

#[test]
fn test_unparseable_background_counts_as_white() {
    let checker = AccessibilityChecker::default();
    let html = r#"<p style="color: #fafafa; background-color: hsl(0, 0%, 0%)">Pale</p>"#;
    assert_eq!(contrast_findings(&checker, html).len(), 1);
}

#[test]
fn test_background_shorthand_colour() {
    let checker = AccessibilityChecker::default();
    let html = r#"<p style="background: #000">Black on black</p>"#;
    assert_eq!(contrast_findings(&checker, html).len(), 1);
}

#[test]
fn test_threshold_boundary() {
    let checker = AccessibilityChecker::default();

    // #767676 on white is just above 4.5, #777777 just below.
    let html = r#"<p style="color: #767676">Passes</p>"#;
    assert!(contrast_findings(&checker, html).is_empty());

    let html = r#"<p style="color: #777777">Fails</p>"#;
    let findings = contrast_findings(&checker, html);
    assert_eq!(findings.len(), 1);
    let ratio = findings[0].contrast.as_ref().unwrap().ratio;
    assert!(ratio > 4.4 && ratio <= 4.5, "ratio was {}", ratio);
}

#[test]
fn test_custom_threshold() {
    let checker = AccessibilityChecker::new(Some(CheckerOptions {
        contrast_threshold: 3.0,
        ..CheckerOptions::default()
    }));
    let html = r#"<p style="color: #777777">Large heading text</p>"#;
    assert!(contrast_findings(&checker, html).is_empty());
}

#[test]
fn test_whitespace_only_elements_are_ignored() {
    let checker = AccessibilityChecker::default();
    let html = "<div style=\"color: #ffffff\">   \n\t </div>";
    let result = checker.check_html(html).unwrap();
    assert!(result.report.is_clean());
}

#[test]
fn test_later_declarations_override_earlier_ones() {
    let checker = AccessibilityChecker::default();
    let html = r#"<p style="color: #cccccc; color: #000000 !important">Dark wins</p>"#;
    assert!(contrast_findings(&checker, html).is_empty());

    let html = r#"<p style="color: #000000; color: #cccccc">Light wins</p>"#;
    assert_eq!(contrast_findings(&checker, html).len(), 1);
}

#[test]
fn test_passing_paragraph_reports_failing_span() {
    let checker = AccessibilityChecker::default();
    let html = r#"<p style="color:#000;background-color:#fff">Readable <span style="color:#808080;background-color:#909090">grey</span></p>"#;
    let result = checker.check_html(html).unwrap();
    let findings: Vec<_> = result.report.findings().collect();

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].key, "text_0");
    assert_eq!(findings[0].label, "grey");
    assert_eq!(result.resolve("text_0").unwrap().tag_name(), Some("span"));
}

#[test]
fn test_deeply_nested_content_is_scanned() {
    let depth = 20_000;
    let html = format!("{}deep{}", "<span>".repeat(depth), "</span>".repeat(depth));

    let checker = AccessibilityChecker::default();
    let result = checker.check_html(&html).unwrap();
    assert!(result.report.is_clean());

    let html = format!(
        "<div style=\"color: #fafafa\">{}faint{}</div>",
        "<span>".repeat(depth),
        "</span>".repeat(depth)
    );
    let result = checker.check_html(&html).unwrap();
    let findings: Vec<_> = result.report.findings().collect();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].label, "faint");
    assert_eq!(result.resolve("text_0").unwrap().tag_name(), Some("div"));
}
