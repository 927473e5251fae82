//! Property tests over generated benchmark reports.

use docker_bench_html::reporter::{escape_html, HtmlReporter};
use docker_bench_html::{parse_report, Status};
use proptest::prelude::*;
use regex::Regex;

const STAMP: &str = "2024-05-01 12:00:00";

fn status_token() -> impl Strategy<Value = Status> {
    prop::sample::select(Status::ALL.to_vec())
}

/// A well-formed check line; ids always have two components so an INFO check
/// can never be mistaken for a section header.
fn check_line() -> impl Strategy<Value = (Status, String)> {
    (status_token(), 1u32..20, 1u32..40, "[A-Za-z0-9 ]{0,30}").prop_map(
        |(status, major, minor, text)| {
            (status, format!("[{}] {}.{} - Ensure {}", status, major, minor, text))
        },
    )
}

fn rendered_total(html: &str) -> usize {
    let re = Regex::new(r#"id="count-(pass|warn|note|info)">(\d+)<"#).unwrap();
    re.captures_iter(html)
        .map(|c| c[2].parse::<usize>().unwrap())
        .sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn rendered_summary_counts_sum_to_check_lines(
        checks in prop::collection::vec(check_line(), 0..40),
        with_header in any::<bool>(),
    ) {
        let mut text = String::new();
        if with_header {
            text.push_str("[INFO] 1 - Host Configuration\n");
        }
        for (_, line) in &checks {
            text.push_str(line);
            text.push('\n');
            text.push_str("   * detail line\n");
        }

        let report = parse_report(&text);
        prop_assert_eq!(report.item_count(), checks.len());
        for status in Status::ALL {
            let expected = checks.iter().filter(|(s, _)| *s == status).count();
            prop_assert_eq!(report.counts().get(status), expected);
        }

        let html = HtmlReporter::new().report_at(&report, STAMP);
        prop_assert_eq!(rendered_total(&html), checks.len());
        prop_assert_eq!(html.matches("<tr class=\"row\"").count(), checks.len());
    }

    #[test]
    fn markup_characters_in_descriptions_are_escaped(
        payload in "[a-z]{0,4}[<>&\"][a-z<>&\" ]{0,12}",
        detail in "[a-z]{1,4}[<>&\"][a-z]{0,6}",
    ) {
        let description = format!("x{}", payload);
        let text = format!("[INFO] 1 - Host\n[WARN] 1.1 - {}\n  * {}\n", description, detail);
        let report = parse_report(&text);
        let item = &report.sections[0].items[0];

        let html = HtmlReporter::new().report_at(&report, STAMP);
        let escaped_desc = escape_html(&item.description);
        let escaped_detail = escape_html(&item.details[0]);
        prop_assert!(!escaped_desc.contains(['<', '>', '"']));
        prop_assert!(!escaped_detail.contains(['<', '>', '"']));
        let desc_cell = format!("<td class=\"desc\">{}</td>", escaped_desc);
        let details_cell = format!("<td class=\"details\">{}</td>", escaped_detail);
        prop_assert!(html.contains(&desc_cell));
        prop_assert!(html.contains(&details_cell));
    }
}

#[test]
fn leading_check_is_uncategorized() {
    let report = parse_report("[PASS] 1.1 - first\n");
    assert_eq!(report.sections.len(), 1);
    assert_eq!(report.sections[0].id, "0");
    assert_eq!(report.sections[0].title, "Uncategorized");
}

#[test]
fn sample_fixture_parses_as_expected() {
    let text = std::fs::read_to_string("tests/fixtures/docker-bench-clean.txt").unwrap();
    let report = parse_report(&text);

    assert_eq!(report.preface.len(), 9);
    assert!(report.preface[1].contains("Docker Bench for Security v1.6.0"));
    assert_eq!(
        report
            .sections
            .iter()
            .map(|s| (s.id.as_str(), s.items.len()))
            .collect::<Vec<_>>(),
        vec![("1", 6), ("2", 5), ("5", 3)]
    );

    let counts = report.counts();
    assert_eq!((counts.pass, counts.warn, counts.note, counts.info), (5, 6, 1, 2));

    let host = &report.sections[0];
    assert_eq!(host.items[0].status, Status::Info);
    assert_eq!(host.items[0].id, "1.1");
    assert_eq!(host.items[2].details, vec!["[INFO]       * Users: admin,deploy"]);
    assert_eq!(
        host.items[5].details,
        vec![
            "Using 26.1.0 which is current",
            "Check with your operating system vendor for support and security maintenance for Docker"
        ]
    );

    let runtime = &report.sections[2];
    assert_eq!(
        runtime.items[1].details,
        vec![
            "Container running without memory restrictions: web_1",
            "Container running without memory restrictions: cache_1"
        ]
    );
    // Trailing summary lines have no tag pattern and attach to the last open check
    assert_eq!(
        runtime.items[2].details,
        vec!["[INFO] Checks: 105", "[INFO] Score: 12"]
    );
}
