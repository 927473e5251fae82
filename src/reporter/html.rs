//! HTML reporter: generates a self-contained interactive report
//!
//! Rows are rendered server-side with every piece of benchmark text escaped;
//! a few lines of vanilla JS toggle row visibility by status.

use crate::{Item, Report, Section, Status, StatusCounts, DEFAULT_TITLE};

/// Escape text for element content and quoted attribute values
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Reporter that generates a self-contained HTML page
#[derive(Debug, Clone)]
pub struct HtmlReporter {
    title: String,
    show_hint: bool,
}

impl HtmlReporter {
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            show_hint: true,
        }
    }

    /// Set the page title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Omit the footer explaining how to open the file off-server
    pub fn without_hint(mut self) -> Self {
        self.show_hint = false;
        self
    }

    /// Generate the full HTML report stamped with the current local time
    pub fn report(&self, report: &Report) -> String {
        self.report_at(report, &super::generated_now())
    }

    /// Generate the full HTML report with a fixed generation timestamp
    pub fn report_at(&self, report: &Report, generated: &str) -> String {
        let title = escape_html(&self.title);

        let mut html = String::with_capacity(16_384 + report.item_count() * 256);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        html.push_str(&format!("<title>{}</title>\n", title));
        html.push_str(Self::template_style());
        html.push_str("</head>\n<body>\n<div class=\"wrap\">\n");

        html.push_str(&format!(
            "<header class=\"top\">\n  <div>\n    <h1>{}</h1>\n    <div class=\"meta\">Generated: {}</div>\n  </div>\n  <div class=\"meta\">Filter by status, collapse sections for readability</div>\n</header>\n",
            title,
            escape_html(generated)
        ));

        if !report.preface.is_empty() {
            html.push_str("<pre class=\"preface\">");
            html.push_str(&escape_html(&report.preface.join("\n")));
            html.push_str("</pre>\n");
        }

        html.push_str(&Self::render_cards(&report.counts()));
        html.push_str(&Self::render_filters());

        for section in &report.sections {
            html.push_str(&Self::render_section(section));
        }

        if self.show_hint {
            html.push_str(Self::template_hint());
        }

        html.push_str("</div>\n");
        html.push_str(Self::template_script());
        html.push_str("</body>\n</html>\n");
        html
    }

    fn render_cards(counts: &StatusCounts) -> String {
        let mut html = String::from("<div class=\"cards\">\n");
        for (status, count) in counts.iter() {
            html.push_str(&format!(
                "  <div class=\"card\"><div class=\"k\">{}</div><div class=\"v c-{}\" id=\"count-{}\">{}</div></div>\n",
                status,
                status.css_class(),
                status.css_class(),
                count
            ));
        }
        html.push_str("</div>\n");
        html
    }

    fn render_filters() -> String {
        let mut html = String::from("<div class=\"filter\">\n  <strong>Show:</strong>\n");
        for status in Status::ALL {
            html.push_str(&format!(
                "  <label><input type=\"checkbox\" class=\"flt\" value=\"{}\" checked> {}</label>\n",
                status, status
            ));
        }
        html.push_str("  <span class=\"badge\" id=\"shown\"></span>\n</div>\n");
        html
    }

    fn render_section(section: &Section) -> String {
        let mut html = String::with_capacity(1024 + section.items.len() * 256);
        html.push_str("<details class=\"section\" open>\n  <summary>\n");
        html.push_str(&format!(
            "    <span class=\"sectitle\">{} - {}</span>\n    <span class=\"secmeta\">",
            escape_html(&section.id),
            escape_html(&section.title)
        ));
        for (status, count) in section.counts().iter() {
            html.push_str(&format!(
                "<span class=\"badge {}\">{} {}</span>",
                status.css_class(),
                status,
                count
            ));
        }
        html.push_str("</span>\n  </summary>\n");
        html.push_str("  <table class=\"tbl\">\n    <thead><tr><th>Status</th><th>ID</th><th>Description</th><th>Details</th></tr></thead>\n    <tbody>\n");
        for item in &section.items {
            html.push_str(&Self::render_row(item));
        }
        html.push_str("    </tbody>\n  </table>\n</details>\n");
        html
    }

    fn render_row(item: &Item) -> String {
        let details = item
            .details
            .iter()
            .map(|d| escape_html(d))
            .collect::<Vec<_>>()
            .join("<br>");
        format!(
            "      <tr class=\"row\" data-status=\"{}\"><td class=\"status {}\">{}</td><td class=\"checkid\">{}</td><td class=\"desc\">{}</td><td class=\"details\">{}</td></tr>\n",
            item.status,
            item.status.css_class(),
            item.status,
            escape_html(&item.id),
            escape_html(&item.description),
            details
        )
    }

    // ─── HTML template pieces ────────────────────────────────────────────

    fn template_style() -> &'static str {
        r##"<style>
:root{--bg:#0b1020;--panel:#121a33;--muted:#8ea0c5;--text:#e9eefc;--line:rgba(255,255,255,.08);--pass:#1fba7a;--warn:#ff5a5f;--note:#ffb020;--info:#4da3ff;--radius:14px}
*{box-sizing:border-box}
body{margin:0;font-family:ui-sans-serif,system-ui,-apple-system,'Segoe UI',Roboto,'Noto Sans',Arial,sans-serif;background:radial-gradient(1200px 600px at 10% 0%,rgba(77,163,255,.18),transparent 60%),radial-gradient(900px 500px at 90% 10%,rgba(31,186,122,.14),transparent 55%),var(--bg);color:var(--text);line-height:1.5}
.wrap{max-width:1200px;margin:0 auto;padding:24px}

/* ── Header ── */
.top{display:flex;gap:16px;flex-wrap:wrap;align-items:center;justify-content:space-between;margin-bottom:16px}
h1{font-size:20px;margin:0;letter-spacing:.2px}
.meta{color:var(--muted);font-size:13px}
.preface{margin:0 0 14px;padding:12px 14px;border-radius:var(--radius);border:1px solid var(--line);background:rgba(255,255,255,.03);color:rgba(233,238,252,.9);overflow:auto}

/* ── Summary cards ── */
.cards{display:flex;gap:10px;flex-wrap:wrap;margin:10px 0 18px}
.card{background:linear-gradient(180deg,rgba(255,255,255,.06),rgba(255,255,255,.03));border:1px solid var(--line);border-radius:var(--radius);padding:12px 14px;min-width:140px;box-shadow:0 8px 20px rgba(0,0,0,.25)}
.card .k{font-size:12px;color:var(--muted)}
.card .v{font-size:22px;font-weight:700;margin-top:6px}

/* ── Filters ── */
.filter{background:rgba(255,255,255,.04);border:1px solid var(--line);border-radius:var(--radius);padding:12px 14px;margin-bottom:18px}
.filter label{margin-right:14px;cursor:pointer;user-select:none}
.badge{display:inline-block;padding:4px 8px;border-radius:999px;font-size:12px;margin-left:6px;border:1px solid var(--line);background:rgba(255,255,255,.04)}

/* ── Sections ── */
.section{background:rgba(255,255,255,.03);border:1px solid var(--line);border-radius:16px;margin-bottom:12px;overflow:hidden}
summary{list-style:none;display:flex;gap:10px;align-items:center;justify-content:space-between;padding:14px;cursor:pointer;background:rgba(255,255,255,.03)}
summary::-webkit-details-marker{display:none}
.sectitle{font-weight:700}
.secmeta{display:flex;gap:6px;flex-wrap:wrap;justify-content:flex-end}

/* ── Check table ── */
.tbl{width:100%;border-collapse:collapse;font-size:13px}
.tbl th,.tbl td{border-top:1px solid var(--line);padding:10px 12px;vertical-align:top}
.tbl th{text-align:left;color:var(--muted);font-weight:600;background:rgba(255,255,255,.02)}
.status{font-weight:800;letter-spacing:.2px;width:72px;white-space:nowrap}
.checkid{width:90px;color:var(--muted);white-space:nowrap}
.details{color:rgba(233,238,252,.9)}
.hint{margin-top:14px;color:var(--muted);font-size:12px}

/* ── Status colors ── */
.c-pass,.badge.pass,.status.pass{color:var(--pass)}
.c-warn,.badge.warn,.status.warn{color:var(--warn)}
.c-note,.badge.note,.status.note{color:var(--note)}
.c-info,.badge.info,.status.info{color:var(--info)}
</style>
"##
    }

    fn template_hint() -> &'static str {
        r##"<div class="hint">
  No browser on the server? Copy the report to your workstation (<code>scp user@server:/path/to/report.html .</code>)<br>
  or serve its directory temporarily with <code>python3 -m http.server</code>.
</div>
"##
    }

    fn template_script() -> &'static str {
        r##"<script>
(function(){
"use strict";
function applyFilters(){
  const allowed=new Set([...document.querySelectorAll('.flt')].filter(c=>c.checked).map(c=>c.value));
  let shown=0;
  document.querySelectorAll('tr.row').forEach(r=>{
    const ok=allowed.has(r.dataset.status);
    r.style.display=ok?'':'none';
    if(ok) shown++;
  });
  document.getElementById('shown').textContent='Showing '+shown+' checks';
}
document.querySelectorAll('.flt').forEach(c=>c.addEventListener('change',applyFilters));
applyFilters();
})();
</script>
"##
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}
