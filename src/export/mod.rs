//! Static HTML export of an analysis result set.
//!
//! One-shot serialization: the document embeds whatever fields are held at
//! export time and is meant for reading or printing, not for loading back.

use chrono::Local;

use crate::theme::ThemeId;
use crate::types::AnalysisData;

/// Render the held results as a standalone HTML document.
///
/// Empty sequence fields and absent long-form fields are simply omitted.
pub fn export_html(data: &AnalysisData, title: &str, theme: ThemeId) -> String {
    let palette = theme.config();
    let mut body = String::new();

    if !data.summary_zh.is_empty() {
        push_section_open(&mut body, "中文总结");
        for section in &data.summary_zh {
            body.push_str(&format!(
                "<h3>{}</h3>\n<p>{}</p>\n",
                escape(&section.title),
                escape(&section.content)
            ));
        }
        body.push_str("</section>\n");
    }

    if !data.summary_en.is_empty() {
        push_section_open(&mut body, "English Summary");
        for section in &data.summary_en {
            body.push_str(&format!(
                "<h3>{}</h3>\n<p>{}</p>\n",
                escape(&section.title),
                escape(&section.content)
            ));
        }
        body.push_str("</section>\n");
    }

    if !data.golden_sentences.is_empty() {
        push_section_open(&mut body, "金句 · Golden Sentences");
        for sentence in &data.golden_sentences {
            body.push_str(&format!(
                "<blockquote><p>{}</p><p class=\"muted\">{}</p></blockquote>\n",
                escape(&sentence.sentence),
                escape(&sentence.translation)
            ));
        }
        body.push_str("</section>\n");
    }

    if !data.vocabulary.is_empty() {
        push_section_open(&mut body, "词汇 · Vocabulary");
        body.push_str("<table>\n");
        for item in &data.vocabulary {
            body.push_str(&format!(
                "<tr><td><strong>{}</strong></td><td class=\"muted\">{} {}</td><td>{}</td></tr>\n",
                escape(&item.word),
                escape(&item.ipa),
                escape(&item.pos),
                escape(&item.meaning)
            ));
        }
        body.push_str("</table>\n</section>\n");
    }

    if let Some(plan) = &data.action_plan {
        push_section_open(&mut body, "行动指南 · Action Plan");
        body.push_str(&render_markdown(plan));
        body.push_str("</section>\n");
    }

    if let Some(review) = &data.review {
        push_section_open(&mut body, "书评 · Book Review");
        body.push_str(&render_markdown(review));
        body.push_str("</section>\n");
    }

    let timestamp = Local::now().format("%Y-%m-%d %H:%M");

    format!(
        "<!DOCTYPE html>\n<html lang=\"zh\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>\n\
         body {{ background: {bg}; color: {text}; font-family: {font}; \
         max-width: 48rem; margin: 0 auto; padding: 2rem 1.5rem; line-height: 1.7; }}\n\
         section {{ background: {card}; border: 1px solid {border}; \
         border-radius: 8px; padding: 1rem 1.5rem; margin: 1.5rem 0; }}\n\
         h1 {{ color: {accent}; }}\n\
         h2 {{ color: {accent}; border-bottom: 1px solid {border}; padding-bottom: 0.3rem; }}\n\
         blockquote {{ border-left: 3px solid {accent}; margin: 1rem 0; \
         padding: 0.2rem 1rem; background: {panel}; }}\n\
         table {{ border-collapse: collapse; width: 100%; }}\n\
         td {{ border-bottom: 1px solid {border}; padding: 0.4rem 0.6rem; \
         vertical-align: top; }}\n\
         .muted {{ color: {muted}; }}\n\
         footer {{ color: {muted}; font-size: 0.85rem; margin-top: 2rem; }}\n\
         </style>\n</head>\n<body>\n<h1>{title}</h1>\n{body}\
         <footer>Exported {timestamp}</footer>\n</body>\n</html>\n",
        title = escape(title),
        bg = palette.background,
        panel = palette.panel,
        card = palette.card,
        text = palette.text,
        muted = palette.muted,
        accent = palette.accent,
        border = palette.border,
        font = palette.font_family,
        body = body,
        timestamp = timestamp,
    )
}

fn push_section_open(body: &mut String, heading: &str) {
    body.push_str(&format!("<section>\n<h2>{}</h2>\n", escape(heading)));
}

/// Render the minimal markdown grammar the long-form generators emit:
/// `#`/`##`/`###` headers, `-`/`*` bullets, numbered lines, `>` blockquotes,
/// and `**bold**` spans. Everything else is a paragraph.
pub fn render_markdown(text: &str) -> String {
    let mut html = String::new();
    let mut in_list = false;

    for raw_line in text.lines() {
        let line = raw_line.trim();

        let is_bullet = line.starts_with("- ") || line.starts_with("* ") || is_numbered(line);
        if in_list && !is_bullet {
            html.push_str("</ul>\n");
            in_list = false;
        }

        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("### ") {
            html.push_str(&format!("<h4>{}</h4>\n", bold_spans(rest)));
        } else if let Some(rest) = line.strip_prefix("## ") {
            html.push_str(&format!("<h3>{}</h3>\n", bold_spans(rest)));
        } else if let Some(rest) = line.strip_prefix("# ") {
            html.push_str(&format!("<h2>{}</h2>\n", bold_spans(rest)));
        } else if let Some(rest) = line.strip_prefix("> ") {
            html.push_str(&format!("<blockquote>{}</blockquote>\n", bold_spans(rest)));
        } else if is_bullet {
            if !in_list {
                html.push_str("<ul>\n");
                in_list = true;
            }
            let item = line
                .strip_prefix("- ")
                .or_else(|| line.strip_prefix("* "))
                .unwrap_or_else(|| after_number(line));
            html.push_str(&format!("<li>{}</li>\n", bold_spans(item)));
        } else {
            html.push_str(&format!("<p>{}</p>\n", bold_spans(line)));
        }
    }

    if in_list {
        html.push_str("</ul>\n");
    }
    html
}

/// `1. item` style lines.
fn is_numbered(line: &str) -> bool {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    digits > 0
        && line[digits..].starts_with(". ")
}

fn after_number(line: &str) -> &str {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    &line[digits + 2..]
}

/// Escape, then turn `**bold**` pairs into `<strong>` spans.
fn bold_spans(text: &str) -> String {
    let escaped = escape(text);
    let mut out = String::with_capacity(escaped.len());
    let mut rest = escaped.as_str();
    let mut open = false;
    while let Some(pos) = rest.find("**") {
        out.push_str(&rest[..pos]);
        out.push_str(if open { "</strong>" } else { "<strong>" });
        open = !open;
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    if open {
        // Unbalanced marker: close the span rather than leak the tag.
        out.push_str("</strong>");
    }
    out
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GoldenSentence, SummarySection, VocabItem};
    use pretty_assertions::assert_eq;

    fn sample_data() -> AnalysisData {
        AnalysisData {
            summary_zh: vec![SummarySection {
                title: "核心论点".into(),
                content: "作者认为阅读是一种对话。".into(),
            }],
            golden_sentences: vec![GoldenSentence {
                sentence: "Reading is thinking with someone else's head.".into(),
                translation: "阅读是用别人的头脑思考。".into(),
                id: "1".into(),
            }],
            vocabulary: vec![VocabItem {
                word: "lectern".into(),
                ipa: "/ˈlektərn/".into(),
                pos: "n.".into(),
                meaning: "读经台".into(),
            }],
            action_plan: Some("## 本周行动\n- 每天读 **20** 分钟".into()),
            ..AnalysisData::default()
        }
    }

    #[test]
    fn export_embeds_held_fields_and_omits_absent_ones() {
        let html = export_html(&sample_data(), "深度工作", ThemeId::Song);

        assert!(html.contains("核心论点"));
        assert!(html.contains("阅读是用别人的头脑思考。"));
        assert!(html.contains("lectern"));
        assert!(html.contains("本周行动"));
        assert!(!html.contains("Book Review"));
        assert!(html.contains("#984B43"));
    }

    #[test]
    fn export_escapes_html_in_content() {
        let mut data = AnalysisData::default();
        data.summary_en = vec![SummarySection {
            title: "<script>".into(),
            content: "a & b".into(),
        }];
        let html = export_html(&data, "t", ThemeId::Modern);
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; b"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn markdown_headers_bullets_and_bold() {
        let html = render_markdown("# Title\n## Sub\n- one\n- **two**\nplain");
        assert_eq!(
            html,
            "<h2>Title</h2>\n<h3>Sub</h3>\n<ul>\n<li>one</li>\n\
             <li><strong>two</strong></li>\n</ul>\n<p>plain</p>\n"
        );
    }

    #[test]
    fn markdown_numbered_lines_and_blockquotes() {
        let html = render_markdown("1. first\n2. second\n\n> quoted");
        assert_eq!(
            html,
            "<ul>\n<li>first</li>\n<li>second</li>\n</ul>\n<blockquote>quoted</blockquote>\n"
        );
    }

    #[test]
    fn unbalanced_bold_marker_is_closed() {
        let html = render_markdown("**open");
        assert_eq!(html, "<p><strong>open</strong></p>\n");
    }
}
