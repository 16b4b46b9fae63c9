//! HTML digest rendering. One standalone page, built top to bottom.

use chrono::{DateTime, FixedOffset};
use paperscout_core::{AuthorMatch, Confidence, ScreenedPaper};

const STYLE: &str = "\
body { font-family: sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; }\n\
h1 { font-size: 1.4rem; }\n\
.run-time { color: #666; font-size: 0.9rem; }\n\
.paper { margin-bottom: 2rem; }\n\
.paper h2 { font-size: 1.1rem; margin-bottom: 0.2rem; }\n\
.meta { color: #666; font-size: 0.85rem; margin: 0.1rem 0; }\n\
.member.strong { background: #cfe8cf; font-weight: bold; }\n\
.member.weak { background: #f3e3b3; }\n";

/// Render the accepted papers into a standalone HTML digest.
#[must_use]
pub fn render_digest(papers: &[ScreenedPaper], run_time: DateTime<FixedOffset>) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Recent member papers</title>\n");
    html.push_str("<style>\n");
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str("<h1>Recent arXiv papers by group members</h1>\n");
    html.push_str(&format!(
        "<p class=\"run-time\">Generated {}</p>\n",
        run_time.format("%Y-%m-%d %H:%M %:z")
    ));

    if papers.is_empty() {
        html.push_str("<p>No recent papers matched the member roster.</p>\n");
    }

    for screened in papers {
        let paper = &screened.paper;
        html.push_str("<article class=\"paper\">\n");
        html.push_str(&format!(
            "<h2><a href=\"https://arxiv.org/abs/{}\">{}</a></h2>\n",
            escape(&paper.id),
            escape(&paper.title)
        ));
        html.push_str(&format!(
            "<p class=\"meta\">{} &middot; {} &middot; submitted {}</p>\n",
            escape(&paper.category),
            escape(&paper.id),
            paper.published.format("%Y-%m-%d")
        ));
        html.push_str(&format!(
            "<p class=\"authors\">{}</p>\n",
            render_byline(&screened.authors)
        ));
        html.push_str(&format!(
            "<p class=\"abstract\">{}</p>\n",
            escape(&paper.summary)
        ));
        html.push_str("</article>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_byline(authors: &[AuthorMatch]) -> String {
    let rendered: Vec<String> = authors
        .iter()
        .map(|author| match &author.matched {
            Some((entry, confidence)) => {
                let class = match confidence {
                    Confidence::Strong => "strong",
                    Confidence::Weak => "weak",
                };
                format!(
                    "<span class=\"member {class}\" title=\"{}\">{}</span>",
                    escape(&entry.display),
                    escape(&author.name)
                )
            }
            None => escape(&author.name),
        })
        .collect();
    rendered.join(", ")
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
