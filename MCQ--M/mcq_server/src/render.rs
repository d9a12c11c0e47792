use std::fmt::Write as _;

use mcq_nlp::Mcq;

const STYLE: &str = "body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}\
li.answer{font-weight:bold}textarea{width:100%}";

/// Entry page with a text area and a file upload.
#[must_use]
pub fn index_page() -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\">\
<title>MCQ Generator</title><style>{STYLE}</style></head>\n<body>\n\
<h1>MCQ Generator</h1>\n\
<form action=\"/generate_mcqs/\" method=\"post\" enctype=\"multipart/form-data\">\n\
<p><label for=\"text\">Paste text</label><br>\
<textarea id=\"text\" name=\"text\" rows=\"10\"></textarea></p>\n\
<p><label for=\"file\">or upload a .txt or .pdf file</label><br>\
<input id=\"file\" type=\"file\" name=\"file\" accept=\".txt,.pdf\"></p>\n\
<p><button type=\"submit\">Generate</button></p>\n</form>\n</body>\n</html>\n"
    )
}

/// Results page listing each question with its options, answer marked.
#[must_use]
pub fn results_page(mcqs: &[Mcq]) -> String {
    let mut body = String::new();
    if mcqs.is_empty() {
        body.push_str("<p>No questions could be generated from this input.</p>\n");
    }
    for (number, mcq) in mcqs.iter().enumerate() {
        let _ = writeln!(
            body,
            "<section class=\"mcq\">\n<h2>Question {}</h2>\n<p>{}</p>\n<ol type=\"A\">",
            number + 1,
            escape(&mcq.question)
        );
        for (index, option) in mcq.options.iter().enumerate() {
            let class = if index + 1 == mcq.answer_option {
                " class=\"answer\""
            } else {
                ""
            };
            let _ = writeln!(body, "<li{class}>{}</li>", escape(option));
        }
        let _ = writeln!(
            body,
            "</ol>\n<p>Answer: option {} ({})</p>\n</section>",
            mcq.answer_option,
            escape(&mcq.answer)
        );
    }
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\">\
<title>Generated MCQs</title><style>{STYLE}</style></head>\n<body>\n\
<h1>Generated MCQs</h1>\n{body}<p><a href=\"/\">Generate more</a></p>\n</body>\n</html>\n"
    )
}

/// Escapes text for HTML element content and attribute values.
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
