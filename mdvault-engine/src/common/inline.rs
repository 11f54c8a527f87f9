//! Inline text rewriting.

use std::borrow::Cow;

/// A matched code span: byte offsets of the opening run, the content and the run length.
struct CodeSpan {
    open: usize,
    content: std::ops::Range<usize>,
    run: usize,
}

/// Finds every code span in `text`. Returns `None` when some backtick run has no
/// closing run of the same length, since rewriting around a literal backtick could
/// change which runs pair up.
fn code_spans(text: &str) -> Option<Vec<CodeSpan>> {
    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'`' => {
                let open = i;
                while i < bytes.len() && bytes[i] == b'`' {
                    i += 1;
                }
                let run = i - open;
                let close = closing_run(bytes, i, run)?;
                spans.push(CodeSpan {
                    open,
                    content: i..close,
                    run,
                });
                i = close + run;
            }
            _ => i += 1,
        }
    }
    Some(spans)
}

fn closing_run(bytes: &[u8], from: usize, run: usize) -> Option<usize> {
    let mut j = from;
    while j < bytes.len() {
        if bytes[j] == b'`' {
            let start = j;
            while j < bytes.len() && bytes[j] == b'`' {
                j += 1;
            }
            if j - start == run {
                return Some(start);
            }
        } else {
            j += 1;
        }
    }
    None
}

/// Rewrites ``` ``code`` ``` spans as `` `code` `` when the content holds no backtick.
pub fn normalize_code_spans(text: &str) -> Cow<'_, str> {
    let Some(spans) = code_spans(text) else {
        return Cow::Borrowed(text);
    };
    let rewritable: Vec<&CodeSpan> = spans
        .iter()
        .filter(|span| span.run == 2 && !text[span.content.clone()].contains('`'))
        .collect();
    if rewritable.is_empty() {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for span in rewritable {
        out.push_str(&text[last..span.open]);
        out.push('`');
        out.push_str(&text[span.content.clone()]);
        out.push('`');
        last = span.content.end + span.run;
    }
    out.push_str(&text[last..]);
    Cow::Owned(out)
}
