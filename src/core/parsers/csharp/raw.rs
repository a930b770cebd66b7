/// Normalize the content captured between raw string delimiters.
///
/// Single-line raw strings are returned as-is. In the multi-line form the
/// opening and closing delimiter lines are dropped and the closing line's
/// whitespace is removed from the front of every content line.
pub(super) fn normalize_raw(content: &str) -> String {
    let Some((first, body)) = content.split_once('\n') else {
        return content.to_string();
    };
    if !first.trim().is_empty() {
        return content.to_string();
    }

    let (body, indent) = match body.rsplit_once('\n') {
        Some((body, last)) if last.trim().is_empty() => (body, last),
        None if body.trim().is_empty() => return String::new(),
        // Closing delimiter shares a line with content.
        _ => return body.to_string(),
    };
    let body = body.strip_suffix('\r').unwrap_or(body);

    body.split('\n')
        .map(|line| dedent_line(line, indent))
        .collect::<Vec<_>>()
        .join("\n")
}

fn dedent_line<'a>(line: &'a str, indent: &str) -> &'a str {
    if line.trim().is_empty() {
        return if line.ends_with('\r') { "\r" } else { "" };
    }
    line.strip_prefix(indent)
        .unwrap_or_else(|| line.trim_start())
}
