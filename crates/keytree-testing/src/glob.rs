//! Redis-style glob patterns (`*`, `?`, `[...]`, `\` escapes) compiled to
//! anchored regular expressions.

use regex::Regex;

/// Compile a glob pattern into a regex matching whole keys.
pub fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    let mut out = String::from("(?s)^");
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            '\\' => match chars.next() {
                Some(escaped) => out.push_str(&regex::escape(&escaped.to_string())),
                None => out.push_str(r"\\"),
            },
            '[' => {
                let class: String = chars.clone().take_while(|&c| c != ']').collect();
                if chars.clone().nth(class.chars().count()).is_none() {
                    // unterminated class matches a literal bracket
                    out.push_str(r"\[");
                    continue;
                }
                for _ in 0..=class.chars().count() {
                    chars.next();
                }
                out.push_str(&class_to_regex(&class));
            }
            other => out.push_str(&regex::escape(&other.to_string())),
        }
    }

    out.push('$');
    Regex::new(&out)
}

fn class_to_regex(class: &str) -> String {
    let (negated, body) = match class.strip_prefix('^') {
        Some(rest) => (true, rest),
        None => (false, class),
    };

    let mut out = String::from(if negated { "[^" } else { "[" });
    let open_len = out.len();
    let mut chars = body.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '-' if out.len() > open_len && chars.peek().is_some() => out.push('-'),
            '\\' => {
                if let Some(escaped) = chars.next() {
                    out.push('\\');
                    out.push(escaped);
                }
            }
            '[' | ']' | '^' | '&' | '~' | '-' => {
                out.push('\\');
                out.push(c);
            }
            other => out.push(other),
        }
    }

    if body.is_empty() {
        // `[]` can never match, `[^]` matches any single character
        return if negated { "(?s:.)".to_string() } else { "[^\\s\\S]".to_string() };
    }

    out.push(']');
    out
}
