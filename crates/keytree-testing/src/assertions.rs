//! Structural assertions over rendered tree text.
//!
//! Lines are parsed back into (depth, label, is_last) using either glyph set;
//! continuation lines of wrapped values are skipped.

use anyhow::Result;

const RAILS: [&str; 3] = ["│   ", "|   ", "    "];
const BRANCHES: [(&str, bool); 4] = [
    ("├── ", false),
    ("└── ", true),
    ("|-- ", false),
    ("`-- ", true),
];

/// A tree line parsed back from output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub depth: usize,
    pub label: String,
    pub is_last: bool,
}

/// Parse every branch line of `output`
pub fn parse_tree(output: &str) -> Vec<ParsedLine> {
    output.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<ParsedLine> {
    let mut rest = line;
    let mut depth = 0;
    loop {
        if let Some((glyph, is_last)) = BRANCHES.iter().find(|(g, _)| rest.starts_with(g)) {
            let body = &rest[glyph.len()..];
            let label = body.split(" # ").next().unwrap_or(body).trim_end();
            return Some(ParsedLine {
                depth,
                label: label.to_string(),
                is_last: *is_last,
            });
        }
        let rail = RAILS.iter().find(|r| rest.starts_with(*r))?;
        rest = &rest[rail.len()..];
        depth += 1;
    }
}

/// Siblings must appear in strictly ascending label order at every level.
pub fn assert_siblings_sorted(output: &str) -> Result<()> {
    let mut previous: Vec<Option<String>> = Vec::new();

    for line in parse_tree(output) {
        previous.truncate(line.depth + 1);
        previous.resize(line.depth + 1, None);

        if let Some(prev) = &previous[line.depth]
            && prev.as_str() >= line.label.as_str()
        {
            anyhow::bail!(
                "'{}' rendered after '{}' at depth {}",
                line.label,
                prev,
                line.depth
            );
        }
        previous[line.depth] = Some(line.label);
    }

    Ok(())
}

/// Every sibling group must end with exactly one last-branch line.
pub fn assert_single_last_per_level(output: &str) -> Result<()> {
    // per depth: whether the latest sibling drew the last-branch glyph
    let mut closed: Vec<bool> = Vec::new();

    for line in parse_tree(output) {
        for (depth, is_closed) in closed.iter().enumerate().skip(line.depth + 1) {
            if !is_closed {
                anyhow::bail!("group at depth {} ended without a last branch", depth);
            }
        }
        closed.truncate(line.depth + 1);

        if closed.get(line.depth) == Some(&true) {
            anyhow::bail!(
                "'{}' follows a last branch at depth {}",
                line.label,
                line.depth
            );
        }
        closed.resize(line.depth + 1, false);
        closed[line.depth] = line.is_last;
    }

    if let Some(depth) = closed.iter().position(|closed| !closed) {
        anyhow::bail!("group at depth {} ended without a last branch", depth);
    }

    Ok(())
}
