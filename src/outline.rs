use tracing::debug;

use crate::domain::{Node, Tag};
use crate::errors::ParseError;

/// Parses a Markdown outline (headings and flat `-` bullets) into a rooted
/// tree.
///
/// Blank lines are dropped before any line numbering happens, so node line
/// spans index into the blank-stripped sequence. When the input does not open
/// with a heading, a synthetic `# Mindmap` root is prepended at line 0. The
/// root is always level 1, however many `#` its source line carried.
pub fn parse(text: &str) -> Result<Node, ParseError> {
    let mut lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    if !lines[0].starts_with('#') {
        lines.insert(0, "# Mindmap");
    }
    debug!(lines = lines.len(), "parsing outline");

    let mut root = Node::heading(1, heading_content(lines[0]), 0);
    // Open headings, shallowest first. The node currently accepting bullets
    // is always the top (or the root while the stack is empty).
    let mut stack: Vec<Node> = Vec::new();

    for (line_number, &line) in lines.iter().enumerate().skip(1) {
        if line.starts_with('#') {
            let level = heading_level(line);
            // Trim by stack depth, not by heading level: a jump from h1
            // straight to h3 does not nest deeper than the depth count says.
            while stack.len() >= level.saturating_sub(1) {
                match stack.pop() {
                    Some(done) => attach(done, &mut stack, &mut root),
                    None => break,
                }
            }
            stack.push(Node::heading(level, heading_content(line), line_number));
        } else if line.starts_with('-') {
            let bullet = Node::bullet(bullet_content(line), line_number);
            match stack.last_mut() {
                Some(current) => current.children.push(bullet),
                None => root.children.push(bullet),
            }
        }
        // Anything else is outside the outline grammar: skipped, but it
        // still occupies a line number.
    }

    while let Some(done) = stack.pop() {
        attach(done, &mut stack, &mut root);
    }

    Ok(root)
}

fn attach(node: Node, stack: &mut Vec<Node>, root: &mut Node) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => root.children.push(node),
    }
}

// Level is the length of the first whitespace-delimited token, so the `#`
// run must be followed by a separator to count as its own token.
fn heading_level(line: &str) -> usize {
    line.split_whitespace().next().unwrap_or(line).len()
}

fn heading_content(line: &str) -> &str {
    line.trim_start_matches('#').trim()
}

fn bullet_content(line: &str) -> &str {
    line.trim_start_matches(['-', ' ']).trim()
}
