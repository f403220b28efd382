//! Line-by-line rewrite of a C++ header: forward-declares the compress
//! stream types and adds `streamTo` overloads for them next to every
//! `streamTo(SourceStream &s)` declaration.

use crate::core::{Line, RewriteResult, RewriteStats, StreamToDeclaration, FORWARD_DECLARATIONS};

fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c')
}

pub fn trim_end(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .rposition(|&b| !is_whitespace(b))
        .map_or(0, |pos| pos + 1);
    &line[..end]
}

pub fn trim(line: &[u8]) -> &[u8] {
    let line = trim_end(line);
    let start = line
        .iter()
        .position(|&b| !is_whitespace(b))
        .unwrap_or(line.len());
    &line[start..]
}

/// Exact comparison of the trimmed line against the known signatures.
pub fn classify(line: &[u8]) -> Option<StreamToDeclaration> {
    let trimmed = trim(line);
    StreamToDeclaration::ALL
        .into_iter()
        .find(|decl| decl.source_signature().as_bytes() == trimmed)
}

/// Appends the output for one input line and returns the declaration it
/// matched, if any.
pub fn rewrite_line(line: &[u8], out: &mut Vec<Line>) -> Option<StreamToDeclaration> {
    match classify(line) {
        Some(decl) => {
            out.extend(decl.expansion().iter().map(|s| s.as_bytes().to_vec()));
            Some(decl)
        }
        None => {
            out.push(trim_end(line).to_vec());
            None
        }
    }
}

pub fn rewrite<I>(lines: I) -> RewriteResult
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut out: Vec<Line> = FORWARD_DECLARATIONS
        .iter()
        .map(|s| s.as_bytes().to_vec())
        .collect();
    let mut stats = RewriteStats::default();

    for line in lines {
        let line = line.as_ref();
        stats.lines_read += 1;
        if let Some(decl) = rewrite_line(line, &mut out) {
            stats.declarations_expanded += 1;
            tracing::trace!(
                "Expanded {:?} declaration at line {}",
                decl,
                stats.lines_read
            );
        }
    }

    stats.lines_written = out.len();
    RewriteResult { lines: out, stats }
}
