/// One line of header text as raw bytes, terminator included when present.
pub type Line = Vec<u8>;

/// Forward declarations emitted ahead of the rewritten header.
pub const FORWARD_DECLARATIONS: [&str; 2] = ["class CompressStream_t;", "class DeCompressStream_t;"];

/// The `streamTo(SourceStream &s)` declarations that get compress overloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamToDeclaration {
    PureVirtual,
    Virtual,
}

impl StreamToDeclaration {
    /// Match order: pure virtual first.
    pub const ALL: [StreamToDeclaration; 2] =
        [StreamToDeclaration::PureVirtual, StreamToDeclaration::Virtual];

    pub fn source_signature(self) -> &'static str {
        self.expansion()[0]
    }

    /// The declaration followed by its `CompressStream_t` and
    /// `DeCompressStream_t` overloads.
    pub fn expansion(self) -> [&'static str; 3] {
        match self {
            StreamToDeclaration::PureVirtual => [
                "virtual void streamTo(SourceStream &s) const = 0;",
                "virtual void streamTo(CompressStream_t &s) const = 0;",
                "virtual void streamTo(DeCompressStream_t &s) const = 0;",
            ],
            StreamToDeclaration::Virtual => [
                "virtual void streamTo(SourceStream &s) const;",
                "virtual void streamTo(CompressStream_t &s) const;",
                "virtual void streamTo(DeCompressStream_t &s) const;",
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteStats {
    pub lines_read: usize,
    pub declarations_expanded: usize,
    pub lines_written: usize,
}

/// Output lines carry no terminator; the loader adds one `\n` each.
#[derive(Debug, Clone, Default)]
pub struct RewriteResult {
    pub lines: Vec<Line>,
    pub stats: RewriteStats,
}
