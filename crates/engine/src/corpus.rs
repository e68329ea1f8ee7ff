//! Corpus fragments
//!
//! The corpus is one UTF-8 text file. Fragments are separated by a blank
//! line and each fragment is a list of lines. Text is HTML-escaped once at
//! load time so fragments can be rendered directly.

use lexicon_core::Result;
use std::path::Path;

/// Escape `&`, `<` and `>` (and `"` when `quote` is set) for HTML output.
pub fn escape_html(text: &str, quote: bool) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' if quote => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// One blank-line-delimited block of corpus text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    lines: Vec<String>,
}

impl Fragment {
    /// Lines of the fragment; line numbers are indices into this slice
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the fragment has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Loaded corpus. Always holds at least one fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    fragments: Vec<Fragment>,
}

impl Corpus {
    /// Split raw text into fragments.
    ///
    /// Empty text yields a single fragment holding one empty line.
    pub fn from_text(text: &str) -> Self {
        let escaped = escape_html(text.trim(), false);
        let fragments = escaped
            .split("\n\n")
            .map(|part| Fragment {
                lines: part.split('\n').map(str::to_string).collect(),
            })
            .collect();
        Self { fragments }
    }

    /// Read and split a corpus file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let corpus = Self::from_text(&text);
        tracing::info!(
            target: "lexicon::corpus",
            path = %path.display(),
            fragments = corpus.len(),
            "Corpus loaded"
        );
        Ok(corpus)
    }

    /// Fragment by id, clamped into range.
    ///
    /// Returns the fragment and the id actually used.
    pub fn fragment(&self, id: i64) -> (&Fragment, usize) {
        let last = self.fragments.len() - 1;
        let effective = usize::try_from(id).map_or(0, |id| id.min(last));
        (&self.fragments[effective], effective)
    }

    /// Iterate all fragments
    pub fn fragments(&self) -> impl Iterator<Item = &Fragment> + '_ {
        self.fragments.iter()
    }

    /// Number of fragments
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Always `false`; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}
