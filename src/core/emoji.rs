//! Emoji code-point set
//!
//! A fixed list of inclusive Unicode ranges treated as emoji, compiled once into a
//! regex character class. Counting and stripping both go through that class.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Inclusive code-point ranges removed by default.
///
/// Several ranges overlap (the supplemental symbols block sits inside the first
/// range). The effective set is their union.
pub const DEFAULT_RANGES: &[(u32, u32)] = &[
    (0x1F300, 0x1F9FF), // symbols and pictographs
    (0x1F600, 0x1F64F), // emoticons
    (0x1F900, 0x1F9FF), // supplemental symbols
    (0x1F1E0, 0x1F1FF), // regional indicators (flags)
    (0x2600, 0x26FF),   // misc symbols
    (0x2700, 0x27BF),   // dingbats
    (0x1F680, 0x1F6FF), // transport and map
    (0x1F700, 0x1F77F), // alchemical symbols
    (0x1F780, 0x1F7FF), // geometric shapes extended
];

static DEFAULT_SET: Lazy<EmojiRanges> = Lazy::new(|| {
    EmojiRanges::from_ranges(DEFAULT_RANGES).expect("Invalid default emoji ranges")
});

/// An immutable set of code-point ranges and the regex that matches any one of them.
#[derive(Debug, Clone)]
pub struct EmojiRanges {
    ranges: Vec<(u32, u32)>,
    /// `None` for an empty set
    pattern: Option<Regex>,
}

/// Result of stripping a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped<'a> {
    /// Text with every matching code point removed (borrowed when nothing matched)
    pub text: Cow<'a, str>,

    /// Number of code points removed
    pub removed: usize,
}

impl EmojiRanges {
    /// Build a set from inclusive `(start, end)` pairs.
    pub fn from_ranges(ranges: &[(u32, u32)]) -> Result<Self, regex::Error> {
        let pattern = if ranges.is_empty() {
            None
        } else {
            let class: String = ranges
                .iter()
                .map(|(start, end)| format!(r"\x{{{:X}}}-\x{{{:X}}}", start, end))
                .collect();
            Some(Regex::new(&format!("[{}]", class))?)
        };

        Ok(Self {
            ranges: ranges.to_vec(),
            pattern,
        })
    }

    /// The ranges this set was built from, in declaration order
    #[allow(dead_code)]
    pub fn ranges(&self) -> &[(u32, u32)] {
        &self.ranges
    }

    /// Check whether a single character falls in any range
    #[allow(dead_code)]
    pub fn contains(&self, c: char) -> bool {
        let cp = c as u32;
        self.ranges
            .iter()
            .any(|&(start, end)| start <= cp && cp <= end)
    }

    /// Count matching code points in `text`
    pub fn count(&self, text: &str) -> usize {
        self.pattern
            .as_ref()
            .map(|re| re.find_iter(text).count())
            .unwrap_or(0)
    }

    /// Remove every matching code point from `text`.
    ///
    /// Matches are deleted outright, so their neighbours become adjacent. Everything
    /// else, including line endings and a leading BOM, is kept verbatim.
    pub fn strip<'a>(&self, text: &'a str) -> Stripped<'a> {
        let removed = self.count(text);
        match &self.pattern {
            Some(re) if removed > 0 => Stripped {
                text: re.replace_all(text, ""),
                removed,
            },
            _ => Stripped {
                text: Cow::Borrowed(text),
                removed: 0,
            },
        }
    }
}

impl Default for EmojiRanges {
    fn default() -> Self {
        DEFAULT_SET.clone()
    }
}
