//! Pure text transforms shared by the built-in engines.
//!
//! Nothing in here touches the network or the filesystem, so every rule can
//! be checked against fixed input.

use regex::Regex;
use std::sync::LazyLock;

pub const TITLE_PLACEHOLDER: &str = "Title not found";

static LINE_BREAK_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());

static MARKUP_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</?[^>]+(>|$)").unwrap());

static TRIBUN_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bTribun\w*\b").unwrap());

static DOMAIN_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b\w+\.(com|co\.id|net|org|id)\b").unwrap());

static LEADING_NON_LETTERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[^a-zA-Z]+").unwrap());

static TRAILING_BLANKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)[ \t]+$").unwrap());

static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<h1>(.*?)</h1>").unwrap());

static BOILERPLATE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)tonton juga|baca juga|copyright|video").unwrap());

static INTRO_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\[?intro\]?").unwrap());

// Bare site tokens only match as whole words so that lyrics such as
// "kembali" or "come" survive.
static LYRICS_PHRASES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)(Tonton juga|Berita terpopuler|Rekomendasi chord|Baca juga|Chord lainnya|",
        r"Baca selengkapnya|Baca:|Simak juga|Sumber:|Link:|Copyright|Video:|Viral:|Lihat Juga|",
        // Whole words only, unlike a plain substring strip.
        r"BANGKAPOS\.COM|\bDENPASAR\b|\bBALI\b|\bMANADO\b|\bCOM\b)"
    ))
    .unwrap()
});

static CHORD_PHRASES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)(Tonton juga|Berita terpopuler|Rekomendasi chord|Baca juga|Chord lainnya|",
        r"Baca selengkapnya|Baca:|Simak juga|Sumber:|Link:|Copyright|Video:|Viral:|Lihat Juga|",
        // Whole word, so "Community" keeps its prefix.
        r"\bCOM\b)"
    ))
    .unwrap()
});

/// When boilerplate lines are dropped relative to cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFilter {
    BeforeCleaning,
    AfterCleaning,
}

#[derive(Debug, Clone, Copy)]
pub struct CleaningProfile {
    phrases: &'static LazyLock<Regex>,
    line_filter: LineFilter,
    body_placeholder: &'static str,
}

impl CleaningProfile {
    pub fn lyrics() -> Self {
        Self {
            phrases: &LYRICS_PHRASES,
            line_filter: LineFilter::BeforeCleaning,
            body_placeholder: "Lyrics not found",
        }
    }

    pub fn chord() -> Self {
        Self {
            phrases: &CHORD_PHRASES,
            line_filter: LineFilter::AfterCleaning,
            body_placeholder: "Chord not found",
        }
    }

    pub fn body_placeholder(&self) -> &'static str {
        self.body_placeholder
    }

    pub fn line_filter(&self) -> LineFilter {
        self.line_filter
    }

    fn phrases(&self) -> &Regex {
        self.phrases
    }
}

/// Title hint and body pulled from a page, before title resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetDraft {
    pub title_hint: String,
    pub body: String,
}

pub fn clean_text(text: &str, profile: &CleaningProfile) -> String {
    let text = LINE_BREAK_TAG.replace_all(text, "\n");
    let text = MARKUP_TAG.replace_all(&text, "");
    let text = profile.phrases().replace_all(&text, "");
    let text = TRIBUN_TOKEN.replace_all(&text, "");
    let text = DOMAIN_TOKEN.replace_all(&text, "");
    let text = LEADING_NON_LETTERS.replace_all(&text, "");
    let text = TRAILING_BLANKS.replace_all(&text, "");
    text.trim().to_string()
}

pub fn is_boilerplate_line(line: &str) -> bool {
    line.contains("berita") || line.contains("Tribun") || BOILERPLATE_MARKER.is_match(line)
}

/// Cleaned text of the first `<h1>` on the page, if it has any letters left.
pub fn extract_title_hint(raw: &str, profile: &CleaningProfile) -> Option<String> {
    let heading = HEADING.captures(raw)?.get(1)?.as_str();
    let cleaned = clean_text(heading, profile);
    (!cleaned.is_empty()).then_some(cleaned)
}

pub fn extract_body(raw: &str, profile: &CleaningProfile) -> Option<String> {
    let lines: Vec<String> = match profile.line_filter() {
        LineFilter::BeforeCleaning => raw
            .lines()
            .filter(|line| !is_boilerplate_line(line))
            .map(|line| clean_text(line, profile))
            .filter(|line| !line.is_empty())
            .collect(),
        LineFilter::AfterCleaning => raw
            .lines()
            .map(|line| clean_text(line, profile))
            .filter(|line| !line.is_empty())
            .filter(|line| !is_boilerplate_line(line))
            .collect(),
    };

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

/// Drops everything above the first intro marker line, if there is one.
pub fn trim_to_intro(body: &str) -> String {
    let lines: Vec<&str> = body.split('\n').collect();
    match lines.iter().position(|line| INTRO_MARKER.is_match(line)) {
        Some(index) => lines[index..].join("\n"),
        None => body.to_string(),
    }
}

pub fn draft_sheet(raw: &str, profile: &CleaningProfile) -> SheetDraft {
    let title_hint =
        extract_title_hint(raw, profile).unwrap_or_else(|| TITLE_PLACEHOLDER.to_string());
    let body = match extract_body(raw, profile) {
        Some(body) => trim_to_intro(&body),
        None => profile.body_placeholder().to_string(),
    };

    SheetDraft { title_hint, body }
}
