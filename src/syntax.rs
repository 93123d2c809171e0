//! Syntax highlighting: language profiles and the per-row lexical classifier.

use crossterm::style::Color;

/// Display category of a single rendered byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Highlight {
    #[default]
    Normal,
    Comment,
    /// Primary keywords (control flow, declarations).
    Keyword1,
    /// Secondary keywords (types).
    Keyword2,
    String,
    Number,
    /// Overlay used by incremental search.
    Match,
}

impl Highlight {
    /// Foreground color used when drawing this category.
    pub fn color(self) -> Color {
        match self {
            Self::Comment => Color::Cyan,
            Self::Keyword1 => Color::Yellow,
            Self::Keyword2 => Color::Green,
            Self::String => Color::Magenta,
            Self::Number => Color::Red,
            Self::Match => Color::Blue,
            Self::Normal => Color::Reset,
        }
    }
}

/// Static ruleset for one file type.
#[derive(Debug)]
pub struct LanguageProfile {
    /// Shown in the status bar.
    pub name: &'static str,
    /// Patterns starting with `.` match the file extension; others match as substrings.
    pub filematch: &'static [&'static str],
    /// Keywords; a trailing `|` marks a secondary (type) keyword.
    pub keywords: &'static [&'static str],
    pub singleline_comment: &'static str,
    pub highlight_numbers: bool,
    pub highlight_strings: bool,
}

const C_KEYWORDS: &[&str] = &[
    "switch", "if", "while", "for", "break", "continue", "return", "else", "struct", "union",
    "typedef", "static", "enum", "class", "case", "default", "do", "goto", "sizeof", "const",
    "int|", "long|", "double|", "float|", "char|", "unsigned|", "signed|", "void|", "short|",
    "bool|", "size_t|",
];

const RUST_KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for",
    "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
    "self", "static", "struct", "super", "trait", "true", "type", "unsafe", "use", "where",
    "while", "i8|", "i16|", "i32|", "i64|", "i128|", "isize|", "u8|", "u16|", "u32|", "u64|",
    "u128|", "usize|", "f32|", "f64|", "bool|", "char|", "str|", "String|", "Self|", "Option|",
    "Result|", "Vec|", "Box|",
];

const PYTHON_KEYWORDS: &[&str] = &[
    "and", "as", "assert", "break", "class", "continue", "def", "del", "elif", "else", "except",
    "finally", "for", "from", "global", "if", "import", "in", "is", "lambda", "not", "or",
    "pass", "raise", "return", "try", "while", "with", "yield", "None|", "True|", "False|",
    "int|", "float|", "str|", "list|", "dict|", "tuple|", "set|", "bytes|", "self|",
];

/// Every known language profile, searched in order.
pub static LANGUAGES: &[LanguageProfile] = &[
    LanguageProfile {
        name: "c",
        filematch: &[".c", ".h", ".cpp", ".hpp", ".cc"],
        keywords: C_KEYWORDS,
        singleline_comment: "//",
        highlight_numbers: true,
        highlight_strings: true,
    },
    LanguageProfile {
        name: "rust",
        filematch: &[".rs"],
        keywords: RUST_KEYWORDS,
        singleline_comment: "//",
        highlight_numbers: true,
        highlight_strings: true,
    },
    LanguageProfile {
        name: "python",
        filematch: &[".py"],
        keywords: PYTHON_KEYWORDS,
        singleline_comment: "#",
        highlight_numbers: true,
        highlight_strings: true,
    },
];

/// Find the profile for `filename`, if any.
pub fn select_profile(filename: &str) -> Option<&'static LanguageProfile> {
    let ext = filename.rfind('.').map(|i| &filename[i..]);
    LANGUAGES.iter().find(|lang| {
        lang.filematch.iter().any(|pat| {
            if pat.starts_with('.') {
                ext == Some(*pat)
            } else {
                filename.contains(pat)
            }
        })
    })
}

/// Whitespace, NUL, or punctuation that can bound a token.
pub fn is_separator(c: u8) -> bool {
    c.is_ascii_whitespace() || c == 0 || b",.()+-/*=~%<>[];".contains(&c)
}

/// Longest keyword starting at `text[0]` and followed by a separator (or end of row).
fn match_keyword(text: &[u8], keywords: &[&str]) -> Option<(usize, Highlight)> {
    keywords
        .iter()
        .filter_map(|kw| {
            let (word, class) = match kw.strip_suffix('|') {
                Some(w) => (w.as_bytes(), Highlight::Keyword2),
                None => (kw.as_bytes(), Highlight::Keyword1),
            };
            let bounded = text.get(word.len()).map_or(true, |&c| is_separator(c));
            (text.starts_with(word) && bounded).then_some((word.len(), class))
        })
        .max_by_key(|&(len, _)| len)
}

/// Classify every byte of `render`.
///
/// Scanning is row-local: strings and comments never continue onto the next row.
/// The result always has the same length as `render`.
pub fn highlight(render: &[u8], syntax: Option<&LanguageProfile>) -> Vec<Highlight> {
    let mut hl = vec![Highlight::Normal; render.len()];
    let Some(syntax) = syntax else { return hl };

    let comment = syntax.singleline_comment.as_bytes();
    let mut prev_sep = true;
    let mut in_string: Option<u8> = None;

    let mut i = 0;
    while i < render.len() {
        let c = render[i];
        let prev_hl = if i > 0 { hl[i - 1] } else { Highlight::Normal };

        if !comment.is_empty() && in_string.is_none() && render[i..].starts_with(comment) {
            hl[i..].fill(Highlight::Comment);
            break;
        }

        if let Some(quote) = in_string {
            hl[i] = Highlight::String;
            if c == b'\\' && i + 1 < render.len() {
                hl[i + 1] = Highlight::String;
                i += 2;
                continue;
            }
            if c == quote {
                in_string = None;
            }
            prev_sep = true;
            i += 1;
            continue;
        }

        if syntax.highlight_strings && (c == b'"' || c == b'\'') {
            in_string = Some(c);
            hl[i] = Highlight::String;
            i += 1;
            continue;
        }

        if syntax.highlight_numbers
            && ((c.is_ascii_digit() && (prev_sep || prev_hl == Highlight::Number))
                || (c == b'.' && prev_hl == Highlight::Number))
        {
            hl[i] = Highlight::Number;
            prev_sep = false;
            i += 1;
            continue;
        }

        if prev_sep {
            if let Some((len, class)) = match_keyword(&render[i..], syntax.keywords) {
                hl[i..i + len].fill(class);
                prev_sep = false;
                i += len;
                continue;
            }
        }

        prev_sep = is_separator(c);
        i += 1;
    }

    hl
}
