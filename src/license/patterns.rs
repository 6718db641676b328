use lazy_static::lazy_static;
use regex::Regex;

/// One labelled pattern of a [`PatternTable`]
#[derive(Debug)]
pub struct PatternEntry {
    pub pattern: Regex,
    pub label: &'static str,
}

/// An ordered list of patterns where the first match wins
///
/// Order carries meaning: specific variants must come before the general
/// patterns that would also match them.
#[derive(Debug)]
pub struct PatternTable {
    entries: Vec<PatternEntry>,
}

impl PatternTable {
    /// Compile a table from `(regex, label)` pairs, keeping their order
    ///
    /// Panics on an invalid regex; tables are built from literals only.
    pub fn new(patterns: &[(&str, &'static str)]) -> Self {
        let entries = patterns
            .iter()
            .map(|(pattern, label)| PatternEntry {
                pattern: Regex::new(pattern).unwrap(),
                label,
            })
            .collect();
        Self { entries }
    }

    /// The first entry in table order whose pattern matches `text`
    pub fn first_match(&self, text: &str) -> Option<&PatternEntry> {
        self.entries.iter().find(|entry| entry.pattern.is_match(text))
    }

    /// Position of the first entry carrying `label`
    pub fn position(&self, label: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.label == label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

lazy_static! {
    /// Open-source licenses accepted for publication
    pub static ref LICENSE_PATTERNS: PatternTable = PatternTable::new(&[
        (r"(?i)\bsil\s+open\s+font\s+licen[cs]e\b|\bopen\s+font\s+licen[cs]e\b", "OFL"),
        (r"(?i)\bofl\b", "OFL"),
        (r"(?i)\bapache\s+licen[cs]e\b|\bapache[\s-]*2(\.0)?\b", "Apache-2.0"),
        // Bare "mit" is also a German word; only the upper-case acronym counts
        (r"(?i:\bmit\s+licen[cs]e\b)|\bMIT\b", "MIT"),
        (r"(?i)\bbsd\b", "BSD"),
        (r"(?i)\bcc0\b|\bcreative\s+commons\s+zero\b", "CC0"),
        (r"(?i)\bcreative\s+commons\b|\bcc[\s-]by\b", "Creative Commons"),
        (r"(?i)\bpublic\s+domain\b", "Public Domain"),
        (r"(?i)\bagpl\b|\bgnu\s+affero\s+general\s+public\s+licen[cs]e\b", "AGPL"),
        (r"(?i)\blgpl\b|\bgnu\s+(lesser|library)\s+general\s+public\s+licen[cs]e\b", "LGPL"),
        (r"(?i)\bgpl\b|\bgeneral\s+public\s+licen[cs]e\b", "GPL"),
        (r"(?i)\bubuntu\s+font\s+licen[cs]e\b|\bufl\b", "UFL"),
        (r"(?i)\bbitstream\s+vera\b", "Bitstream Vera"),
    ]);

    /// Copyright phrases that point at a commercial rights holder
    pub static ref COMMERCIAL_INDICATORS: PatternTable = PatternTable::new(&[
        (r"(?i)\bmonotype\b", "Monotype"),
        (r"(?i)\blinotype\b", "Linotype"),
        (r"(?i)\badobe\b", "Adobe"),
        (r"(?i)\binternational\s+typeface\s+corporation\b|\bitc\b", "ITC"),
        (r"(?i)\bhoefler\b|\bh&co\b", "Hoefler&Co"),
        (r"(?i)\bfont\s+bureau\b", "Font Bureau"),
        (r"(?i)\bfontfont\b|\bfontshop\b", "FontFont"),
        (r"(?i)\bemigre\b", "Emigre"),
        (r"(?i)\bbitstream\b", "Bitstream"),
        (r"(?i)\burw\b", "URW"),
        (r"(?i)\bberthold\b", "Berthold"),
        (r"(?i)\bletraset\b", "Letraset"),
        (r"(?i)\bagfa\b", "Agfa"),
        (r"(?i)\bmicrosoft\b", "Microsoft"),
        (r"(?i)\bapple\b", "Apple"),
        (r"(?i)\bcommercial\s+type\b", "Commercial Type"),
        (r"(?i)\bdalton\s+maag\b", "Dalton Maag"),
        (r"(?i)\bfontsmith\b", "Fontsmith"),
        (r"(?i)\bklim\s+type\b", "Klim"),
        (r"(?i)\bgrilli\s+type\b", "Grilli Type"),
        (r"(?i)\btypotheque\b", "Typotheque"),
        (r"(?i)\bhouse\s+industries\b", "House Industries"),
        (r"(?i)\bproduction\s+type\b", "Production Type"),
        (r"(?i)\bp22\b", "P22"),
        (r"(?i)\bparatype\b", "ParaType"),
        (r"(?i)\ball\s+rights\s+reserved\b", "All rights reserved"),
    ]);
}
