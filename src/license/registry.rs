use std::collections::HashSet;
use lazy_static::lazy_static;
use log::debug;
use crate::models::ExtractedMetadata;
use crate::utils::normalize_name;

/// Registry entries shorter than this only match by equality
pub const MIN_SUBSTRING_MATCH_LEN: usize = 4;

/// Normalized family names of commercial and OS-bundled fonts
pub const COMMERCIAL_FONT_NAMES: &[&str] = &[
    // Linotype / Monotype
    "helvetica",
    "helvetica neue",
    "neue helvetica",
    "neue haas grotesk",
    "neue haas unica",
    "arial",
    "arial black",
    "arial narrow",
    "arial rounded",
    "times new roman",
    "times ten",
    "frutiger",
    "frutiger next",
    "univers",
    "univers next",
    "avenir",
    "avenir next",
    "optima",
    "optima nova",
    "palatino",
    "palatino linotype",
    "sabon",
    "stempel garamond",
    "linotype didot",
    "futura",
    "futura pt",
    "gill sans",
    "gill sans nova",
    "rockwell",
    "bembo",
    "plantin",
    "perpetua",
    "joanna",
    "monotype baskerville",
    "monotype corsiva",
    "century gothic",
    "century schoolbook",
    "new century schoolbook",
    "book antiqua",
    "bookman old style",
    "neue frutiger",
    "din",
    "din next",
    "din pro",
    "eurostile",
    "microgramma",
    "trade gothic",
    "news gothic",
    "memphis",
    "kabel",
    "peignot",
    "vag rounded",
    "brush script",
    "zapfino",
    "zapf chancery",
    "zapf dingbats",
    "snell roundhand",
    "mistral",
    "walbaum",
    "janson text",
    "electra",
    "akzidenz-grotesk",
    "akzidenz grotesk",
    // ITC
    "itc garamond",
    "itc avant garde gothic",
    "avant garde",
    "itc franklin gothic",
    "franklin gothic",
    "itc bookman",
    "itc officina",
    "itc kabel",
    "itc new baskerville",
    "itc bodoni",
    "benguiat",
    "souvenir",
    "lubalin graph",
    "serifa",
    "cooper black",
    "copperplate gothic",
    "bank gothic",
    "clarendon",
    "bauhaus",
    "american typewriter",
    // Adobe
    "adobe garamond",
    "garamond premier",
    "adobe caslon",
    "minion",
    "minion pro",
    "myriad",
    "myriad pro",
    "trajan",
    "trajan pro",
    "lithos",
    "chaparral",
    "warnock",
    "kepler",
    "poetica",
    // FontFont
    "ff din",
    "ff meta",
    "ff unit",
    "ff scala",
    "ff tisa",
    // Emigre
    "mrs eaves",
    "filosofia",
    // Hoefler & Co.
    "gotham",
    "gotham rounded",
    "hoefler text",
    "mercury",
    "archer",
    "sentinel",
    "chronicle",
    "knockout",
    "whitney",
    "tungsten",
    "verlag",
    // Independent foundries
    "proxima nova",
    "museo sans",
    "museo slab",
    "brandon grotesque",
    "gilroy",
    "circular std",
    "graphik",
    "canela",
    "publico",
    "lyon text",
    "tiempos",
    "calibre",
    "founders grotesk",
    "sohne",
    "söhne",
    "akkurat",
    "apercu",
    "gt america",
    "gt walsheim",
    "gt sectra",
    "gt super",
    "neue montreal",
    "aktiv grotesk",
    // Microsoft system fonts
    "segoe ui",
    "segoe print",
    "segoe script",
    "calibri",
    "cambria",
    "candara",
    "consolas",
    "constantia",
    "corbel",
    "tahoma",
    "verdana",
    "trebuchet ms",
    "georgia",
    "comic sans ms",
    "impact",
    "courier new",
    "lucida console",
    "lucida sans",
    "lucida handwriting",
    "wingdings",
    "webdings",
    "ms sans serif",
    "ms serif",
    // Apple system fonts
    "san francisco",
    "sf pro",
    "sf pro display",
    "sf pro text",
    "sf compact",
    "sf mono",
    "new york",
    "lucida grande",
    "menlo",
    "monaco",
    "geneva",
    "chicago",
    "charcoal",
    "apple chancery",
    "marker felt",
    "chalkboard",
    "big caslon",
    "bodoni 72",
];

lazy_static! {
    /// Lookup set over [`COMMERCIAL_FONT_NAMES`]
    pub static ref COMMERCIAL_FONTS: HashSet<&'static str> =
        COMMERCIAL_FONT_NAMES.iter().copied().collect();
}

/// Find the registry entry a single name collides with
///
/// Exact equality always counts. Containment in either direction counts
/// only for entries of at least [`MIN_SUBSTRING_MATCH_LEN`] characters.
pub fn find_commercial_match(name: &str) -> Option<&'static str> {
    let normalized = normalize_name(name);
    if normalized.is_empty() {
        return None;
    }

    if let Some(entry) = COMMERCIAL_FONTS.get(normalized.as_str()) {
        return Some(*entry);
    }

    COMMERCIAL_FONT_NAMES.iter().copied().find(|entry| {
        entry.chars().count() >= MIN_SUBSTRING_MATCH_LEN
            && (normalized.contains(entry) || entry.contains(normalized.as_str()))
    })
}

/// Check the family, full and PostScript names against the registry
pub fn is_known_commercial(metadata: &ExtractedMetadata) -> bool {
    for name in metadata.identity_names().into_iter().flatten() {
        if let Some(entry) = find_commercial_match(name) {
            debug!("Name '{}' matches commercial registry entry '{}'", name, entry);
            return true;
        }
    }
    false
}
