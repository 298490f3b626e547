//! Cue tables: per-trope, ordered regex fragments that explain why a
//! headline carries a trope ("gator", "naked", "dui", "machete").
//!
//! Every fragment is wrapped in word boundaries, so `cat` never fires on
//! "catch" or "concatenate". Two views are compiled from the same table:
//! one regex per fragment (first fragment in table order wins, used for
//! labels) and one combined alternation per trope (leftmost match wins,
//! used for hit tests and highlighting).

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use floridaman_core::types::Trope;

pub const ANIMAL_CUES: &[&str] = &[
    "gator(?:s)?", "alligator(?:s)?", "croc(?:s)?", "crocodile(?:s)?", "python(?:s)?",
    "cobra(?:s)?", "snake(?:s)?", "lizard(?:s)?", "iguana(?:s)?", "frog(?:s)?", "toad(?:s)?",
    "turtle(?:s)?", "tortoise(?:s)?", "shark(?:s)?", "dolphin(?:s)?", "manatee(?:s)?",
    "dog(?:s)?", "cat(?:s)?", "horse(?:s)?", "pon(?:y|ys|ies)", "donkey(?:s)?", "mule(?:s)?",
    "llama(?:s)?", "alpaca(?:s)?", "bear(?:s)?", "cow(?:s)?", "cattle", "bull(?:s)?", "oxen?",
    "pig(?:s)?", "hog(?:s)?", "boar(?:s)?", "goat(?:s)?", "sheep", "ram(?:s)?",
    "chicken(?:s)?", "rooster(?:s)?", "animal(?:s)?", "critter(?:s)?", "wildlife",
];

pub const NUDITY_CUES: &[&str] = &[
    "naked", "nude", "nudity", "undressed", "unclothed", "topless", "bottomless", "pantsless",
    "pantless", "shirtless", "bare", "flasher(?:s)?", "flashing", "expos(?:e|ed|es|ing)",
    "streak(?:er|ing)?", r"indecent\s+exposure", r"public\s+indecency",
];

pub const SUBSTANCE_CUES: &[&str] = &[
    "beer", "booze", "alcohol", "drunk", "drunken", "intoxicat(?:ed|ion)", "dui", "dwi",
    "liquor", "whiskey", "whisky", "vodka", "tequila", "rum", "wine", "meth(?:amphetamine)?",
    "cocaine", "crack", "weed", "pot", "cannabis", "hash", "drug(?:s)?", "marijuana", "heroin",
    "fentanyl", "opioid(?:s)?", "pill(?:s)?", "oxy(?:codone)?", "xanax", "benzo(?:diazepine)?s?",
    "pcp", "lsd", "vape(?:s|ing)?", r"bath\s+salts", "stoned",
];

pub const WEAPON_CUES: &[&str] = &[
    "gun(?:s)?", "firearm(?:s)?", "handgun(?:s)?", "knife|knives", "weapon(?:s)?",
    "shoot(?:s|ing|er)?", "stab(?:s|bed|bing)?", "sword(?:s)?", "rifle(?:s)?", "pistol(?:s)?",
    "shotgun(?:s)?", "revolver(?:s)?", "ar-?15", "ak-?47", r"bb\s*gun", r"pellet\s*gun",
    "taser(?:s)?", r"stun\s*gun", "crossbow(?:s)?", "bow", "arrow(?:s)?", "machete(?:s)?",
    "blade(?:s)?", "hatchet(?:s)?", "axe|ax(?:es)?", "hammer(?:s)?", "bat(?:s)?", "club(?:s)?",
    "crowbar(?:s)?", "gunfire", "armed",
];

/// Byte range of a cue inside the headline it was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CueSpan {
    pub start: usize,
    pub end: usize,
}

struct TropeCues {
    labels: Vec<Regex>,
    combined: Option<Regex>,
}

/// Compiled cue patterns for every trope.
pub struct CueTable {
    tropes: BTreeMap<Trope, TropeCues>,
}

static DEFAULT_TABLE: LazyLock<CueTable> = LazyLock::new(|| {
    CueTable::new(&[
        (Trope::Animals, ANIMAL_CUES),
        (Trope::Nudity, NUDITY_CUES),
        (Trope::Substances, SUBSTANCE_CUES),
        (Trope::Weapons, WEAPON_CUES),
    ])
    .expect("built-in cue patterns compile")
});

impl CueTable {
    /// Compile a table from `(trope, fragments)` pairs. Fragments are regex
    /// source; order matters for [`CueTable::extract`].
    pub fn new(patterns: &[(Trope, &[&str])]) -> Result<Self, regex::Error> {
        let mut tropes = BTreeMap::new();
        for (trope, fragments) in patterns {
            let labels = fragments
                .iter()
                .map(|p| Regex::new(&format!(r"(?i)\b({p})\b")))
                .collect::<Result<Vec<_>, _>>()?;
            let combined = if fragments.is_empty() {
                None
            } else {
                Some(Regex::new(&format!(r"(?i)\b(?:{})\b", fragments.join("|")))?)
            };
            tropes.insert(*trope, TropeCues { labels, combined });
        }
        Ok(Self { tropes })
    }

    /// The built-in table.
    pub fn builtin() -> &'static CueTable {
        &DEFAULT_TABLE
    }

    /// Lowercased text of the first fragment (in table order) that matches.
    pub fn extract(&self, headline: &str, trope: Trope) -> Option<String> {
        let cues = self.tropes.get(&trope)?;
        let text = headline.to_lowercase();
        cues.labels
            .iter()
            .find_map(|re| re.captures(&text).and_then(|c| c.get(1)))
            .map(|m| m.as_str().to_lowercase())
    }

    pub fn matches(&self, headline: &str, trope: Trope) -> bool {
        self.combined(trope).is_some_and(|re| re.is_match(headline))
    }

    /// Leftmost cue occurrence in `headline`.
    pub fn first_span(&self, headline: &str, trope: Trope) -> Option<CueSpan> {
        self.combined(trope)?
            .find(headline)
            .map(|m| CueSpan { start: m.start(), end: m.end() })
    }

    fn combined(&self, trope: Trope) -> Option<&Regex> {
        self.tropes.get(&trope).and_then(|c| c.combined.as_ref())
    }
}

pub fn extract_cue(headline: &str, trope: Trope) -> Option<String> {
    CueTable::builtin().extract(headline, trope)
}

pub fn combined_cue_test(headline: &str, trope: Trope) -> bool {
    CueTable::builtin().matches(headline, trope)
}

pub fn first_cue_span(headline: &str, trope: Trope) -> Option<CueSpan> {
    CueTable::builtin().first_span(headline, trope)
}

/// Split a headline around its first cue: `(before, cue, after)`.
pub fn highlight(headline: &str, trope: Trope) -> Option<(&str, &str, &str)> {
    let span = first_cue_span(headline, trope)?;
    Some((&headline[..span.start], &headline[span.start..span.end], &headline[span.end..]))
}
