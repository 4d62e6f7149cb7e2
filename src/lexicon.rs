//! Lookup tables driving the parsing pipeline.
//!
//! Everything here is read-only reference data: measurement units, the
//! adjective/adverb vocabulary, rewrite tables and conversion factors. A
//! [`Lexicon`] is built once at startup and passed by shared reference into
//! every pipeline invocation; it is `Sync`, so a single instance serves all
//! worker threads.

use std::collections::HashSet;

/// Measurement units in their table (plural) form. Unit matching is
/// plural-aware, so these entries also recognize their singular spellings.
const MEASUREMENT_UNITS: &[&str] = &[
    "teaspoons",
    "dessertspoons",
    "tablespoons",
    "fluid_ounces",
    "cups",
    "pints",
    "quarts",
    "gallons",
    "milligrams",
    "grams",
    "kilograms",
    "milliliters",
    "liters",
    "containers",
    "packets",
    "bags",
    "pounds",
    "cans",
    "bottles",
    "cloves",
    "packages",
    "ounces",
    "jars",
    "heads",
    "drops",
    "envelopes",
    "bars",
    "boxes",
    "pinches",
    "dashes",
    "bunches",
    "recipes",
    "layers",
    "slices",
    "links",
    "bulbs",
    "stalks",
    "squares",
    "sprigs",
    "fillets",
    "pieces",
    "legs",
    "thighs",
    "cubes",
    "granules",
    "strips",
    "trays",
    "leaves",
    "loaves",
    "halves",
    "scoops",
    "inches",
];

/// Accepted spellings and abbreviations per canonical unit.
const UNIT_ABBREVIATIONS: &[(&str, &[&str])] = &[
    ("cup", &["cups", "cup", "c.", "c"]),
    ("fluid_ounce", &["fl. oz.", "fl oz", "fluid ounce", "fluid ounces"]),
    ("gallon", &["gal", "gal.", "gallon", "gallons"]),
    ("ounce", &["oz", "oz.", "ounce", "ounces"]),
    ("pint", &["pt", "pt.", "pint", "pints"]),
    ("pound", &["lb", "lb.", "pound", "pounds"]),
    ("quart", &["qt", "qt.", "qts", "qts.", "quart", "quarts"]),
    (
        "tablespoon",
        &["tbsp.", "tbsp", "T", "T.", "tablespoon", "tablespoons", "tbs.", "tbs"],
    ),
    ("teaspoon", &["tsp.", "tsp", "t", "t.", "teaspoon", "teaspoons"]),
    ("gram", &["g", "g.", "gr", "gr.", "gram", "grams"]),
    ("kilogram", &["kg", "kg.", "kilogram", "kilograms"]),
    ("liter", &["l", "l.", "liter", "liters"]),
    ("milligram", &["mg", "mg.", "milligram", "milligrams"]),
    ("milliliter", &["ml", "ml.", "milliliter", "milliliters"]),
];

/// Units that hold other food rather than measuring it.
const CONTAINERS: &[&str] = &[
    "cans",
    "packages",
    "boxes",
    "containers",
    "jars",
    "bags",
    "cans or bottles",
    "scoops",
    "bottles",
    "fillets",
    "envelopes",
    "heads",
    "bunches",
    "slices",
    "loaves",
    "bars",
    "packets",
    "squares",
    "links",
];

/// Phrases marking an ingredient as optional.
const OPTIONAL_STRINGS: &[&str] = &["optional", "to taste", "as needed", "if desired"];

/// Adjectives and participles used to qualify ingredients.
const DESCRIPTIONS: &[&str] = &[
    "baked",
    "beaten",
    "blanched",
    "boiled",
    "boiling",
    "boned",
    "breaded",
    "brewed",
    "broken",
    "chilled",
    "chopped",
    "cleaned",
    "coarse",
    "cold",
    "cooked",
    "cool",
    "cooled",
    "cored",
    "creamed",
    "crisp",
    "crumbled",
    "crushed",
    "cubed",
    "cut",
    "deboned",
    "deseeded",
    "diced",
    "dissolved",
    "divided",
    "drained",
    "dried",
    "dry",
    "fine",
    "firm",
    "fluid",
    "fresh",
    "frozen",
    "grated",
    "grilled",
    "ground",
    "halved",
    "hard",
    "hardened",
    "heated",
    "heavy",
    "juiced",
    "julienned",
    "jumbo",
    "large",
    "lean",
    "light",
    "lukewarm",
    "marinated",
    "mashed",
    "medium",
    "melted",
    "minced",
    "near",
    "opened",
    "optional",
    "packed",
    "peeled",
    "pitted",
    "popped",
    "pounded",
    "prepared",
    "pressed",
    "pureed",
    "quartered",
    "refrigerated",
    "rinsed",
    "ripe",
    "roasted",
    "rolled",
    "rough",
    "scalded",
    "scrubbed",
    "seasoned",
    "seeded",
    "segmented",
    "separated",
    "shredded",
    "sifted",
    "skinless",
    "boneless",
    "sliced",
    "slight",
    "slivered",
    "small",
    "soaked",
    "soft",
    "softened",
    "split",
    "squeezed",
    "stemmed",
    "stewed",
    "stiff",
    "strained",
    "strong",
    "thawed",
    "thick",
    "thin",
    "tied",
    "toasted",
    "torn",
    "trimmed",
    "wrapped",
    "vained",
    "warm",
    "washed",
    "weak",
    "zested",
    "wedged",
    "skinned",
    "gutted",
    "browned",
    "patted",
    "raw",
    "flaked",
    "deveined",
    "shelled",
    "shucked",
    "crumbs",
    "halves",
    "squares",
    "zest",
    "peel",
    "uncooked",
    "butterflied",
    "unwrapped",
    "unbaked",
    "warmed",
];

/// Adverbs appearing before a qualifying adjective ("well beaten").
const PRECEDING_ADVERBS: &[&str] = &["well", "very", "super"];

/// Adverbs appearing after a qualifying adjective ("sliced diagonally").
const SUCCEEDING_ADVERBS: &[&str] = &["diagonally", "lengthwise", "overnight"];

/// Prepositions opening a trailing clause ("for garnish", "with skin").
const PREPOSITIONS: &[&str] = &[
    "as", "such", "for", "with", "without", "if", "about", "e.g.", "in", "into", "at", "until",
];

/// Words qualifying their predecessor: "<seeds> removed", "<2> inch", "<day> old".
const DESCRIPTIONS_WITH_PREDECESSOR: &[&str] = &[
    "removed",
    "discarded",
    "reserved",
    "included",
    "inch",
    "inches",
    "old",
    "temperature",
    "up",
];

/// Words carrying no information ("candied pineapple chunks").
const UNNECESSARY_DESCRIPTIONS: &[&str] = &["chunks", "pieces", "rings", "spears"];

/// Prefixes and suffixes written hyphenated ("non-fat", "sugar-free").
const HYPHENATED_PREFIXES: &[&str] = &["non", "reduced", "semi", "low"];
const HYPHENATED_SUFFIXES: &[&str] = &["coated", "free", "flavored"];

/// Ordered spelling corrections applied to the finished name. Rules are
/// literal replace-all rewrites and the order is load-bearing: "chile" must
/// run before the (now mostly shadowed) "chiles" rule, and "liquer" runs
/// before "creme de cacao" introduces that spelling.
const SPELLING_RULES: &[(&str, &str)] = &[
    ("linguini", "linguine"),
    ("filets", "fillets"),
    ("chile", "chili"),
    ("chiles", "chilis"),
    ("chilies", "chilis"),
    ("won ton", "wonton"),
    ("liquer", "liqueur"),
    ("confectioners ", "confectioners' "),
    ("creme de cacao", "chocolate liquer"),
    ("pepperjack", "Pepper Jack"),
    ("Pepper jack", "Pepper Jack"),
];

/// Ordered style normalizations applied after spelling.
const STYLE_RULES: &[(&str, &str)] = &[
    ("dressing mix", "dressing"),
    ("salad dressing", "dressing"),
    ("bourbon whiskey", "bourbon"),
    ("pudding mix", "pudding"),
];

const ML_PER_TEASPOON: f64 = 4.92892;
const ML_PER_TABLESPOON: f64 = 14.7868;
const ML_PER_CUP: f64 = 236.588;
const GRAMS_PER_POUND: f64 = 453.592;
const GRAMS_PER_OUNCE: f64 = 28.3495;

/// Metric canonicalization table: unit -> (factor, canonical unit).
const METRIC_CONVERSIONS: &[(&str, f64, &str)] = &[
    ("pounds", GRAMS_PER_POUND, "gram"),
    ("teaspoons", ML_PER_TEASPOON, "ml"),
    ("tablespoons", ML_PER_TABLESPOON, "ml"),
    ("cups", ML_PER_CUP, "ml"),
    ("pinches", ML_PER_TEASPOON / 16.0, "ml"),
    ("dashes", ML_PER_TEASPOON / 8.0, "ml"),
    ("ounces", GRAMS_PER_OUNCE, "gram"),
];

/// The process-wide lookup tables, built once and shared read-only.
#[derive(Debug)]
pub struct Lexicon {
    adjectives: HashSet<&'static str>,
    preceding_adverbs: HashSet<&'static str>,
    succeeding_adverbs: HashSet<&'static str>,
    prepositions: HashSet<&'static str>,
    predecessor_descriptions: HashSet<&'static str>,
    unnecessary_descriptions: HashSet<&'static str>,
    containers: HashSet<&'static str>,
}

impl Lexicon {
    pub fn new() -> Self {
        Lexicon {
            adjectives: DESCRIPTIONS.iter().copied().collect(),
            preceding_adverbs: PRECEDING_ADVERBS.iter().copied().collect(),
            succeeding_adverbs: SUCCEEDING_ADVERBS.iter().copied().collect(),
            prepositions: PREPOSITIONS.iter().copied().collect(),
            predecessor_descriptions: DESCRIPTIONS_WITH_PREDECESSOR.iter().copied().collect(),
            unnecessary_descriptions: UNNECESSARY_DESCRIPTIONS.iter().copied().collect(),
            containers: CONTAINERS.iter().copied().collect(),
        }
    }

    /// Find the measurement-unit entry the token plural-matches, if any.
    /// The returned unit is the table's plural form, not the token.
    pub fn match_unit(&self, token: &str) -> Option<&'static str> {
        MEASUREMENT_UNITS
            .iter()
            .copied()
            .find(|unit| plural_matches(token, unit))
    }

    /// Resolve an abbreviation or spelling to its canonical unit
    /// (e.g. "tbsp." -> "tablespoon"). Exact, case-sensitive lookup:
    /// "T" is a tablespoon, "t" a teaspoon.
    pub fn canonical_unit_for(&self, spelling: &str) -> Option<&'static str> {
        UNIT_ABBREVIATIONS
            .iter()
            .find(|(_, spellings)| spellings.contains(&spelling))
            .map(|(canonical, _)| *canonical)
    }

    /// Metric canonicalization entry for a unit: (factor, canonical unit).
    pub fn metric_conversion(&self, unit: &str) -> Option<(f64, &'static str)> {
        METRIC_CONVERSIONS
            .iter()
            .find(|(from, _, _)| *from == unit)
            .map(|(_, factor, to)| (*factor, *to))
    }

    pub fn is_adjective(&self, token: &str) -> bool {
        self.adjectives.contains(token)
    }

    pub fn is_preceding_adverb(&self, token: &str) -> bool {
        self.preceding_adverbs.contains(token) || token.ends_with("ly")
    }

    pub fn is_succeeding_adverb(&self, token: &str) -> bool {
        self.succeeding_adverbs.contains(token) || token.ends_with("ly")
    }

    pub fn is_preposition(&self, token: &str) -> bool {
        self.prepositions.contains(token)
    }

    pub fn is_predecessor_description(&self, token: &str) -> bool {
        self.predecessor_descriptions.contains(token)
    }

    pub fn is_unnecessary_description(&self, token: &str) -> bool {
        self.unnecessary_descriptions.contains(token)
    }

    pub fn is_container_unit(&self, unit: &str) -> bool {
        self.containers.contains(unit)
    }

    /// Whether a qualifier phrase marks the ingredient as optional.
    pub fn is_optional_marker(&self, phrase: &str) -> bool {
        OPTIONAL_STRINGS.iter().any(|marker| phrase.contains(marker))
    }

    pub fn hyphenated_prefixes(&self) -> &'static [&'static str] {
        HYPHENATED_PREFIXES
    }

    pub fn hyphenated_suffixes(&self) -> &'static [&'static str] {
        HYPHENATED_SUFFIXES
    }

    pub fn spelling_rules(&self) -> &'static [(&'static str, &'static str)] {
        SPELLING_RULES
    }

    pub fn style_rules(&self) -> &'static [(&'static str, &'static str)] {
        STYLE_RULES
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

/// Approximate plural-aware comparison of a candidate token against a
/// canonical (plural) form.
///
/// The first one to three leading characters must agree (compared only as
/// far as both strings reach), and the canonical form must equal the
/// candidate itself or one of its regular plurals: +"s", +"es",
/// last-char-dropped +"ies" or +"ves". This is morphology, not a
/// dictionary: short or irregular words can mismatch in both directions.
pub fn plural_matches(candidate: &str, canonical: &str) -> bool {
    if candidate.is_empty() || canonical.is_empty() {
        return false;
    }

    let mut a = candidate.chars();
    let mut b = canonical.chars();
    for _ in 0..3 {
        match (a.next(), b.next()) {
            (Some(x), Some(y)) if x != y => return false,
            (Some(_), Some(_)) => {}
            // one string exhausted: stop comparing prefixes
            _ => break,
        }
    }

    if canonical == candidate {
        return true;
    }
    if let Some(stem) = canonical.strip_suffix("es") {
        if stem == candidate {
            return true;
        }
    }
    if let Some(stem) = canonical.strip_suffix('s') {
        if stem == candidate {
            return true;
        }
    }
    let trimmed = trim_last_char(candidate);
    if let Some(stem) = canonical.strip_suffix("ies") {
        if stem == trimmed {
            return true;
        }
    }
    if let Some(stem) = canonical.strip_suffix("ves") {
        if stem == trimmed {
            return true;
        }
    }
    false
}

fn trim_last_char(s: &str) -> &str {
    match s.char_indices().last() {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_match_exact_forms() {
        for unit in MEASUREMENT_UNITS {
            assert!(plural_matches(unit, unit), "{unit} must match itself");
        }
    }

    #[test]
    fn test_plural_match_singulars() {
        assert!(plural_matches("cup", "cups"));
        assert!(plural_matches("pinch", "pinches"));
        assert!(plural_matches("loaf", "loaves"));
        assert!(plural_matches("cake", "cakes"));
    }

    #[test]
    fn test_plural_match_rejects_unrelated() {
        assert!(!plural_matches("box", "cups"));
        assert!(!plural_matches("flour", "cups"));
        // shared prefix alone is not enough
        assert!(!plural_matches("cupboard", "cups"));
    }

    #[test]
    fn test_match_unit_returns_table_form() {
        let lexicon = Lexicon::new();
        assert_eq!(lexicon.match_unit("cup"), Some("cups"));
        assert_eq!(lexicon.match_unit("tablespoons"), Some("tablespoons"));
        assert_eq!(lexicon.match_unit("flour"), None);
    }

    #[test]
    fn test_canonical_unit_for_abbreviations() {
        let lexicon = Lexicon::new();
        assert_eq!(lexicon.canonical_unit_for("tbsp."), Some("tablespoon"));
        assert_eq!(lexicon.canonical_unit_for("T"), Some("tablespoon"));
        assert_eq!(lexicon.canonical_unit_for("t"), Some("teaspoon"));
        assert_eq!(lexicon.canonical_unit_for("oz"), Some("ounce"));
        assert_eq!(lexicon.canonical_unit_for("shovel"), None);
    }

    #[test]
    fn test_container_units() {
        let lexicon = Lexicon::new();
        assert!(lexicon.is_container_unit("cans"));
        assert!(lexicon.is_container_unit("packages"));
        assert!(!lexicon.is_container_unit("cups"));
    }

    #[test]
    fn test_optional_markers() {
        let lexicon = Lexicon::new();
        assert!(lexicon.is_optional_marker("optional"));
        assert!(lexicon.is_optional_marker("salt to taste"));
        assert!(!lexicon.is_optional_marker("finely chopped"));
    }

    #[test]
    fn test_metric_conversion_table() {
        let lexicon = Lexicon::new();
        let (factor, unit) = lexicon.metric_conversion("cups").unwrap();
        assert_eq!(unit, "ml");
        assert!((factor - 236.588).abs() < 1e-9);
        assert!(lexicon.metric_conversion("cakes").is_none());
    }
}
