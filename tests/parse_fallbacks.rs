use ingredient_parse::{parse_corpus, parse_line, Lexicon, ParsedIngredient, ParserConfig, Recipe};

fn raw_config() -> ParserConfig {
    ParserConfig {
        parallel: false,
        canonicalize: false,
        hyphenate: false,
    }
}

fn parse(line: &str) -> Option<ParsedIngredient> {
    let lexicon = Lexicon::new();
    parse_line(&lexicon, &raw_config(), "Test Recipe", 0, line)
}

#[test]
fn test_separators_produce_no_record() {
    assert!(parse("For Bread:").is_none());
    assert!(parse("For the filling").is_none());
    assert!(parse("Topping").is_none());
    assert!(parse("Frosting: optional").is_none());
}

#[test]
fn test_eg_colon_is_not_a_separator() {
    assert!(parse("hot spices eg: cayenne").is_some());
}

#[test]
fn test_unit_with_nothing_after_recovers() {
    // the unit consumes the last token; the record keeps the parsed amount
    // and unit but falls back to the raw line for a name
    let parsed = parse("1 cup").unwrap();
    assert!(parsed.anomalous);
    assert_eq!(parsed.amount, 1.0);
    assert_eq!(parsed.unit, "cups");
    assert_eq!(parsed.name, "1 cup");
}

#[test]
fn test_all_tokens_consumed_recovers() {
    let parsed = parse("2 cups chopped").unwrap();
    assert!(parsed.anomalous);
    assert_eq!(parsed.unit, "cups");
    assert_eq!(parsed.name, "2 cups chopped");
    assert!(parsed.descriptions.iter().any(|d| d == "chopped"));
}

#[test]
fn test_empty_name_falls_back_to_raw_line() {
    // "chopped" qualifies, the trailing "or" is dropped, nothing is left
    // to name the ingredient
    let parsed = parse("1 cup chopped or").unwrap();
    assert!(parsed.anomalous);
    assert_eq!(parsed.name, "1 cup chopped or");
    assert_eq!(parsed.amount, 1.0);
}

#[test]
fn test_unparsable_amount_stops_accumulation() {
    let parsed = parse("a few sprigs thyme").unwrap();
    assert_eq!(parsed.amount, 0.0);
    assert_eq!(parsed.unit, "sprigs");
    assert!(!parsed.anomalous);
}

#[test]
fn test_no_matching_unit_is_not_an_error() {
    let parsed = parse("3 eggs").unwrap();
    assert_eq!(parsed.amount, 3.0);
    assert_eq!(parsed.unit, "");
    assert_eq!(parsed.name, "eggs");
    assert!(!parsed.anomalous);
}

#[test]
fn test_anomalous_line_does_not_poison_siblings() {
    let lexicon = Lexicon::new();
    let recipes = vec![
        Recipe {
            title: "One".to_string(),
            ingredients: vec!["1 cup".to_string(), "2 cups flour".to_string()],
        },
        Recipe {
            title: "Two".to_string(),
            ingredients: vec!["3 eggs".to_string()],
        },
    ];

    let parsed = parse_corpus(&lexicon, &raw_config(), &recipes);
    assert_eq!(parsed.len(), 3);
    assert!(parsed[0].anomalous);
    assert!(!parsed[1].anomalous);
    assert_eq!(parsed[1].name, "flour");
    assert_eq!(parsed[2].title, "Two");
    assert_eq!(parsed[2].name, "eggs");
}

#[test]
fn test_hyphenate_config_changes_name() {
    let lexicon = Lexicon::new();
    let mut config = raw_config();

    let kept = parse_line(&lexicon, &config, "Test", 0, "1 cup nonfat milk").unwrap();
    assert_eq!(kept.name, "nonfat milk");

    config.hyphenate = true;
    let rewritten = parse_line(&lexicon, &config, "Test", 0, "1 cup nonfat milk").unwrap();
    assert_eq!(rewritten.name, "non-fat milk");
}

#[test]
fn test_recipe_without_ingredients_parses_to_nothing() {
    let lexicon = Lexicon::new();
    let recipe: Recipe = serde_json::from_str(r#"{"title": "Empty", "ingredients": null}"#).unwrap();
    let parsed = parse_corpus(&lexicon, &raw_config(), &[recipe]);
    assert!(parsed.is_empty());
}
