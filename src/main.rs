use std::collections::BTreeMap;
use std::env;
use std::fs;

use ingredient_parse::{parse_recipe, Lexicon, ParserConfig, Recipe};
use log::{info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get the corpus path from command-line arguments
    let args: Vec<String> = env::args().collect();
    let path = args
        .get(1)
        .ok_or("Please provide a recipe corpus JSON file as an argument")?;

    // The corpus maps recipe ids to {title, ingredients} objects; extra
    // fields (instructions, sources) are ignored
    let corpus: BTreeMap<String, Recipe> = serde_json::from_str(&fs::read_to_string(path)?)?;

    let config = ParserConfig::load()?;
    let lexicon = Lexicon::new();

    let mut records = Vec::new();
    for recipe in corpus.values() {
        records.extend(parse_recipe(&lexicon, &config, recipe));
    }

    let anomalies = records.iter().filter(|r| r.anomalous).count();
    if anomalies > 0 {
        warn!("{anomalies} of {} lines fell back to raw text", records.len());
    }
    info!("parsed {} ingredient lines from {} recipes", records.len(), corpus.len());

    println!("{}", serde_json::to_string_pretty(&records)?);

    Ok(())
}
