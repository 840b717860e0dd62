use std::env;
use wordalign::prelude::*;

fn main() {
    let args: Vec<String> = env::args().collect();

    let (query, words) = if args.len() == 3 {
        (args[1].clone(), WordReader::from_filename(&args[2]).unwrap_or_fail().collect::<Result<Vec<_>, _>>().unwrap_or_fail())
    } else {
        println!("Usage:\n\t{} <query> <word list>\n\nSetting to: humble and a built-in list", &args[0]);
        let words = ["humble", "bumble", "humbler", "tumble", "rumbled", "fumbling", "hobble"];
        ("humble".to_string(), words.iter().map(|w| (*w).to_string()).collect())
    };

    for max_distance in 0..3 {
        let mut matches: Vec<String> = check_spelling(&query, max_distance, &words).into_iter().collect();
        matches.sort();
        println!("within {max_distance}: {}", matches.join(", "));
    }
}
