// Requires the `rand` feature.

use std::env;
use wordalign::prelude::*;

fn main() {
    let args: Vec<String> = env::args().collect();

    let (samples, length) = if args.len() == 3 {
        (args[1].parse().unwrap(), args[2].parse().unwrap())
    } else {
        println!("Usage:\n\t{} <samples> <length>\n\nSetting to: 4 8", &args[0]);
        (4, 8)
    };

    const ALPHA: &[u8] = b"AGTC";
    let reference = rand_sequence(ALPHA, length, 0);
    println!("reference {}\n", String::from_utf8_lossy(&reference));

    for seed in 1..=samples {
        let s = rand_sequence(ALPHA, length, seed);
        let local = align(&s, &reference, PenaltyScheme::DISTANCE, AlignmentVariant::Local);
        println!("edit distance {}, local score {}", edit_distance(&s, &reference), local.score);
        println!("{local}\n");
    }
}
