use std::env;
use wordalign::prelude::*;

fn main() {
    let args: Vec<String> = env::args().collect();

    let (x, y) = if args.len() == 3 {
        (args[1].clone(), args[2].clone())
    } else {
        println!("Usage:\n\t{} <x> <y>\n\nSetting to: GGACTTA ACT", &args[0]);
        ("GGACTTA".to_string(), "ACT".to_string())
    };
    let (x, y) = (x.as_bytes(), y.as_bytes());

    for variant in [AlignmentVariant::Global, AlignmentVariant::Local] {
        let matrix = AlignmentMatrix::build(x, y, PenaltyScheme::DISTANCE, variant);
        println!("{variant}:\n{matrix}");

        let alignment = matrix.traceback(x, y).unwrap();
        println!("score {}\n{alignment}", alignment.score);

        if variant == AlignmentVariant::Global {
            println!("\npadded:\n{}", alignment.padded(x, y));
        }
        println!();
    }
}
