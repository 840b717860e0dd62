use clap::{Parser, Subcommand};
use log::{info, warn};
use std::{
    collections::HashSet,
    io::{self, BufWriter, Write},
    path::PathBuf,
    time::{Duration, Instant},
};
use wordalign::{
    alignment::{AlignmentMatrix, AlignmentVariant, PenaltyScheme},
    data::{err::OrFail, records::words::read_words},
    search::SpellCheck,
};

#[derive(Parser)]
#[command(version, about = "Pairwise alignment and edit-distance spell checking")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Align two sequences and print the alignment with its score
    Align {
        x: String,
        y: String,

        /// Print only the local alignment instead of both variants
        #[arg(long)]
        local: bool,

        /// `distance`, `similarity`, or `gap,mismatch,match`
        #[arg(long, default_value = "distance")]
        scheme: PenaltyScheme,

        /// Also print the filled matrix
        #[arg(long)]
        matrix: bool,
    },
    /// Find the words of a word list within an edit distance of each query
    Spell {
        /// Word list with one word per line
        #[arg(short, long)]
        words: PathBuf,

        /// Maximum edit distance
        #[arg(short = 'd', long, default_value_t = 1, allow_negative_numbers = true)]
        max_distance: i64,

        /// Scheme the distance is derived from; `similarity` gives the edit
        /// distance
        #[arg(long, default_value = "similarity")]
        scheme: PenaltyScheme,

        /// Worker threads, 0 for one per core
        #[arg(short, long, default_value_t = 0)]
        threads: usize,

        /// Stop starting comparisons for a query after this many milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,

        #[arg(required = true)]
        queries: Vec<String>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Command::Align {
            x,
            y,
            local,
            scheme,
            matrix,
        } => {
            for &variant in variants(local) {
                write_alignment(&mut out, x.as_bytes(), y.as_bytes(), scheme, variant, matrix)
                    .unwrap_or_die("Could not write the alignment.");
            }
        }
        Command::Spell {
            words,
            max_distance,
            scheme,
            threads,
            timeout_ms,
            queries,
        } => {
            if let Err(e) = rayon::ThreadPoolBuilder::new().num_threads(threads).build_global() {
                warn!("Could not size the thread pool, using the default: {e}");
            }

            let corpus = read_words(&words).unwrap_or_die("Could not read the word list.");
            info!("Loaded {} words from {}", corpus.len(), words.display());

            for query in &queries {
                let spell = SpellCheck::new(query, max_distance).unwrap_or_fail().with_scheme(scheme);
                write_matches(&mut out, &spell, &corpus, timeout_ms.map(Duration::from_millis))
                    .unwrap_or_die("Could not write the matches.");
            }
        }
    }

    out.flush().unwrap_or_die("Could not flush the output.");
}

fn variants(local_only: bool) -> &'static [AlignmentVariant] {
    if local_only {
        &[AlignmentVariant::Local]
    } else {
        &[AlignmentVariant::Global, AlignmentVariant::Local]
    }
}

fn write_alignment<W: Write>(
    out: &mut W, x: &[u8], y: &[u8], scheme: PenaltyScheme, variant: AlignmentVariant, print_matrix: bool,
) -> io::Result<()> {
    let matrix = AlignmentMatrix::build(x, y, scheme, variant);
    if print_matrix {
        write!(out, "{matrix}")?;
    }

    // The matrix was built from these sequences, so the traceback cannot fail
    let alignment = matrix
        .traceback(x, y)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let mut buff = itoa::Buffer::new();
    writeln!(out, "{variant} score {}", buff.format(alignment.score))?;
    writeln!(out, "{alignment}")?;
    writeln!(out)
}

/// Orders matches by distance, then alphabetically.
fn rank(spell: &SpellCheck, matches: HashSet<String>) -> Vec<(usize, String)> {
    let mut ranked: Vec<(usize, String)> = matches
        .into_iter()
        .filter_map(|word| spell.matches(&word).map(|d| (d, word)))
        .collect();
    ranked.sort_unstable();
    ranked
}

fn write_matches<W: Write>(out: &mut W, spell: &SpellCheck, corpus: &[String], timeout: Option<Duration>) -> io::Result<()> {
    let matches = match timeout {
        Some(timeout) => {
            let outcome = spell.par_scan_until(corpus, Instant::now() + timeout);
            if !outcome.complete {
                eprintln!(
                    "Warning: '{}' timed out after {} of {} words",
                    spell.query(),
                    outcome.compared,
                    corpus.len()
                );
            }
            outcome.matches
        }
        None => spell.par_scan(corpus),
    };

    let mut buff = itoa::Buffer::new();
    writeln!(out, "{}", spell.query())?;
    for (distance, word) in rank(spell, matches) {
        writeln!(out, "\t{}\t{word}", buff.format(distance))?;
    }
    Ok(())
}
