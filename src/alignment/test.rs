use super::*;
use crate::data::err::GetCode;

const DISTANCE: PenaltyScheme = PenaltyScheme::DISTANCE;
const SIMILARITY: PenaltyScheme = PenaltyScheme::SIMILARITY;
const GLOBAL: AlignmentVariant = AlignmentVariant::Global;
const LOCAL: AlignmentVariant = AlignmentVariant::Local;

fn table(matrix: &AlignmentMatrix) -> Vec<Vec<i64>> {
    (0..matrix.rows()).map(|i| matrix.row(i).to_vec()).collect()
}

fn ungapped(aligned: &[u8]) -> Vec<u8> {
    aligned.iter().copied().filter(|&b| b != GAP).collect()
}

#[test]
fn global_matrix_values() {
    let matrix = AlignmentMatrix::build(b"AGTA", b"ATA", DISTANCE, GLOBAL);
    assert_eq!(
        table(&matrix),
        vec![
            vec![0, 1, 2, 3],
            vec![1, -2, -1, 0],
            vec![2, -1, -1, 0],
            vec![3, 0, -3, -2],
            vec![4, 1, -2, -5],
        ]
    );
    assert_eq!(matrix[(3, 2)], -3);
    assert_eq!(matrix.get(4, 0), 4);
    assert_eq!(matrix.scheme(), DISTANCE);
    assert_eq!(matrix.variant(), GLOBAL);
}

#[test]
fn local_matrix_values() {
    let matrix = AlignmentMatrix::build(b"AGTA", b"ATA", DISTANCE, LOCAL);
    assert_eq!(
        table(&matrix),
        vec![
            vec![0, 0, 0, 0],
            vec![0, -2, -1, -2],
            vec![0, -1, -1, -1],
            vec![0, 0, -3, -2],
            vec![0, -2, -2, -5],
        ]
    );
    assert_eq!(matrix.min_cell(), (4, 3, -5));
}

#[test]
fn local_matrix_is_never_positive() {
    let matrix = AlignmentMatrix::build(b"kitten", b"sitting", DISTANCE, LOCAL);
    for i in 0..matrix.rows() {
        assert!(matrix.row(i).iter().all(|&v| v <= 0));
    }
}

#[test]
fn agta_ata_global() {
    let alignment = align(b"AGTA", b"ATA", DISTANCE, GLOBAL);
    assert_eq!(alignment.aligned_x, b"AGTA");
    assert_eq!(alignment.aligned_y, b"A-TA");
    assert_eq!(alignment.score, -5);
    assert_eq!(alignment.x_range, 0..4);
    assert_eq!(alignment.y_range, 0..3);
    assert_eq!(alignment.rescore(&DISTANCE), -5);

    assert_eq!(align(b"AGTA", b"ATA", SIMILARITY, GLOBAL).score, -6);
}

#[test]
fn agta_ata_local_covers_everything() {
    let alignment = align(b"AGTA", b"ATA", DISTANCE, LOCAL);
    assert_eq!(alignment.aligned_x, b"AGTA");
    assert_eq!(alignment.aligned_y, b"A-TA");
    assert_eq!(alignment.score, -5);
    assert_eq!(alignment.variant, LOCAL);
}

#[test]
fn global_traceback_stops_at_first_column() {
    let (x, y) = (b"GGACTTA", b"ACT");
    let alignment = align(x, y, DISTANCE, GLOBAL);
    assert_eq!(alignment.aligned_x, b"ACTTA");
    assert_eq!(alignment.aligned_y, b"AC-T-");
    assert_eq!(alignment.score, -2);
    assert_eq!(alignment.x_range, 2..7);
    assert_eq!(alignment.y_range, 0..3);

    let padded = alignment.padded(x, y);
    assert_eq!(padded.aligned_x, b"GGACTTA");
    assert_eq!(padded.aligned_y, b"--AC-T-");
    assert_eq!(padded.x_range, 0..7);
    assert_eq!(padded.rescore(&DISTANCE), -2);

    let short = align(b"GA", b"A", DISTANCE, GLOBAL);
    assert_eq!(short.aligned_x, b"A");
    assert_eq!(short.aligned_y, b"A");
    assert_eq!(short.score, -1);
    assert_eq!(short.x_range, 1..2);
}

#[test]
fn local_finds_shared_core() {
    let alignment = align(b"GGACTTA", b"ACT", DISTANCE, LOCAL);
    assert_eq!(alignment.aligned_x, b"ACT");
    assert_eq!(alignment.aligned_y, b"ACT");
    assert_eq!(alignment.score, -6);
    assert_eq!(alignment.x_range, 2..5);
    assert_eq!(alignment.y_range, 0..3);

    let alignment = align(b"HELLOWORLD", b"XXLOWOXX", DISTANCE, LOCAL);
    assert_eq!(alignment.aligned_x, b"LOWO");
    assert_eq!(alignment.aligned_y, b"LOWO");
    assert_eq!(alignment.score, -8);
    assert_eq!(alignment.x_range, 3..7);
    assert_eq!(alignment.y_range, 2..6);
    assert_eq!(alignment.rescore(&DISTANCE), -8);
}

#[test]
fn helloworld_global() {
    let alignment = align(b"HELLOWORLD", b"XXLOWOXX", DISTANCE, GLOBAL);
    assert_eq!(alignment.aligned_x, b"ELLOWORLD");
    assert_eq!(alignment.aligned_y, b"XXLOWO-XX");
    assert_eq!(alignment.score, -2);
}

#[test]
fn kitten_sitting() {
    let global = align(b"kitten", b"sitting", DISTANCE, GLOBAL);
    assert_eq!(global.aligned_x, b"kitten-");
    assert_eq!(global.aligned_y, b"sitting");
    assert_eq!(global.score, -5);

    let local = align(b"kitten", b"sitting", DISTANCE, LOCAL);
    assert_eq!(local.aligned_x, b"itten");
    assert_eq!(local.aligned_y, b"ittin");
    assert_eq!(local.score, -7);
    assert_eq!(local.x_range, 1..6);
    assert_eq!(local.y_range, 1..6);

    assert_eq!(global_score(b"kitten", b"sitting", SIMILARITY), -10);
}

#[test]
fn acgt_tacgtt() {
    let global = align(b"ACGT", b"TACGTT", DISTANCE, GLOBAL);
    assert_eq!(global.aligned_x, b"ACG-T");
    assert_eq!(global.aligned_y, b"ACGTT");
    assert_eq!(global.score, -6);

    let local = align(b"ACGT", b"TACGTT", DISTANCE, LOCAL);
    assert_eq!(local.aligned_x, b"ACGT");
    assert_eq!(local.aligned_y, b"ACGT");
    assert_eq!(local.score, -8);
}

#[test]
fn empty_sequences() {
    let matrix = AlignmentMatrix::build(b"AAA", b"", DISTANCE, GLOBAL);
    assert_eq!((matrix.rows(), matrix.cols()), (4, 1));
    assert_eq!(matrix.final_score(), 3);

    let alignment = matrix.traceback(b"AAA", b"").unwrap();
    assert!(alignment.is_empty());
    assert_eq!(alignment.score, 3);
    assert_eq!(alignment.padded(b"AAA", b"").aligned_y, b"---");

    let local = align(b"AAA", b"", DISTANCE, LOCAL);
    assert!(local.is_empty());
    assert_eq!(local.score, 0);

    let both = align(b"", b"", DISTANCE, GLOBAL);
    assert!(both.is_empty());
    assert_eq!(both.score, 0);
    assert_eq!(global_score(b"", b"", DISTANCE), 0);
}

#[test]
fn local_without_negative_cell_is_empty() {
    let matrix = AlignmentMatrix::build(b"A", b"B", DISTANCE, LOCAL);
    assert_eq!(matrix.min_cell(), (0, 0, 0));

    let alignment = matrix.traceback(b"A", b"B").unwrap();
    assert!(alignment.is_empty());
    assert_eq!(alignment.score, 0);
    assert_eq!(alignment.x_range, 0..0);
}

#[test]
fn min_cell_prefers_first_in_row_major_order() {
    // Both (1, 2) and (2, 1) hold -2
    let matrix = AlignmentMatrix::build(b"AB", b"BA", DISTANCE, LOCAL);
    assert_eq!(matrix.min_cell(), (1, 2, -2));

    let alignment = matrix.traceback(b"AB", b"BA").unwrap();
    assert_eq!(alignment.aligned_x, b"A");
    assert_eq!(alignment.x_range, 0..1);
    assert_eq!(alignment.y_range, 1..2);
}

#[test]
fn diagonal_wins_ties() {
    // A mismatch and a gap pair cost the same here, and the diagonal is taken
    let alignment = align(b"A", b"B", DISTANCE, GLOBAL);
    assert_eq!(alignment.aligned_x, b"A");
    assert_eq!(alignment.aligned_y, b"B");
    assert_eq!(alignment.score, 1);
}

#[test]
fn up_wins_over_left() {
    let free_gaps = PenaltyScheme::new(0, 5, -2);
    let alignment = align(b"A", b"B", free_gaps, GLOBAL);
    assert_eq!(alignment.aligned_x, b"A");
    assert_eq!(alignment.aligned_y, b"-");
    assert_eq!(alignment.x_range, 0..1);
    assert_eq!(alignment.y_range, 1..1);

    let padded = alignment.padded(b"A", b"B");
    assert_eq!(padded.aligned_x, b"-A");
    assert_eq!(padded.aligned_y, b"B-");
}

#[test]
fn identical_sequences_score_twice_their_length() {
    for word in [&b"A"[..], b"humble", b"ACGTACGTTT"] {
        let expected = -2 * i64::try_from(word.len()).unwrap();
        let global = align(word, word, DISTANCE, GLOBAL);
        assert_eq!(global.score, expected);
        assert_eq!(global.aligned_x, word);
        assert_eq!(align(word, word, DISTANCE, LOCAL).score, expected);
    }
}

#[test]
fn global_score_is_symmetric_and_matches_matrix() {
    let pairs: [(&[u8], &[u8]); 5] = [
        (b"AGTA", b"ATA"),
        (b"GGACTTA", b"ACT"),
        (b"HELLOWORLD", b"XXLOWOXX"),
        (b"kitten", b"sitting"),
        (b"", b"abc"),
    ];
    for scheme in [DISTANCE, SIMILARITY, PenaltyScheme::new(2, 3, -1)] {
        for (x, y) in pairs {
            let score = global_score(x, y, scheme);
            assert_eq!(score, global_score(y, x, scheme));
            assert_eq!(score, AlignmentMatrix::build(x, y, scheme, GLOBAL).final_score());
        }
    }
}

#[test]
fn reconstruct_matches_traceback() {
    let (x, y) = (b"HELLOWORLD", b"XXLOWOXX");
    let matrix = AlignmentMatrix::build(x, y, DISTANCE, LOCAL);
    assert_eq!(reconstruct(&matrix, x, y), matrix.traceback(x, y));
}

#[test]
fn dimension_mismatch_is_an_error() {
    let matrix = AlignmentMatrix::build(b"AGTA", b"ATA", DISTANCE, GLOBAL);
    let err = matrix.traceback(b"AG", b"ATA").unwrap_err();
    assert_eq!(
        err,
        AlignmentError::DimensionMismatch {
            expected: (3, 4),
            found:    (5, 4),
        }
    );
    assert_eq!(err.get_code(), 1);
    assert!(err.to_string().contains("5x4"));

    assert!(reconstruct(&matrix, b"AGTA", b"AT").is_err());
}

#[test]
#[should_panic(expected = "outside the matrix")]
fn index_out_of_bounds_panics() {
    let matrix = AlignmentMatrix::build(b"A", b"A", DISTANCE, GLOBAL);
    let _value: i64 = matrix[(2, 0)];
}

#[test]
fn large_gap_penalty_does_not_overflow() {
    let scheme: PenaltyScheme = "2000000000,1,-2".parse().unwrap();
    let alignment = align(b"AA", b"", scheme, GLOBAL);
    assert_eq!(alignment.score, 4_000_000_000);
    assert!(alignment.is_empty());
    assert_eq!(alignment.padded(b"AA", b"").rescore(&scheme), 4_000_000_000);
    assert_eq!(global_score(b"AA", b"", scheme), 4_000_000_000);
}

#[test]
fn extreme_penalties_do_not_overflow() {
    let extreme = PenaltyScheme::new(i32::MAX, i32::MAX, i32::MIN);
    let (x, y) = (b"ACGT", b"ACGA");

    let global = align(x, y, extreme, GLOBAL);
    assert_eq!(global.aligned_x, b"ACGT");
    assert_eq!(global.aligned_y, b"ACGA");
    assert_eq!(global.score, -4_294_967_297);
    assert_eq!(global.rescore(&extreme), global.score);
    assert_eq!(global_score(x, y, extreme), global.score);

    let local = align(x, y, extreme, LOCAL);
    assert_eq!(local.aligned_x, b"ACG");
    assert_eq!(local.score, 3 * i64::from(i32::MIN));
}

#[test]
fn gap_byte_in_input_rescores_as_gap() {
    let alignment = align(b"A-C", b"A-C", DISTANCE, GLOBAL);
    assert_eq!(alignment.aligned_x, b"A-C");
    assert_eq!(alignment.score, -6);
    // The middle column is indistinguishable from an inserted gap
    assert_eq!(alignment.rescore(&DISTANCE), -3);
    assert_eq!(ungapped(&alignment.aligned_x), b"AC");
}

#[test]
fn parse_schemes() {
    assert_eq!("distance".parse::<PenaltyScheme>(), Ok(DISTANCE));
    assert_eq!(" Similarity ".parse::<PenaltyScheme>(), Ok(SIMILARITY));
    assert_eq!("2, 3,-1".parse::<PenaltyScheme>(), Ok(PenaltyScheme::new(2, 3, -1)));
    assert_eq!(DISTANCE.to_string(), "1,1,-2");
    assert_eq!(DISTANCE.to_string().parse::<PenaltyScheme>(), Ok(DISTANCE));
    assert_eq!(PenaltyScheme::default(), DISTANCE);

    assert_eq!(
        "1,2".parse::<PenaltyScheme>(),
        Err(PenaltySchemeError::WrongFieldCount(2))
    );
    assert_eq!(
        "1,x,3".parse::<PenaltyScheme>(),
        Err(PenaltySchemeError::InvalidValue("x".to_string()))
    );
}

#[test]
fn variant_seeds_and_clamps() {
    assert_eq!(GLOBAL.seed(3, &DISTANCE), 3);
    assert_eq!(LOCAL.seed(3, &DISTANCE), 0);
    assert_eq!(GLOBAL.clamp(4), 4);
    assert_eq!(LOCAL.clamp(4), 0);
    assert_eq!(LOCAL.clamp(-4), -4);
    assert_eq!(AlignmentVariant::default(), GLOBAL);
    assert_eq!(LOCAL.to_string(), "local");
}

#[test]
fn display_formats() {
    let matrix = AlignmentMatrix::build(b"A", b"A", DISTANCE, GLOBAL);
    assert_eq!(matrix.to_string(), " 0  1\n 1 -2\n");

    let alignment = align(b"AGTA", b"ATA", DISTANCE, GLOBAL);
    assert_eq!(alignment.to_string(), "AGTA\nA-TA");
}

#[cfg(feature = "rand")]
mod properties {
    use super::*;
    use crate::{distance::edit_distance, generate::rand_sequence};

    const ALPHA: &[u8] = b"ACGT";

    fn random_pairs() -> impl Iterator<Item = (Vec<u8>, Vec<u8>)> {
        (0..60u64).map(|seed| {
            let x_len = (seed as usize * 7) % 13;
            let y_len = (seed as usize * 5) % 11;
            (rand_sequence(ALPHA, x_len, seed), rand_sequence(ALPHA, y_len, seed + 1_000))
        })
    }

    #[test]
    fn padded_global_alignments_cover_both_sequences() {
        for (x, y) in random_pairs() {
            for scheme in [DISTANCE, SIMILARITY] {
                let alignment = align(&x, &y, scheme, GLOBAL);
                let padded = alignment.padded(&x, &y);

                assert_eq!(padded.aligned_x.len(), padded.aligned_y.len());
                assert!(padded.len() >= x.len().max(y.len()));
                assert!(padded.len() <= x.len() + y.len());
                assert_eq!(ungapped(&padded.aligned_x), x);
                assert_eq!(ungapped(&padded.aligned_y), y);
                assert_eq!(padded.rescore(&scheme), alignment.score);
            }
        }
    }

    #[test]
    fn local_alignments_are_substrings() {
        for (x, y) in random_pairs() {
            let alignment = align(&x, &y, DISTANCE, LOCAL);
            let matrix = AlignmentMatrix::build(&x, &y, DISTANCE, LOCAL);

            assert_eq!(alignment.score, matrix.min_cell().2);
            assert!(alignment.score <= 0);
            assert_eq!(ungapped(&alignment.aligned_x), &x[alignment.x_range.clone()]);
            assert_eq!(ungapped(&alignment.aligned_y), &y[alignment.y_range.clone()]);
            assert_eq!(alignment.rescore(&DISTANCE), alignment.score);
        }
    }

    #[test]
    fn edit_distance_is_a_metric() {
        let words: Vec<Vec<u8>> = (0..12u64).map(|seed| rand_sequence(ALPHA, (seed as usize) % 9, seed)).collect();
        for a in &words {
            assert_eq!(edit_distance(a, a), 0);
            for b in &words {
                let ab = edit_distance(a, b);
                assert_eq!(ab, edit_distance(b, a));
                assert!(ab <= a.len().max(b.len()));
                for c in &words {
                    assert!(edit_distance(a, c) <= ab + edit_distance(b, c));
                }
            }
        }
    }
}
