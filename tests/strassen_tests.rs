//! Strassen against the classical oracle.
//!
//! Every accepted input must give a result bit-identical to
//! `ClassicalMultiplier`, including when intermediate sums overflow and wrap.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strassen_engine::prelude::*;
use strassen_engine::ShapeRequirement;

fn random_square(rng: &mut StdRng, n: usize, bound: Scalar) -> Matrix {
    let mut m = Matrix::new(n, n);
    for i in 0..n {
        let row: Vec<Scalar> = (0..n).map(|_| rng.gen_range(-bound..=bound)).collect();
        m.set_row(i, &row).unwrap();
    }
    m
}

fn shape_error(result: MatrixResult<Matrix>) -> ShapeRequirement {
    match result {
        Err(MatrixError::IncompatibleShape { requirement, .. }) => requirement,
        other => panic!("expected IncompatibleShape, got {:?}", other),
    }
}

#[test]
fn test_2x2_known_product() {
    let a = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
    let b = a.clone();

    let c = StrassenMultiplier::new().multiply(&a, &b).unwrap();

    assert_eq!(c.rows(), 2);
    assert_eq!(c.columns(), 2);
    assert_eq!(c.row(0), &[7, 10]);
    assert_eq!(c.row(1), &[15, 22]);
    assert_eq!(c, ClassicalMultiplier.multiply(&a, &b).unwrap());
}

#[test]
fn test_4x4_recurses_two_levels() {
    #[rustfmt::skip]
    let a = Matrix::from_rows(&[
        vec![ 1,  2,  3,  4],
        vec![ 5,  6,  7,  8],
        vec![ 9, 10, 11, 12],
        vec![13, 14, 15, 16],
    ]).unwrap();
    #[rustfmt::skip]
    let b = Matrix::from_rows(&[
        vec![ 2, -1,  0,  3],
        vec![ 1,  0,  4, -2],
        vec![-3,  5,  1,  0],
        vec![ 0,  2, -1,  1],
    ]).unwrap();

    let c = StrassenMultiplier::new().multiply(&a, &b).unwrap();

    #[rustfmt::skip]
    let expected = vec![
        vec![-5, 22,  7,  3],
        vec![-5, 46, 23, 11],
        vec![-5, 70, 39, 19],
        vec![-5, 94, 55, 27],
    ];
    assert_eq!(c.to_rows(), expected);
    assert_eq!(c, ClassicalMultiplier.multiply(&a, &b).unwrap());
}

#[test]
fn test_identity_is_neutral() {
    let mut rng = StdRng::seed_from_u64(7);
    let a = random_square(&mut rng, 8, 1_000);
    let id = Matrix::identity(8);
    let s = StrassenMultiplier::new();

    assert_eq!(s.multiply(&a, &id).unwrap(), a);
    assert_eq!(s.multiply(&id, &a).unwrap(), a);
}

#[test]
fn test_matches_classical_on_random_inputs() {
    let mut rng = StdRng::seed_from_u64(42);
    let strassen = StrassenMultiplier::new();

    for n in [2, 4, 8, 16, 32] {
        for _ in 0..3 {
            let a = random_square(&mut rng, n, 100);
            let b = random_square(&mut rng, n, 100);
            assert_eq!(
                strassen.multiply(&a, &b).unwrap(),
                ClassicalMultiplier.multiply(&a, &b).unwrap(),
                "mismatch at n={}",
                n
            );
        }
    }
}

#[test]
fn test_wrapping_overflow_matches_classical() {
    let mut rng = StdRng::seed_from_u64(1234);
    let a = random_square(&mut rng, 8, Scalar::MAX);
    let b = random_square(&mut rng, 8, Scalar::MAX);

    assert_eq!(
        StrassenMultiplier::new().multiply(&a, &b).unwrap(),
        ClassicalMultiplier.multiply(&a, &b).unwrap()
    );
}

#[test]
fn test_overflow_wraps_at_32_bits() {
    // every cell of A·A is 2 * 2^32, which is 0 mod 2^32
    let a = Matrix::from_rows(&[vec![65536, 65536], vec![65536, 65536]]).unwrap();

    let c = StrassenMultiplier::new().multiply(&a, &a).unwrap();

    assert_eq!(c.to_rows(), vec![vec![0, 0], vec![0, 0]]);
    assert_eq!(c, ClassicalMultiplier.multiply(&a, &a).unwrap());
}

#[test]
fn test_cutover_does_not_change_results() {
    let mut rng = StdRng::seed_from_u64(99);
    let a = random_square(&mut rng, 32, 50);
    let b = random_square(&mut rng, 32, 50);
    let expected = ClassicalMultiplier.multiply(&a, &b).unwrap();

    for cutover in [1, 2, 4, 16, 32, 64] {
        let s = StrassenMultiplier::with_params(StrassenParams {
            cutover,
            parallel_depth: 0,
        });
        assert_eq!(s.multiply(&a, &b).unwrap(), expected, "cutover={}", cutover);
    }
    assert_eq!(
        StrassenMultiplier::with_params(StrassenParams::TUNED)
            .multiply(&a, &b)
            .unwrap(),
        expected
    );
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_depth_does_not_change_results() {
    let mut rng = StdRng::seed_from_u64(5);
    let a = random_square(&mut rng, 16, 100);
    let b = random_square(&mut rng, 16, 100);
    let expected = ClassicalMultiplier.multiply(&a, &b).unwrap();

    for parallel_depth in [0, 1, 2, 8] {
        let s = StrassenMultiplier::with_params(StrassenParams {
            cutover: 2,
            parallel_depth,
        });
        assert_eq!(s.multiply(&a, &b).unwrap(), expected);
    }
}

#[test]
fn test_rejects_incompatible_order() {
    let a = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
    let b = Matrix::from_rows(&[vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap();

    let s = StrassenMultiplier::new();
    assert_eq!(shape_error(s.multiply(&a, &b)), ShapeRequirement::Square);
}

#[test]
fn test_rejects_non_square_even_when_multiplicable() {
    let a = Matrix::new(2, 4);
    let b = Matrix::new(4, 2);
    assert!(a.is_multiplicable_with(&b));

    let s = StrassenMultiplier::new();
    assert_eq!(shape_error(s.multiply(&a, &b)), ShapeRequirement::Square);
}

#[test]
fn test_rejects_unequal_orders() {
    let s = StrassenMultiplier::new();
    let err = s.multiply(&Matrix::new(2, 2), &Matrix::new(4, 4));
    assert_eq!(shape_error(err), ShapeRequirement::EqualOrder);
}

#[test]
fn test_rejects_orders_that_are_not_powers_of_two() {
    let s = StrassenMultiplier::new();
    for n in [1, 3, 5, 6, 12] {
        let a = Matrix::new(n, n);
        assert_eq!(
            shape_error(s.multiply(&a, &a)),
            ShapeRequirement::PowerOfTwo,
            "n={}",
            n
        );
    }
}

#[test]
fn test_both_algorithms_reject_incompatible_shapes() {
    let a = Matrix::new(2, 3);
    let b = Matrix::new(2, 3);
    for alg in Algorithm::ALL {
        let err = alg.multiply(&a, &b).unwrap_err();
        assert!(err.is_incompatible_shape(), "{} accepted 2x3 * 2x3", alg);
    }
}

#[test]
fn test_algorithms_are_interchangeable() {
    let mut rng = StdRng::seed_from_u64(2024);
    let a = random_square(&mut rng, 8, 20);
    let b = random_square(&mut rng, 8, 20);

    let multipliers: Vec<Box<dyn Multiplier>> =
        vec![Box::new(ClassicalMultiplier), Box::new(StrassenMultiplier::new())];
    let results: Vec<Matrix> = multipliers
        .iter()
        .map(|m| m.multiply(&a, &b).unwrap())
        .collect();
    assert_eq!(results[0], results[1]);
}

#[test]
fn test_inputs_are_left_untouched() {
    let mut rng = StdRng::seed_from_u64(3);
    let a = random_square(&mut rng, 4, 9);
    let b = random_square(&mut rng, 4, 9);
    let (a0, b0) = (a.clone(), b.clone());

    let _ = StrassenMultiplier::new().multiply(&a, &b).unwrap();

    assert_eq!(a, a0);
    assert_eq!(b, b0);
}
