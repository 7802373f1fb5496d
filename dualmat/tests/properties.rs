//! Behavioral properties of both matrix types and the operator layer
//!
//! Covers:
//! - fills and the row-major mapping
//! - identity matrices and the identity law
//! - resize overlap preservation
//! - element-wise and scalar arithmetic
//! - value semantics of copies

use dualmat::{ops, DynamicMatrix, FixedMatrix, MatError, Matrix, Render};
use rand::Rng;

fn random_dynamic(rng: &mut impl Rng, height: usize, width: usize) -> DynamicMatrix<i64> {
    DynamicMatrix::from_fn(height, width, |_, _| rng.gen_range(-100..100))
}

// ============================================================
// Construction
// ============================================================

mod construction_tests {
    use super::*;

    #[test]
    fn test_fill_value_everywhere() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let height = rng.gen_range(1..12);
            let width = rng.gen_range(1..12);
            let value: i32 = rng.gen();
            let m = DynamicMatrix::filled(height, width, value);
            assert_eq!(m.shape(), (height, width));
            assert!(m.iter().all(|&v| v == value));
        }

        let f = FixedMatrix::<f32, 4, 7>::filled(-2.25);
        assert_eq!(f.len(), 28);
        assert!(f.iter().all(|&v| v == -2.25));
    }

    #[test]
    fn test_row_major_mapping() {
        let values: Vec<i32> = (100..115).collect();
        let fixed = FixedMatrix::<i32, 3, 5>::from_slice(&values);
        let dynamic = DynamicMatrix::from_vec(3, 5, values.clone());
        for j in 0..3 {
            for i in 0..5 {
                assert_eq!(fixed.at(j, i), values[j * 5 + i]);
                assert_eq!(dynamic.at(j, i), values[j * 5 + i]);
            }
        }
    }

    #[test]
    fn test_identity_shape() {
        let m = FixedMatrix::<u32, 5, 5>::identity();
        let ones: u32 = m.iter().sum();
        assert_eq!(ones, 5);
        for i in 0..5 {
            assert_eq!(m[(i, i)], 1);
        }
    }
}

// ============================================================
// Resize
// ============================================================

mod resize_tests {
    use super::*;

    #[test]
    fn test_three_by_three_to_five_by_five() {
        let mut m = DynamicMatrix::new(3, 3);
        m.assign(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        m.resize(5, 5);

        let mut zeros = 0;
        for j in 0..5 {
            for i in 0..5 {
                if j < 3 && i < 3 {
                    assert_eq!(m[(j, i)], (j * 3 + i + 1) as i32);
                } else {
                    assert_eq!(m[(j, i)], 0);
                    zeros += 1;
                }
            }
        }
        assert_eq!(zeros, 16);
    }

    #[test]
    fn test_random_resizes_preserve_overlap() {
        let mut rng = rand::thread_rng();
        for _ in 0..25 {
            let (h, w) = (rng.gen_range(1..8), rng.gen_range(1..8));
            let (h2, w2) = (rng.gen_range(1..8), rng.gen_range(1..8));
            let original = random_dynamic(&mut rng, h, w);

            let mut resized = original.clone();
            resized.resize(h2, w2);
            assert_eq!(resized.shape(), (h2, w2));
            for j in 0..h2 {
                for i in 0..w2 {
                    let expected = if j < h && i < w { original[(j, i)] } else { 0 };
                    assert_eq!(resized[(j, i)], expected);
                }
            }
        }
    }
}

// ============================================================
// Arithmetic
// ============================================================

mod arithmetic_tests {
    use super::*;

    #[test]
    fn test_ones_and_twos() {
        let ones = DynamicMatrix::filled(2, 3, 1);
        let twos = FixedMatrix::<i32, 2, 3>::filled(2);

        let sum = &ones + &twos;
        assert!(sum.iter().all(|&v| v == 3));
        let diff = &ones - &twos;
        assert!(diff.iter().all(|&v| v == -1));
    }

    #[test]
    fn test_scalar_sequence() {
        let m = DynamicMatrix::filled(4, 4, 5);
        let m = m + 3;
        assert!(m.iter().all(|&v| v == 8));
        let m = m * 2;
        assert!(m.iter().all(|&v| v == 16));
        let m = m / 4;
        assert!(m.iter().all(|&v| v == 4));
    }

    #[test]
    fn test_reference_product() {
        let a = DynamicMatrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]);
        let b = DynamicMatrix::from_vec(3, 2, vec![7, 8, 9, 10, 11, 12]);
        let c = &a * &b;
        assert_eq!(Render::new(&c).to_string(), "58 64 \n139 154 \n");
    }

    #[test]
    fn test_random_identity_law() {
        let mut rng = rand::thread_rng();
        let identity = FixedMatrix::<i64, 3, 3>::identity();
        for _ in 0..10 {
            let m = random_dynamic(&mut rng, 3, 3);
            assert_eq!(&identity * &m, m);
        }
    }

    #[test]
    fn test_incompatible_product_is_reported() {
        let a = DynamicMatrix::<i32>::new(2, 3);
        let b = DynamicMatrix::<i32>::new(2, 2);
        assert_eq!(
            ops::try_product(&a, &b).unwrap_err(),
            MatError::InnerDimensionMismatch {
                left_width: 3,
                right_height: 2
            }
        );
    }

    #[cfg(feature = "checked")]
    #[test]
    #[should_panic(expected = "Invalid matrix size for product")]
    fn test_incompatible_product_panics() {
        let a = DynamicMatrix::<i32>::new(2, 3);
        let b = DynamicMatrix::<i32>::new(2, 2);
        let _ = a * b;
    }
}

// ============================================================
// Value semantics
// ============================================================

mod value_semantics_tests {
    use super::*;

    #[test]
    fn test_copies_are_independent() {
        let fixed = FixedMatrix::<i32, 2, 2>::from_slice(&[1, 2, 3, 4]);
        let mut fixed_copy = fixed;
        fixed_copy *= 10;
        assert_eq!(fixed.as_slice(), &[1, 2, 3, 4]);

        let dynamic = DynamicMatrix::from(fixed);
        let mut dynamic_copy = dynamic.clone();
        *dynamic_copy.at_mut(0, 0) = 42;
        dynamic_copy.resize(1, 1);
        assert_eq!(dynamic.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(dynamic_copy.as_slice(), &[42]);
    }
}
