//! Integration tests across the set representations
//!
//! - textual representation -> general set -> slices
//! - generators -> alpha-cut decomposition -> type-1 reconstruction
//! - general set algebra combined with slicing

use approx::assert_abs_diff_eq;
use type2fuzzy_sets::generate::{linspace, trapezoidal, triangular, triangular_secondary};
use type2fuzzy_sets::*;

const EXAMPLE: &str = "(0.90/0.00 + 0.50/0.20 + 0.20/0.40 + 0.35/0.61 + 0.10/0.80)/1.00 \
                       + (0.50/0.00+0.35/0.20+0.35/0.40+0.20/0.60+0.50/0.80)/2.00";

// ============================================================================
// Representation + slicing
// ============================================================================

#[test]
fn test_example_set_end_to_end() {
    let set: GeneralType2FuzzySet = EXAMPLE.parse().unwrap();

    let secondary = set.get(1.00).unwrap();
    assert_eq!(secondary.membership(0.00), 0.90);

    let slice = set.z_slice(0.0).unwrap();
    for x in [1.0, 2.0] {
        let interval = slice.get(x).unwrap();
        assert_eq!(interval.bounds(), Some((0.0, 0.8)));
        assert_eq!(interval.to_string(), "[0.00000, 0.80000]");
    }

    let fou = set.footprint_of_uncertainty();
    assert_eq!(fou.len(), 2);
    assert!(fou.iter().all(|(x, interval)| slice.get(*x).unwrap() == interval));
}

#[test]
fn test_example_set_slices() {
    let set: GeneralType2FuzzySet = EXAMPLE.parse().unwrap();
    let zset = ZSliceType2FuzzySet::from_general_type2_set(&set, 5).unwrap();

    // highest grade at x=1 is 0.9, so z=1.0 is empty
    assert_eq!(zset.zslices(), vec![0.0, 0.25, 0.5, 0.75]);
    let half = zset.get(0.5).unwrap();
    assert_eq!(half.get(1.0).unwrap().bounds(), Some((0.0, 0.2)));
    assert_eq!(half.get(2.0).unwrap().bounds(), Some((0.0, 0.8)));
    assert_eq!(zset.get(0.75).unwrap().primary_domain(), vec![1.0]);
}

#[test]
fn test_example_embedded_sets() {
    let set: GeneralType2FuzzySet = EXAMPLE.parse().unwrap();
    assert_eq!(set.embedded_type2_sets_count(), 25);

    let first = set.embedded_type2_sets().next().unwrap();
    assert_eq!(
        first,
        vec![
            EmbeddedPoint {
                grade: 0.9,
                secondary: 0.0,
                primary: 1.0
            },
            EmbeddedPoint {
                grade: 0.5,
                secondary: 0.0,
                primary: 2.0
            },
        ]
    );
    let last = set.embedded_type2_sets().last().unwrap();
    assert_eq!(last[0].secondary, 0.8);
    assert_eq!(last[1].secondary, 0.8);
}

// ============================================================================
// Generators + alpha-cut decomposition
// ============================================================================

#[test]
fn test_alpha_cut_reconstruction() {
    let domain = linspace(0.0, 10.0, 21);
    let set = triangular(&domain, 2.0, 5.0, 8.0).unwrap();
    let cuts = AlphaCutType1FuzzySet::from_type1_set(&set, 101).unwrap();
    let rebuilt = Type1FuzzySet::from_alpha_cut_set(&cuts, &domain).unwrap();

    for (x, degree) in set.iter() {
        assert_abs_diff_eq!(rebuilt.membership(x), degree, epsilon = 0.01);
    }
}

#[test]
fn test_trapezoid_alpha_cuts() {
    let domain = linspace(0.0, 4.0, 9);
    let set = trapezoidal(&domain, 0.0, 1.0, 3.0, 4.0).unwrap();
    let cuts = AlphaCutType1FuzzySet::from_type1_set(&set, 3).unwrap();
    assert_eq!(cuts.get(0.0).unwrap().bounds(), Some((0.5, 3.5)));
    assert_eq!(cuts.get(0.5).unwrap().bounds(), Some((0.5, 3.5)));
    assert_eq!(cuts.get(1.0).unwrap().bounds(), Some((1.0, 3.0)));
}

#[test]
fn test_generated_general_set() {
    let primary = linspace(1.0, 5.0, 5);
    let secondary = linspace(0.0, 1.0, 21);
    let set = triangular_secondary(&primary, &secondary, |x| {
        let peak = 1.0 - (x - 3.0).abs() / 4.0;
        (peak - 0.2, peak, (peak + 0.2).min(1.0))
    })
    .unwrap();

    assert_eq!(set.primary_domain(), primary);
    let fou = IntervalType2FuzzySet::from_general_type2_set(&set);
    let upper = fou.higher_membership_function();
    let lower = fou.lower_membership_function();
    assert!(lower.iter().zip(&upper).all(|(l, h)| l <= h));
    // peak of the middle triangle sits at u = 1 with grade 1
    assert_eq!(set.secondary_grade(3.0, 1.0).unwrap(), 1.0);
}

// ============================================================================
// Algebra + slicing
// ============================================================================

#[test]
fn test_complement_mirrors_fou() {
    let set: GeneralType2FuzzySet = "(0.5/0.1 + 1.0/0.3)/1.0 + (1.0/0.6)/2.0".parse().unwrap();
    let complement = set.complement();
    let fou = complement.z_slice(0.0).unwrap();
    assert_eq!(fou.get(1.0).unwrap().bounds(), Some((0.7, 0.9)));
    assert_eq!(fou.get(2.0).unwrap().bounds(), Some((0.4, 0.4)));
}

#[test]
fn test_union_of_disjoint_domains() {
    let a: GeneralType2FuzzySet = "(1.0/0.2)/1.0".parse().unwrap();
    let b: GeneralType2FuzzySet = "(1.0/0.7)/2.0".parse().unwrap();
    let union = a.union(&b);
    assert_eq!(
        union.to_string(),
        "(1.0000/0.2000)/1.0000 + (1.0000/0.7000)/2.0000"
    );
    assert_eq!(a.intersection(&b), union);
}

#[test]
fn test_lookup_errors() {
    let set: GeneralType2FuzzySet = EXAMPLE.parse().unwrap();
    let err = set.get(3.0).unwrap_err();
    assert!(err.is_not_found());

    let zset = ZSliceType2FuzzySet::from_general_type2_set(&set, 2).unwrap();
    assert!(matches!(zset.get(0.3), Err(FuzzySetError::ZSliceNotFound(_))));
}
