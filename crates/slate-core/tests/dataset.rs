// File: crates/slate-core/tests/dataset.rs
// Purpose: Validate dataset accessors and collection-level preconditions.

use slate_core::dataset::{Dataset, Datasets};
use slate_core::error::ConfigError;

#[test]
fn dataset_exposes_count_and_max() {
    let mut ds = Dataset::with_data("sales", [("Q1", 3.0), ("Q2", 8.5)]);
    ds.push("Q3", 6.0);
    assert_eq!(ds.count(), 3);
    assert_eq!(ds.max_value(), 8.5);
    assert_eq!(ds.data()[1].label, "Q2");
    assert_eq!(Dataset::from_values("x", &[1.0, 2.0]).data()[1].label, "2");
}

#[test]
fn empty_collection_is_rejected() {
    assert_eq!(Datasets::new(&[]).unwrap_err(), ConfigError::NoDatasets);
}

#[test]
fn empty_dataset_is_rejected() {
    let sets = vec![Dataset::new("nothing")];
    assert_eq!(
        Datasets::new(&sets).unwrap_err(),
        ConfigError::EmptyDataset { name: "nothing".into() }
    );
}

#[test]
fn mismatched_lengths_are_rejected() {
    let sets = vec![Dataset::from_values("a", &[1.0, 2.0]), Dataset::from_values("b", &[1.0])];
    let err = Datasets::new(&sets).unwrap_err();
    assert_eq!(
        err,
        ConfigError::MismatchedLengths { name: "b".into(), found: 1, first: "a".into(), expected: 2 }
    );
    assert!(err.to_string().contains("`b` has 1 points"));
}

#[test]
fn non_finite_values_are_rejected() {
    let sets = vec![Dataset::from_values("a", &[1.0, f64::NAN])];
    assert_eq!(
        Datasets::new(&sets).unwrap_err(),
        ConfigError::NonFiniteValue { name: "a".into(), index: 1 }
    );
}

#[test]
fn collection_preserves_declaration_order() {
    let sets = vec![
        Dataset::from_values("first", &[1.0]),
        Dataset::from_values("second", &[5.0]),
        Dataset::from_values("third", &[2.0]),
    ];
    let ds = Datasets::new(&sets).unwrap();
    let names: Vec<&str> = ds.iter().map(Dataset::name).collect();
    assert_eq!(names, ["first", "second", "third"]);
    assert_eq!(ds.len(), 3);
    assert_eq!(ds.point_count(), 1);
    assert_eq!(ds.sum_of_maxima(), 8.0);
    assert_eq!(ds.max_of_maxima(), 5.0);
}
