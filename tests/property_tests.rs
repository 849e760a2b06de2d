use bucketize::binning::{
    Binner, CentroidBinner, Discretizer, EqualWidthBinner, QuantileBinner, Strategy,
};
use bucketize::Error;
use proptest::prelude::*;

fn non_decreasing(edges: &[f64]) -> bool {
    edges.windows(2).all(|w| w[0] <= w[1])
}

proptest! {
    #[test]
    fn prop_edges_shape_all_strategies(
        data in prop::collection::vec(-1000.0f64..1000.0, 1..60),
        k in 1usize..8,
        seed in any::<u64>(),
    ) {
        for strategy in [
            Strategy::EqualWidth,
            Strategy::Quantile,
            Strategy::Centroid { seed: Some(seed) },
        ] {
            let fit = strategy.fit(&data, k).unwrap();
            prop_assert_eq!(fit.edges().len(), k + 1);
            prop_assert_eq!(fit.n_bins(), k);
            prop_assert!(non_decreasing(fit.edges()), "{} edges {:?}", strategy, fit.edges());
            // Idempotent accessor.
            prop_assert_eq!(fit.edges(), fit.edges());
        }
    }

    #[test]
    fn prop_quantile_counts_balanced(
        data in prop::collection::vec(-100.0f64..100.0, 1..80),
        k in 1usize..10,
    ) {
        let fit = QuantileBinner::new(k).fit(&data).unwrap();
        let n = data.len();
        let base = n / k;
        let counts = fit.counts();

        prop_assert_eq!(counts.len(), k);
        prop_assert_eq!(counts.total(), n);
        for (_, c) in counts.iter() {
            prop_assert!(c == base || c == base + 1);
        }
        let larger = counts.iter().filter(|&(_, c)| c == base + 1).count();
        // With base == 0 the smaller groups are empty and still count as `base`.
        prop_assert_eq!(larger, n % k);
        prop_assert_eq!(*fit.edges().last().unwrap(), data.iter().copied().fold(f64::MIN, f64::max));
    }

    #[test]
    fn prop_equal_width_counts_cover_sample(
        data in prop::collection::vec(-100.0f64..100.0, 1..80),
        k in 1usize..10,
    ) {
        let fit = EqualWidthBinner::new(k).fit(&data).unwrap();
        prop_assert_eq!(fit.counts().total(), data.len());

        // The training counts agree with classifying the training sample.
        let bins = fit.cut(&data);
        for (bin, count) in fit.counts().iter() {
            prop_assert_eq!(bins.iter().filter(|&&b| b == bin).count(), count);
        }
    }

    #[test]
    fn prop_single_bin_holds_everything(
        data in prop::collection::vec(-100.0f64..100.0, 1..40),
    ) {
        let ew = EqualWidthBinner::new(1).fit(&data).unwrap();
        let q = QuantileBinner::new(1).fit(&data).unwrap();
        prop_assert_eq!(ew.count(0).unwrap(), data.len());
        prop_assert_eq!(q.count(0).unwrap(), data.len());
    }

    #[test]
    fn prop_centroid_edges_are_midpoints(
        data in prop::collection::vec(-1000.0f64..1000.0, 1..50),
        k in 1usize..6,
        seed in any::<u64>(),
    ) {
        let fit = CentroidBinner::new(k).with_seed(seed).fit(&data).unwrap();
        let c = fit.centroids();
        let e = fit.edges();

        prop_assert_eq!(c.len(), k);
        prop_assert!(non_decreasing(c));
        for i in 0..k - 1 {
            prop_assert_eq!(e[i], (c[i] + c[i + 1]) / 2.0);
        }
        prop_assert_eq!(e[k - 1], c[k - 1]);
        let max = data.iter().copied().fold(f64::MIN, f64::max);
        prop_assert!(e[k] > max);
        prop_assert!(fit.iterations() >= 1);
    }

    #[test]
    fn prop_cut_in_range(
        data in prop::collection::vec(-100.0f64..100.0, 1..40),
        queries in prop::collection::vec(-1000.0f64..1000.0, 0..40),
        k in 1usize..6,
        seed in any::<u64>(),
    ) {
        for strategy in [
            Strategy::EqualWidth,
            Strategy::Quantile,
            Strategy::Centroid { seed: Some(seed) },
        ] {
            let fit = strategy.fit(&data, k).unwrap();
            let bins = fit.cut(&queries);
            prop_assert_eq!(bins.len(), queries.len());
            prop_assert!(bins.iter().all(|&b| b < k));
        }
    }

    #[test]
    fn prop_out_of_range_count(
        data in prop::collection::vec(-100.0f64..100.0, 1..20),
        k in 1usize..6,
        extra in 0usize..10,
    ) {
        let fit = QuantileBinner::new(k).fit(&data).unwrap();
        let is_out_of_range = matches!(fit.count(k + extra), Err(Error::OutOfRange { .. }));
        prop_assert!(is_out_of_range);
    }
}

#[test]
fn empty_sample_rejected_by_every_binner() {
    assert_eq!(EqualWidthBinner::new(3).fit(&[]), Err(Error::EmptyInput));
    assert_eq!(QuantileBinner::new(3).fit(&[]), Err(Error::EmptyInput));
    assert_eq!(
        CentroidBinner::new(3).with_seed(1).fit(&[]),
        Err(Error::EmptyInput)
    );
}

#[test]
fn count_past_last_bin_is_out_of_range() {
    let data = [43.0, 44.0, 15.0, 30.0, 35.0, 2.0, 18.0, 1.0, 19.0, 36.0];
    let ew = EqualWidthBinner::new(3).fit(&data).unwrap();
    let q = QuantileBinner::new(3).fit(&data).unwrap();
    assert_eq!(ew.count(5), Err(Error::OutOfRange { index: 5, len: 3 }));
    assert_eq!(q.count(5), Err(Error::OutOfRange { index: 5, len: 3 }));
}
