use motionlab_core::{BoundedSeries, PairedSeries, PhysicsError};

#[test]
fn test_series_evicts_oldest_first() {
    let mut series = BoundedSeries::new(5).unwrap();
    for i in 0..=12 {
        series.push(i);
        assert!(series.len() <= 5);
    }
    assert!(series.is_full());
    assert_eq!(series.to_vec(), vec![8, 9, 10, 11, 12]);
    assert_eq!(series.oldest(), Some(&8));
    assert_eq!(series.latest(), Some(&12));
    assert_eq!(series.get(1), Some(&9));
    assert_eq!(series.get(5), None);

    let reversed: Vec<i32> = series.iter().rev().copied().collect();
    assert_eq!(reversed, vec![12, 11, 10, 9, 8]);
}

#[test]
fn test_series_below_capacity_keeps_everything() {
    let mut series = BoundedSeries::new(10).unwrap();
    for v in [0.5f32, 1.5, -3.0] {
        series.push(v);
    }
    assert_eq!(series.len(), 3);
    assert!(!series.is_full());
    assert_eq!(series.capacity(), 10);
    assert_eq!(series.range(), Some((-3.0, 1.5)));
    let summed: f32 = (&series).into_iter().sum();
    assert_eq!(summed, -1.0);

    series.clear();
    assert!(series.is_empty());
    assert_eq!(series.latest(), None);
    assert_eq!(series.range(), None);
}

#[test]
fn test_zero_capacity_is_an_error() {
    assert_eq!(
        BoundedSeries::<u8>::new(0).unwrap_err(),
        PhysicsError::InvalidCapacity
    );
    assert!(PairedSeries::<f32, f32>::new(0).is_err());
}

#[test]
fn test_paired_series_stays_aligned() {
    let mut phase = PairedSeries::new(3).unwrap();
    for i in 0..5 {
        phase.push(i as f32, (i * 10) as f32);
    }
    assert_eq!(phase.len(), 3);
    assert_eq!(phase.capacity(), 3);
    assert_eq!(phase.first().to_vec(), vec![2.0, 3.0, 4.0]);
    assert_eq!(phase.second().to_vec(), vec![20.0, 30.0, 40.0]);
    assert_eq!(phase.latest(), Some((&4.0, &40.0)));

    let pairs: Vec<(f32, f32)> = phase.iter().map(|(x, v)| (*x, *v)).collect();
    assert_eq!(pairs, vec![(2.0, 20.0), (3.0, 30.0), (4.0, 40.0)]);

    phase.clear();
    assert!(phase.is_empty());
    assert_eq!(phase.latest(), None);
}
