use glam::Vec2;
use motionlab_core::graph::{DEFAULT_ENERGY_CAPACITY, DEFAULT_GRAPH_CAPACITY};
use motionlab_core::tests::test_helpers::{approx_eq_f32, particle_at};
use motionlab_core::{EnergyGraph, Graph, GraphConfig, GraphKind, PhysicsError};

fn graph(kind: GraphKind, capacity: usize) -> Graph {
    Graph::new(GraphConfig {
        kind,
        capacity,
        range: None,
    })
    .unwrap()
}

#[test]
fn test_defaults() {
    let config = GraphConfig::default();
    assert_eq!(config.capacity, DEFAULT_GRAPH_CAPACITY);
    assert_eq!(config.kind, GraphKind::Speed);
    assert_eq!(DEFAULT_ENERGY_CAPACITY, 300);
    assert_eq!(GraphKind::Phase.label(), "phase");
}

#[test]
fn test_records_each_kind() {
    let mut p = particle_at(Vec2::new(2.0, 7.0), Vec2::new(3.0, 4.0), 2.0).unwrap();
    p.update(1.0).unwrap();

    let cases = [
        (GraphKind::Speed, 5.0),
        (GraphKind::VelocityX, 3.0),
        (GraphKind::VelocityY, 4.0),
        (GraphKind::PositionX, 5.0),
        (GraphKind::PositionY, 11.0),
        (GraphKind::KineticEnergy, 25.0),
    ];
    for (kind, expected) in cases {
        let mut g = graph(kind, 10);
        g.record(&p);
        assert_eq!(g.kind(), kind);
        assert_eq!(g.latest(), Some(expected), "{:?}", kind);
        assert_eq!(g.times().latest(), Some(&1.0));
        assert!(g.phase().is_empty());
    }
}

#[test]
fn test_phase_graph_records_pairs() {
    let mut p = particle_at(Vec2::ZERO, Vec2::new(2.0, 0.0), 1.0).unwrap();
    let mut g = graph(GraphKind::Phase, 4);
    for _ in 0..6 {
        p.update(0.5).unwrap();
        g.record(&p);
    }
    assert!(g.values().is_empty());
    assert_eq!(g.phase().len(), 4);
    assert_eq!(g.phase().latest(), Some((&6.0, &2.0)));
    assert_eq!(g.times().to_vec(), vec![1.5, 2.0, 2.5, 3.0]);
}

#[test]
fn test_capacity_bounds_values() {
    let mut g = graph(GraphKind::Speed, 3);
    for v in 0..10 {
        g.add_data(v as f32);
    }
    assert_eq!(g.values().to_vec(), vec![7.0, 8.0, 9.0]);
    g.clear();
    assert!(g.values().is_empty());
    assert_eq!(g.display_range(), None);
}

#[test]
fn test_display_range() {
    let mut g = graph(GraphKind::VelocityX, 10);
    g.add_data(-2.0);
    g.add_data(6.0);
    assert_eq!(g.display_range(), Some((-2.0, 6.0)));

    g.set_range(0.0, 100.0);
    assert_eq!(g.display_range(), Some((0.0, 100.0)));

    g.enable_auto_scale();
    g.clear();
    g.add_data(3.0);
    g.add_data(3.02);
    let (lo, hi) = g.display_range().unwrap();
    assert!(approx_eq_f32(lo, 2.51, 1e-5));
    assert!(approx_eq_f32(hi, 3.51, 1e-5));
}

#[test]
fn test_zero_capacity_graph_is_rejected() {
    let err = Graph::new(GraphConfig {
        capacity: 0,
        ..Default::default()
    })
    .unwrap_err();
    assert_eq!(err, PhysicsError::InvalidCapacity);
    assert!(EnergyGraph::new(0).is_err());
}

#[test]
fn test_energy_graph_tracks_total() {
    let mut energy = EnergyGraph::new(2).unwrap();
    assert!(energy.is_empty());
    assert_eq!(energy.latest(), None);
    assert_eq!(energy.kinetic_fraction(), None);

    energy.record(1.0, 3.0);
    energy.record(2.0, 6.0);
    energy.record(5.0, 15.0);
    assert_eq!(energy.len(), 2);
    assert_eq!(energy.total().to_vec(), vec![8.0, 20.0]);
    assert_eq!(energy.kinetic().to_vec(), vec![2.0, 5.0]);
    assert_eq!(energy.potential().to_vec(), vec![6.0, 15.0]);

    let latest = energy.latest().unwrap();
    assert_eq!(latest.total, 20.0);
    assert_eq!(energy.kinetic_fraction(), Some(0.25));

    energy.record(0.0, 0.0);
    assert_eq!(energy.kinetic_fraction(), None);

    energy.clear();
    assert!(energy.is_empty());
}
