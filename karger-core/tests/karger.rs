//! End-to-end behaviour of [`karger_core::Karger`] runs.

mod common;

use karger_core::{EdgeSampling, KargerBuilder, KargerError, Multigraph, VertexId, run_many};
use karger_test_support::tracing::RecordingLayer;
use rand::{SeedableRng, rngs::SmallRng};
use rstest::{fixture, rstest};
use tracing_subscriber::layer::SubscriberExt;

use common::{cycle, from_edges, two_triangles};

#[fixture]
fn square() -> Multigraph {
    cycle(4)
}

#[rstest]
#[case::vertex_then_neighbour(EdgeSampling::VertexThenNeighbour)]
#[case::uniform_edge(EdgeSampling::UniformEdge)]
fn square_always_cuts_two(square: Multigraph, #[case] sampling: EdgeSampling) {
    let mut rng = SmallRng::seed_from_u64(5);
    let summary = run_many(&square, 50, &mut rng, sampling).expect("run must succeed");
    assert_eq!(summary.min_cut(), 2);
    assert_eq!(summary.occurrences(), 50);
    assert_eq!(summary.trials(), 50);
}

#[rstest]
#[case::vertex_then_neighbour(EdgeSampling::VertexThenNeighbour)]
#[case::uniform_edge(EdgeSampling::UniformEdge)]
fn disconnected_graph_has_zero_cut(#[case] sampling: EdgeSampling) {
    let mut rng = SmallRng::seed_from_u64(17);
    let summary = run_many(&two_triangles(), 20, &mut rng, sampling).expect("run must succeed");
    assert_eq!(summary.min_cut(), 0);
    assert_eq!(summary.occurrences(), 20);
}

#[rstest]
fn parallel_edges_count_towards_the_cut() {
    // A doubled bridge between two triangles.
    let graph = from_edges(&[
        (1, 2),
        (2, 3),
        (3, 1),
        (4, 5),
        (5, 6),
        (6, 4),
        (3, 4),
        (3, 4),
    ]);
    let karger = KargerBuilder::new()
        .with_trials(300)
        .with_seed(11)
        .build()
        .expect("configuration is valid");
    let summary = karger.run(&graph).expect("run must succeed");
    assert_eq!(summary.min_cut(), 2);
}

#[rstest]
fn run_records_core_spans() {
    let karger = KargerBuilder::new()
        .with_trials(8)
        .with_seed(2)
        .with_sampling(EdgeSampling::UniformEdge)
        .build()
        .expect("configuration is valid");
    let graph = cycle(5);
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let summary = tracing::subscriber::with_default(subscriber, || karger.run(&graph))
        .expect("run must succeed");
    assert_eq!(summary.min_cut(), 2);

    let run_span = layer.span("core.run").expect("core.run span must exist");
    assert_eq!(run_span.fields.get("vertices"), Some(&"5".to_owned()));
    assert_eq!(run_span.fields.get("seeded"), Some(&"true".to_owned()));

    let many_span = layer
        .span("core.run_many")
        .expect("core.run_many span must exist");
    assert_eq!(many_span.fields.get("trials"), Some(&"8".to_owned()));
    assert_eq!(many_span.fields.get("edges"), Some(&"5".to_owned()));
    assert_eq!(
        many_span.fields.get("sampling"),
        Some(&"uniform-edge".to_owned())
    );

    let completed = layer.events_with_message("trials completed");
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].fields.get("min_cut"), Some(&"2".to_owned()));
}

#[rstest]
fn failed_run_records_error() {
    let mut graph = Multigraph::new();
    graph.add_vertex(VertexId::new(7));
    let karger = KargerBuilder::new().build().expect("configuration is valid");
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let err = tracing::subscriber::with_default(subscriber, || karger.run(&graph))
        .expect_err("single vertex must fail");
    assert_eq!(err, KargerError::InsufficientVertices { vertices: 1 });

    let events = layer.events();
    assert!(
        events
            .iter()
            .any(|event| event.fields.contains_key("error")),
        "instrumented failures must emit an error event"
    );
}
