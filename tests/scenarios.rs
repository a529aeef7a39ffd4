#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::thread;

use dotloop::level::{reference, LevelDescription};
use dotloop::math::Point2;
use dotloop::selection::{Board, CompletionPolicy, SelectionConfig, SelectionOutcome};
use dotloop::topology::{PointId, PolygonId, TopologyModel};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn model(level: LevelDescription) -> Arc<TopologyModel> {
    Arc::new(level.build().unwrap())
}

/// Feeds `walk` until the first outcome other than `Continued`.
fn play(board: &mut Board, walk: &[u32]) -> SelectionOutcome {
    for &p in walk {
        let outcome = board.add_point(PointId(p));
        if outcome != SelectionOutcome::Continued {
            return outcome;
        }
    }
    SelectionOutcome::Continued
}

#[test]
fn triangle_end_to_end() {
    init_tracing();
    let mut board = Board::new(model(reference::single_triangle()));

    assert_eq!(board.add_point(PointId(0)), SelectionOutcome::Continued);
    assert_eq!(board.add_point(PointId(1)), SelectionOutcome::Continued);
    assert_eq!(board.add_point(PointId(2)), SelectionOutcome::Continued);

    let SelectionOutcome::PolygonCompleted(completion) = board.add_point(PointId(0)) else {
        panic!("triangle should complete on the closing move");
    };
    assert_eq!(completion.polygon, PolygonId(0));
    assert_eq!(
        completion.point_ids,
        [0, 1, 2, 0].map(PointId).to_vec()
    );
    assert_eq!(
        completion.positions,
        vec![
            Point2::new(-1.0, -1.0),
            Point2::new(1.0, -1.0),
            Point2::new(0.0, 1.0),
            Point2::new(-1.0, -1.0),
        ]
    );
    for p in 0..3 {
        assert!(board.remaining_polygons(PointId(p)).unwrap().is_empty());
    }
    assert!(board.is_level_complete());
}

#[test]
fn triangle_recovers_from_duplicate() {
    init_tracing();
    let mut board = Board::new(model(reference::single_triangle()));

    play(&mut board, &[0, 1]);
    assert_eq!(
        board.add_point(PointId(1)),
        SelectionOutcome::RejectedDuplicate
    );
    assert_eq!(board.selection(), &[PointId(0), PointId(1)]);

    assert!(matches!(
        play(&mut board, &[2, 0]),
        SelectionOutcome::PolygonCompleted(_)
    ));
}

#[test]
fn hub_fan_solves_in_any_order() {
    init_tracing();
    let walks: [&[u32]; 5] = [
        &[0, 2, 5, 6, 0],
        &[2, 4, 5, 2],
        &[1, 3, 2, 1],
        &[0, 1, 2, 0],
        &[3, 4, 2, 3],
    ];

    for policy in [CompletionPolicy::ExactLoop, CompletionPolicy::EdgeCoverage] {
        let config = SelectionConfig::default().with_policy(policy);
        let mut board = Board::with_config(model(reference::hub_fan()), config);

        let mut solved = Vec::new();
        for walk in walks {
            match play(&mut board, walk) {
                SelectionOutcome::PolygonCompleted(c) => solved.push(c.polygon),
                other => panic!("{policy:?}: walk {walk:?} ended with {other:?}"),
            }
        }
        solved.sort();
        assert_eq!(solved, (0..5).map(PolygonId).collect::<Vec<_>>());
        assert!(board.is_level_complete());
    }
}

#[test]
fn mis_taps_never_corrupt_the_board() {
    init_tracing();
    let mut board = Board::new(model(reference::square_with_roof()));

    let attempts: [&[u32]; 4] = [&[0, 2], &[4, 0], &[1, 3], &[0, 1, 4]];
    for walk in attempts {
        assert!(matches!(
            play(&mut board, walk),
            SelectionOutcome::Invalidated { .. }
        ));
        assert!(board.selection().is_empty());
    }
    assert_eq!(board.remaining_polygon_count(), 2);

    assert!(matches!(
        play(&mut board, &[0, 1, 2, 3, 0]),
        SelectionOutcome::PolygonCompleted(_)
    ));
}

#[test]
fn boards_share_one_model_across_threads() {
    init_tracing();
    let shared = model(reference::square_with_roof());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let topology = Arc::clone(&shared);
            thread::spawn(move || {
                let mut board = Board::new(topology);
                let walk: &[u32] = if i % 2 == 0 {
                    &[3, 4, 2, 3]
                } else {
                    &[0, 1, 2, 3, 0]
                };
                match play(&mut board, walk) {
                    SelectionOutcome::PolygonCompleted(c) => c.polygon,
                    other => panic!("unexpected outcome {other:?}"),
                }
            })
        })
        .collect();

    let solved: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        solved,
        vec![PolygonId(1), PolygonId(0), PolygonId(1), PolygonId(0)]
    );
}

#[test]
fn json_level_plays_like_builder_level() {
    init_tracing();
    let json = r#"{
        "points": [
            { "id": 10, "x": 0.0, "y": 0.0 },
            { "id": 11, "x": 2.0, "y": 0.0 },
            { "id": 12, "x": 2.0, "y": 2.0 },
            { "id": 13, "x": 0.0, "y": 2.0 }
        ],
        "polygons": [
            { "id": 1, "pointIds": [10, 11, 12] },
            { "id": 2, "pointIds": [10, 12, 13] }
        ]
    }"#;
    let level = LevelDescription::from_json(json).unwrap();
    let mut board = Board::new(model(level));

    play(&mut board, &[10, 12]);
    assert_eq!(board.possible_polygons(), &[PolygonId(1), PolygonId(2)]);

    let SelectionOutcome::PolygonCompleted(completion) = play(&mut board, &[13, 10]) else {
        panic!("lower-left triangle should complete");
    };
    assert_eq!(completion.polygon, PolygonId(2));
    assert!(!board.is_level_complete());
    assert!(board.can_interact(PointId(10)));
    assert!(!board.can_interact(PointId(13)));
}
