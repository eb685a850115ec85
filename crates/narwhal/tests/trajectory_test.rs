use narwhal::{Error, ForceLayout, Graph, InitialPositions, LayoutOptions};

fn triangle() -> Graph<&'static str> {
    Graph::from_edges([("a", "b"), ("b", "c"), ("c", "a")])
}

#[test]
fn trajectory_has_one_frame_per_step() {
    let engine = ForceLayout::new(&triangle());
    let frames: Vec<_> = engine
        .trajectory(&LayoutOptions::default().with_steps(25).with_seed(1))
        .unwrap()
        .collect();

    assert_eq!(frames.len(), 25);
    assert_eq!(frames[0].step, 0);
    assert_eq!(frames[0].speed, None);
    assert_eq!(frames[1].speed, Some(1.0));
    assert!((frames[24].speed.unwrap() - 0.1).abs() < 1e-12);
    assert!(frames.iter().enumerate().all(|(i, f)| f.step == i && f.points.len() == 3));
}

#[test]
fn first_frame_holds_supplied_start_verbatim() {
    let engine = ForceLayout::new(&triangle());
    let opts = LayoutOptions::default()
        .with_steps(5)
        .with_initial(InitialPositions::new(vec![0.0, 1.0, 2.0], vec![3.0, 4.0, 5.0]));
    let mut trajectory = engine.trajectory(&opts).unwrap();
    let first = trajectory.next().unwrap();
    assert_eq!(first.xs(), vec![0.0, 1.0, 2.0]);
    assert_eq!(first.ys(), vec![3.0, 4.0, 5.0]);
}

#[test]
fn partial_start_randomizes_the_missing_axis() {
    let engine = ForceLayout::new(&triangle());
    let opts = LayoutOptions {
        steps: 1,
        seed: Some(11),
        initial: Some(InitialPositions {
            x: Some(vec![7.0, 8.0, 9.0]),
            y: None,
        }),
        ..LayoutOptions::default()
    };
    let frame = engine.trajectory(&opts).unwrap().next_frame().unwrap();
    assert_eq!(frame.xs(), vec![7.0, 8.0, 9.0]);
    assert!(frame.ys().iter().all(|y| y.is_finite()));
}

#[test]
fn short_runs_emit_only_the_initial_frame() {
    let engine = ForceLayout::new(&triangle());
    for steps in [0, 1] {
        let opts = LayoutOptions::default().with_steps(steps).with_seed(2);
        let frames: Vec<_> = engine.trajectory(&opts).unwrap().collect();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].speed, None);
    }
}

#[test]
fn exhausted_trajectory_reports_it() {
    let engine = ForceLayout::new(&triangle());
    let mut trajectory = engine
        .trajectory(&LayoutOptions::default().with_steps(3).with_seed(4))
        .unwrap();
    assert_eq!(trajectory.len(), 3);
    for _ in 0..3 {
        trajectory.next_frame().unwrap();
    }
    assert_eq!(trajectory.len(), 0);
    assert!(trajectory.next().is_none());
    assert_eq!(
        trajectory.next_frame().unwrap_err(),
        Error::Exhausted { frames: 3 }
    );
}

#[test]
fn empty_graph_trajectory_is_empty() {
    let g: Graph<u32> = Graph::from_edges(Vec::new());
    let engine = ForceLayout::new(&g);
    assert_eq!(engine.trajectory(&LayoutOptions::default()).unwrap().count(), 0);
}

#[test]
fn last_frame_matches_unscaled_finish() {
    let engine = ForceLayout::new(&triangle());
    let opts = LayoutOptions::default().with_steps(30).with_seed(8);
    let last = engine.trajectory(&opts).unwrap().last().unwrap();
    let finished = engine.trajectory(&opts).unwrap().finish();
    assert_eq!(last.points, finished);
}

#[test]
fn frames_move_less_as_the_cap_decays() {
    let engine = ForceLayout::new(&triangle());
    let frames: Vec<_> = engine
        .trajectory(&LayoutOptions::default().with_steps(50).with_seed(6))
        .unwrap()
        .collect();
    for pair in frames.windows(2) {
        let cap = pair[1].speed.unwrap();
        for (before, after) in pair[0].points.iter().zip(&pair[1].points) {
            assert!((after - before).norm() <= cap + 1e-12);
        }
    }
}

#[test]
fn mismatched_start_is_rejected() {
    let engine = ForceLayout::new(&triangle());
    let opts = LayoutOptions::default().with_initial(InitialPositions::new(vec![0.0; 2], vec![0.0; 3]));
    assert_eq!(
        engine.trajectory(&opts).unwrap_err(),
        Error::InitialPositionsMismatch {
            axis: "x",
            expected: 3,
            found: 2
        }
    );

    let opts = LayoutOptions::default()
        .with_initial(InitialPositions::new(vec![0.0; 3], vec![0.0, f64::NAN, 0.0]));
    assert_eq!(
        engine.trajectory(&opts).unwrap_err(),
        Error::NonFiniteInitialPosition { axis: "y", index: 1 }
    );
}
