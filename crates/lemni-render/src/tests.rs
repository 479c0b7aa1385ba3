//! Unit tests for lemni-render.

#[cfg(test)]
mod grid_tests {
    use lemni_core::{Lane, Position, lane_position};

    use crate::grid::BLANK;
    use crate::{CAR_MARKER, GRID_COLS, GRID_ROWS, SharedGrid, TRACK_DOT, TrackGrid, cell_for};

    #[test]
    fn background_is_deterministic() {
        assert_eq!(TrackGrid::background(), TrackGrid::background());
        assert_eq!(TrackGrid::background().lines(), TrackGrid::background().lines());
    }

    #[test]
    fn background_shape() {
        let bg = TrackGrid::background();
        let lines = bg.lines();
        assert_eq!(lines.len(), GRID_ROWS);
        assert!(lines.iter().all(|l| l.len() == GRID_COLS));
        assert!(bg.count(TRACK_DOT) > 40, "both lanes should be traced");
        assert_eq!(bg.count(CAR_MARKER), 0);
    }

    #[test]
    fn background_contains_lane_start_points() {
        let bg = TrackGrid::background();
        // Inner lane at t=0 is (10, 0) → row 20, col 4.
        assert_eq!(bg.get(20, 4), TRACK_DOT);
        // Outer lane at t=0 is (11.5, 0) → rounds to 12 → row 21, col 5.
        assert_eq!(bg.get(21, 5), TRACK_DOT);
        // Nothing beyond the widest column either lane reaches.
        assert!((0..GRID_ROWS).all(|r| bg.get(r, 20) == BLANK));
    }

    #[test]
    fn cells_for_both_lanes_stay_in_grid() {
        for i in 0..4_000 {
            let t = i as f64 * 0.01;
            for lane in [Lane::Inner, Lane::Outer] {
                let (row, col) = cell_for(lane, lane_position(lane, t));
                assert!(row < GRID_ROWS && col < GRID_COLS);
            }
        }
    }

    #[test]
    fn lane_offsets_differ() {
        let p = Position::new(0.0, 0.0);
        assert_eq!(cell_for(Lane::Inner, p), (10, 4));
        assert_eq!(cell_for(Lane::Outer, p), (9, 5));
    }

    #[test]
    fn shared_grid_paint_and_reset() {
        let bg = TrackGrid::background();
        let shared = SharedGrid::from_grid(&bg);
        shared.paint(0, 0, CAR_MARKER);
        assert_eq!(shared.capture().get(0, 0), CAR_MARKER);
        shared.reset_to(&bg);
        assert_eq!(shared.capture(), bg);
    }
}

#[cfg(test)]
mod cycle_tests {
    use crate::{CycleGate, RenderCycle};

    #[test]
    fn closed_until_opened() {
        let cycle = RenderCycle::new();
        assert!(!cycle.is_open());
        assert_eq!(cycle.current(), None);
        assert_eq!(cycle.opened(), 0);
    }

    #[test]
    fn open_and_close() {
        let cycle = RenderCycle::new();
        let id = cycle.open(10.0);
        assert_eq!(id, 1);
        assert_eq!(cycle.current(), Some(1));
        assert!((cycle.age(10.5) - 0.5).abs() < 1e-12);
        cycle.close();
        assert_eq!(cycle.current(), None);
        assert_eq!(cycle.open(20.0), 2);
    }

    #[test]
    fn contributions_reset_per_cycle() {
        let cycle = RenderCycle::new();
        let id = cycle.open(0.0);
        cycle.contribute(id);
        cycle.contribute(id);
        assert_eq!(cycle.contributions(), 2);
        let next = cycle.open(10.0);
        assert_eq!(cycle.contributions(), 0);
        cycle.contribute(id); // stale
        assert_eq!(cycle.contributions(), 0);
        cycle.contribute(next);
        assert_eq!(cycle.contributions(), 1);
    }

    #[test]
    fn gate_passes_once_per_cycle() {
        let cycle = RenderCycle::new();
        let mut gate = CycleGate::new();
        assert_eq!(gate.pass(&cycle), None);

        cycle.open(0.0);
        assert_eq!(gate.pass(&cycle), Some(1));
        assert_eq!(gate.pass(&cycle), None);

        cycle.close();
        assert_eq!(gate.pass(&cycle), None);

        cycle.open(10.0);
        assert_eq!(gate.pass(&cycle), Some(2));
    }
}

#[cfg(test)]
mod renderer_tests {
    use lemni_core::{Lane, Position};

    use crate::{CAR_MARKER, CycleGate, GRID_ROWS, MemorySink, SnapshotRenderer};

    #[test]
    fn emits_when_all_contributed() {
        let renderer = SnapshotRenderer::new(2);
        let mut sink = MemorySink::default();
        let mut gates = [CycleGate::new(), CycleGate::new()];

        assert!(!renderer.should_emit(0.0, 1.0));
        renderer.open_cycle(10.0);
        assert!(renderer.contribute(&mut gates[0], Lane::Inner, Position::new(0.0, 0.0)));
        assert!(!renderer.contribute(&mut gates[0], Lane::Inner, Position::new(1.0, 0.0)));
        assert!(!renderer.should_emit(10.1, 1.0));
        assert!(renderer.contribute(&mut gates[1], Lane::Outer, Position::new(3.0, 1.0)));
        assert!(renderer.should_emit(10.1, 1.0));

        let frame = renderer.emit(10.2, &mut sink).unwrap();
        assert_eq!(frame.cycle, 1);
        assert_eq!(frame.elapsed_secs, 10);
        assert_eq!(frame.contributions, 2);
        assert_eq!(frame.lines.len(), GRID_ROWS);
        assert_eq!(frame.count(CAR_MARKER), 2);
        assert_eq!(sink.frames.len(), 1);

        // Cycle is closed: no second emission, no further painting.
        assert!(!renderer.should_emit(10.3, 1.0));
        assert!(!renderer.contribute(&mut gates[1], Lane::Outer, Position::new(0.0, 0.0)));
    }

    #[test]
    fn emits_partial_frame_after_timeout() {
        let renderer = SnapshotRenderer::new(3);
        let mut gate = CycleGate::new();
        renderer.open_cycle(20.0);
        renderer.contribute(&mut gate, Lane::Inner, Position::new(2.0, 1.0));
        assert!(!renderer.should_emit(20.5, 1.0));
        assert!(renderer.should_emit(21.0, 1.0));
    }

    #[test]
    fn reset_clears_markers() {
        let renderer = SnapshotRenderer::new(1);
        renderer.paint_car(Lane::Inner, Position::new(-4.0, 2.0));
        assert_eq!(renderer.capture().count(CAR_MARKER), 1);
        renderer.reset();
        assert_eq!(&renderer.capture(), renderer.background());
    }
}

#[cfg(test)]
mod sink_tests {
    use crate::{ConsoleSink, Frame, FrameSink, MemorySink, NoopSink};

    fn frame() -> Frame {
        Frame {
            cycle:         3,
            elapsed_secs:  30,
            contributions: 1,
            lines:         vec!["..*".into(), "   ".into()],
        }
    }

    #[test]
    fn console_sink_writes_whole_frame() {
        let mut sink = ConsoleSink::new(Vec::new());
        sink.emit(&frame()).unwrap();
        sink.finish().unwrap();
        sink.finish().unwrap();
        assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "..*\n   \n");
    }

    #[test]
    fn memory_sink_collects() {
        let mut sink = MemorySink::default();
        sink.emit(&frame()).unwrap();
        sink.emit(&frame()).unwrap();
        sink.finish().unwrap();
        assert_eq!(sink.frames.len(), 2);
        assert!(sink.finished);
    }

    #[test]
    fn noop_sink_accepts() {
        NoopSink.emit(&frame()).unwrap();
        NoopSink.finish().unwrap();
    }

    #[test]
    fn frame_text() {
        assert_eq!(frame().to_text(), "..*\n   \n");
        assert_eq!(frame().count(b'.'), 2);
    }
}
