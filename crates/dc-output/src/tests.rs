//! Tests for dc-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvTraceWriter;
    use crate::row::{EventRow, NavTraceRow, TimerTraceRow};
    use crate::writer::TraceWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(dir: &TempDir, file: &str) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(&dir, "nav_trace.csv"),
            ["order_id", "time_ms", "x", "y", "progress", "eta", "state"]
        );
        assert_eq!(
            headers(&dir, "timer_trace.csv"),
            ["order_id", "time_ms", "progress", "elapsed_secs", "phase"]
        );
        assert_eq!(headers(&dir, "events.csv"), ["order_id", "time_ms", "event"]);
    }

    #[test]
    fn rows_written() {
        let dir = tmp();
        let mut w = CsvTraceWriter::new(dir.path()).unwrap();
        w.write_nav(&NavTraceRow {
            order_id: 7,
            time_ms:  100,
            x:        52.5,
            y:        349.0,
            progress: 0.7,
            eta:      4.9,
            state:    "navigating",
        })
        .unwrap();
        w.write_timer(&TimerTraceRow {
            order_id:     8,
            time_ms:      1_000,
            progress:     5,
            elapsed_secs: 1,
            phase:        "walking",
        })
        .unwrap();
        w.write_event(&EventRow { order_id: 8, time_ms: 16_000, event: "approaching" }).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("nav_trace.csv")).unwrap();
        let nav: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(nav.len(), 1);
        assert_eq!(&nav[0][0], "7");
        assert_eq!(&nav[0][2], "52.50");
        assert_eq!(&nav[0][5], "4.9");
        assert_eq!(&nav[0][6], "navigating");

        let mut rdr = csv::Reader::from_path(dir.path().join("timer_trace.csv")).unwrap();
        let timer: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&timer[0][2], "5");
        assert_eq!(&timer[0][4], "walking");

        let mut rdr = csv::Reader::from_path(dir.path().join("events.csv")).unwrap();
        let events: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&events[0][2], "approaching");
    }

    #[test]
    fn missing_dir_errors() {
        let dir = tmp();
        assert!(CsvTraceWriter::new(&dir.path().join("nope")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use dc_core::{DeliveryType, OrderId};
    use dc_sim::SessionBuilder;

    use crate::observer::TraceObserver;
    use crate::row::{EventRow, NavTraceRow, TimerTraceRow};
    use crate::writer::TraceWriter;
    use crate::{OutputError, OutputResult};

    /// In-memory writer for observer tests.
    #[derive(Default)]
    struct MemWriter {
        nav:      Vec<NavTraceRow>,
        timer:    Vec<TimerTraceRow>,
        events:   Vec<EventRow>,
        finished: usize,
        fail:     bool,
    }

    impl TraceWriter for MemWriter {
        fn write_nav(&mut self, row: &NavTraceRow) -> OutputResult<()> {
            if self.fail {
                return Err(OutputError::Io(std::io::Error::other("disk full")));
            }
            self.nav.push(row.clone());
            Ok(())
        }
        fn write_timer(&mut self, row: &TimerTraceRow) -> OutputResult<()> {
            self.timer.push(*row);
            Ok(())
        }
        fn write_event(&mut self, row: &EventRow) -> OutputResult<()> {
            self.events.push(*row);
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn navigation_run_traced() {
        let mut s = SessionBuilder::new(OrderId(3), "Beach - Umbrella B7").build().unwrap();
        let mut obs = TraceObserver::new(MemWriter::default());
        s.start().unwrap();
        s.run_until_arrived(60_000, &mut obs).unwrap();
        obs.finish().unwrap();

        let w = obs.into_writer();
        assert!(!w.nav.is_empty());
        assert!(w.timer.is_empty());
        assert_eq!(w.nav[0].time_ms, 100);
        assert_eq!(w.nav[0].state, "navigating");
        let last = w.nav.last().unwrap();
        assert_eq!(last.state, "arrived");
        assert_eq!(last.progress, 100.0);
        assert_eq!(w.events.len(), 1);
        assert_eq!(w.events[0].event, "completed");
        assert_eq!(w.finished, 1);
    }

    #[test]
    fn timer_run_traced_with_phases() {
        let mut s = SessionBuilder::new(OrderId(4), "Room #215")
            .delivery_type(DeliveryType::Room)
            .build()
            .unwrap();
        let mut obs = TraceObserver::new(MemWriter::default());
        s.start().unwrap();
        s.run_until_arrived(60_000, &mut obs).unwrap();
        s.complete(&mut obs).unwrap();

        assert_eq!(obs.rows_written(), 20 + 3);
        let w = obs.into_writer();
        assert_eq!(w.timer.len(), 20);
        assert_eq!(w.timer[15].progress, 80);
        assert_eq!(w.timer[15].phase, "approaching");
        let events: Vec<_> = w.events.iter().map(|e| e.event).collect();
        assert_eq!(events, ["approaching", "arrived", "completed"]);
        assert_eq!(w.events[0].time_ms, 16_000);
    }

    #[test]
    fn first_error_kept() {
        let mut s = SessionBuilder::new(OrderId(5), "Beach").build().unwrap();
        let mut obs = TraceObserver::new(MemWriter { fail: true, ..MemWriter::default() });
        s.start().unwrap();
        s.advance(1_000, &mut obs).unwrap();

        assert_eq!(obs.rows_written(), 0);
        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn finish_reports_stored_error() {
        let mut s = SessionBuilder::new(OrderId(6), "Beach").build().unwrap();
        let mut obs = TraceObserver::new(MemWriter { fail: true, ..MemWriter::default() });
        s.start().unwrap();
        s.advance(100, &mut obs).unwrap();
        assert!(obs.finish().is_err());
        assert_eq!(obs.into_writer().finished, 0);
    }
}
