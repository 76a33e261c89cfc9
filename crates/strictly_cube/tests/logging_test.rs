//! Tests for the volume of tracing output produced by a turn.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};
use strictly_cube::{Cell, GameSession, RuleSet};
use tracing::Level;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Plays `cells` under `rules` with debug logging on and returns the output.
fn logged_turns(rules: RuleSet, cells: &[Cell]) -> Vec<String> {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let mut session = GameSession::new(rules);
    tracing::subscriber::with_default(subscriber, || {
        for cell in cells {
            session.place_at(*cell).unwrap();
        }
    });
    logs.lines()
}

#[test]
fn test_line_detection_does_not_log_per_cell() {
    let cells = [Cell::new(-1, 0, 0), Cell::new(1, 1, 1)];

    let open = logged_turns(RuleSet::Open, &cells);
    let lines = logged_turns(RuleSet::ThreeInARow, &cells);

    assert!(!open.is_empty());
    assert_eq!(lines.len(), open.len(), "unexpected output: {:#?}", lines);
    assert!(lines.iter().all(|line| !line.contains("piece_at")));
}
