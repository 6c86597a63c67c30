use scope_trace::output::read_trace;
use scope_trace::{ScopedTimer, Session, TraceError};
use std::path::Path;
use tempfile::tempdir;

fn names(path: &Path) -> Vec<String> {
    read_trace(path)
        .unwrap()
        .trace_events
        .into_iter()
        .map(|e| e.name)
        .collect()
}

#[test]
fn test_n_timers_n_entries() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("n.json");

    let session = Session::new();
    session.begin("N", &path).unwrap();
    for i in 0..50 {
        let _t = session.timer(format!("t{}", i));
    }
    session.end().unwrap();

    let doc = read_trace(&path).unwrap();
    assert_eq!(doc.len(), 50);
    for (i, event) in doc.trace_events.iter().enumerate() {
        assert_eq!(event.name, format!("t{}", i));
    }
}

#[test]
fn test_stop_is_idempotent() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("idem.json");

    let session = Session::new();
    session.begin("Idem", &path).unwrap();
    {
        let mut timer = ScopedTimer::new(&session, "once");
        timer.stop().unwrap();
        timer.stop().unwrap();
        assert!(timer.is_stopped());
        // drop must not emit a second event
    }
    assert_eq!(session.event_count(), 1);
    session.end().unwrap();

    assert_eq!(names(&path), vec!["once"]);
}

#[test]
fn test_durations_non_negative_and_ordered() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dur.json");

    let session = Session::new();
    session.begin("Dur", &path).unwrap();
    {
        let _t = session.timer("sleep");
        std::thread::sleep(std::time::Duration::from_millis(2));
    }
    session.end().unwrap();

    let doc = read_trace(&path).unwrap();
    let event = &doc.trace_events[0];
    assert!(event.dur >= 2_000, "dur = {}", event.dur);
}

fn early_return(session: &Session, bail: bool) -> u32 {
    let _t = session.timer("early_return");
    if bail {
        return 1;
    }
    2
}

fn rejects() -> Result<(), TraceError> {
    Err(TraceError::InvalidPath("boom".into()))
}

fn fails(session: &Session) -> Result<(), TraceError> {
    let _t = session.timer("fails");
    rejects()?;
    Ok(())
}

#[test]
fn test_every_exit_path_emits_once() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("exits.json");

    let session = Session::new();
    session.begin("Exits", &path).unwrap();

    assert_eq!(early_return(&session, true), 1);
    assert_eq!(early_return(&session, false), 2);
    assert!(fails(&session).is_err());

    let unwound = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let _t = session.timer("panics");
        panic!("unwinding");
    }));
    assert!(unwound.is_err());

    session.end().unwrap();

    assert_eq!(
        names(&path),
        vec!["early_return", "early_return", "fails", "panics"]
    );
}

fn recurse(session: &Session, depth: u32) {
    let _t = session.timer(format!("depth {}", depth));
    if depth > 0 {
        recurse(session, depth - 1);
    }
}

#[test]
fn test_nested_scopes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested.json");

    let session = Session::new();
    session.begin("Nested", &path).unwrap();
    recurse(&session, 4);
    session.end().unwrap();

    let doc = read_trace(&path).unwrap();
    // innermost scope finishes first
    let order: Vec<_> = doc.trace_events.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(order, vec!["depth 0", "depth 1", "depth 2", "depth 3", "depth 4"]);

    // each outer scope encloses the inner one
    for pair in doc.trace_events.windows(2) {
        let (inner, outer) = (&pair[0], &pair[1]);
        assert!(outer.ts <= inner.ts);
        assert!(outer.ts + outer.dur >= inner.ts + inner.dur);
    }
}

#[test]
fn test_timer_after_end_reports_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("late.json");

    let session = Session::new();
    session.begin("Late", &path).unwrap();
    let mut timer = session.timer("straddles end");
    session.end().unwrap();

    assert!(matches!(timer.stop(), Err(TraceError::SessionNotOpen)));
    assert!(read_trace(&path).unwrap().is_empty());
}

#[cfg(feature = "profiling")]
mod macros {
    use super::*;
    use scope_trace::{profile_function, profile_scope};

    fn instrumented(session: &Session) {
        profile_function!(session);
        profile_scope!(session, "inner");
    }

    #[test]
    fn test_macros_emit_events() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("macros.json");

        let session = Session::new();
        session.begin("Macros", &path).unwrap();
        instrumented(&session);
        session.end().unwrap();

        let recorded = names(&path);
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0], "inner");
        assert!(recorded[1].ends_with("macros::instrumented"), "{}", recorded[1]);
    }
}
