use std::io::{Cursor, Write};

use groovecore::combo::loader::{load_library, load_library_file};
use groovecore::error::GrooveError;
use groovecore::input::DirectionSignal;
use groovecore::trace::{load_trace, load_trace_file, TraceAction};
use groovecore::types::AbilityKind;
use tempfile::NamedTempFile;

// --- COMBO LIBRARY LOAD TESTS ---

#[test]
fn test_loader_parses_valid_library() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"[
            {{
                "id": "shuffle",
                "name": "Shuffle",
                "pattern": ["running_man", "t_step_left"],
                "base_score": 120,
                "difficulty": 2,
                "time_limit_ms": 1800,
                "multiplier": 1.2,
                "description": "Lead step into a left T."
            }},
            {{
                "id": "stomp",
                "name": "Stomp",
                "pattern": ["running_man"],
                "base_score": 50,
                "difficulty": 1,
                "time_limit_ms": 1000
            }}
        ]"#
    )
    .unwrap();

    let library = load_library_file(file.path()).unwrap();
    assert_eq!(library.len(), 2);
    assert_eq!(library[0].id, "shuffle");
    assert_eq!(
        library[0].pattern,
        vec![AbilityKind::RunningMan, AbilityKind::TStepLeft]
    );
    assert_eq!(library[0].multiplier, Some(1.2));
    // optional fields fall back to their defaults
    assert_eq!(library[1].multiplier, None);
    assert_eq!(library[1].description, "");
}

#[test]
fn test_loader_reads_in_memory() {
    let json = r#"[{"id": "tap", "name": "Tap", "pattern": ["t_step_right"],
                    "base_score": 10, "difficulty": 1, "time_limit_ms": 500}]"#;
    let library = load_library(Cursor::new(json)).unwrap();
    assert_eq!(library.len(), 1);
    assert_eq!(library[0].pattern, vec![AbilityKind::TStepRight]);
}

#[test]
fn test_loader_rejects_malformed_json() {
    let result = load_library(Cursor::new("[{"));
    assert!(matches!(result, Err(GrooveError::Json(_))));
}

#[test]
fn test_loader_rejects_unknown_move() {
    let json = r#"[{"id": "x", "name": "X", "pattern": ["moonwalk"],
                    "base_score": 10, "difficulty": 1, "time_limit_ms": 500}]"#;
    let result = load_library(Cursor::new(json));
    assert!(matches!(result, Err(GrooveError::Json(_))));
}

#[test]
fn test_loader_missing_file_is_io_error() {
    let result = load_library_file("definitely/not/here.json");
    assert!(matches!(result, Err(GrooveError::Io(_))));
}

// --- TRACE LOAD TESTS ---

#[test]
fn test_trace_loader_parses_rows() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "time_ms,action,value").unwrap();
    writeln!(file, "0,start,").unwrap();
    writeln!(file, "100,press,right").unwrap();
    writeln!(file, "600,ability,running_man").unwrap();
    writeln!(file, "1200,ability,running_man").unwrap();
    writeln!(file, "5000,end").unwrap(); // valueless rows may drop the comma

    let trace = load_trace_file(file.path()).unwrap();
    assert_eq!(trace.len(), 5);
    assert_eq!(trace[0].time_ms, 0);
    assert_eq!(trace[0].action, TraceAction::Start);
    assert_eq!(trace[1].action, TraceAction::Press(DirectionSignal::Right));
    assert_eq!(
        trace[2].action,
        TraceAction::Ability(AbilityKind::RunningMan)
    );
    assert_eq!(trace[4].action, TraceAction::End);
}

#[test]
fn test_trace_loader_handles_whitespace() {
    let csv = "time_ms,action,value\n 100 , press , right \n";
    let trace = load_trace(Cursor::new(csv)).unwrap();
    assert_eq!(trace.len(), 1);
    assert_eq!(trace[0].time_ms, 100);
    assert_eq!(trace[0].action, TraceAction::Press(DirectionSignal::Right));
}

#[test]
fn test_trace_loader_requires_named_header() {
    let result = load_trace(Cursor::new("t,act,v\n0,start,\n"));
    assert!(matches!(result, Err(GrooveError::Trace(_))));

    // a headerless file reads its first data row as the header
    let result = load_trace(Cursor::new("0,start,\n100,press,up\n"));
    assert!(matches!(result, Err(GrooveError::Trace(_))));
}

#[test]
fn test_trace_loader_skips_bad_rows() {
    let csv = "time_ms,action,value\n\
               0,start,\n\
               soon,press,up\n\
               100,wiggle,\n\
               42\n\
               200,ability,t_step_left\n";
    let trace = load_trace(Cursor::new(csv)).unwrap();
    assert_eq!(trace.len(), 2);
    assert_eq!(trace[0].action, TraceAction::Start);
    assert_eq!(trace[1].action, TraceAction::Ability(AbilityKind::TStepLeft));
}

#[test]
fn test_trace_loader_sorts_by_time() {
    let csv = "time_ms,action,value\n\
               500,end,\n\
               0,start,\n\
               250,press,down\n";
    let trace = load_trace(Cursor::new(csv)).unwrap();
    let times: Vec<u64> = trace.iter().map(|event| event.time_ms).collect();
    assert_eq!(times, vec![0, 250, 500]);
}
