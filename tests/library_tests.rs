use groovecore::combo::library::{builtin_library, validate_library};
use groovecore::combo::Combo;
use groovecore::error::GrooveError;
use groovecore::ledger::LEDGER_CAPACITY;
use groovecore::types::AbilityKind::{self, RunningMan, TStepLeft, TStepRight};

fn combo(id: &str, pattern: Vec<AbilityKind>) -> Combo {
    Combo {
        id: id.to_string(),
        name: id.to_string(),
        pattern,
        base_score: 100,
        difficulty: 1,
        time_limit_ms: 2_000,
        multiplier: None,
        description: String::new(),
    }
}

// --- BUILTIN SET ---
#[test]
fn test_builtin_library_is_clean() {
    let warnings = validate_library(&builtin_library()).unwrap();
    assert!(warnings.is_empty(), "unexpected warnings: {:?}", warnings);
}

#[test]
fn test_builtin_library_priority_order() {
    let library = builtin_library();
    let ids: Vec<&str> = library.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "double_time",
            "side_winder",
            "crossover",
            "crossover_reverse",
            "whirlwind"
        ]
    );
}

// --- HARD ERRORS ---
#[test]
fn test_duplicate_id_rejected() {
    let library = vec![
        combo("twin", vec![RunningMan]),
        combo("twin", vec![TStepLeft]),
    ];
    let err = validate_library(&library).unwrap_err();
    match err {
        GrooveError::Library(message) => assert!(message.contains("duplicate")),
        other => panic!("expected Library error, got {:?}", other),
    }
}

#[test]
fn test_empty_pattern_rejected() {
    let library = vec![combo("hollow", vec![])];
    assert!(matches!(
        validate_library(&library),
        Err(GrooveError::Library(_))
    ));
}

#[test]
fn test_pattern_deeper_than_ledger_rejected() {
    let library = vec![combo("marathon", vec![RunningMan; LEDGER_CAPACITY + 1])];
    assert!(matches!(
        validate_library(&library),
        Err(GrooveError::Library(_))
    ));
}

// --- WARNINGS ---
#[test]
fn test_zero_limit_multi_move_warns() {
    let mut unmatchable = combo("frozen", vec![RunningMan, RunningMan]);
    unmatchable.time_limit_ms = 0;
    let warnings = validate_library(&[unmatchable]).unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("time limit 0"));
}

#[test]
fn test_zero_limit_single_move_is_fine() {
    let mut single = combo("tap", vec![RunningMan]);
    single.time_limit_ms = 0;
    assert!(validate_library(&[single]).unwrap().is_empty());
}

#[test]
fn test_pointless_base_score_warns() {
    let mut worthless = combo("gratis", vec![RunningMan]);
    worthless.base_score = 0;
    let warnings = validate_library(&[worthless]).unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("base score"));
}

#[test]
fn test_shrinking_multiplier_warns() {
    let mut shrinking = combo("fade", vec![RunningMan]);
    shrinking.multiplier = Some(0.8);
    let warnings = validate_library(&[shrinking]).unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("multiplier"));

    let mut flat = combo("steady", vec![RunningMan]);
    flat.multiplier = Some(1.0);
    assert!(validate_library(&[flat]).unwrap().is_empty());
}

// --- SHADOWING ---
#[test]
fn test_inner_edge_shadow_warns_in_both_orders() {
    let long = combo("long_run", vec![RunningMan, RunningMan, TStepLeft]);
    let short = combo("short_run", vec![RunningMan, RunningMan]);

    // the short pattern completes two moves into the long one, so the long
    // combo is dead no matter which is declared first
    for library in [
        vec![long.clone(), short.clone()],
        vec![short.clone(), long.clone()],
    ] {
        let warnings = validate_library(&library).unwrap();
        assert_eq!(warnings.len(), 1, "warnings: {:?}", warnings);
        assert!(warnings[0].contains("long_run"));
        assert!(warnings[0].contains("short_run"));
    }
}

#[test]
fn test_final_edge_shadow_depends_on_declaration_order() {
    let suffix = combo("step_out", vec![TStepLeft, RunningMan]);
    let full = combo("wind_up", vec![TStepRight, TStepLeft, RunningMan]);

    // suffix first: it wins the shared final edge and wind_up never fires
    let warnings = validate_library(&[suffix.clone(), full.clone()]).unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("wind_up"));
    assert!(warnings[0].contains("declared first"));

    // full first: priority resolves the overlap, both remain matchable
    let warnings = validate_library(&[full, suffix]).unwrap();
    assert!(warnings.is_empty(), "warnings: {:?}", warnings);
}
