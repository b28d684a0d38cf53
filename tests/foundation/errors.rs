//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use matchday_foundation::{
    Error, ErrorContext, ErrorKind, GoalFault, RosterError, Side, TeamCode, ValidationError,
};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn syntax_error_display() {
    let err = Error::syntax("expected a number", 7, 18, "Titulares Local: x".to_string());
    assert!(err.is_syntax());
    assert_eq!(err.to_string(), "syntax error at 7:18: expected a number");
}

#[test]
fn validation_error_conversion() {
    let err: Error = ValidationError::UnknownTeam {
        side: Side::Away,
        code: TeamCode::new("XXX").unwrap(),
    }
    .into();
    assert!(matches!(err.kind, ErrorKind::Validation(_)));
    assert!(err.to_string().contains("unknown away team XXX"));
    assert!(err.as_validation().is_some());
}

#[test]
fn roster_error_conversion() {
    let err: Error = RosterError::InvalidCode("BARCA".into()).into();
    assert!(matches!(err.kind, ErrorKind::Roster(_)));
    assert!(err.as_validation().is_none());
}

#[test]
fn goal_fault_messages() {
    let err = ValidationError::InvalidGoal {
        team: TeamCode::new("BAR").unwrap(),
        minute: 34,
        fault: GoalFault::UnknownAssist(61),
    };
    assert_eq!(
        err.to_string(),
        "invalid goal at 34': BAR assistant #61 does not exist"
    );
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn report_includes_source_line_and_frames() {
    let err = Error::syntax("expected ','", 3, 9, "Gol: BAR 34', 9".to_string())
        .with_frame("match 1 (2024-03-01 BAR vs RMA)")
        .with_source("week1.txt");
    let report = err.report();
    assert!(report.starts_with("syntax error at 3:9: expected ','"));
    assert!(report.contains("\n  | Gol: BAR 34', 9"));
    assert!(report.contains("at week1.txt"));
    assert!(report.contains("in match 1 (2024-03-01 BAR vs RMA)"));
}

#[test]
fn context_builder() {
    let ctx = ErrorContext::new()
        .with_source("a.txt")
        .with_position(4, 2)
        .with_frame("outer");
    assert_eq!(ctx.to_string().lines().next(), Some("at a.txt:4:2"));
    let err = Error::from(RosterError::InvalidCode("x".into())).with_context(ctx);
    assert_eq!(err.context.unwrap().stack, vec!["outer".to_string()]);
}
