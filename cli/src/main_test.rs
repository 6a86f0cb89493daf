use super::*;

fn host() -> Host {
    Host::new(Size::new(400.0, 800.0), Duration::from_millis(16))
}

fn apply_all(host: &mut Host, script: &str) -> Vec<Output> {
    script
        .lines()
        .filter_map(|line| parse_event(line).unwrap())
        .flat_map(|event| host.apply(event).unwrap())
        .collect()
}

#[test]
fn blank_and_comment_lines_are_skipped() {
    assert_eq!(parse_event("   ").unwrap(), None);
    assert_eq!(parse_event("# open the menu").unwrap(), None);
}

#[test]
fn show_defaults_to_animated() {
    let event = parse_event(r#"{"event":"show","side":"left"}"#).unwrap();
    assert_eq!(event, Some(Event::Show { side: Side::Left, animated: true }));
}

#[test]
fn drag_fields_default_to_zero() {
    let event = parse_event(r#"{"event":"drag","recognizer":"main_pan","phase":"began"}"#).unwrap();
    assert_eq!(
        event,
        Some(Event::Drag { recognizer: Recognizer::MainPan, phase: DragPhase::Began, translation: 0.0, velocity: 0.0 })
    );
}

#[test]
fn attach_options_are_validated() {
    let line = r#"{"event":"attach","side":"left","content":"menu","options":{"width_percent":1.5}}"#;
    assert!(parse_event(line).is_err());
}

#[test]
fn unknown_event_is_rejected() {
    assert!(parse_event(r#"{"event":"explode"}"#).is_err());
}

#[test]
fn side_argument_parses_case_insensitively() {
    assert_eq!(parse_side("Left"), Ok(Side::Left));
    assert_eq!(parse_side("right"), Ok(Side::Right));
    assert!(parse_side("up").is_err());
}

#[test]
fn pointer_down_reports_recognizer() {
    let mut host = host();
    let outputs = apply_all(
        &mut host,
        r#"{"event":"attach","side":"left","content":"menu"}
{"event":"pointer_down","x":4,"y":300}"#,
    );
    assert!(matches!(outputs.last(), Some(Output::Hit { recognizer: Some(Recognizer::LeftEdge) })));
}

#[test]
fn demo_script_ends_closed() {
    let mut host = host();
    let outputs = apply_all(&mut host, DEMO_SCRIPT);
    let phases: Vec<NavPhase> = outputs
        .iter()
        .filter_map(|o| match o {
            Output::Snapshot { phase, .. } => Some(*phase),
            _ => None,
        })
        .collect();
    assert_eq!(phases, vec![NavPhase::Open(Side::Left), NavPhase::Open(Side::Right), NavPhase::Closed]);
}

#[test]
fn settle_stops_when_idle() {
    let mut host = host();
    assert!(host.settle().is_empty());
}

#[test]
fn outputs_serialize_as_json_objects() {
    let mut host = host();
    host.apply(Event::Attach { side: Side::Left, content: "menu".to_owned(), options: None }).unwrap();
    host.apply(Event::Show { side: Side::Left, animated: false }).unwrap();
    let json = serde_json::to_value(host.snapshot()).unwrap();
    assert_eq!(json["phase"]["phase"], "open");
    assert_eq!(json["phase"]["side"], "left");
    assert_eq!(json["visible_content"], "menu");
}

#[test]
fn zero_frame_length_is_rejected() {
    assert!(matches!(frame_length(0), Err(CliError::FrameLength)));
    assert_eq!(frame_length(16).unwrap(), Duration::from_millis(16));
}

#[test]
fn bounds_must_be_positive_and_finite() {
    assert!(matches!(checked_bounds(0.0, 800.0), Err(CliError::Bounds { .. })));
    assert!(matches!(checked_bounds(400.0, f64::NAN), Err(CliError::Bounds { .. })));
    assert!(matches!(checked_bounds(f64::INFINITY, 800.0), Err(CliError::Bounds { .. })));
    assert_eq!(checked_bounds(400.0, 800.0).unwrap(), Size::new(400.0, 800.0));
}

#[test]
fn resize_to_empty_size_is_rejected() {
    let mut host = host();
    host.apply(Event::Attach { side: Side::Left, content: "menu".to_owned(), options: None }).unwrap();
    let result = host.apply(Event::Resize { width: -10.0, height: 800.0 });
    assert!(matches!(result, Err(CliError::Bounds { .. })));
    assert!(host.apply(Event::Resize { width: 600.0, height: 800.0 }).is_ok());
}
