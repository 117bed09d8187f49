mod common;

use common::{read_lines, test_catalog};
use towerstorm::model::DisasterKind;
use towerstorm::report::write_session_report;
use towerstorm::sim::{Session, SessionConfig, WaveReport};

#[test]
fn report_produces_valid_jsonl_files() {
    let mut session = Session::new(test_catalog(), SessionConfig::new(DisasterKind::Tsunami));
    while !session.phase().is_terminal() {
        session.advance().unwrap();
    }

    let dir = tempfile::tempdir().unwrap();
    write_session_report(session.reports(), session.health(), dir.path()).unwrap();

    let waves_path = dir.path().join("waves.jsonl");
    let health_path = dir.path().join("health.jsonl");
    assert!(waves_path.exists());
    assert!(health_path.exists());

    let wave_lines = read_lines(&waves_path);
    assert_eq!(wave_lines.len(), 3, "expected one line per wave");
    for (i, line) in wave_lines.iter().enumerate() {
        let report: WaveReport = serde_json::from_str(line).unwrap();
        assert_eq!(report.wave as usize, i + 1);
        assert_eq!(report.disaster, DisasterKind::Tsunami);
        assert!(report.mean_after <= report.mean_before);
    }

    // 5 floors: 5 per-floor components * 5 levels + roof + 4 defenses
    let health_lines = read_lines(&health_path);
    assert_eq!(health_lines.len(), 30, "expected one line per health slot");
    for line in &health_lines {
        let v: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(v.get("component").is_some());
        assert!(v.get("level").is_some());
        let health = v.get("health").unwrap().as_f64().unwrap();
        assert!((0.0..=100.0).contains(&health));
    }
}

#[test]
fn report_can_be_written_mid_run() {
    let mut session = Session::new(test_catalog(), SessionConfig::new(DisasterKind::Earthquake));
    session.advance().unwrap(); // wave 1 only

    let dir = tempfile::tempdir().unwrap();
    write_session_report(session.reports(), session.health(), dir.path()).unwrap();

    assert_eq!(read_lines(&dir.path().join("waves.jsonl")).len(), 1);
}
