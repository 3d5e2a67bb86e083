use rpunchclock::config::Config;
use rpunchclock::core::punch::PunchLogic;
use rpunchclock::export::RecordExport;
use rpunchclock::models::{Record, RecordKind};
use rpunchclock::utils::table::{Column, Table};
use rpunchclock::utils::visible_width;

#[test]
fn kind_db_names() {
    assert_eq!(RecordKind::from_db_str("CheckIn"), Some(RecordKind::CheckIn));
    assert_eq!(RecordKind::from_db_str("CheckOut"), Some(RecordKind::CheckOut));
    assert_eq!(RecordKind::from_db_str("checkin"), None);
    assert_eq!(RecordKind::from_db_str("out"), None);
    assert_eq!(RecordKind::CheckIn.label(), "in");
    assert_eq!(RecordKind::CheckOut.to_string(), "CheckOut");
}

#[test]
fn actor_resolution() {
    let mut cfg = Config::default();
    assert_eq!(PunchLogic::resolve_actor(Some("Ana"), &cfg), Some("Ana".into()));
    assert_eq!(PunchLogic::resolve_actor(Some("   "), &cfg), None);
    assert_eq!(PunchLogic::resolve_actor(None, &cfg), None);

    cfg.default_actor = Some("Jéssica".into());
    assert_eq!(PunchLogic::resolve_actor(None, &cfg), Some("Jéssica".into()));
    assert_eq!(PunchLogic::resolve_actor(Some(""), &cfg), Some("Jéssica".into()));

    cfg.default_actor = Some("  ".into());
    assert_eq!(PunchLogic::resolve_actor(None, &cfg), None);
}

#[test]
fn timestamp_capture() {
    let mut cfg = Config::default();
    assert_eq!(
        PunchLogic::capture_timestamp(Some("whenever"), &cfg).unwrap(),
        "whenever"
    );

    cfg.timestamp_format = "%Y".into();
    let year = PunchLogic::capture_timestamp(None, &cfg).unwrap();
    assert_eq!(year.len(), 4);
    assert!(year.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn config_defaults_fill_missing_fields() {
    let cfg = Config::from_yaml("default_actor: Ana\npersist_retries: 0\n").unwrap();
    assert_eq!(cfg.default_actor(), Some("Ana"));
    assert_eq!(cfg.persist_retries, 0);
    assert_eq!(cfg.snapshot_key, "ledger-db");
    assert_eq!(cfg.persist_backoff_ms, 50);

    assert_eq!(Config::from_yaml("").unwrap(), Config::default());
    assert!(Config::from_yaml("persist_retries: many").is_err());

    let round = Config::from_yaml(&cfg.to_yaml().unwrap()).unwrap();
    assert_eq!(round, cfg);
}

#[test]
fn export_row_uses_stored_kind() {
    let rec = Record {
        id: 7,
        actor: "Ana".into(),
        kind: RecordKind::CheckOut,
        timestamp: "t".into(),
    };
    let row = RecordExport::from(&rec);
    assert_eq!(row.kind, "CheckOut");
    assert_eq!(row.id, 7);
    assert!(rec.matches_actor(None));
    assert!(rec.matches_actor(Some("Ana")));
    assert!(!rec.matches_actor(Some("ana")));
}

#[test]
fn table_aligns_colored_and_wide_cells() {
    let mut t = Table::new(vec![Column::new("ID"), Column::new("Actor")]);
    t.add_row(vec!["1".into(), "\x1b[32mJéssica\x1b[0m".into()]);
    t.add_row(vec!["10".into(), "Bo".into()]);

    assert_eq!(visible_width("\x1b[32mJéssica\x1b[0m"), 7);

    let out = t.render();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "ID  Actor");
    assert_eq!(lines[1], "--  -------");
    assert_eq!(lines[3], "10  Bo");
}
