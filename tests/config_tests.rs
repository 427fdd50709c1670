mod common;
use common::temp_path;
use quelio::api::client::parse_payload;
use quelio::api::normalize_url;
use quelio::config::Config;
use quelio::config::work_days::{format_work_days, parse_work_days};
use quelio::core::policy::WorkPolicy;
use quelio::credentials::{KEYCHAIN_SERVICE, keychain_account};
use quelio::errors::AppError;
use reqwest::StatusCode;
use std::fs;

#[test]
fn test_parse_work_days_forms() {
    assert_eq!(parse_work_days(""), vec![0, 1, 2, 3, 4]);
    assert_eq!(parse_work_days("1-5"), vec![0, 1, 2, 3, 4]);
    assert_eq!(parse_work_days("2-4"), vec![1, 2, 3]);
    assert_eq!(parse_work_days("1,2,3,4,5,6"), vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(parse_work_days("0,1,2,3,4"), vec![0, 1, 2, 3, 4]);
    assert_eq!(parse_work_days(" 1, 3 ,5 "), vec![0, 2, 4]);
}

#[test]
fn test_parse_work_days_falls_back_to_monday_friday() {
    for bad in ["weekdays", "0-9", "8,9", "1;2"] {
        assert_eq!(parse_work_days(bad), vec![0, 1, 2, 3, 4], "input {:?}", bad);
    }
}

#[test]
fn test_format_work_days_is_one_based() {
    assert_eq!(format_work_days(&[0, 1, 2, 3, 4]), "1,2,3,4,5");
    assert_eq!(parse_work_days(&format_work_days(&[1, 3, 5])), vec![1, 3, 5]);
}

#[test]
fn test_config_load_missing_is_none() {
    let path = temp_path("config_missing", "conf");
    assert!(Config::load(&path).unwrap().is_none());
    assert!(matches!(Config::require(&path), Err(AppError::NotConfigured)));
}

#[test]
fn test_config_save_and_load() {
    let path = temp_path("config_roundtrip", "conf");
    let cfg = Config {
        username: "jdoe".into(),
        weekly_hours: 35,
        work_days: vec![0, 1, 2, 3],
        ..Config::default()
    };
    cfg.save(&path).unwrap();

    let loaded = Config::load(&path).unwrap().expect("config saved");
    assert_eq!(loaded, cfg);

    assert!(Config::remove(&path).unwrap());
    assert!(!Config::remove(&path).unwrap());
}

#[test]
fn test_config_defaults_for_missing_fields() {
    let path = temp_path("config_partial", "conf");
    fs::write(&path, "username: jdoe\n").unwrap();

    let cfg = Config::load(&path).unwrap().unwrap();
    assert_eq!(cfg.username, "jdoe");
    assert_eq!(cfg.weekly_hours, 38);
    assert_eq!(cfg.work_days, vec![0, 1, 2, 3, 4]);
    assert_eq!(cfg.break_bonus_minutes, 7);
    assert_eq!(cfg.break_times, vec!["10:30", "15:30"]);

    assert_eq!(WorkPolicy::from_config(&cfg).unwrap(), WorkPolicy::default());
    fs::remove_file(&path).ok();
}

#[test]
fn test_config_invalid_yaml_is_an_error() {
    let path = temp_path("config_invalid", "conf");
    fs::write(&path, "weekly_hours: [not a number\n").unwrap();
    assert!(matches!(Config::load(&path), Err(AppError::Yaml(_))));
    fs::remove_file(&path).ok();
}

#[test]
fn test_policy_from_config() {
    let cfg = Config {
        weekly_hours: 40,
        break_bonus_minutes: 10,
        break_times: vec!["09:45".into()],
        ..Config::default()
    };
    let policy = WorkPolicy::from_config(&cfg).unwrap();
    assert_eq!(policy.weekly_target_minutes, 2400);
    assert_eq!(policy.break_thresholds, vec![585]);
    assert_eq!(policy.full_day_bonus(), 10);

    let bad = Config {
        break_times: vec!["25:00".into()],
        ..Config::default()
    };
    assert!(matches!(WorkPolicy::from_config(&bad), Err(AppError::InvalidTime(_))));
}

#[test]
fn test_normalize_url() {
    assert_eq!(
        normalize_url(" https://badge.example.com/quel io/api "),
        "https://badge.example.com/quel%20io/api/"
    );
    assert_eq!(normalize_url("https://x.test/"), "https://x.test/");
}

#[test]
fn test_parse_payload() {
    let body = r#"{"hours": {"13-10-2025": [" 08:00", "12:00 "]}, "total_paid": "04:14"}"#;
    let data = parse_payload(StatusCode::OK, body).unwrap();
    assert_eq!(data.hours["13-10-2025"], vec!["08:00", "12:00"]);
    assert_eq!(data.total_paid.as_deref(), Some("04:14"));
    assert_eq!(data.total_effective, None);
}

#[test]
fn test_parse_payload_errors() {
    let err = parse_payload(StatusCode::INTERNAL_SERVER_ERROR, "boom").unwrap_err();
    assert!(matches!(err, AppError::Api(ref m) if m == "HTTP 500: boom"));
    assert_eq!(err.exit_code(), 2);

    assert!(matches!(parse_payload(StatusCode::OK, "<html>"), Err(AppError::Api(_))));
    assert!(matches!(parse_payload(StatusCode::OK, r#"{"days": {}}"#), Err(AppError::Api(_))));
    assert!(matches!(parse_payload(StatusCode::OK, "[1, 2]"), Err(AppError::Api(_))));
}

#[test]
fn test_parse_payload_wrong_hours_shape_is_an_api_error() {
    for body in [r#"{"hours": []}"#, r#"{"hours": {"13-10-2025": "08:00"}}"#] {
        let err = parse_payload(StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, AppError::Api(_)), "body {}", body);
        assert_eq!(err.exit_code(), 2);
    }
}

#[test]
fn test_keychain_account() {
    let cfg = Config {
        username: "jdoe".into(),
        api_url: "https://badge.example.com/api/".into(),
        ..Config::default()
    };
    assert_eq!(keychain_account(&cfg), "jdoe@https://badge.example.com/api/");
    assert_eq!(KEYCHAIN_SERVICE, "quelio");
}
