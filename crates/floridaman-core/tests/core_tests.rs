use std::fs;
use tempfile::TempDir;

use floridaman_core::config::{Config, EngineSettings};
use floridaman_core::data_processor::{parse_records, DataProcessor};
use floridaman_core::types::{parse_calendar_date, HeadlineRecord, Trope};

#[test]
fn load_json_array_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("data.json");
    fs::write(
        &path,
        r#"[{"headline":"Florida man wrestles alligator","has_animals":"true","date":"2023-06-01","location_hint":"Orlando, FL"},
            {"headline":"Florida woman arrested for DUI","has_substances":true}]"#,
    )
    .unwrap();

    let records = DataProcessor::new().load(&path).expect("load");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].location_hint.as_deref(), Some("Orlando, FL"));
    assert_eq!(records[1].flag(Trope::Substances), Some(&serde_json::Value::Bool(true)));
    assert!(records[1].date.is_none());
}

#[test]
fn load_directory_of_shards_with_limit() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path();
    fs::write(dir.join("a.jsonl"), "{\"headline\":\"one\"}\n\n{\"headline\":\"two\"}\n").unwrap();
    fs::write(dir.join("b.js"), "const floridaManData = [{\"headline\":\"three\"}];\n").unwrap();
    fs::write(dir.join("notes.txt"), "ignored").unwrap();

    let all = DataProcessor::new().load(dir).expect("load dir");
    let headlines: Vec<&str> = all.iter().map(|r| r.headline_text()).collect();
    assert_eq!(headlines, vec!["one", "two", "three"]);

    let limited = DataProcessor::with_limit(2).load(dir).expect("load limited");
    assert_eq!(limited.len(), 2);
}

#[test]
fn missing_path_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let err = DataProcessor::new().load(&tmp.path().join("nope.json")).unwrap_err();
    assert!(err.to_string().starts_with("Not found"));
}

#[test]
fn empty_and_garbage_bodies() {
    assert!(parse_records("   ").unwrap().is_empty());
    assert!(parse_records("not a dataset").is_err());
}

#[test]
fn month_keys_from_common_date_shapes() {
    let key = |d: &str| HeadlineRecord::new("x").with_date(d).month_key();
    assert_eq!(key("2023-06-01").as_deref(), Some("2023-06"));
    assert_eq!(key("2021-01-09T14:03:00Z").as_deref(), Some("2021-01"));
    assert_eq!(key("12/25/2019").as_deref(), Some("2019-12"));
    assert_eq!(key("March 3, 2020").as_deref(), Some("2020-03"));
    assert_eq!(key("yesterday"), None);
    assert_eq!(parse_calendar_date(""), None);
}

#[test]
fn settings_default_without_files_and_merge_overrides() {
    let tmp = TempDir::new().unwrap();
    let config = Config::load_from(tmp.path(), "test").expect("defaults");
    assert_eq!(config.settings().unwrap(), EngineSettings::default());

    fs::write(tmp.path().join("config.toml"), "[search]\nmax_results = 10\n").unwrap();
    fs::write(tmp.path().join("config.test.toml"), "[stats]\nsample_capacity = 3\n").unwrap();
    let config = Config::load_from(tmp.path(), "test").expect("merged");
    let settings = config.settings().unwrap();
    assert_eq!(settings.search.max_results, 10);
    assert_eq!(settings.search.fuzzy_max_results, 5);
    assert_eq!(settings.stats.sample_capacity, 3);
    assert_eq!(config.get::<usize>("search.max_results").unwrap(), 10);
}

#[test]
fn zero_sample_capacity_is_rejected() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), "[stats]\nsample_capacity = 0\n").unwrap();
    assert!(Config::load_from(tmp.path(), "prod").is_err());
}

#[test]
fn trope_keys_parse_loosely() {
    assert_eq!(Trope::from_key("animals"), Some(Trope::Animals));
    assert_eq!(Trope::from_key(" Weapons "), Some(Trope::Weapons));
    assert_eq!(Trope::from_key("gators"), None);
    for trope in Trope::ALL {
        assert_eq!(Trope::from_key(&trope.to_string()), Some(trope));
    }
}
