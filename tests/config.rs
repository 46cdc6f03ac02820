use eth_method_catalog::catalog;
use eth_method_catalog::cli::PrintArgs;
use eth_method_catalog::config::{self, ReportConfig};
use eth_method_catalog::error::CatalogError;
use eth_method_catalog::{FlowType, OutputFormat};
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/config")
        .join(name)
        .join("catalog.toml")
}

#[test]
fn config_sets_report_defaults() {
    let cfg = config::load_config_file(&fixture("json_inflow")).expect("config should load");
    assert_eq!(
        cfg.report,
        ReportConfig {
            format: Some(OutputFormat::Json),
            categories: vec!["curve".to_string(), "COMPOUND METHODS".to_string()],
            flow: Some(FlowType::Inflow),
        }
    );

    let picked = catalog::resolve_categories(&cfg.report.categories).expect("known categories");
    let keys: Vec<_> = picked.iter().map(|c| c.key).collect();
    assert_eq!(keys, ["curve", "compound"]);
}

#[test]
fn command_line_overrides_config() {
    let cfg = config::load_config_file(&fixture("json_inflow")).expect("config should load");
    let args = PrintArgs {
        format: Some(OutputFormat::Pretty),
        flow: Some(FlowType::Outflow),
        ..PrintArgs::default()
    };
    let settings = cfg.report.with_overrides(&args);

    assert_eq!(settings.format(), OutputFormat::Pretty);
    assert_eq!(settings.flow, Some(FlowType::Outflow));
    assert_eq!(settings.categories, ["curve", "COMPOUND METHODS"]);
}

#[test]
fn unknown_keys_are_rejected() {
    let err = config::load_config_file(&fixture("unknown_key")).unwrap_err();
    assert!(format!("{err:#}").contains("failed to parse config file"));
}

#[test]
fn unknown_category_surfaces_on_resolution() {
    let cfg = config::load_config_file(&fixture("bad_category")).expect("config should load");
    let err = catalog::resolve_categories(&cfg.report.categories).unwrap_err();
    assert!(matches!(err, CatalogError::UnknownCategory(ref key) if key == "sushiswap"));
    assert_eq!(err.to_string(), "unknown category: sushiswap");
}

#[test]
fn no_path_means_no_config() {
    assert!(config::load_config(None).expect("nothing to load").is_none());
}

#[test]
fn explicit_path_is_loaded() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("catalog.toml");
    std::fs::write(&path, "[report]\nflow = \"BOTHFLOW\"\n").expect("write config");

    let (loaded_from, cfg) = config::load_config(Some(path.as_path()))
        .expect("config should load")
        .expect("config should be present");
    assert_eq!(loaded_from, path);
    assert_eq!(cfg.report.flow, Some(FlowType::Bothflow));
    assert_eq!(cfg.report.format(), OutputFormat::Pretty);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");
    let err = config::load_config(Some(path.as_path())).unwrap_err();
    assert!(format!("{err:#}").contains("failed to read config file"));
}
