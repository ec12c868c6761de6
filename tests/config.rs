use std::path::{Path, PathBuf};

use certplot::{ChartConfig, ChartError};

#[test]
fn defaults_point_at_bundled_fixtures() {
    let cfg = ChartConfig::default();
    assert_eq!(cfg.data.certificate_id, "1");
    assert_eq!(
        cfg.data.certification_fixture,
        PathBuf::from("resources/2399.json")
    );
    assert!(cfg.features.grid && cfg.features.highlight);
}

#[test]
fn partial_yaml_keeps_defaults() {
    let cfg = ChartConfig::from_yaml_str(
        "title: Team A\ndata:\n  certificate_id: \"7\"\nfeatures:\n  legend: false\n",
    )
    .unwrap();
    assert_eq!(cfg.title, "Team A");
    assert_eq!(cfg.data.certificate_id, "7");
    assert_eq!(cfg.data.status_fixture, PathBuf::from("resources/00009408.json"));
    assert!(!cfg.features.legend);
    assert!(cfg.features.status_timeline);
}

#[test]
fn malformed_yaml_is_a_config_error() {
    let err = ChartConfig::from_yaml_str("title: [unterminated").unwrap_err();
    assert!(matches!(err, ChartError::Config(_)));
}

#[test]
fn relative_fixture_paths_resolve_against_base() {
    let mut cfg = ChartConfig::default();
    cfg.data.status_fixture = PathBuf::from("/abs/status.json");
    cfg.resolve_paths(Path::new("/etc/certplot"));
    assert_eq!(
        cfg.data.certification_fixture,
        PathBuf::from("/etc/certplot/resources/2399.json")
    );
    assert_eq!(cfg.data.status_fixture, PathBuf::from("/abs/status.json"));
}

#[test]
fn bundled_config_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("resources/certplot.yaml");
    let cfg = ChartConfig::load(&path).unwrap();
    assert_eq!(cfg.data.certification_fixture, PathBuf::from("2399.json"));
}

#[test]
fn every_feature_flag_reads_from_yaml() {
    let cfg = ChartConfig::from_yaml_str(
        "features:\n  grid: false\n  legend: false\n  highlight: false\n  status_timeline: false\n",
    )
    .unwrap();
    let f = &cfg.features;
    assert!(!f.grid && !f.legend && !f.highlight && !f.status_timeline);
    assert_eq!(cfg.title, "Certifications");
}
