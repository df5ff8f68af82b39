use odoofit::core::{Metric, StorageType, SystemFacts};
use odoofit::engine::build_report;

fn ubuntu_facts() -> SystemFacts {
    SystemFacts {
        os_name: "Ubuntu 22.04.3 LTS".to_string(),
        cpu_cores: Metric::known(8),
        cpu_model: "AMD Ryzen 7 5800X 8-Core Processor".to_string(),
        ram_gb: Metric::known(32),
        storage_free_gb: Metric::known(60),
        storage_type: StorageType::Ssd,
    }
}

#[test]
fn report_json_matches_golden() {
    let report = build_report(
        &ubuntu_facts(),
        "2026-01-01T00:00:00Z".to_string(),
        "https://www.odoo.com/trial",
    );

    let actual = serde_json::to_value(&report).expect("serialize report");
    let expected: serde_json::Value =
        serde_json::from_str(include_str!("golden/report.json")).expect("parse golden json");

    assert_eq!(actual, expected);
}

#[test]
fn report_roundtrips_through_serde() {
    let report = build_report(
        &ubuntu_facts(),
        "2026-01-01T00:00:00Z".to_string(),
        "https://www.odoo.com/trial",
    );

    let json = serde_json::to_string_pretty(&report).expect("serialize report");
    let parsed: odoofit::core::Report = serde_json::from_str(&json).expect("parse report back");
    assert_eq!(parsed, report);
}
