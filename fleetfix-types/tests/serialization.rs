use fleetfix_types::audit::{AuditReport, AuditStatus, RepositoryRecord};
use fleetfix_types::fix::{FixOutcome, FixResult, FixSummary};
use fleetfix_types::repo::{PrimaryLanguage, RepoType};
use pretty_assertions::assert_eq;

#[test]
fn audit_status_serializes_snake_case() {
    let cases = [
        (AuditStatus::Ok, "ok"),
        (AuditStatus::MissingConfig, "missing_config"),
        (AuditStatus::WrongExtends, "wrong_extends"),
        (AuditStatus::NoExtends, "no_extends"),
        (AuditStatus::NotCloned, "not_cloned"),
        (AuditStatus::Workspace, "workspace"),
        (AuditStatus::InvalidJson, "invalid_json"),
        (AuditStatus::Error, "error"),
    ];
    for (status, expected) in cases {
        assert_eq!(
            serde_json::to_value(status).expect("serialize"),
            serde_json::json!(expected)
        );
        assert_eq!(status.as_str(), expected);
    }
}

#[test]
fn repo_type_serializes_kebab_case() {
    assert_eq!(
        serde_json::to_value(RepoType::IacK8s).expect("serialize"),
        serde_json::json!("iac-k8s")
    );
    assert_eq!(
        serde_json::to_value(RepoType::McpIntegration).expect("serialize"),
        serde_json::json!("mcp-integration")
    );
    let parsed: RepoType = serde_json::from_str("\"python-ml\"").expect("parse");
    assert_eq!(parsed, RepoType::PythonMl);
}

#[test]
fn language_table_is_total() {
    let expected = [
        (RepoType::RustService, PrimaryLanguage::Rust),
        (RepoType::McpIntegration, PrimaryLanguage::Typescript),
        (RepoType::TypescriptDocs, PrimaryLanguage::Typescript),
        (RepoType::PythonMl, PrimaryLanguage::Python),
        (RepoType::Library, PrimaryLanguage::Unknown),
        (RepoType::IacK8s, PrimaryLanguage::Hcl),
        (RepoType::Docs, PrimaryLanguage::Markdown),
    ];
    for (t, lang) in expected {
        assert_eq!(t.primary_language(), lang);
        assert_eq!(t.primary_language(), t.primary_language());
    }
}

#[test]
fn record_keeps_field_order_and_writes_nulls() {
    let record = RepositoryRecord::new("ghost", AuditStatus::NotCloned);
    let json = serde_json::to_string(&record).expect("serialize");
    assert_eq!(
        json,
        r#"{"name":"ghost","cloned":false,"has_config":false,"extends_base":false,"repo_type":null,"status":"not_cloned","issue":null}"#
    );
}

#[test]
fn report_has_summary_then_results() {
    let report = AuditReport::from_results(vec![RepositoryRecord {
        cloned: true,
        has_config: true,
        extends_base: true,
        repo_type: Some(RepoType::Docs),
        ..RepositoryRecord::new("handbook", AuditStatus::Ok)
    }]);

    let value = serde_json::to_value(&report).expect("serialize");
    let keys: Vec<_> = value.as_object().expect("object").keys().cloned().collect();
    assert_eq!(keys, vec!["summary", "results"]);
    assert_eq!(value["summary"]["total"], 1);
    assert_eq!(value["summary"]["ok"], 1);
    assert_eq!(value["results"][0]["repo_type"], "docs");
}

#[test]
fn report_reads_original_layout() {
    let raw = r#"{
  "summary": {
    "total": 2,
    "ok": 0,
    "missing_config": 1,
    "wrong_extends": 0,
    "no_extends": 0,
    "not_cloned": 1,
    "errors": 0
  },
  "results": [
    {
      "name": "foo",
      "cloned": true,
      "has_config": false,
      "extends_base": false,
      "repo_type": "library",
      "status": "missing_config",
      "issue": "No .claude/project.json found"
    },
    {
      "name": "gone",
      "cloned": false,
      "has_config": false,
      "extends_base": false,
      "repo_type": null,
      "status": "not_cloned",
      "issue": null
    }
  ]
}"#;
    let report: AuditReport = serde_json::from_str(raw).expect("parse");
    assert_eq!(report.summary.needs_fix(), 1);
    assert_eq!(report.results[0].repo_type, Some(RepoType::Library));
    assert_eq!(report.needs_fix().count(), 1);
}

#[test]
fn fix_summary_buckets_not_cloned_with_skipped() {
    let mut summary = FixSummary::default();
    for (name, outcome) in [
        ("a", FixOutcome::Created),
        ("b", FixOutcome::NotCloned),
        ("c", FixOutcome::Skipped),
        ("d", FixOutcome::Ok),
        ("e", FixOutcome::Error),
    ] {
        summary.record(FixResult {
            name: name.to_string(),
            outcome,
            repo_type: None,
            issue: None,
            message: None,
            patch: None,
        });
    }
    assert_eq!(summary.attempted, 5);
    assert_eq!(summary.created, 1);
    assert_eq!(summary.fixed, 0);
    assert_eq!(summary.ok, 1);
    assert_eq!(summary.errors, 1);
    assert_eq!(summary.skipped, 2);
}

#[test]
fn fix_result_omits_empty_optionals() {
    let result = FixResult {
        name: "x".to_string(),
        outcome: FixOutcome::Ok,
        repo_type: None,
        issue: None,
        message: None,
        patch: None,
    };
    let value = serde_json::to_value(&result).expect("serialize");
    assert!(value.get("patch").is_none());
    assert!(value.get("message").is_none());
    assert_eq!(value["outcome"], "ok");
}
