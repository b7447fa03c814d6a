use super::*;
use serial_test::serial;

#[test]
#[serial]
fn test_missing_password_is_configuration_error() {
    std::env::remove_var("POSTGRES_PASSWORD");
    let err = resolve_db_password().unwrap_err();
    assert!(err.to_string().contains("[C003]"));
    assert!(err.to_string().contains("POSTGRES_PASSWORD"));
}

#[test]
#[serial]
fn test_empty_password_is_configuration_error() {
    std::env::set_var("POSTGRES_PASSWORD", "");
    let err = resolve_db_password().unwrap_err();
    assert!(err.to_string().contains("[C003]"));
    std::env::remove_var("POSTGRES_PASSWORD");
}

#[test]
#[serial]
fn test_password_resolved_from_env() {
    std::env::set_var("POSTGRES_PASSWORD", "hunter2");
    assert_eq!(resolve_db_password().unwrap(), "hunter2");
    std::env::remove_var("POSTGRES_PASSWORD");
}

#[tokio::test]
#[serial]
async fn test_psql_migrate_without_password_makes_no_connection() {
    // The password gate comes before transport construction; no config or
    // endpoint is needed to observe the refusal.
    std::env::remove_var("POSTGRES_PASSWORD");

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("groundwork.yml"),
        "name: jobboards\nendpoint:\n  base_url: https://myproject.example.co\n",
    )
    .unwrap();

    let args = MigrateArgs {
        via: TransportVia::Psql,
        no_fail_fast: false,
        dry_run: false,
    };
    let global = GlobalArgs {
        verbose: false,
        project_dir: dir.path().display().to_string(),
        config: None,
        service_key: None,
    };

    let err = execute(&args, &global).await.unwrap_err();
    assert!(err.to_string().contains("POSTGRES_PASSWORD"));
}

#[tokio::test]
async fn test_dry_run_needs_no_config_or_credentials() {
    let args = MigrateArgs {
        via: TransportVia::Rpc,
        no_fail_fast: false,
        dry_run: true,
    };
    let global = GlobalArgs {
        verbose: false,
        project_dir: "/nonexistent".to_string(),
        config: None,
        service_key: None,
    };

    execute(&args, &global).await.unwrap();
}
