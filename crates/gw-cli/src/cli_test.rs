use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    // Validates the entire command tree: short flag conflicts,
    // duplicate args, and other clap definition errors.
    Cli::command().debug_assert();
}

#[test]
fn test_migrate_defaults() {
    let cli = Cli::try_parse_from(["gw", "migrate"]).unwrap();
    match cli.command {
        Commands::Migrate(args) => {
            assert_eq!(args.via, TransportVia::Rpc);
            assert!(!args.no_fail_fast);
            assert!(!args.dry_run);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_migrate_via_psql() {
    let cli = Cli::try_parse_from(["gw", "migrate", "--via", "psql", "--no-fail-fast"]).unwrap();
    match cli.command {
        Commands::Migrate(args) => {
            assert_eq!(args.via, TransportVia::Psql);
            assert!(args.no_fail_fast);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_seed_tables_filter() {
    let cli = Cli::try_parse_from(["gw", "seed", "--tables", "job_boards"]).unwrap();
    match cli.command {
        Commands::Seed(args) => {
            assert_eq!(args.tables.as_deref(), Some("job_boards"));
            assert!(!args.fail_fast);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}
