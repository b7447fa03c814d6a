use super::*;
use std::collections::HashSet;

#[test]
fn test_board_dataset_size() {
    assert_eq!(BOARDS.len(), 44);
    assert_eq!(Dataset::JobBoards.len(), 44);
}

#[test]
fn test_role_dataset_size() {
    assert_eq!(ROLES.len(), 20);
    assert_eq!(Dataset::JobRoles.len(), 20);
}

#[test]
fn test_board_names_are_unique() {
    let names: HashSet<&str> = BOARDS.iter().map(|b| b.name).collect();
    assert_eq!(names.len(), BOARDS.len());
}

#[test]
fn test_role_names_are_unique() {
    let names: HashSet<&str> = ROLES.iter().map(|r| r.name).collect();
    assert_eq!(names.len(), ROLES.len());
}

#[test]
fn test_dice_record() {
    let dice = BOARDS.iter().find(|b| b.name == "Dice").unwrap();
    assert_eq!(dice.url, "https://www.dice.com");
    assert_eq!(dice.category, "tech");
    assert_eq!(dice.industry, "Technology");
}

#[test]
fn test_from_table_known() {
    assert_eq!(Dataset::from_table("job_boards").unwrap(), Dataset::JobBoards);
    assert_eq!(Dataset::from_table("job_roles").unwrap(), Dataset::JobRoles);
}

#[test]
fn test_from_table_unknown() {
    let err = Dataset::from_table("job_titles").unwrap_err();
    assert!(err.to_string().contains("[C004]"));
    assert!(err.to_string().contains("job_titles"));
}

#[test]
fn test_rows_carry_full_board_body() {
    let rows = Dataset::JobBoards.rows().unwrap();
    assert_eq!(rows.len(), 44);

    let dice = rows.iter().find(|r| r.name == "Dice").unwrap();
    assert_eq!(dice.body["name"], "Dice");
    assert_eq!(dice.body["url"], "https://www.dice.com");
    assert_eq!(dice.body["category"], "tech");
    assert_eq!(dice.body["industry"], "Technology");
    assert!(dice.body["description"]
        .as_str()
        .unwrap()
        .contains("Tech-focused"));
}

#[test]
fn test_rows_carry_role_body() {
    let rows = Dataset::JobRoles.rows().unwrap();
    let lawyer = rows.iter().find(|r| r.name == "Lawyer").unwrap();
    assert_eq!(lawyer.body["description"], "Legal positions");
}

#[test]
fn test_insert_sql_is_conflict_ignoring() {
    for dataset in Dataset::ALL {
        let sql = dataset.insert_sql();
        assert!(sql.starts_with(&format!("INSERT INTO \"{}\"", dataset.table())));
        assert!(sql.ends_with("ON CONFLICT (\"name\") DO NOTHING;\n"));
    }
}

#[test]
fn test_insert_sql_contains_every_record() {
    let sql = Dataset::JobBoards.insert_sql();
    for board in BOARDS {
        assert!(sql.contains(&format!("('{}', ", board.name)), "{}", board.name);
    }
}

#[test]
fn test_industries_cover_expected_set() {
    let industries: HashSet<&str> = BOARDS.iter().map(|b| b.industry).collect();
    assert_eq!(industries.len(), 12);
    assert!(industries.contains("Technology"));
    assert!(industries.contains("Remote"));
    assert!(industries.contains("Transportation & Logistics"));
}
