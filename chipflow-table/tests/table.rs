use chipflow_table::{parse_chips, Equilibrium, Table, TableError};

#[test]
fn test_minimum_moves_around_the_table() {
    // equilibrium 3: seat 3 ships 2 chips one seat and 1 chip two seats
    let table = Table::new(vec![1, 2, 3, 6]);
    assert!(table.equilibrium_possible());
    assert_eq!(table.min_moves_to_equilibrium(), Equilibrium::Moves(4));
    assert_eq!(table.min_moves_to_equilibrium().moves(), 4);
}

#[test]
fn test_already_balanced() {
    let table = Table::new(vec![4, 4, 4]);
    assert!(table.equilibrium_possible());
    assert_eq!(
        table.min_moves_to_equilibrium(),
        Equilibrium::AlreadyBalanced
    );
    assert_eq!(table.min_moves_to_equilibrium().moves(), 0);
}

#[test]
fn test_equilibrium_impossible() {
    // 7 chips across 4 seats cannot even out
    let table = Table::new(vec![1, 1, 1, 4]);
    assert!(!table.equilibrium_possible());
    assert_eq!(table.min_moves_to_equilibrium(), Equilibrium::Impossible);
    assert_eq!(table.min_moves_to_equilibrium().moves(), 0);
}

#[test]
fn test_wrap_around_is_cheaper() {
    // seat 3 is three seats from seat 0 clockwise but only one seat the
    // other way around
    let table = Table::new(vec![0, 2, 2, 4]);
    assert_eq!(table.min_moves_to_equilibrium(), Equilibrium::Moves(2));
}

#[test]
fn test_single_supplier_many_consumers() {
    let table = Table::new(vec![6, 2, 2, 2]);
    assert_eq!(table.min_moves_to_equilibrium(), Equilibrium::Moves(4));
}

#[test]
fn test_empty_table() {
    let table = Table::new(Vec::new());
    assert!(!table.equilibrium_possible());
    assert_eq!(table.min_moves_to_equilibrium(), Equilibrium::Impossible);
}

#[test]
fn test_parse_chips() {
    assert_eq!(parse_chips("chips: [1, 2, 3, 6]"), Ok(vec![1, 2, 3, 6]));
    assert_eq!(parse_chips("chips: [42]"), Ok(vec![42]));
    assert_eq!(parse_chips("chips: [-1, 5]"), Ok(vec![-1, 5]));
}

#[test]
fn test_parse_rejects_bad_format() {
    assert_eq!(parse_chips("chips: 1, 2"), Err(TableError::BadFormat));
    assert_eq!(parse_chips("stacks: [1, 2]"), Err(TableError::BadFormat));
    assert_eq!(parse_chips(""), Err(TableError::BadFormat));
}

#[test]
fn test_parse_rejects_bad_numbers() {
    assert_eq!(
        parse_chips("chips: [1, x]"),
        Err(TableError::BadNumber {
            token: "x".to_string()
        })
    );
    assert_eq!(
        parse_chips("chips: []"),
        Err(TableError::BadNumber {
            token: "".to_string()
        })
    );
    // entries must be separated by a comma and a space
    assert_eq!(
        parse_chips("chips: [1,2]"),
        Err(TableError::BadNumber {
            token: "1,2".to_string()
        })
    );
}

#[test]
fn test_parse_then_balance() {
    let chips = parse_chips("chips: [1, 2, 3, 6]").unwrap();
    assert_eq!(
        Table::new(chips).min_moves_to_equilibrium(),
        Equilibrium::Moves(4)
    );
}
