use chipflow_transport::{find_cycle, Plan};

/// A valid cycle is a closed rectilinear polygon: consecutive cells (with
/// wrap-around) share exactly one axis, and the shared axis alternates
/// between rows and columns.
fn assert_alternating(cycle: &[(usize, usize)]) {
    assert!(cycle.len() >= 4);
    assert_eq!(cycle.len() % 2, 0);
    let mut shares_row = Vec::new();
    for k in 0..cycle.len() {
        let (r1, c1) = cycle[k];
        let (r2, c2) = cycle[(k + 1) % cycle.len()];
        assert!(
            (r1 == r2) != (c1 == c2),
            "cells ({}, {}) and ({}, {}) do not share exactly one axis",
            r1,
            c1,
            r2,
            c2
        );
        shares_row.push(r1 == r2);
    }
    for k in 0..shares_row.len() {
        assert_ne!(
            shares_row[k],
            shares_row[(k + 1) % shares_row.len()],
            "consecutive moves must alternate between row and column"
        );
    }
}

#[test]
fn test_finds_rectangle() {
    let mut plan = Plan::empty(2, 2);
    plan.allocate(0, 0, 1.0);
    plan.allocate(0, 1, 1.0);
    plan.allocate(1, 1, 1.0);
    plan.allocate(1, 0, 0.0); // entering cell

    let cycle = find_cycle(&plan, 1, 0).unwrap();
    assert_eq!(cycle, vec![(1, 0), (0, 0), (0, 1), (1, 1)]);
    assert_alternating(&cycle);
}

#[test]
fn test_elides_collinear_cells() {
    // the column-0 run from the entering cell passes straight through (2, 0);
    // only the four corners of the polygon may remain
    let mut plan = Plan::empty(5, 4);
    plan.allocate(2, 0, 5.0);
    plan.allocate(0, 0, 3.0);
    plan.allocate(0, 3, 4.0);
    plan.allocate(4, 3, 2.0);
    plan.allocate(4, 0, 0.0); // entering cell

    let cycle = find_cycle(&plan, 4, 0).unwrap();
    assert_eq!(cycle, vec![(4, 0), (0, 0), (0, 3), (4, 3)]);
    assert_alternating(&cycle);
}

#[test]
fn test_backtracks_out_of_dead_end() {
    // the upward ray from the entering cell finds (1, 0) first, which has no
    // onward move at all; the search must back out and close the loop the
    // other way around
    let mut plan = Plan::empty(5, 2);
    plan.allocate(1, 0, 5.0); // dead end
    plan.allocate(2, 1, 2.0);
    plan.allocate(4, 1, 3.0);
    plan.allocate(4, 0, 4.0);
    plan.allocate(2, 0, 0.0); // entering cell

    let cycle = find_cycle(&plan, 2, 0).unwrap();
    assert_eq!(cycle, vec![(2, 0), (2, 1), (4, 1), (4, 0)]);
    assert_alternating(&cycle);
}

#[test]
fn test_no_cycle_without_closing_cells() {
    let mut plan = Plan::empty(2, 2);
    plan.allocate(0, 0, 1.0);
    plan.allocate(1, 1, 0.0); // entering cell

    assert_eq!(find_cycle(&plan, 1, 1), None);
}

#[test]
fn test_no_cycle_on_single_row() {
    // every move out of a one-row plan is horizontal; nothing can alternate
    let mut plan = Plan::empty(1, 3);
    plan.allocate(0, 0, 2.0);
    plan.allocate(0, 2, 3.0);
    plan.allocate(0, 1, 0.0); // entering cell

    assert_eq!(find_cycle(&plan, 0, 1), None);
}
