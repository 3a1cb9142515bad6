//! Unit tests for the grouping pass
//!
//! Tests column labels, column order and the handling of unknown users and
//! out-of-range priorities.

use pretty_assertions::assert_eq;
use rstest::rstest;
use ticketboard::error::AppError;
use ticketboard::models::GroupingMode;
use ticketboard::services::{group_tickets, UNASSIGNED_LABEL};

use crate::common::{ids, sample_dataset, scenario_dataset, user, TicketBuilder};

// =============================================================================
// Scenario Tests
// =============================================================================

#[test]
fn test_scenario_group_by_status() {
    let data = scenario_dataset();

    let board = group_tickets(&data.tickets, &data.users, GroupingMode::Status).unwrap();

    assert_eq!(board.labels(), vec!["Todo"]);
    assert_eq!(board.tickets("Todo").map(ids), Some(vec!["1", "2"]));
}

#[test]
fn test_unknown_user_goes_to_unassigned() {
    let tickets = vec![
        TicketBuilder::new("1").with_user("u1").build(),
        TicketBuilder::new("2").with_user("u9").build(),
    ];
    let users = vec![user("u1", "Alice")];

    let board = group_tickets(&tickets, &users, GroupingMode::User).unwrap();

    assert_eq!(board.labels(), vec!["Alice", UNASSIGNED_LABEL]);
    assert_eq!(board.tickets(UNASSIGNED_LABEL).map(ids), Some(vec!["2"]));
}

#[test]
fn test_invalid_priority_fails_priority_grouping() {
    let tickets = vec![
        TicketBuilder::new("1").with_priority(2).build(),
        TicketBuilder::new("2").with_priority(7).build(),
    ];

    let result = group_tickets(&tickets, &[], GroupingMode::Priority);

    match result {
        Err(AppError::InvalidPriority {
            ticket_id,
            priority,
        }) => {
            assert_eq!(ticket_id, "2");
            assert_eq!(priority, 7);
        }
        other => panic!("expected InvalidPriority, got {:?}", other),
    }
}

#[rstest]
#[case::status(GroupingMode::Status)]
#[case::user(GroupingMode::User)]
fn test_invalid_priority_only_matters_for_priority_grouping(#[case] mode: GroupingMode) {
    let tickets = vec![TicketBuilder::new("1").with_priority(7).build()];
    let users = vec![user("usr-1", "Anoop")];

    let board = group_tickets(&tickets, &users, mode).unwrap();

    assert_eq!(board.ticket_count(), 1);
}

#[test]
fn test_negative_priority_is_invalid() {
    let tickets = vec![TicketBuilder::new("1").with_priority(-1).build()];

    assert!(matches!(
        group_tickets(&tickets, &[], GroupingMode::Priority),
        Err(AppError::InvalidPriority { priority: -1, .. })
    ));
}

// =============================================================================
// Column Order Tests
// =============================================================================

#[test]
fn test_user_columns_follow_user_list_order() {
    let data = sample_dataset();

    let board = group_tickets(&data.tickets, &data.users, GroupingMode::User).unwrap();

    // usr-3 has no tickets; usr-5 does not exist
    assert_eq!(
        board.labels(),
        vec!["Anoop sharma", "Yogesh", "Ramesh", UNASSIGNED_LABEL]
    );
}

#[test]
fn test_priority_columns_run_urgent_to_no_priority() {
    let data = sample_dataset();

    let board = group_tickets(&data.tickets, &data.users, GroupingMode::Priority).unwrap();

    assert_eq!(
        board.labels(),
        vec!["Urgent", "High", "Low", "No priority"]
    );
    assert_eq!(board.tickets("High").map(ids), Some(vec!["CAM-2", "CAM-4"]));
}

#[test]
fn test_status_labels_are_verbatim() {
    let tickets = vec![
        TicketBuilder::new("1").with_status("todo").build(),
        TicketBuilder::new("2").with_status("Todo").build(),
        TicketBuilder::new("3").with_status("Todo ").build(),
    ];

    let board = group_tickets(&tickets, &[], GroupingMode::Status).unwrap();

    assert_eq!(board.labels(), vec!["todo", "Todo", "Todo "]);
}

#[test]
fn test_users_sharing_a_name_share_a_column() {
    let tickets = vec![
        TicketBuilder::new("1").with_user("u1").build(),
        TicketBuilder::new("2").with_user("u2").build(),
    ];
    let users = vec![user("u1", "Sam"), user("u2", "Sam")];

    let board = group_tickets(&tickets, &users, GroupingMode::User).unwrap();

    assert_eq!(board.labels(), vec!["Sam"]);
    assert_eq!(board.tickets("Sam").map(ids), Some(vec!["1", "2"]));
}

#[rstest]
#[case::status(GroupingMode::Status)]
#[case::user(GroupingMode::User)]
#[case::priority(GroupingMode::Priority)]
fn test_grouping_keeps_input_order_inside_columns(#[case] mode: GroupingMode) {
    let data = sample_dataset();

    let board = group_tickets(&data.tickets, &data.users, mode).unwrap();

    for column in board.columns() {
        let positions: Vec<usize> = column
            .tickets
            .iter()
            .map(|t| data.tickets.iter().position(|d| d.id == t.id).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted, "column {}", column.label);
    }
}
