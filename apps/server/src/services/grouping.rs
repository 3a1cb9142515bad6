use crate::error::AppResult;
use crate::models::{Column, GroupedBoard, GroupingMode, Priority, Ticket, User};
use crate::services::users::{UserDirectory, UNASSIGNED_LABEL};

/// Partitions tickets into board columns.
///
/// Every ticket lands in exactly one column. Column order:
/// - status: order in which each status is first seen
/// - user: order of `users`, with the unassigned column last
/// - priority: Urgent down to "No priority"
///
/// Empty columns are never produced.
pub fn group_tickets(
    tickets: &[Ticket],
    users: &[User],
    mode: GroupingMode,
) -> AppResult<GroupedBoard> {
    let board = match mode {
        GroupingMode::Status => group_by_status(tickets),
        GroupingMode::User => group_by_user(tickets, users),
        GroupingMode::Priority => group_by_priority(tickets)?,
    };

    log::debug!(
        "Grouped {} tickets by {} into {} columns",
        tickets.len(),
        mode,
        board.len()
    );

    Ok(board)
}

fn group_by_status(tickets: &[Ticket]) -> GroupedBoard {
    let mut board = GroupedBoard::new();
    for ticket in tickets {
        board.push(&ticket.status, ticket.clone());
    }
    board
}

fn group_by_user(tickets: &[Ticket], users: &[User]) -> GroupedBoard {
    let directory = UserDirectory::new(users);
    let mut board = GroupedBoard::new();
    let mut unresolved = Vec::new();

    for ticket in tickets {
        match directory.resolve(&ticket.assigned_user_id) {
            Some(user) => board.push(&user.name, ticket.clone()),
            None => unresolved.push(ticket.clone()),
        }
    }

    board.sort_columns_by_key(|column| directory.rank_of_name(&column.label));

    // Kept apart from the user columns so it stays last even if a user
    // carries the same name
    if !unresolved.is_empty() {
        log::warn!(
            "{} ticket(s) reference unknown users; placed under '{}'",
            unresolved.len(),
            UNASSIGNED_LABEL
        );
        board.push_column(Column::new(UNASSIGNED_LABEL, unresolved));
    }

    board
}

fn group_by_priority(tickets: &[Ticket]) -> AppResult<GroupedBoard> {
    // Validate everything before building so a bad ticket fails the whole call
    let levels = tickets
        .iter()
        .map(Ticket::priority_level)
        .collect::<AppResult<Vec<Priority>>>()?;

    let mut board = GroupedBoard::new();
    for (ticket, level) in tickets.iter().zip(levels) {
        board.push(level.label(), ticket.clone());
    }

    board.sort_columns_by_key(|column| {
        Priority::ALL
            .iter()
            .rev()
            .position(|p| p.label() == column.label)
            .unwrap_or(usize::MAX)
    });
    Ok(board)
}
