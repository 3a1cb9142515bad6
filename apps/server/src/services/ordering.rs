use crate::models::{Column, GroupedBoard, OrderingMode, Ticket};
use crate::services::collation::compare_titles;

/// Orders the tickets inside every column of `board`.
///
/// Returns a new board; `board` itself is left untouched. Columns keep their
/// order and membership. Both orderings are stable: tickets with an equal
/// key stay in the order the grouping produced.
pub fn sort_board(board: &GroupedBoard, mode: OrderingMode) -> GroupedBoard {
    let columns = board
        .columns()
        .iter()
        .map(|column| {
            let mut tickets = column.tickets.clone();
            sort_tickets(&mut tickets, mode);
            Column::new(column.label.clone(), tickets)
        })
        .collect();

    GroupedBoard::from_columns(columns)
}

/// Stable in-place sort of a single ticket list
pub fn sort_tickets(tickets: &mut [Ticket], mode: OrderingMode) {
    match mode {
        // Urgent (4) first, "No priority" (0) last
        OrderingMode::Priority => tickets.sort_by(|a, b| b.priority.cmp(&a.priority)),
        OrderingMode::Title => tickets.sort_by(|a, b| compare_titles(&a.title, &b.title)),
    }
}
