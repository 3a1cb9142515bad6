use crate::error::AppResult;
use crate::models::{
    BoardResponse, BoardSnapshot, BoardView, CardResponse, ColumnResponse, Dataset, GroupedBoard,
    Priority, Ticket,
};
use crate::services::grouping::group_tickets;
use crate::services::ordering::sort_board;
use crate::services::users::UserDirectory;

pub struct BoardService;

impl BoardService {
    /// Groups then orders the dataset for the given view
    pub fn build(dataset: &Dataset, view: BoardView) -> AppResult<GroupedBoard> {
        let grouped = group_tickets(&dataset.tickets, &dataset.users, view.grouping)?;
        Ok(sort_board(&grouped, view.ordering))
    }

    /// Builds the board and converts it to the response shown to clients
    pub fn render(snapshot: &BoardSnapshot, view: BoardView) -> AppResult<BoardResponse> {
        let board = Self::build(&snapshot.dataset, view)?;
        let directory = UserDirectory::new(&snapshot.dataset.users);

        let columns = board
            .columns()
            .iter()
            .map(|column| ColumnResponse {
                label: column.label.clone(),
                count: column.tickets.len(),
                cards: column
                    .tickets
                    .iter()
                    .map(|ticket| Self::card(ticket, &directory))
                    .collect(),
            })
            .collect();

        Ok(BoardResponse {
            grouping: view.grouping,
            ordering: view.ordering,
            fetched_at: snapshot.fetched_at,
            total_tickets: board.ticket_count(),
            columns,
        })
    }

    fn card(ticket: &Ticket, directory: &UserDirectory<'_>) -> CardResponse {
        CardResponse {
            id: ticket.id.clone(),
            title: ticket.title.clone(),
            status: ticket.status.clone(),
            priority: ticket.priority,
            priority_label: Priority::from_level(ticket.priority).map(Priority::label),
            assignee: directory.display_name(&ticket.assigned_user_id).to_string(),
            assignee_initial: directory.initial(&ticket.assigned_user_id),
            tag: ticket.primary_tag().map(str::to_string),
            tags: ticket.tags.clone(),
        }
    }
}
