pub mod board;
pub mod collation;
pub mod grouping;
pub mod ordering;
pub mod users;

pub use board::BoardService;
pub use collation::compare_titles;
pub use grouping::group_tickets;
pub use ordering::{sort_board, sort_tickets};
pub use users::{UserDirectory, UNASSIGNED_LABEL};
