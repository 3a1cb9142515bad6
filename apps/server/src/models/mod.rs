pub mod board;
pub mod dataset;
pub mod ticket;
pub mod user;
pub mod view;

pub use board::{
    BoardOptionsResponse, BoardResponse, CardResponse, Column, ColumnResponse, GroupedBoard,
    ModeOption,
};
pub use dataset::{BoardSnapshot, Dataset};
pub use ticket::{Priority, Ticket, TicketId};
pub use user::User;
pub use view::{BoardQuery, BoardView, GroupingMode, OrderingMode, UnknownMode};
