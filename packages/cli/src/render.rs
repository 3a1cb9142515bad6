//! Terminal rendering of the board.

use colored::{ColoredString, Colorize};
use std::fmt::{self, Write};
use ticketboard::models::{BoardResponse, BoardView, CardResponse, GroupingMode, OrderingMode};

const RULE_WIDTH: usize = 60;

/// Renders every column as a header followed by its cards
pub fn render_board(board: &BoardResponse) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(
        out,
        "{} {}  {} {}  {}",
        "Grouping:".dimmed(),
        board.grouping.to_string().cyan(),
        "Ordering:".dimmed(),
        board.ordering.to_string().cyan(),
        format!("{} tickets", board.total_tickets).dimmed()
    )?;

    if board.columns.is_empty() {
        writeln!(out, "\n{}", "No tickets".dimmed())?;
        return Ok(out);
    }

    for column in &board.columns {
        writeln!(out)?;
        writeln!(
            out,
            "{} {}",
            column.label.yellow().bold(),
            format!("({})", column.count).dimmed()
        )?;
        writeln!(out, "{}", "─".repeat(RULE_WIDTH).dimmed())?;

        for card in &column.cards {
            writeln!(out, "{}", render_card(card)?)?;
        }
    }

    Ok(out)
}

/// One line per card: id, avatar, title, priority and first tag
fn render_card(card: &CardResponse) -> Result<String, fmt::Error> {
    let avatar = match card.assignee_initial {
        Some(initial) => format!("[{}]", initial.to_uppercase()),
        None => "[-]".to_string(),
    };

    let mut line = format!(
        "  {} {} {}  {}",
        card.id.as_str().dimmed(),
        avatar.cyan(),
        card.title.bold(),
        priority_badge(card)
    );

    if let Some(tag) = &card.tag {
        write!(line, "  {}", format!("#{}", tag).dimmed())?;
    }

    Ok(line)
}

fn priority_badge(card: &CardResponse) -> ColoredString {
    match card.priority_label {
        Some(label) => {
            let text = label.to_string();
            match card.priority {
                4 => text.red().bold(),
                3 => text.red(),
                2 => text.yellow(),
                1 => text.green(),
                _ => text.dimmed(),
            }
        }
        None => format!("priority {}", card.priority).magenta(),
    }
}

/// Lists the values accepted by `--grouping` and `--ordering`
pub fn render_modes(defaults: BoardView) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "{}", "Grouping".yellow().bold())?;
    for mode in GroupingMode::ALL {
        let marker = if mode == defaults.grouping { " (default)" } else { "" };
        writeln!(
            out,
            "  {} - {}{}",
            mode.as_str().cyan().bold(),
            mode.display_name(),
            marker.dimmed()
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{}", "Ordering".yellow().bold())?;
    for mode in OrderingMode::ALL {
        let marker = if mode == defaults.ordering { " (default)" } else { "" };
        writeln!(
            out,
            "  {} - {}{}",
            mode.as_str().cyan().bold(),
            mode.display_name(),
            marker.dimmed()
        )?;
    }

    Ok(out)
}
