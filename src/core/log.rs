use crate::store::log::LogEntry;
use crate::utils::table::strip_ansi;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 60;

/// ANSI colour for a log operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render the operation log, one line per entry:
    /// `id: date | op (target) => message`.
    pub fn render(entries: &[LogEntry]) -> Vec<String> {
        if entries.is_empty() {
            return Vec::new();
        }

        let rows: Vec<(&LogEntry, String, String)> = entries
            .iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());
                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                (e, date, op_target)
            })
            .collect();

        let op_w = rows
            .iter()
            .map(|(_, _, op_target)| op_target.len())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = rows
            .iter()
            .map(|(e, _, _)| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = rows
            .iter()
            .map(|(_, date, _)| date.len())
            .max()
            .unwrap_or(0);

        rows.into_iter()
            .map(|(entry, date, op_target)| {
                let color = color_for_operation(&entry.operation);

                // truncate on the visible text, then recolour the operation only
                let truncated = if op_target.len() > MAX_OP_WIDTH {
                    let mut s: String = op_target.chars().take(MAX_OP_WIDTH - 3).collect();
                    s.push_str("...");
                    s
                } else {
                    op_target
                };

                let colored = match truncated.split_once(' ') {
                    Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                    None => color.paint(truncated.as_str()).to_string(),
                };

                let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).len()));

                format!(
                    "{:>id_w$}: {:<date_w$} | {}{} => {}",
                    entry.id,
                    date,
                    colored,
                    padding,
                    entry.message,
                    id_w = id_w,
                    date_w = date_w
                )
            })
            .collect()
    }

    pub fn print_log(entries: &[LogEntry]) {
        println!("📜 Internal log:\n");
        for line in Self::render(entries) {
            println!("{line}");
        }
    }
}
