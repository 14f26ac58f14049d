use crate::db::log::{LogRow, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::visible_width;
use ansi_term::Colour;

const OP_MAX_WIDTH: usize = 60;

/// Color by operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "seed" => Colour::Cyan,
        "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

/// "op (target)" cut to `max` visible characters, only `op` colored.
fn op_label(row: &LogRow, max: usize) -> String {
    let plain = if row.target.is_empty() {
        row.operation.clone()
    } else {
        format!("{} ({})", row.operation, row.target)
    };

    let plain = if plain.chars().count() > max {
        let mut s: String = plain.chars().take(max.saturating_sub(3)).collect();
        s.push_str("...");
        s
    } else {
        plain
    };

    let color = color_for_operation(&row.operation);
    match plain.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(plain.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn render(rows: &[LogRow]) -> String {
        if rows.is_empty() {
            return "No log entries.\n".to_string();
        }

        let labels: Vec<String> = rows.iter().map(|r| op_label(r, OP_MAX_WIDTH)).collect();
        let op_w = labels.iter().map(|l| visible_width(l)).max().unwrap_or(0);
        let id_w = rows.iter().map(|r| r.id.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.date.len()).max().unwrap_or(0);

        let mut out = String::new();
        for (row, label) in rows.iter().zip(&labels) {
            let date = chrono::DateTime::parse_from_rfc3339(&row.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or_else(|_| row.date.clone());
            let padding = " ".repeat(op_w.saturating_sub(visible_width(label)));

            out.push_str(&format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}\n",
                row.id, date, label, padding, row.message,
            ));
        }
        out
    }

    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let rows = load_log(&pool.conn)?;
        println!("📜 Internal log:\n");
        print!("{}", Self::render(&rows));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, op: &str, target: &str) -> LogRow {
        LogRow {
            id,
            date: "2025-01-02T03:04:05+00:00".to_string(),
            operation: op.to_string(),
            target: target.to_string(),
            message: "msg".to_string(),
        }
    }

    #[test]
    fn long_targets_are_truncated() {
        let long = "x".repeat(100);
        let label = op_label(&row(1, "edit", &long), OP_MAX_WIDTH);
        assert_eq!(visible_width(&label), OP_MAX_WIDTH);
        assert!(label.ends_with("..."));
    }

    #[test]
    fn renders_one_line_per_row() {
        let out = LogLogic::render(&[row(1, "init", ""), row(2, "add", "#2")]);
        assert_eq!(out.lines().count(), 2);
        assert!(out.contains("(#2) => msg"));
    }

    #[test]
    fn empty_log() {
        assert_eq!(LogLogic::render(&[]), "No log entries.\n");
    }
}
