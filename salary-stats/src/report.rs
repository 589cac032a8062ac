use crate::aggregate::StatisticsTable;

pub const HEADER: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];

fn width(cell: &str) -> usize {
    cell.chars().count()
}

fn border(widths: &[usize]) -> String {
    let segments = widths
        .iter()
        .map(|w| "-".repeat(w + 2))
        .collect::<Vec<_>>()
        .join("+");
    format!("+{}+", segments)
}

fn row(cells: &[String], widths: &[usize]) -> String {
    let cells = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!(" {}{} ", cell, " ".repeat(w - width(cell))))
        .collect::<Vec<_>>()
        .join("|");
    format!("|{}|", cells)
}

/// Renders the table as ASCII art with `title` set into the top border.
///
/// ```text
/// +HeadHunter Moscow------+------------------+---------------------+------------------+
/// | Язык программирования | Вакансий найдено | Вакансий обработано | Средняя зарплата |
/// +-----------------------+------------------+---------------------+------------------+
/// | Python                | 2                | 1                   | 1500             |
/// +-----------------------+------------------+---------------------+------------------+
/// ```
///
/// A title wider than the table is left out.
pub fn render_table(title: &str, table: &StatisticsTable) -> String {
    let header: Vec<String> = HEADER.iter().map(|cell| cell.to_string()).collect();
    let rows: Vec<Vec<String>> = table
        .iter()
        .map(|(language, summary)| {
            vec![
                language.to_owned(),
                summary.vacancies_found.to_string(),
                summary.vacancies_processed.to_string(),
                summary.average_salary.to_string(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|cell| width(cell)).collect();
    for cells in &rows {
        for (w, cell) in widths.iter_mut().zip(cells) {
            *w = (*w).max(width(cell));
        }
    }

    let separator = border(&widths);
    // the border is ASCII, so byte offsets equal character offsets
    let title_width = width(title);
    let top = if title_width + 2 <= separator.len() {
        format!("+{}{}", title, &separator[1 + title_width..])
    } else {
        separator.clone()
    };

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(top);
    lines.push(row(&header, &widths));
    lines.push(separator.clone());
    for cells in &rows {
        lines.push(row(cells, &widths));
    }
    lines.push(separator);
    lines.join("\n")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::aggregate::LanguageSummary;

    fn table() -> StatisticsTable {
        let mut table = StatisticsTable::new();
        table.insert(
            "Python".to_owned(),
            LanguageSummary {
                vacancies_found: 2,
                vacancies_processed: 1,
                average_salary: 1500,
            },
        );
        table.insert(
            "JavaScript".to_owned(),
            LanguageSummary {
                vacancies_found: 1234,
                vacancies_processed: 456,
                average_salary: 187654,
            },
        );
        table
    }

    #[test]
    fn test_render_single_row() {
        let mut table = StatisticsTable::new();
        table.insert(
            "Python".to_owned(),
            LanguageSummary {
                vacancies_found: 2,
                vacancies_processed: 1,
                average_salary: 1500,
            },
        );
        let expected = "\
+HeadHunter Moscow------+------------------+---------------------+------------------+
| Язык программирования | Вакансий найдено | Вакансий обработано | Средняя зарплата |
+-----------------------+------------------+---------------------+------------------+
| Python                | 2                | 1                   | 1500             |
+-----------------------+------------------+---------------------+------------------+";
        assert_eq!(render_table("HeadHunter Moscow", &table), expected);
    }

    #[test]
    fn test_all_lines_have_equal_width() {
        let rendered = render_table("SuperJob Moscow", &table());
        let widths: Vec<usize> = rendered.lines().map(|line| line.chars().count()).collect();
        assert_eq!(widths.len(), 6);
        assert!(widths.iter().all(|w| *w == widths[0]));
        assert!(rendered.starts_with("+SuperJob Moscow-"));
        assert!(rendered.contains("| JavaScript "));
        assert!(rendered.contains("| 187654 "));
    }

    #[test]
    fn test_render_empty_table() {
        let rendered = render_table("HeadHunter Moscow", &StatisticsTable::new());
        assert_eq!(rendered.lines().count(), 4);
        assert!(rendered.contains(HEADER[0]));
    }

    #[test]
    fn test_wide_title_is_dropped() {
        let title = "x".repeat(200);
        let rendered = render_table(&title, &table());
        assert!(!rendered.contains(&title));
        assert!(rendered.starts_with("+---"));
    }
}
