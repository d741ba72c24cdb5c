use products_hr::{Employee, EmployeeField};

/// Plain-text table with the roster columns, padded to the widest cell.
pub fn render_table(records: &[Employee]) -> String {
    let mut header = vec!["ID".to_string()];
    header.extend(EmployeeField::EDITABLE.iter().map(|f| f.label().to_string()));

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|employee| {
            let draft = employee.draft();
            let mut row = vec![employee.id.to_string()];
            row.extend(EmployeeField::EDITABLE.iter().map(|f| f.read(&draft)));
            row
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|cell| cell.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in std::iter::once(&header).chain(rows.iter()) {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use products_hr::demo_roster;

    #[test]
    fn table_has_header_and_one_line_per_record() {
        let records = demo_roster().unwrap().query("smith");
        let table = render_table(&records);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("ID  Name"));
        assert!(lines[0].ends_with("Experience"));
        assert!(lines[1].starts_with("2   Jane Smith"));
        assert!(lines[1].contains("70000"));
    }

    #[test]
    fn empty_roster_renders_header_only() {
        assert_eq!(render_table(&[]).lines().count(), 1);
    }
}
