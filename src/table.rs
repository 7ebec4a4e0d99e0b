use crate::data::model::Dataset;

/// Fixed-width dump of the whole table, laid out like pandas'
/// `DataFrame.to_string()`: a left-aligned row index, then every column
/// right-aligned to its widest cell, two spaces apart. Blank cells print as
/// `NaN`.
pub fn render_table(dataset: &Dataset) -> String {
    let cell = |raw: &str| -> String {
        if raw.is_empty() {
            "NaN".to_string()
        } else {
            raw.to_string()
        }
    };

    let rows: Vec<Vec<String>> = dataset
        .rows
        .iter()
        .map(|row| row.iter().map(|c| cell(c)).collect())
        .collect();

    let index_width = rows.len().saturating_sub(1).to_string().len();
    let widths: Vec<usize> = dataset
        .headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|c| c.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&" ".repeat(index_width));
    for (header, width) in dataset.headers.iter().zip(&widths) {
        out.push_str("  ");
        out.push_str(&pad_left(header, *width));
    }

    for (i, row) in rows.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!("{i:<index_width$}"));
        for (col, width) in widths.iter().enumerate() {
            out.push_str("  ");
            out.push_str(&pad_left(row.get(col).map_or("", String::as_str), *width));
        }
    }
    out
}

/// Right-align by character count; `format!` width would count bytes for
/// names such as `Flabébé`.
fn pad_left(s: &str, width: usize) -> String {
    let len = s.chars().count();
    format!("{}{s}", " ".repeat(width.saturating_sub(len)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::from_reader;

    #[test]
    fn renders_header_and_rows_aligned() {
        let csv = "\
name,type1,attack,defense,hp,height_m,kg,speed
Bulbasaur,grass,49,49,45,0.7,6.9,45
Ivysaur,grass,62,63,60,1.0,13.0,60
";
        let text = render_table(&from_reader(csv.as_bytes()).unwrap());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "        name  type1  attack  defense  hp  height_m    kg  speed",
                "0  Bulbasaur  grass      49       49  45       0.7   6.9     45",
                "1    Ivysaur  grass      62       63  60       1.0  13.0     60",
            ]
        );
    }

    #[test]
    fn blank_cells_print_nan_and_unicode_aligns() {
        let csv = "\
name,type1,attack,defense,hp,height_m,kg,speed
Flabébé,fairy,38,39,44,0.1,,42
";
        let text = render_table(&from_reader(csv.as_bytes()).unwrap());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("0  Flabébé  fairy"));
        assert!(lines[1].contains("NaN"));
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
    }

    #[test]
    fn empty_dataset_renders_header_only() {
        let csv = "name,type1,attack,defense,hp,height_m,kg,speed\n";
        let text = render_table(&from_reader(csv.as_bytes()).unwrap());
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("height_m"));
    }
}
