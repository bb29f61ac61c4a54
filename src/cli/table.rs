use crate::cli::output::current_preferences;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

/// Header and sizing rules for one column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub max_width: Option<usize>,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn left(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            max_width: None,
            alignment: Alignment::Left,
        }
    }

    pub fn right(header: impl Into<String>) -> Self {
        Self {
            alignment: Alignment::Right,
            ..Self::left(header)
        }
    }

    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }
}

/// Plain-text table with a header row and a rule underneath it.
#[derive(Clone, Debug, Default)]
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
    pub padding: usize,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            padding: 1,
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Widest cell per column, capped by the column's `max_width`.
    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let widest = self
                    .rows
                    .iter()
                    .filter_map(|row| row.get(idx))
                    .map(|cell| visible_width(cell))
                    .fold(visible_width(&column.header), usize::max);
                column.max_width.map_or(widest, |max| widest.min(max))
            })
            .collect()
    }

    fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        self.columns
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(idx, (column, width))| {
                let text = row.get(idx).map(String::as_str).unwrap_or("");
                render_cell(text, *width, column.alignment, self.padding)
            })
            .collect::<Vec<_>>()
            .join(" ")
            .trim_end()
            .to_string()
    }

    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        let mut lines = vec![
            self.render_row(&header, &widths),
            horizontal_rule(&widths, self.padding),
        ];
        lines.extend(self.rows.iter().map(|row| self.render_row(row, &widths)));
        lines.join("\n")
    }
}

fn is_zero_width(ch: char) -> bool {
    matches!(ch, '\u{200d}' | '\u{fe0e}' | '\u{fe0f}')
}

/// Splits `text` into ANSI escape sequences and visible characters.
fn for_each_segment(text: &str, mut visit: impl FnMut(&str, bool) -> bool) {
    let mut rest = text;
    while !rest.is_empty() {
        let (segment, visible) = if rest.starts_with("\u{1b}[") {
            let end = rest[2..]
                .find(|c: char| ('\u{40}'..='\u{7e}').contains(&c))
                .map(|pos| pos + 3)
                .unwrap_or(rest.len());
            (&rest[..end], false)
        } else {
            let len = rest.chars().next().map(char::len_utf8).unwrap_or(1);
            (&rest[..len], true)
        };
        if !visit(segment, visible) {
            return;
        }
        rest = &rest[segment.len()..];
    }
}

/// Display width ignoring ANSI styling and zero-width joiners.
pub fn visible_width(text: &str) -> usize {
    let mut width = 0;
    for_each_segment(text, |segment, visible| {
        if visible && !segment.chars().all(is_zero_width) {
            width += 1;
        }
        true
    });
    width
}

/// Cuts `text` to `width` visible characters, ending with an ellipsis when shortened.
pub fn truncate_text(text: &str, width: usize) -> String {
    if visible_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    let mut styled = false;
    for_each_segment(text, |segment, visible| {
        if !visible {
            styled = true;
            out.push_str(segment);
            return true;
        }
        let counts = !segment.chars().all(is_zero_width);
        if counts && used + 1 >= width {
            return false;
        }
        out.push_str(segment);
        if counts {
            used += 1;
        }
        true
    });
    out.push('…');
    if styled {
        out.push_str("\u{1b}[0m");
    }
    out
}

pub fn render_cell(text: &str, width: usize, alignment: Alignment, padding: usize) -> String {
    let fitted = truncate_text(text, width);
    let fill = " ".repeat(width.saturating_sub(visible_width(&fitted)));
    let pad = " ".repeat(padding);
    match alignment {
        Alignment::Left => format!("{pad}{fitted}{fill}{pad}"),
        Alignment::Right => format!("{pad}{fill}{fitted}{pad}"),
    }
}

pub fn horizontal_rule(widths: &[usize], padding: usize) -> String {
    let total: usize = widths.iter().map(|w| w + padding * 2).sum::<usize>()
        + widths.len().saturating_sub(1);
    let ch = if current_preferences().plain_mode { '-' } else { '─' };
    ch.to_string().repeat(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ignores_ansi_and_variation_selectors() {
        assert_eq!(visible_width("\u{1b}[1mAda\u{1b}[0m"), 3);
        assert_eq!(visible_width("♀\u{fe0f} Ada"), 5);
    }

    #[test]
    fn truncation_keeps_width() {
        assert_eq!(truncate_text("Brigitte & Julien", 8), "Brigitt…");
        assert_eq!(visible_width(&truncate_text("Brigitte & Julien", 8)), 8);
        assert_eq!(truncate_text("Ada", 8), "Ada");
    }

    #[test]
    fn right_alignment_pads_left() {
        assert_eq!(render_cell("7", 3, Alignment::Right, 1), "   7 ");
    }
}
