// Copyright (c) 2024 The Regents of the University of Michigan.
// Part of durfmt, released under the BSD 3-Clause License.

use console::Style;
use std::cmp;
use std::io::{self, Write};

pub(crate) enum Alignment {
    Left,
    Right,
}

/// One item in a table.
pub(crate) struct Item {
    text: String,
    style: Style,
    alignment: Alignment,
}

/// The table
pub(crate) struct Table {
    // The header row.
    pub header: Vec<Item>,

    // The items.
    pub items: Vec<Vec<Item>>,

    // Hide the header when true.
    hide_header: bool,
}

impl Item {
    pub(crate) fn new(text: String, style: Style) -> Self {
        Item {
            text,
            style,
            alignment: Alignment::Left,
        }
    }

    pub(crate) fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

impl Table {
    pub(crate) fn new() -> Self {
        Table {
            header: Vec::new(),
            items: Vec::new(),
            hide_header: false,
        }
    }

    pub(crate) fn with_hide_header(mut self, hide_header: bool) -> Self {
        self.hide_header = hide_header;
        self
    }

    fn write_row<W: Write>(writer: &mut W, row: &[Item], column_width: &[usize]) -> io::Result<()> {
        let mut line = String::new();
        for (i, item) in row.iter().enumerate() {
            let text = match item.alignment {
                Alignment::Left => format!("{:<width$}", &item.text, width = column_width[i]),
                Alignment::Right => format!("{:>width$}", &item.text, width = column_width[i]),
            };

            line.push_str(&item.style.apply_to(text).to_string());
            if i != row.len() - 1 {
                line.push(' ');
            }
        }

        // Left aligned text in the last column pads the line.
        writeln!(writer, "{}", line.trim_end())
    }

    pub(crate) fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let mut column_width: Vec<usize> = self
            .header
            .iter()
            .map(|h| console::measure_text_width(&h.text))
            .collect();
        for row in &self.items {
            for (i, item) in row.iter().enumerate() {
                column_width[i] =
                    cmp::max(console::measure_text_width(&item.text), column_width[i]);
            }
        }

        if !self.hide_header {
            Self::write_row(writer, &self.header, &column_width)?;
        }

        for row in &self.items {
            Self::write_row(writer, row, &column_width)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serial_test::parallel;

    use super::*;

    fn table() -> Table {
        let mut table = Table::new();
        table.header = vec![
            Item::new("Value".into(), Style::new()),
            Item::new("Unit".into(), Style::new()),
        ];
        table.items.push(vec![
            Item::new("1".into(), Style::new()).with_alignment(Alignment::Right),
            Item::new("second".into(), Style::new()),
        ]);
        table.items.push(vec![
            Item::new("45".into(), Style::new()).with_alignment(Alignment::Right),
            Item::new("µs".into(), Style::new()),
        ]);
        table
    }

    #[test]
    #[parallel]
    fn aligned() {
        let mut output = Vec::new();
        table().write(&mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Value Unit\n    1 second\n   45 µs\n"
        );
    }

    #[test]
    #[parallel]
    fn hide_header() {
        let mut output = Vec::new();
        table().with_hide_header(true).write(&mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "    1 second\n   45 µs\n"
        );
    }
}
