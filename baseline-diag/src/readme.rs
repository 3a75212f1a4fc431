//! README describing the fonts that were built.

use std::fmt::Write;

use baseline_types::baseline::{Destination, FontSpec};
use indexmap::IndexMap;

pub const README_FILE: &str = "README.md";

const HEADERS: [&str; 5] = [
    "Baseline/Metric",
    "Coordinate",
    "BASE Value",
    "OS/2 Value",
    "hhea Value",
];

/// One row per baseline id
#[derive(Debug, Default, Clone, PartialEq)]
struct Row {
    id: String,
    coordinate: String,
    base: String,
    os2: String,
    hhea: String,
}

impl Row {
    fn cells(&self) -> [&str; 5] {
        [
            self.id.as_str(),
            self.coordinate.as_str(),
            self.base.as_str(),
            self.os2.as_str(),
            self.hhea.as_str(),
        ]
    }
}

fn rows(font: &FontSpec) -> Vec<Row> {
    let mut rows: IndexMap<&str, Row> = IndexMap::new();
    for baseline in font.baselines.iter() {
        let row = rows.entry(baseline.id.as_str()).or_insert_with(|| Row {
            id: baseline.id.clone(),
            coordinate: baseline.position.to_string(),
            ..Default::default()
        });
        match baseline.destination {
            Destination::None => (),
            Destination::Os2(field) => row.os2 = field.to_string(),
            Destination::Hhea(field) => row.hhea = field.to_string(),
            Destination::Base(tag) => row.base = tag.to_string(),
        }
    }
    // ids that never reach a table are only drawn
    rows.into_values()
        .map(|mut row| {
            if row.base.is_empty() && row.os2.is_empty() && row.hhea.is_empty() {
                row.id = format!("/{}/", row.id);
            }
            row
        })
        .collect()
}

/// A markdown table with padded columns, coordinates right aligned.
fn baseline_table(font: &FontSpec) -> String {
    let rows = rows(font);
    let mut widths = HEADERS.map(str::len);
    for row in rows.iter() {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut table = String::new();
    let write_row = |table: &mut String, cells: [&str; 5]| {
        table.push('|');
        for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
            if i == 1 {
                let _ = write!(table, " {cell:>width$} |");
            } else {
                let _ = write!(table, " {cell:<width$} |");
            }
        }
        table.push('\n');
    };
    write_row(&mut table, HEADERS);
    table.push('|');
    for width in widths {
        let _ = write!(table, "{}|", "-".repeat(width + 2));
    }
    table.push('\n');
    for row in rows.iter() {
        write_row(&mut table, row.cells());
    }
    table
}

pub fn readme(fonts: &[FontSpec]) -> String {
    let mut readme = String::new();
    readme.push_str("# Baseline Diagnostic Font\n\n## Overview\n\n");
    readme.push_str(
        "Fonts that can be used for validating baseline alignments. Given the embedded\n\
         text in the fonts, they should be used with very large font sizes. There are\n\
         two glyphs in each font:\n\n\
         \x20 - `X` (U+0058) which has all baselines drawn\n\
         \x20 - `.notdef` (for all other characters) which is an empty box\n\n",
    );

    if let Some(first) = fonts.first() {
        let _ = writeln!(readme, "`{}` has the following baselines:\n", first.name);
        readme.push_str(&baseline_table(first));
        readme.push_str(
            "\nBaselines in slashes are drawn but not recorded in any table.\n\n",
        );
    }

    readme.push_str("## Fonts\n\n");
    for font in fonts {
        let _ = write!(readme, "- `{}.ttf`", font.name);
        let description = font.description.split_whitespace().collect::<Vec<_>>();
        if !description.is_empty() {
            let _ = write!(readme, ": {}", description.join(" "));
        }
        readme.push('\n');
    }
    let _ = writeln!(
        readme,
        "\n`{}` declares the `@font-face` rules for every font, along with a custom\n\
         property per baseline giving its distance from the top of the em box as a\n\
         fraction of the em.\n",
        crate::css::STYLESHEET_FILE
    );

    readme.push_str(
        "## License\n\n\
         The baseline labels are drawn with glyphs from [DejaVu Sans Mono][dejavu],\n\
         which are free to embed and modify. The fonts themselves are licensed under the\n\
         [SIL Open Font License, Version 1.1][ofl-1.1], available in `LICENSE.md`.\n\n\
         [dejavu]: https://dejavu-fonts.github.io/License.html\n\
         [ofl-1.1]: https://openfontlicense.org/open-font-license-official-text/\n",
    );
    readme
}
