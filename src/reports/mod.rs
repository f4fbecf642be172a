use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use roughness::analysis::{KeyLengthReport, KeyLengthScore};
use roughness::error::MrResult;
use serde::Serialize;
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    Plain,
    Table,
    Json,
    Csv,
}

pub fn render(report: &KeyLengthReport, format: OutputFormat) -> MrResult<String> {
    match format {
        OutputFormat::Plain => Ok(plain(report)),
        OutputFormat::Table => Ok(table(report).to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => csv_rows(report),
    }
}

/// `Key Length: k, Average MR: x.xxxx` per candidate, then the verdict.
pub fn plain(report: &KeyLengthReport) -> String {
    let mut out = String::new();
    for s in &report.scores {
        out.push_str(&format!(
            "Key Length: {}, Average MR: {:.4}\n",
            s.key_length, s.average_roughness
        ));
    }
    out.push_str(&format!(
        "\nMost likely key length: {}",
        report.best_key_length
    ));
    out
}

fn distance(report: &KeyLengthReport, s: &KeyLengthScore) -> f64 {
    s.distance
        .unwrap_or_else(|| s.distance_from(report.reference_roughness))
}

pub fn table(report: &KeyLengthReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Key Length").add_attribute(Attribute::Bold),
        Cell::new("Avg MR").fg(Color::Cyan),
        Cell::new(format!("|Δ {:.4}|", report.reference_roughness)),
        Cell::new("Cols"),
        Cell::new("Min Col"),
        Cell::new("Max Col"),
    ]);

    for i in 0..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let mut best_marked = false;
    for s in &report.scores {
        let is_best = !best_marked && s.key_length == report.best_key_length;
        best_marked |= is_best;

        let key_cell = if is_best {
            Cell::new(s.key_length)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(s.key_length)
        };

        table.add_row(vec![
            key_cell,
            Cell::new(format!("{:.4}", s.average_roughness)).fg(Color::Cyan),
            Cell::new(format!("{:.4}", distance(report, s))),
            Cell::new(s.column_roughness.len()),
            Cell::new(format!("{:.4}", s.min_column())),
            Cell::new(format!("{:.4}", s.max_column())),
        ]);
    }
    table
}

#[derive(Serialize)]
struct CsvRow {
    key_length: usize,
    average_mr: f64,
    distance: f64,
    columns: usize,
    min_column_mr: f64,
    max_column_mr: f64,
    best: bool,
}

fn csv_rows(report: &KeyLengthReport) -> MrResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    let mut best_marked = false;

    for s in &report.scores {
        let best = !best_marked && s.key_length == report.best_key_length;
        best_marked |= best;

        wtr.serialize(CsvRow {
            key_length: s.key_length,
            average_mr: s.average_roughness,
            distance: distance(report, s),
            columns: s.column_roughness.len(),
            min_column_mr: s.min_column(),
            max_column_mr: s.max_column(),
            best,
        })?;
    }

    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
