//! Excel export functionality

use fleetsim_types::{Error, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

use crate::app::SimulationRun;

/// Export a simulation run to an Excel file
pub fn export_to_excel(run: &SimulationRun, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, run)?;

    let metrics_sheet = workbook.add_worksheet();
    write_metrics_sheet(metrics_sheet, run)?;

    let fleet_sheet = workbook.add_worksheet();
    write_fleet_sheet(fleet_sheet, run)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    tracing::info!(path = %output_path.display(), "exported simulation workbook");
    Ok(())
}

fn xlsx<T>(result: std::result::Result<T, rust_xlsxwriter::XlsxError>) -> Result<T> {
    result.map_err(|e| Error::Excel(e.to_string()))
}

fn write_summary_sheet(sheet: &mut Worksheet, run: &SimulationRun) -> Result<()> {
    xlsx(sheet.set_name("Summary"))?;

    let header_format = Format::new().set_bold();
    let rec = &run.result.recommendation;

    xlsx(sheet.write_string_with_format(0, 0, "Fleet Change Simulation Report", &header_format))?;

    let fields = [
        ("Simulation:", run.name.clone()),
        (
            "Period:",
            format!("{} - {}", run.start_date, run.end_date),
        ),
        ("Created:", run.created_at.to_rfc3339()),
        ("Baseline:", run.baseline_source.clone()),
        (
            "Collection strategy:",
            run.parameters
                .collection_strategy
                .clone()
                .unwrap_or_default(),
        ),
        ("Recommendation:", rec.level.label().to_string()),
        ("Action:", rec.action.clone()),
    ];
    let mut row = 2;
    for (label, value) in &fields {
        xlsx(sheet.write_string(row, 0, *label))?;
        xlsx(sheet.write_string(row, 1, value))?;
        row += 1;
    }

    xlsx(sheet.write_string(row, 0, "Score:"))?;
    xlsx(sheet.write_number(row, 1, rec.score as f64))?;
    row += 1;
    xlsx(sheet.write_string(row, 0, "Model saturated:"))?;
    xlsx(sheet.write_boolean(row, 1, run.result.model_saturated))?;
    row += 2;

    xlsx(sheet.write_string_with_format(row, 0, "Reasons", &header_format))?;
    for reason in &rec.reasons {
        row += 1;
        xlsx(sheet.write_string(row, 0, reason))?;
    }

    xlsx(sheet.set_column_width(0, 22))?;
    xlsx(sheet.set_column_width(1, 48))?;
    Ok(())
}

fn write_metrics_sheet(sheet: &mut Worksheet, run: &SimulationRun) -> Result<()> {
    xlsx(sheet.set_name("Metrics"))?;

    let header_format = Format::new().set_bold();
    let headers = ["Metric", "Baseline", "Simulated", "Change", "Change %"];
    for (col, header) in headers.iter().enumerate() {
        xlsx(sheet.write_string_with_format(0, col as u16, *header, &header_format))?;
    }

    let r = &run.result;
    let (b, s, c, p) = (&r.baseline, &r.simulated, &r.changes, &r.percentages);
    let rows: [(&str, f64, f64, f64, Option<&str>); 8] = [
        ("Distance (km)", b.km_driven, s.km_driven, c.km_driven, Some(p.km.as_str())),
        ("Fuel (L)", b.fuel_consumed, s.fuel_consumed, c.fuel_consumed, Some(p.fuel.as_str())),
        ("CO₂ (kg)", b.co2_emissions, s.co2_emissions, c.co2_emissions, Some(p.co2.as_str())),
        ("Cost / month", b.cost, s.cost, c.cost, Some(p.cost.as_str())),
        (
            "Collection rate (%)",
            b.collection_rate,
            s.collection_rate,
            c.collection_rate,
            Some(p.collection_rate.as_str()),
        ),
        ("Satisfaction", b.satisfaction, s.satisfaction, c.satisfaction, None),
        ("Routes", b.routes, s.routes, c.routes, Some(p.routes.as_str())),
        ("Tonnage (kg)", b.tonnage, s.tonnage, c.tonnage, Some(p.tonnage.as_str())),
    ];

    for (idx, (label, baseline, simulated, change, percentage)) in rows.iter().enumerate() {
        let row = (idx + 1) as u32;
        xlsx(sheet.write_string(row, 0, *label))?;
        xlsx(sheet.write_number(row, 1, *baseline))?;
        xlsx(sheet.write_number(row, 2, *simulated))?;
        xlsx(sheet.write_number(row, 3, *change))?;
        if let Some(pct) = percentage {
            xlsx(sheet.write_string(row, 4, *pct))?;
        }
    }

    xlsx(sheet.set_column_width(0, 22))?;
    for col in 1..=4 {
        xlsx(sheet.set_column_width(col, 14))?;
    }
    Ok(())
}

fn write_fleet_sheet(sheet: &mut Worksheet, run: &SimulationRun) -> Result<()> {
    xlsx(sheet.set_name("Fleet"))?;

    let header_format = Format::new().set_bold();
    let headers = ["Class", "Current", "Change", "Projected"];
    for (col, header) in headers.iter().enumerate() {
        xlsx(sheet.write_string_with_format(0, col as u16, *header, &header_format))?;
    }

    for (idx, (label, class)) in run.result.fleet_totals.rows().iter().enumerate() {
        let row = (idx + 1) as u32;
        xlsx(sheet.write_string(row, 0, *label))?;
        xlsx(sheet.write_number(row, 1, class.current as f64))?;
        xlsx(sheet.write_number(row, 2, class.change as f64))?;
        xlsx(sheet.write_number(row, 3, class.projected as f64))?;
    }

    xlsx(sheet.set_column_width(0, 16))?;
    Ok(())
}
