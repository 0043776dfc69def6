use clap::Args;
use serde_json::Value;
use std::time::Instant;

use mortgage_calc_core::chart::{build_chart_data, ColorMap};
use mortgage_calc_core::payment::{calculate, EditedField, RawFormValues};
use mortgage_calc_core::with_metadata;

use super::form::FormArgs;
use super::payment::prepare_inputs;
use crate::input;

#[derive(Args)]
pub struct ChartArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Palette file (YAML or JSON) of category label -> color; merged over the stock palette
    #[arg(long)]
    pub palette: Option<String>,

    /// Reconcile the down payment for this edit before calculating
    #[arg(long)]
    pub edited: Option<EditedField>,

    /// Skip submission checks and chart degenerate inputs anyway
    #[arg(long)]
    pub allow_degenerate: bool,
}

pub fn load_palette(path: Option<&str>) -> Result<ColorMap, Box<dyn std::error::Error>> {
    let palette = match path {
        Some(path) => {
            let custom: ColorMap = input::file::read_yaml(path)?;
            ColorMap::default().with_overrides(custom)
        }
        None => ColorMap::default(),
    };
    Ok(palette)
}

pub fn run_chart(args: ChartArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let raw = args.form.load()?;
    let palette = load_palette(args.palette.as_deref())?;
    chart_report(&raw, &args, &palette)
}

fn chart_report(
    raw: &RawFormValues,
    args: &ChartArgs,
    palette: &ColorMap,
) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let inputs = prepare_inputs(raw, args.edited, args.allow_degenerate)?;

    let breakdown = calculate(&inputs);
    let mut warnings = Vec::new();
    if !breakdown.is_displayable() {
        warnings.push("Breakdown is degenerate; chart should not be rendered".to_string());
    }
    let dataset = build_chart_data(&breakdown, palette);

    let elapsed = start.elapsed().as_micros() as u64;
    let output = with_metadata("Monthly cost distribution", palette, warnings, elapsed, dataset);
    Ok(serde_json::to_value(output)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_lists_pmi_last() {
        let args = ChartArgs {
            form: FormArgs {
                home_price: Some("500000".into()),
                down_payment: Some("50000".into()),
                interest_rate: Some("6".into()),
                pmi_rate: Some("0.5".into()),
                ..FormArgs::default()
            },
            palette: None,
            edited: None,
            allow_degenerate: false,
        };
        let raw = args.form.flags_only().unwrap();
        let value = chart_report(&raw, &args, &ColorMap::default()).unwrap();
        let labels = value["result"]["labels"].as_array().unwrap();
        assert_eq!(labels.len(), 4);
        assert_eq!(labels[3], "PMI");
        assert_eq!(value["result"]["colors"][3], "#dc2626");
    }

    #[test]
    fn test_default_palette_without_file() {
        let palette = load_palette(None).unwrap();
        assert_eq!(palette, ColorMap::default());
    }
}
