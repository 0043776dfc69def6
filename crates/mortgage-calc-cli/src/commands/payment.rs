use clap::Args;
use serde_json::{json, Value};
use std::time::Instant;

use mortgage_calc_core::display::present;
use mortgage_calc_core::payment::{
    analyze_payment, normalize, sync_down_payment, validate_submission, EditedField, LoanInputs,
    RawFormValues,
};
use mortgage_calc_core::with_metadata;

use super::form::FormArgs;

#[derive(Args)]
pub struct CalculateArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Reconcile the down payment for this edit before calculating
    #[arg(long)]
    pub edited: Option<EditedField>,

    /// Skip submission checks and calculate degenerate inputs anyway
    #[arg(long)]
    pub allow_degenerate: bool,

    /// Print the formatted results panel instead of raw numbers
    #[arg(long)]
    pub display: bool,
}

#[derive(Args)]
pub struct SyncArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// The field that was just edited: amount, percent or price
    #[arg(long)]
    pub edited: EditedField,
}

/// Normalize the form, apply an optional sync and the submission checks.
pub fn prepare_inputs(
    raw: &RawFormValues,
    edited: Option<EditedField>,
    allow_degenerate: bool,
) -> Result<LoanInputs, Box<dyn std::error::Error>> {
    let mut inputs = normalize(raw);
    if let Some(edited) = edited {
        inputs = sync_down_payment(&inputs, edited);
    }
    if !allow_degenerate {
        validate_submission(&inputs)?;
    }
    Ok(inputs)
}

pub fn run_calculate(args: CalculateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let raw = args.form.load()?;
    calculate_report(&raw, &args)
}

fn calculate_report(
    raw: &RawFormValues,
    args: &CalculateArgs,
) -> Result<Value, Box<dyn std::error::Error>> {
    let inputs = prepare_inputs(raw, args.edited, args.allow_degenerate)?;
    let output = analyze_payment(&inputs);

    if args.display {
        let model = present(&output.result);
        return Ok(json!({
            "result": model.rows(),
            "methodology": output.methodology,
            "warnings": output.warnings,
        }));
    }
    Ok(serde_json::to_value(output)?)
}

pub fn run_sync(args: SyncArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let start = Instant::now();
    let raw = args.form.load()?;
    let synced = sync_down_payment(&normalize(&raw), args.edited);
    let elapsed = start.elapsed().as_micros() as u64;
    let output = with_metadata(
        "Down payment synchronization",
        &json!({ "edited": args.edited }),
        Vec::new(),
        elapsed,
        synced,
    );
    Ok(serde_json::to_value(output)?)
}
