use napi::Result as NapiResult;
use napi_derive::napi;

use mortgage_calc_core::chart::{self, ColorMap};
use mortgage_calc_core::display;
use mortgage_calc_core::payment::{self, EditedField, LoanInputs, PaymentBreakdown, RawFormValues};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

#[napi]
pub fn normalize_inputs(raw_json: String) -> NapiResult<String> {
    let raw: RawFormValues = serde_json::from_str(&raw_json).map_err(to_napi_error)?;
    let inputs = payment::normalize(&raw);
    serde_json::to_string(&inputs).map_err(to_napi_error)
}

#[derive(serde::Deserialize)]
struct SyncBindingInput {
    #[serde(flatten)]
    inputs: LoanInputs,
    edited: EditedField,
}

#[napi]
pub fn sync_down_payment(input_json: String) -> NapiResult<String> {
    let binding_input: SyncBindingInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let synced = payment::sync_down_payment(&binding_input.inputs, binding_input.edited);
    serde_json::to_string(&synced).map_err(to_napi_error)
}

#[napi]
pub fn validate_submission(input_json: String) -> NapiResult<()> {
    let inputs: LoanInputs = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    payment::validate_submission(&inputs).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Calculation
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_payment(input_json: String) -> NapiResult<String> {
    let inputs: LoanInputs = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let breakdown = payment::calculate(&inputs);
    serde_json::to_string(&breakdown).map_err(to_napi_error)
}

#[napi]
pub fn analyze_payment(input_json: String) -> NapiResult<String> {
    let inputs: LoanInputs = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = payment::analyze_payment(&inputs);
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Presentation
// ---------------------------------------------------------------------------

#[napi]
pub fn present_payment(breakdown_json: String) -> NapiResult<String> {
    let breakdown: PaymentBreakdown =
        serde_json::from_str(&breakdown_json).map_err(to_napi_error)?;
    let model = display::present(&breakdown);
    serde_json::to_string(&model).map_err(to_napi_error)
}

#[derive(serde::Deserialize)]
struct ChartBindingInput {
    breakdown: PaymentBreakdown,
    #[serde(default)]
    palette: Option<ColorMap>,
}

#[napi]
pub fn build_chart_data(input_json: String) -> NapiResult<String> {
    let binding_input: ChartBindingInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let palette = match binding_input.palette {
        Some(custom) => ColorMap::default().with_overrides(custom),
        None => ColorMap::default(),
    };
    let dataset = chart::build_chart_data(&binding_input.breakdown, &palette);
    serde_json::to_string(&dataset).map_err(to_napi_error)
}
