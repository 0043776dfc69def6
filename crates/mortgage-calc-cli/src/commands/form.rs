use clap::Args;

use mortgage_calc_core::payment::{LoanField, RawFormValues};

use crate::input;

/// Form fields shared by every command. Values are passed through as text
/// so `$450,000` and `6.5%` work exactly as they would in the web form.
#[derive(Args, Debug, Default)]
pub struct FormArgs {
    /// JSON file of raw form values (otherwise piped JSON is read)
    #[arg(long)]
    pub input: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub home_price: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub down_payment: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub down_payment_percent: Option<String>,
    /// Annual interest rate in percent
    #[arg(long, allow_hyphen_values = true)]
    pub interest_rate: Option<String>,
    /// Loan term in years
    #[arg(long, allow_hyphen_values = true)]
    pub loan_term: Option<String>,
    /// Annual property tax in percent of price
    #[arg(long, allow_hyphen_values = true)]
    pub property_tax_rate: Option<String>,
    /// Annual insurance in percent of price
    #[arg(long, allow_hyphen_values = true)]
    pub insurance_rate: Option<String>,
    /// Monthly HOA dues
    #[arg(long, allow_hyphen_values = true)]
    pub hoa_fees: Option<String>,
    /// Annual PMI in percent of the loan amount
    #[arg(long, allow_hyphen_values = true)]
    pub pmi_rate: Option<String>,
}

impl FormArgs {
    fn flag_values(&self) -> [(LoanField, &Option<String>); 9] {
        [
            (LoanField::HomePrice, &self.home_price),
            (LoanField::DownPayment, &self.down_payment),
            (LoanField::DownPaymentPercent, &self.down_payment_percent),
            (LoanField::InterestRate, &self.interest_rate),
            (LoanField::LoanTerm, &self.loan_term),
            (LoanField::PropertyTaxRate, &self.property_tax_rate),
            (LoanField::InsuranceRate, &self.insurance_rate),
            (LoanField::HoaFees, &self.hoa_fees),
            (LoanField::PmiRate, &self.pmi_rate),
        ]
    }

    /// Raw form values from `--input` or stdin, overlaid with any flags.
    pub fn load(&self) -> Result<RawFormValues, Box<dyn std::error::Error>> {
        let mut raw: RawFormValues = if let Some(ref path) = self.input {
            input::file::read_json(path)?
        } else if let Some(piped) = input::stdin::read_stdin()? {
            piped
        } else {
            RawFormValues::new()
        };
        self.overlay(&mut raw);
        Self::non_empty(raw)
    }

    /// Raw form values from the flags alone.
    #[cfg(test)]
    pub fn flags_only(&self) -> Result<RawFormValues, Box<dyn std::error::Error>> {
        let mut raw = RawFormValues::new();
        self.overlay(&mut raw);
        Self::non_empty(raw)
    }

    fn non_empty(raw: RawFormValues) -> Result<RawFormValues, Box<dyn std::error::Error>> {
        if raw.is_empty() {
            return Err("no form values given: use --home-price etc., --input <file.json> or stdin".into());
        }
        Ok(raw)
    }

    fn overlay(&self, raw: &mut RawFormValues) {
        for (field, value) in self.flag_values() {
            if let Some(v) = value {
                let key = field.key();
                // Drop any alias spelling from the file so the flag wins.
                raw.remove(field);
                raw.insert(key, v.as_str());
            }
        }
    }
}
