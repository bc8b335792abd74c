use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use super::domain::{DiagnosisDraft, DiagnosisInput, IndustryId};

pub const INDUSTRY_COUNT: i64 = 15;
pub const MIN_BUSINESS_PERIOD_YEARS: f64 = 0.5;
pub const BEST_CREDIT_RATING: i64 = 1;
pub const WORST_CREDIT_RATING: i64 = 10;
pub const MIN_REQUESTED_AMOUNT: i64 = 1_000_000;

/// Questionnaire fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosisField {
    Industry,
    Revenue,
    BusinessPeriod,
    CreditRating,
    ExistingDebt,
    HasCollateral,
    RequestedAmount,
}

impl DiagnosisField {
    pub const fn key(self) -> &'static str {
        match self {
            DiagnosisField::Industry => "industry",
            DiagnosisField::Revenue => "revenue",
            DiagnosisField::BusinessPeriod => "business_period",
            DiagnosisField::CreditRating => "credit_rating",
            DiagnosisField::ExistingDebt => "existing_debt",
            DiagnosisField::HasCollateral => "has_collateral",
            DiagnosisField::RequestedAmount => "requested_amount",
        }
    }

    /// Name used by the questionnaire form.
    pub const fn form_key(self) -> &'static str {
        match self {
            DiagnosisField::Industry => "industry",
            DiagnosisField::Revenue => "revenue",
            DiagnosisField::BusinessPeriod => "businessPeriod",
            DiagnosisField::CreditRating => "creditRating",
            DiagnosisField::ExistingDebt => "existingDebt",
            DiagnosisField::HasCollateral => "hasCollateral",
            DiagnosisField::RequestedAmount => "requestedAmount",
        }
    }

    /// Accepted values, phrased for an `OutOfRange` message.
    pub const fn expected(self) -> &'static str {
        match self {
            DiagnosisField::Industry => "an industry id between 1 and 15",
            DiagnosisField::Revenue => "greater than 0",
            DiagnosisField::BusinessPeriod => "at least 0.5 years",
            DiagnosisField::CreditRating => "a credit rating between 1 and 10",
            DiagnosisField::ExistingDebt => "zero or more",
            DiagnosisField::HasCollateral => "true or false",
            DiagnosisField::RequestedAmount => "at least 1,000,000",
        }
    }
}

/// Reason a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldViolation {
    #[error("a value is required")]
    MissingRequiredField,
    #[error("must be {expected}")]
    OutOfRange { expected: &'static str },
}

/// Every invalid field of a draft, keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<DiagnosisField, FieldViolation>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, field: DiagnosisField) -> Option<&FieldViolation> {
        self.fields.get(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = (DiagnosisField, &FieldViolation)> {
        self.fields.iter().map(|(field, violation)| (*field, violation))
    }

    /// Field key to human-readable reason, ready for a form or an API payload.
    pub fn to_messages(&self) -> BTreeMap<&'static str, String> {
        self.fields
            .iter()
            .map(|(field, violation)| (field.key(), violation.to_string()))
            .collect()
    }

    fn reject(&mut self, field: DiagnosisField) {
        self.fields.insert(
            field,
            FieldViolation::OutOfRange {
                expected: field.expected(),
            },
        );
    }

    fn check<T: Copy>(
        &mut self,
        field: DiagnosisField,
        value: Option<T>,
        accept: impl Fn(T) -> bool,
    ) -> Option<T> {
        if self.fields.contains_key(&field) {
            return None;
        }
        match value {
            None => {
                self.fields
                    .insert(field, FieldViolation::MissingRequiredField);
                None
            }
            Some(value) if accept(value) => Some(value),
            Some(_) => {
                self.reject(field);
                None
            }
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid diagnosis input")?;
        let mut separator = ": ";
        for (field, violation) in &self.fields {
            write!(f, "{separator}{} {violation}", field.key())?;
            separator = "; ";
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl DiagnosisDraft {
    /// Check every answer and build the engine input, or report all invalid fields.
    pub fn validate(self) -> Result<DiagnosisInput, ValidationErrors> {
        self.validate_with(ValidationErrors::default())
    }

    /// Read a JSON questionnaire without failing on the first mistyped answer.
    ///
    /// A value of the wrong JSON type (`"revenue": "10000000"`) is recorded as out of range
    /// for its field, and every other field is still checked. Snake_case and form keys are
    /// both accepted; `null` counts as unanswered.
    pub fn validate_json(payload: &Value) -> Result<DiagnosisInput, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let object = payload.as_object();

        let draft = DiagnosisDraft {
            industry: read_json(object, DiagnosisField::Industry, Value::as_i64, &mut errors),
            revenue: read_json(object, DiagnosisField::Revenue, Value::as_i64, &mut errors),
            business_period: read_json(
                object,
                DiagnosisField::BusinessPeriod,
                Value::as_f64,
                &mut errors,
            ),
            credit_rating: read_json(
                object,
                DiagnosisField::CreditRating,
                Value::as_i64,
                &mut errors,
            ),
            existing_debt: read_json(
                object,
                DiagnosisField::ExistingDebt,
                Value::as_i64,
                &mut errors,
            ),
            has_collateral: read_json(
                object,
                DiagnosisField::HasCollateral,
                Value::as_bool,
                &mut errors,
            ),
            requested_amount: read_json(
                object,
                DiagnosisField::RequestedAmount,
                Value::as_i64,
                &mut errors,
            ),
        };

        draft.validate_with(errors)
    }

    fn validate_with(
        self,
        mut errors: ValidationErrors,
    ) -> Result<DiagnosisInput, ValidationErrors> {
        let industry = errors.check(
            DiagnosisField::Industry,
            self.industry,
            |id| (1..=INDUSTRY_COUNT).contains(&id),
        );
        let revenue = errors.check(DiagnosisField::Revenue, self.revenue, |amount| amount > 0);
        let business_period = errors.check(
            DiagnosisField::BusinessPeriod,
            self.business_period,
            |years| years.is_finite() && years >= MIN_BUSINESS_PERIOD_YEARS,
        );
        let credit_rating = errors.check(
            DiagnosisField::CreditRating,
            self.credit_rating,
            |rating| (BEST_CREDIT_RATING..=WORST_CREDIT_RATING).contains(&rating),
        );
        let existing_debt =
            errors.check(DiagnosisField::ExistingDebt, self.existing_debt, |amount| amount >= 0);
        let has_collateral =
            errors.check(DiagnosisField::HasCollateral, self.has_collateral, |_| true);
        let requested_amount = errors.check(
            DiagnosisField::RequestedAmount,
            self.requested_amount,
            |amount| amount >= MIN_REQUESTED_AMOUNT,
        );

        match (
            industry,
            revenue,
            business_period,
            credit_rating,
            existing_debt,
            has_collateral,
            requested_amount,
        ) {
            (
                Some(industry),
                Some(revenue),
                Some(business_period),
                Some(credit_rating),
                Some(existing_debt),
                Some(has_collateral),
                Some(requested_amount),
            ) if errors.is_empty() => Ok(DiagnosisInput {
                industry: IndustryId(industry as u8),
                revenue: revenue as u64,
                business_period,
                credit_rating: credit_rating as u8,
                existing_debt: existing_debt as u64,
                has_collateral,
                requested_amount: requested_amount as u64,
            }),
            _ => Err(errors),
        }
    }
}

fn read_json<T>(
    object: Option<&Map<String, Value>>,
    field: DiagnosisField,
    parse: impl Fn(&Value) -> Option<T>,
    errors: &mut ValidationErrors,
) -> Option<T> {
    let value = object.and_then(|map| map.get(field.key()).or_else(|| map.get(field.form_key())))?;

    if value.is_null() {
        return None;
    }

    let parsed = parse(value);
    if parsed.is_none() {
        errors.reject(field);
    }
    parsed
}
