//! Form input validation.
//!
//! HTML forms deliver every field as text. [`AnimalForm`] captures those
//! raw values and the `TryFrom` conversions turn them into a typed
//! [`AnimalInput`] (create) or [`AnimalPatch`] (update), rejecting
//! malformed numbers instead of coercing them.
//!
//! A create needs `lifeExpectancy`; absent text fields become empty
//! strings. An update keeps the stored value of any text field or
//! `lifeExpectancy` that the submission leaves out.
//!
//! The checkbox convention is kept: an `extinct` value of exactly `"on"`
//! means `true`; any other value, or no value at all, means `false`.

use menagerie_types::{AnimalInput, AnimalPatch};
use validator::Validate;

/// Raw url-encoded fields submitted by the new/edit forms.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct AnimalForm {
    /// Species name.
    pub species: Option<String>,
    /// Habitat or region.
    pub location: Option<String>,
    /// Checkbox value; `"on"` when ticked.
    pub extinct: Option<String>,
    /// Life expectancy in years, as typed.
    #[serde(rename = "lifeExpectancy")]
    pub life_expectancy: Option<String>,
}

/// A submitted form could not be converted into an [`AnimalInput`].
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// `lifeExpectancy` was absent or blank.
    #[error("lifeExpectancy is required")]
    MissingLifeExpectancy,

    /// `lifeExpectancy` was not a finite number.
    #[error("lifeExpectancy must be a number, got {0:?}")]
    InvalidLifeExpectancy(String),

    /// A field failed a range or length rule.
    #[error("{0}")]
    Invalid(#[from] validator::ValidationErrors),
}

impl TryFrom<AnimalForm> for AnimalInput {
    type Error = FormError;

    fn try_from(form: AnimalForm) -> Result<Self, Self::Error> {
        let life_expectancy = parse_years(form.life_expectancy.as_deref())?
            .ok_or(FormError::MissingLifeExpectancy)?;

        let input = Self {
            species: form.species.unwrap_or_default(),
            location: form.location.unwrap_or_default(),
            extinct: is_checked(form.extinct.as_deref()),
            life_expectancy,
        };
        input.validate()?;
        Ok(input)
    }
}

impl TryFrom<AnimalForm> for AnimalPatch {
    type Error = FormError;

    fn try_from(form: AnimalForm) -> Result<Self, Self::Error> {
        let patch = Self {
            life_expectancy: parse_years(form.life_expectancy.as_deref())?,
            extinct: is_checked(form.extinct.as_deref()),
            species: form.species,
            location: form.location,
        };
        patch.validate()?;
        Ok(patch)
    }
}

/// The checkbox convention: only `"on"` is ticked.
fn is_checked(value: Option<&str>) -> bool {
    value == Some("on")
}

/// Parse `lifeExpectancy`. Absent or blank is `None`; anything that is not
/// a finite number is an error.
fn parse_years(raw: Option<&str>) -> Result<Option<f64>, FormError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Some)
        .ok_or_else(|| FormError::InvalidLifeExpectancy(raw.to_owned()))
}
