//! The animal entity and its writable input.
//!
//! [`Animal`] is a stored record: the four descriptive fields plus the
//! [`AnimalId`] assigned at creation. [`AnimalInput`] is the same record
//! without an identity, produced by the HTTP layer after form validation
//! and accepted by the create operations of the store. [`AnimalPatch`]
//! carries an update: text fields and life expectancy left out of the
//! submission keep their stored values.

use serde::{Deserialize, Serialize, Serializer};
use validator::Validate;

use crate::ids::AnimalId;

/// A stored animal species record.
///
/// Serialized in camelCase so the JSON surface reads
/// `{"id", "species", "location", "extinct", "lifeExpectancy"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    /// Identifier assigned by the store; never changes.
    pub id: AnimalId,
    /// Species name, e.g. `"toucan"`.
    pub species: String,
    /// Where the species lives (or lived).
    pub location: String,
    /// Whether the species is extinct.
    pub extinct: bool,
    /// Typical life expectancy in years. Whole values serialize as
    /// JSON integers (`8`, not `8.0`).
    #[serde(serialize_with = "serialize_years")]
    pub life_expectancy: f64,
}

impl Animal {
    /// Build a record from validated input and a freshly assigned id.
    pub fn from_input(id: AnimalId, input: AnimalInput) -> Self {
        Self {
            id,
            species: input.species,
            location: input.location,
            extinct: input.extinct,
            life_expectancy: input.life_expectancy,
        }
    }

    /// Apply an update, keeping the identity and any field the patch
    /// leaves out.
    pub fn apply(&mut self, patch: AnimalPatch) {
        if let Some(species) = patch.species {
            self.species = species;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        self.extinct = patch.extinct;
        if let Some(years) = patch.life_expectancy {
            self.life_expectancy = years;
        }
    }

    /// Strip the identity, yielding the writable fields.
    pub fn to_input(&self) -> AnimalInput {
        AnimalInput {
            species: self.species.clone(),
            location: self.location.clone(),
            extinct: self.extinct,
            life_expectancy: self.life_expectancy,
        }
    }
}

/// The writable fields of an [`Animal`].
///
/// `species` is expected to be meaningful but is not required to be
/// non-empty. Free-text fields are capped at 200 characters and
/// `life_expectancy` must be a non-negative number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnimalInput {
    /// Species name.
    #[validate(length(max = 200))]
    pub species: String,
    /// Habitat or region.
    #[validate(length(max = 200))]
    pub location: String,
    /// Whether the species is extinct.
    pub extinct: bool,
    /// Typical life expectancy in years.
    #[validate(range(min = 0.0))]
    #[serde(serialize_with = "serialize_years")]
    pub life_expectancy: f64,
}

impl AnimalInput {
    /// Convenience constructor used by the seed dataset and tests.
    pub fn new(species: &str, location: &str, extinct: bool, life_expectancy: f64) -> Self {
        Self {
            species: species.to_owned(),
            location: location.to_owned(),
            extinct,
            life_expectancy,
        }
    }
}

/// An update to an existing [`Animal`].
///
/// `None` keeps the stored value. `extinct` is always written, since an
/// unticked checkbox is simply absent from a form submission.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct AnimalPatch {
    /// New species name.
    #[validate(length(max = 200))]
    pub species: Option<String>,
    /// New habitat or region.
    #[validate(length(max = 200))]
    pub location: Option<String>,
    /// Whether the species is extinct.
    pub extinct: bool,
    /// New life expectancy in years.
    #[validate(range(min = 0.0))]
    pub life_expectancy: Option<f64>,
}

impl From<AnimalInput> for AnimalPatch {
    fn from(input: AnimalInput) -> Self {
        Self {
            species: Some(input.species),
            location: Some(input.location),
            extinct: input.extinct,
            life_expectancy: Some(input.life_expectancy),
        }
    }
}

/// Largest magnitude below which every whole `f64` is an exact `i64`.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Write whole year counts as integers and everything else as floats.
#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_years<S: Serializer>(years: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if years.is_finite() && years.fract() == 0.0 && years.abs() < EXACT_INTEGER_LIMIT {
        #[allow(clippy::cast_possible_truncation)]
        let whole = *years as i64;
        serializer.serialize_i64(whole)
    } else {
        serializer.serialize_f64(*years)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp, clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn serializes_camel_case_fields() {
        let input = AnimalInput::new("fox", "forest", false, 8.0);
        let animal = Animal::from_input(AnimalId::new(), input);
        let json = serde_json::to_value(&animal).unwrap_or_default();
        assert_eq!(json["lifeExpectancy"].as_f64(), Some(8.0));
        assert_eq!(json["species"], "fox");
        assert!(json.get("life_expectancy").is_none());
    }

    #[test]
    fn whole_life_expectancy_serializes_as_integer() {
        let whole = Animal::from_input(AnimalId::new(), AnimalInput::new("fox", "forest", true, 8.0));
        let text = serde_json::to_string(&whole).unwrap_or_default();
        assert!(text.contains("\"lifeExpectancy\":8}"), "{text}");

        let fractional =
            Animal::from_input(AnimalId::new(), AnimalInput::new("owl", "barn", false, 12.5));
        let text = serde_json::to_string(&fractional).unwrap_or_default();
        assert!(text.contains("\"lifeExpectancy\":12.5}"), "{text}");
    }

    #[test]
    fn integer_life_expectancy_deserializes() {
        let json = r#"{"species":"cat","location":"egypt","extinct":false,"lifeExpectancy":10}"#;
        let input: AnimalInput = serde_json::from_str(json).unwrap_or_else(|_| {
            AnimalInput::new("", "", false, -1.0)
        });
        assert_eq!(input.life_expectancy, 10.0);
    }

    #[test]
    fn full_patch_replaces_fields_and_keeps_identity() {
        let id = AnimalId::new();
        let mut animal = Animal::from_input(id, AnimalInput::new("cat", "egypt", false, 10.0));
        animal.apply(AnimalPatch::from(AnimalInput::new("lynx", "rome", true, 12.0)));
        assert_eq!(animal.id, id);
        assert_eq!(animal.species, "lynx");
        assert_eq!(animal.location, "rome");
        assert!(animal.extinct);
        assert_eq!(animal.life_expectancy, 12.0);
    }

    #[test]
    fn partial_patch_keeps_omitted_fields() {
        let id = AnimalId::new();
        let mut animal = Animal::from_input(id, AnimalInput::new("hare", "field", true, 5.0));
        animal.apply(AnimalPatch {
            location: Some(String::from("moor")),
            ..AnimalPatch::default()
        });
        assert_eq!(animal.id, id);
        assert_eq!(animal.species, "hare");
        assert_eq!(animal.location, "moor");
        assert!(!animal.extinct);
        assert_eq!(animal.life_expectancy, 5.0);
    }

    #[test]
    fn patch_validation_checks_present_fields() {
        let negative = AnimalPatch {
            life_expectancy: Some(-1.0),
            ..AnimalPatch::default()
        };
        assert!(negative.validate().is_err());
        assert!(AnimalPatch::default().validate().is_ok());
    }

    #[test]
    fn validation_rejects_negative_life_expectancy() {
        assert!(AnimalInput::new("cat", "egypt", false, -1.0).validate().is_err());
        assert!(AnimalInput::new("cat", "egypt", false, 0.0).validate().is_ok());
    }

    #[test]
    fn validation_rejects_overlong_text() {
        let long = "x".repeat(201);
        assert!(AnimalInput::new(&long, "egypt", false, 1.0).validate().is_err());
        assert!(AnimalInput::new("", "", false, 1.0).validate().is_ok());
    }
}
