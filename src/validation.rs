//! Structural validation of an address submission.
//!
//! Presence and length only. Nothing here knows what a real postal code or
//! country looks like. Values are checked as submitted, without trimming.

use std::collections::BTreeMap;

use validator::{Validate, ValidationErrors};

use crate::address::{Field, FormData, ShippingAddress};

/// Field name → message of the first constraint that field violated.
pub type FieldErrors = BTreeMap<Field, String>;

/// Minimum ZIP code length, in characters. Mirrors the schema below.
pub const ZIP_CODE_MIN_LEN: usize = 5;

#[derive(Debug, Validate)]
struct AddressSchema {
    #[validate(length(min = 1, message = "Street address is required"))]
    street_address: String,
    apartment: Option<String>,
    #[validate(length(min = 1, message = "City is required"))]
    city: String,
    #[validate(length(min = 1, message = "State is required"))]
    state: String,
    #[validate(length(min = 5, message = "ZIP code must be at least 5 characters"))]
    zip_code: String,
    #[validate(length(min = 1, message = "Country is required"))]
    country: String,
}

impl From<&FormData> for AddressSchema {
    /// A required field that was never sent is checked as empty.
    fn from(form: &FormData) -> Self {
        let text = |field| form.get(field).unwrap_or_default().to_owned();
        Self {
            street_address: text(Field::StreetAddress),
            apartment: form.apartment.clone(),
            city: text(Field::City),
            state: text(Field::State),
            zip_code: text(Field::ZipCode),
            country: text(Field::Country),
        }
    }
}

impl From<AddressSchema> for ShippingAddress {
    fn from(s: AddressSchema) -> Self {
        Self {
            street_address: s.street_address,
            apartment: s.apartment.filter(|a| !a.is_empty()),
            city: s.city,
            state: s.state,
            zip_code: s.zip_code,
            country: s.country,
        }
    }
}

/// Validates `form`, returning the normalised address or one message per
/// failing field.
pub fn validate(form: &FormData) -> Result<ShippingAddress, FieldErrors> {
    let schema = AddressSchema::from(form);
    match schema.validate() {
        Ok(()) => Ok(schema.into()),
        Err(errors) => Err(field_errors(&errors)),
    }
}

fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(ident, errs)| {
            let field = field_for_ident(&ident)?;
            let first = errs.first()?;
            let message = first
                .message
                .as_deref()
                .unwrap_or(&*first.code)
                .to_owned();
            Some((field, message))
        })
        .collect()
}

fn field_for_ident(ident: &str) -> Option<Field> {
    Some(match ident {
        "street_address" => Field::StreetAddress,
        "apartment"      => Field::Apartment,
        "city"           => Field::City,
        "state"          => Field::State,
        "zip_code"       => Field::ZipCode,
        "country"        => Field::Country,
        _ => return None,
    })
}
