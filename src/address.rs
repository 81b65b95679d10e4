//! Shipping-address data: the field names of the form, the raw submission,
//! and the validated record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::request::Request;
use crate::response::ContentType;

/// One input of the address form.
///
/// Serialises as the form's wire name (`streetAddress`, `zipCode`, ...),
/// which is also the key used in error and echo maps.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    StreetAddress,
    Apartment,
    City,
    State,
    ZipCode,
    Country,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 6] = [
        Field::StreetAddress,
        Field::Apartment,
        Field::City,
        Field::State,
        Field::ZipCode,
        Field::Country,
    ];

    /// The form input name.
    pub fn name(self) -> &'static str {
        match self {
            Self::StreetAddress => "streetAddress",
            Self::Apartment     => "apartment",
            Self::City          => "city",
            Self::State         => "state",
            Self::ZipCode       => "zipCode",
            Self::Country       => "country",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn is_required(self) -> bool {
        self != Self::Apartment
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A raw form submission, exactly as received.
///
/// A field the client did not send is `None`; an input left blank is
/// `Some("")`. Nothing is trimmed or normalised, so this is also what gets
/// echoed back after a failed submission.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apartment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Why a request body could not be read as a form submission.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("expected content-type application/x-www-form-urlencoded, got {0:?}")]
    UnsupportedContentType(Option<String>),
}

impl FormData {
    /// Builds a submission from decoded key/value pairs.
    ///
    /// The first occurrence of a key wins and unknown keys are ignored.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            let Some(field) = Field::from_name(key.as_ref()) else {
                continue;
            };
            let slot = form.slot_mut(field);
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        form
    }

    /// Decodes an `application/x-www-form-urlencoded` body.
    pub fn from_urlencoded(body: &[u8]) -> Self {
        Self::from_pairs(url::form_urlencoded::parse(body))
    }

    /// Reads the submission carried by `req`.
    pub fn from_request(req: &Request) -> Result<Self, FormError> {
        if !req.has_content_type(ContentType::FormData) {
            let got = req.header(http::header::CONTENT_TYPE.as_str()).map(str::to_owned);
            return Err(FormError::UnsupportedContentType(got));
        }
        Ok(Self::from_urlencoded(req.body()))
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::StreetAddress => self.street_address.as_deref(),
            Field::Apartment     => self.apartment.as_deref(),
            Field::City          => self.city.as_deref(),
            Field::State         => self.state.as_deref(),
            Field::ZipCode       => self.zip_code.as_deref(),
            Field::Country       => self.country.as_deref(),
        }
    }

    /// Sets `field`, replacing any earlier value.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        *self.slot_mut(field) = Some(value.into());
        self
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::StreetAddress => &mut self.street_address,
            Field::Apartment     => &mut self.apartment,
            Field::City          => &mut self.city,
            Field::State         => &mut self.state,
            Field::ZipCode       => &mut self.zip_code,
            Field::Country       => &mut self.country,
        }
    }
}

/// A validated shipping address.
///
/// Required fields are non-empty, `zip_code` has at least five characters,
/// and a blank apartment is `None`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub street_address: String,
    pub apartment: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}
