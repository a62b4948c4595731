//! Borrowed sub-documents shared by several wire shapes

use korapay_domain::Metadata;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct WireCustomer<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<&'a str>,
}

impl<'a> WireCustomer<'a> {
    pub fn new(email: &'a str, name: Option<&'a str>) -> Self {
        Self { name, email: Some(email) }
    }

    /// `None` when neither field is present, so the object is left out.
    pub fn partial(email: Option<&'a str>, name: Option<&'a str>) -> Option<Self> {
        (email.is_some() || name.is_some()).then_some(Self { name, email })
    }
}

/// Empty metadata is sent as if it were absent.
pub(crate) fn metadata(metadata: &Option<Metadata>) -> Option<&Metadata> {
    metadata.as_ref().filter(|m| !m.is_empty())
}

