//! Geocoding result models

/// Result of resolving a postal code at the geocoding provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalityRecord {
    /// Locality (city) name, e.g. "São Paulo"
    pub name: String,
    /// Federative unit abbreviation, e.g. "SP"
    pub state: String,
    /// Set when the provider reported the postal code as unknown;
    /// `name` must not be used downstream in that case
    pub not_found: bool,
}
