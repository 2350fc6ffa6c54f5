use serde::{Deserialize, Serialize};

/// Search parameters steering the backend query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Free-text search query
    pub query: String,
    /// Postal code or place name to search around
    pub location: String,
    /// Search radius (km)
    pub radius: i32,
    /// Minimum price (EUR)
    pub min_price: f64,
    /// Number of result pages the backend should fetch
    pub page_count: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            query: "küche zu verschenken".to_string(),
            location: "12687".to_string(),
            radius: 10,
            min_price: 0.0,
            page_count: 5,
        }
    }
}

/// One of the five user-editable parameter fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamField {
    Query,
    Location,
    Radius,
    MinPrice,
    PageCount,
}

impl ParamField {
    /// Parse a field name as typed in the prompt (`min_price`, `radius`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "query" => Some(Self::Query),
            "location" => Some(Self::Location),
            "radius" => Some(Self::Radius),
            "min_price" => Some(Self::MinPrice),
            "page_count" => Some(Self::PageCount),
            _ => None,
        }
    }
}

impl SearchParams {
    /// Replace a single named field, leaving the others untouched.
    ///
    /// Numeric fields are coerced from the raw string; on a failed parse the
    /// params are left unchanged and the parse error message is returned.
    /// There is no range validation, negative radius or price passes through.
    pub fn set(&mut self, field: ParamField, raw: &str) -> Result<(), String> {
        match field {
            ParamField::Query => self.query = raw.to_string(),
            ParamField::Location => self.location = raw.to_string(),
            ParamField::Radius => self.radius = raw.parse().map_err(|e| format!("{e}"))?,
            ParamField::MinPrice => self.min_price = raw.parse().map_err(|e| format!("{e}"))?,
            ParamField::PageCount => self.page_count = raw.parse().map_err(|e| format!("{e}"))?,
        }
        Ok(())
    }

    /// The five transport pairs, in the order the backend documents them.
    /// Numbers travel in their plain string form.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("query", self.query.clone()),
            ("location", self.location.clone()),
            ("radius", self.radius.to_string()),
            ("min_price", self.min_price.to_string()),
            ("page_count", self.page_count.to_string()),
        ]
    }
}
