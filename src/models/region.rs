//! Indonesian administrative divisions

use serde::{Deserialize, Serialize};

/// A province (`provinsi`), e.g. `{"id": "32", "name": "JAWA BARAT"}`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Province {
    pub id: String,
    pub name: String,
}

/// A regency or city (`kabupaten`/`kota`) nested under a province
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Regency {
    pub id: String,
    #[serde(default)]
    pub province_id: Option<String>,
    pub name: String,
}
