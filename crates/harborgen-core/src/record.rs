use serde::{Deserialize, Serialize};

/// One generated boat-owner row. Field order is the output column order.
///
/// `loa_ft` and `date_joined` stay formatted strings; nothing downstream
/// parses them back into numbers or dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerRecord {
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub boat_name: String,
    pub make: String,
    pub model: String,
    pub loa_ft: String,
    pub country: String,
    pub country_code: String,
    pub email: String,
    pub date_joined: String,
}
