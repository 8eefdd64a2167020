use serde::{Deserialize, Serialize};

/// Lifecycle status of a parking order as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Booked,
    Used,
    Expired,
}

/// Semantic color tag used to style a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusColor {
    Warning,
    Success,
    Danger,
    /// Fallback for statuses the client does not know about
    Neutral,
}

impl StatusColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusColor::Warning => "warning",
            StatusColor::Success => "success",
            StatusColor::Danger => "danger",
            StatusColor::Neutral => "neutral",
        }
    }
}

impl OrderStatus {
    /// Wire code, as sent to and received from `/api/order`
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Booked => "booked",
            OrderStatus::Used => "used",
            OrderStatus::Expired => "expired",
        }
    }

    /// Human readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Booked => "Booked",
            OrderStatus::Used => "Used",
            OrderStatus::Expired => "Expired",
        }
    }

    pub fn color(&self) -> StatusColor {
        match self {
            OrderStatus::Booked => StatusColor::Warning,
            OrderStatus::Used => StatusColor::Success,
            OrderStatus::Expired => StatusColor::Danger,
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![OrderStatus::Booked, OrderStatus::Used, OrderStatus::Expired]
    }

    /// Case-insensitive parse of a wire code
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "booked" => Some(OrderStatus::Booked),
            "used" => Some(OrderStatus::Used),
            "expired" => Some(OrderStatus::Expired),
            _ => None,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Label and color for a raw status string.
///
/// Unknown statuses keep their raw text and get a neutral color so that a bad
/// record still renders.
pub fn status_style(raw: &str) -> (String, StatusColor) {
    match OrderStatus::from_code(raw) {
        Some(status) => (status.display_name().to_string(), status.color()),
        None => (capitalize(raw), StatusColor::Neutral),
    }
}

/// Upper-cases the first character, leaves the rest untouched
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
