use serde::{Deserialize, Serialize};

/// Order lifecycle status as it appears in the source data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Shipped,
    #[serde(rename = "In Process")]
    InProcess,
    Disputed,
    #[serde(rename = "On Hold")]
    OnHold,
    Cancelled,
    Resolved,
}

impl OrderStatus {
    /// Human-readable label, identical to the source data spelling
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Shipped => "Shipped",
            OrderStatus::InProcess => "In Process",
            OrderStatus::Disputed => "Disputed",
            OrderStatus::OnHold => "On Hold",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Resolved => "Resolved",
        }
    }

    /// All known statuses
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Shipped,
            OrderStatus::InProcess,
            OrderStatus::Disputed,
            OrderStatus::OnHold,
            OrderStatus::Cancelled,
            OrderStatus::Resolved,
        ]
    }

    /// Parse from the source data label
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Shipped" => Some(OrderStatus::Shipped),
            "In Process" => Some(OrderStatus::InProcess),
            "Disputed" => Some(OrderStatus::Disputed),
            "On Hold" => Some(OrderStatus::OnHold),
            "Cancelled" => Some(OrderStatus::Cancelled),
            "Resolved" => Some(OrderStatus::Resolved),
            _ => None,
        }
    }

    /// Whether the status belongs in the disputed/on-hold table
    pub fn is_disputed_or_on_hold(&self) -> bool {
        matches!(self, OrderStatus::Disputed | OrderStatus::OnHold)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::from_label(status.label()), Some(status));
        }
        assert_eq!(OrderStatus::from_label("Backordered"), None);
    }

    #[test]
    fn test_serde_uses_source_labels() {
        let json = serde_json::to_string(&OrderStatus::OnHold).unwrap();
        assert_eq!(json, "\"On Hold\"");
        let back: OrderStatus = serde_json::from_str("\"In Process\"").unwrap();
        assert_eq!(back, OrderStatus::InProcess);
    }
}
