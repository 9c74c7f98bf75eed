//! Status enums for orders, dealer orders, payments and deliveries
//!
//! The backend stores statuses as free text with inconsistent casing
//! (`PENDING` next to `approved`). Parsing is case-insensitive and anything
//! unrecognised is kept verbatim in `Other` so a full-record PUT writes it
//! back unchanged.

/// Declares a wire status enum with lenient parsing and an `Other` fallback.
macro_rules! wire_status {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal $(| $alias:literal)* ),+ $(,)?
        }
        default = $default:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, ::serde::Serialize)]
        #[serde(into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Unrecognised value, kept verbatim
            Other(String),
        }

        impl $name {
            /// Value as the backend writes it
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Other(raw) => raw.as_str(),
                }
            }

            /// Case-insensitive parse; never fails
            pub fn parse(raw: &str) -> Self {
                let trimmed = raw.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($wire) $(|| trimmed.eq_ignore_ascii_case($alias))* {
                        return Self::$variant;
                    }
                )+
                Self::Other(trimmed.to_string())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self::parse(&raw)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::parse(raw)
            }
        }

        impl From<$name> for String {
            fn from(status: $name) -> Self {
                match status {
                    $name::Other(raw) => raw,
                    known => known.as_str().to_string(),
                }
            }
        }

        // null or missing reads as the default
        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw: Option<String> = ::serde::Deserialize::deserialize(deserializer)?;
                Ok(raw.map(|r| Self::parse(&r)).unwrap_or_default())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_status! {
    /// Customer order status
    pub enum OrderStatus {
        Pending => "PENDING",
        /// Written lower-case by the backend
        Approved => "approved",
        Completed => "COMPLETED",
        Cancelled => "CANCELLED" | "CANCELED",
    }
    default = Pending;
}

wire_status! {
    /// Dealer order (stock requisition) status
    pub enum DealerOrderStatus {
        Pending => "PENDING",
        Confirmed => "CONFIRMED",
        VehicleDelivered => "VEHICLE_DELIVERED",
        Delivered => "DELIVERED",
        Completed => "COMPLETED",
        Cancelled => "CANCELLED" | "CANCELED",
    }
    default = Pending;
}

wire_status! {
    /// Payment status carried on a dealer order, independent of its status
    pub enum DealerPaymentStatus {
        Unpaid => "UNPAID",
        Paid => "PAID",
        Refunded => "REFUNDED",
    }
    default = Unpaid;
}

wire_status! {
    /// Payment record status
    pub enum PaymentStatus {
        Pending => "PENDING",
        Completed => "COMPLETED",
        Failed => "FAILED",
        Refunded => "REFUNDED",
        Cancelled => "CANCELLED" | "CANCELED",
    }
    default = Pending;
}

wire_status! {
    /// Payment method
    pub enum PaymentMethod {
        Cash => "CASH",
        BankTransfer => "BANK_TRANSFER",
        CreditCard => "CREDIT_CARD",
        Installment => "INSTALLMENT",
        Refund => "REFUND",
    }
    default = Cash;
}

wire_status! {
    /// Delivery status
    pub enum DeliveryStatus {
        Pending => "PENDING",
        InTransit => "IN_TRANSIT",
        Delivered => "DELIVERED",
        Cancelled => "CANCELLED" | "CANCELED",
    }
    default = Pending;
}

impl DealerOrderStatus {
    /// Vehicle has physically reached the dealer
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::VehicleDelivered | Self::Delivered)
    }
}

impl OrderStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}
