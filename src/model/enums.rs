//! Enumerations stored as lowercase strings in the database.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// A stored or submitted string did not name a known variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($value => Ok($name::$variant),)+
                    other => Err(UnknownVariant {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

string_enum!(
    /// Role of a team member; `Admin` may do everything, `Attorney` may bill.
    Role {
        Admin => "admin",
        Attorney => "attorney",
        Paralegal => "paralegal",
        Assistant => "assistant",
    }
);

string_enum!(ClientType {
    Individual => "individual",
    Corporate => "corporate",
});

string_enum!(ClientStatus {
    Active => "active",
    Inactive => "inactive",
    Pending => "pending",
});

string_enum!(CaseStatus {
    Active => "active",
    Pending => "pending",
    Closed => "closed",
    Archived => "archived",
});

string_enum!(
    /// Priority shared by cases and tasks.
    Priority {
        Low => "low",
        Medium => "medium",
        High => "high",
        Urgent => "urgent",
    }
);

string_enum!(DocumentCategory {
    Pleading => "pleading",
    Motion => "motion",
    Brief => "brief",
    Evidence => "evidence",
    Correspondence => "correspondence",
    Other => "other",
});

string_enum!(DocumentStatus {
    Draft => "draft",
    Final => "final",
    Archived => "archived",
});

string_enum!(TaskStatus {
    Pending => "pending",
    InProgress => "in_progress",
    Completed => "completed",
    Cancelled => "cancelled",
});

string_enum!(
    /// Invoice lifecycle. `Paid` and `Cancelled` are terminal.
    InvoiceStatus {
        Draft => "draft",
        Sent => "sent",
        Paid => "paid",
        Overdue => "overdue",
        Cancelled => "cancelled",
    }
);

impl InvoiceStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, InvoiceStatus::Paid | InvoiceStatus::Cancelled)
    }
}

string_enum!(LeaveType {
    Annual => "annual",
    Sick => "sick",
    Unpaid => "unpaid",
    Other => "other",
});

string_enum!(LeaveStatus {
    Pending => "pending",
    Approved => "approved",
    Rejected => "rejected",
    Cancelled => "cancelled",
});
