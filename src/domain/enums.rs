use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed vocabulary value with a fixed display label
pub trait CanonicalEnum: Copy + fmt::Debug + PartialEq + 'static {
    /// The label used in canonical output and diagnostics
    fn label(&self) -> &'static str;
}

macro_rules! canonical_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl CanonicalEnum for $name {
            fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

canonical_enum! {
    /// Where a patient currently stands within an admission
    pub enum AdmissionStatus {
        #[default]
        Active => "Active",
        Discharged => "Discharged",
        MovedToIcu => "Moved to ICU",
        Transferred => "Transferred",
    }
}

canonical_enum! {
    /// Room categories offered by the ward
    pub enum RoomType {
        #[default]
        GeneralWard => "General Ward",
        SpecialSharedRoom => "Special Shared Room",
        SpecialRoom => "Special Room",
        Icu => "ICU",
    }
}

canonical_enum! {
    pub enum LabTestStatus {
        #[default]
        Pending => "Pending",
        InProgress => "In Progress",
        Completed => "Completed",
        Cancelled => "Cancelled",
    }
}

canonical_enum! {
    pub enum LabPriority {
        #[default]
        Routine => "Routine",
        Urgent => "Urgent",
        Stat => "STAT",
    }
}

canonical_enum! {
    /// Shared by doctor and nurse visits
    pub enum VisitStatus {
        #[default]
        Scheduled => "Scheduled",
        Completed => "Completed",
        Cancelled => "Cancelled",
    }
}
