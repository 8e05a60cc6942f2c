use super::Entity;
use crate::domain::DashboardMetrics;
use crate::normalize::alias::{AliasEntry, AliasTable};
use crate::normalize::reader::FieldReader;
use crate::normalize::EntitySchema;

pub const TOTAL_PATIENTS: AliasEntry = AliasEntry::new(
    "totalPatients",
    "TotalPatients",
    &["totalPatients", "TotalPatients", "total_patients", "Total_Patients", "patientCount", "PatientCount"],
);

pub const ACTIVE_ADMISSIONS: AliasEntry = AliasEntry::new(
    "activeAdmissions",
    "ActiveAdmissions",
    &[
        "activeAdmissions",
        "ActiveAdmissions",
        "active_admissions",
        "Active_Admissions",
        "currentAdmissions",
        "CurrentAdmissions",
    ],
);

pub const DISCHARGED_TODAY: AliasEntry = AliasEntry::new(
    "dischargedToday",
    "DischargedToday",
    &[
        "dischargedToday",
        "DischargedToday",
        "discharged_today",
        "Discharged_Today",
        "dischargesToday",
        "DischargesToday",
    ],
);

pub const ICU_OCCUPIED: AliasEntry = AliasEntry::new(
    "icuOccupied",
    "IcuOccupied",
    &["icuOccupied", "IcuOccupied", "ICUOccupied", "icu_occupied", "ICU_Occupied", "icuPatients", "ICUPatients"],
);

pub const ICU_CAPACITY: AliasEntry = AliasEntry::new(
    "icuCapacity",
    "IcuCapacity",
    &["icuCapacity", "IcuCapacity", "ICUCapacity", "icu_capacity", "ICU_Capacity", "totalIcuBeds", "TotalICUBeds"],
);

pub const PENDING_LAB_TESTS: AliasEntry = AliasEntry::new(
    "pendingLabTests",
    "PendingLabTests",
    &[
        "pendingLabTests",
        "PendingLabTests",
        "pending_lab_tests",
        "Pending_Lab_Tests",
        "pendingTests",
        "PendingTests",
    ],
);

pub const AVAILABLE_BEDS: AliasEntry = AliasEntry::new(
    "availableBeds",
    "AvailableBeds",
    &["availableBeds", "AvailableBeds", "available_beds", "Available_Beds", "freeBeds", "FreeBeds"],
);

pub const BED_OCCUPANCY_RATE: AliasEntry = AliasEntry::new(
    "bedOccupancyRate",
    "BedOccupancyRate",
    &[
        "bedOccupancyRate",
        "BedOccupancyRate",
        "bed_occupancy_rate",
        "Bed_Occupancy_Rate",
        "occupancyRate",
        "OccupancyRate",
        "occupancy_rate",
    ],
);

pub const FIELDS: AliasTable = &[
    TOTAL_PATIENTS,
    ACTIVE_ADMISSIONS,
    DISCHARGED_TODAY,
    ICU_OCCUPIED,
    ICU_CAPACITY,
    PENDING_LAB_TESTS,
    AVAILABLE_BEDS,
    BED_OCCUPANCY_RATE,
];

pub struct DashboardSchema;

impl EntitySchema for DashboardSchema {
    type Record = DashboardMetrics;

    const ENTITY: Entity = Entity::Dashboard;

    fn fields() -> AliasTable {
        FIELDS
    }

    fn map(reader: &mut FieldReader<'_>) -> DashboardMetrics {
        DashboardMetrics {
            total_patients: reader.integer(&TOTAL_PATIENTS),
            active_admissions: reader.integer(&ACTIVE_ADMISSIONS),
            discharged_today: reader.integer(&DISCHARGED_TODAY),
            icu_occupied: reader.integer(&ICU_OCCUPIED),
            icu_capacity: reader.integer(&ICU_CAPACITY),
            pending_lab_tests: reader.integer(&PENDING_LAB_TESTS),
            available_beds: reader.integer(&AVAILABLE_BEDS),
            bed_occupancy_rate: reader.number(&BED_OCCUPANCY_RATE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::SchemaNormalizer;
    use serde_json::json;

    #[test]
    fn test_dashboard_nested_sections() {
        let payload = json!({
            "success": true,
            "data": {
                "summary": {"TotalPatients": 42, "ActiveAdmissions": "30"},
                "icu": {"ICU_Occupied": 5, "ICU_Capacity": 8},
                "beds": {"FreeBeds": 11, "OccupancyRate": "78.5"}
            }
        });
        let metrics = SchemaNormalizer::default()
            .normalize_one::<DashboardSchema>(&payload)
            .records
            .unwrap();

        assert_eq!(metrics.total_patients, 42);
        assert_eq!(metrics.active_admissions, 30);
        assert_eq!(metrics.icu_occupied, 5);
        assert_eq!(metrics.icu_capacity, 8);
        assert_eq!(metrics.available_beds, 11);
        assert_eq!(metrics.bed_occupancy_rate, 78.5);
        assert_eq!(metrics.pending_lab_tests, 0);
        assert_eq!(metrics.discharged_today, 0);
    }
}
