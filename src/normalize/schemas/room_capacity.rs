use super::admission::ROOM_TYPE;
use super::Entity;
use crate::domain::RoomCapacity;
use crate::normalize::alias::{AliasEntry, AliasTable};
use crate::normalize::reader::FieldReader;
use crate::normalize::EntitySchema;

pub const ROOM_TYPE_FIELD: AliasEntry = AliasEntry::new(
    "roomType",
    "RoomType",
    &[
        "roomType",
        "RoomType",
        "room_type",
        "Room_Type",
        "roomCategory",
        "RoomCategory",
        "room_category",
        "category",
        "Category",
    ],
);

pub const TOTAL_BEDS: AliasEntry = AliasEntry::new(
    "totalBeds",
    "TotalBeds",
    &[
        "totalBeds",
        "TotalBeds",
        "total_beds",
        "Total_Beds",
        "bedCapacity",
        "BedCapacity",
        "capacity",
        "Capacity",
    ],
);

pub const OCCUPIED_BEDS: AliasEntry = AliasEntry::new(
    "occupiedBeds",
    "OccupiedBeds",
    &["occupiedBeds", "OccupiedBeds", "occupied_beds", "Occupied_Beds", "occupied", "Occupied"],
);

pub const AVAILABLE_BEDS: AliasEntry = AliasEntry::new(
    "availableBeds",
    "AvailableBeds",
    &[
        "availableBeds",
        "AvailableBeds",
        "available_beds",
        "Available_Beds",
        "freeBeds",
        "FreeBeds",
        "vacantBeds",
        "available",
        "Available",
    ],
);

pub const FIELDS: AliasTable = &[ROOM_TYPE_FIELD, TOTAL_BEDS, OCCUPIED_BEDS, AVAILABLE_BEDS];

pub struct RoomCapacitySchema;

impl EntitySchema for RoomCapacitySchema {
    type Record = RoomCapacity;

    const ENTITY: Entity = Entity::RoomCapacity;

    fn fields() -> AliasTable {
        FIELDS
    }

    fn map(reader: &mut FieldReader<'_>) -> RoomCapacity {
        let total_beds = reader.integer(&TOTAL_BEDS);
        let occupied_beds = reader.integer(&OCCUPIED_BEDS);
        let available_beds = reader
            .optional_integer(&AVAILABLE_BEDS)
            .unwrap_or_else(|| total_beds.saturating_sub(occupied_beds).max(0));

        RoomCapacity {
            room_type: reader.choice(&ROOM_TYPE_FIELD, &ROOM_TYPE),
            total_beds,
            occupied_beds,
            available_beds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RoomType;
    use crate::normalize::SchemaNormalizer;
    use serde_json::json;

    #[test]
    fn test_available_beds_are_derived_when_missing() {
        let payload = json!({"data": [
            {"RoomCategory": "Special Shared", "TotalBeds": "10", "OccupiedBeds": 4},
            {"room_type": "icu", "total_beds": 6, "occupied_beds": 9},
            {"Category": "General", "Capacity": 20, "Occupied": 5, "Available": 12}
        ]});
        let rooms = SchemaNormalizer::default()
            .normalize_list::<RoomCapacitySchema>(&payload)
            .records;

        assert_eq!(rooms[0].room_type, RoomType::SpecialSharedRoom);
        assert_eq!(rooms[0].available_beds, 6);
        assert_eq!(rooms[1].room_type, RoomType::Icu);
        assert_eq!(rooms[1].available_beds, 0);
        assert_eq!(rooms[2].room_type, RoomType::GeneralWard);
        assert_eq!((rooms[2].total_beds, rooms[2].occupied_beds, rooms[2].available_beds), (20, 5, 12));
    }
}
