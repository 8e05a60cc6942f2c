/// Engine constants shared across modules.
/// Values that operators may want to tune are mirrored in `NormalizerConfig`.

/// Deepest object level (root = 0) searched by the field resolver
pub const DEFAULT_MAX_RESOLVE_DEPTH: usize = 3;

/// Shortest string allowed on the contained side of a substring key match
pub const DEFAULT_MIN_SUBSTRING_LEN: usize = 3;

/// Lowest placeholder id handed to list records that carry no id of their own
pub const DEFAULT_SYNTHETIC_ID_OFFSET: i64 = 1_000_000;

/// How many nested `data` wrappers the envelope unwrapper will descend through
pub const MAX_DATA_WRAPPER_DEPTH: usize = 2;

/// Name of the envelope property wrapping most responses
pub const DATA_WRAPPER_KEY: &str = "data";

/// Property names that hold the record collection of a list endpoint, in priority order
pub const COLLECTION_KEYS: &[&str] = &[
    "labTests",
    "LabTests",
    "patientLabTests",
    "PatientLabTests",
    "vitals",
    "Vitals",
    "visitVitals",
    "VisitVitals",
    "patientDoctorVisits",
    "PatientDoctorVisits",
    "doctorVisits",
    "DoctorVisits",
    "patientNurseVisits",
    "PatientNurseVisits",
    "nurseVisits",
    "NurseVisits",
    "roomAdmissions",
    "RoomAdmissions",
    "admissions",
    "Admissions",
    "roomCapacities",
    "RoomCapacities",
    "capacity",
    "Capacity",
    "items",
    "Items",
    "results",
    "Results",
    "records",
    "Records",
];

/// Lower-cased strings accepted as `true` by boolean fields
pub const TRUTHY_STRINGS: &[&str] = &["yes", "y", "true", "1", "on", "active"];

/// Environment variable naming the configuration file
pub const CONFIG_PATH_ENV: &str = "WARD_NORMALIZER_CONFIG";

/// Configuration file looked up in the working directory when nothing else is given
pub const DEFAULT_CONFIG_FILE: &str = "ward_normalizer.toml";
