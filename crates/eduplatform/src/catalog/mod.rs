/// Static reference data: unit/day/shift lists, the availability table,
/// and the similar-course offering list
mod types;

pub use types::{AvailabilitySlot, MatchType, SimilarCourseOffering, SlotKey, SlotRecord};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Serde form of a full catalog, as stored in a catalog JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub units: Vec<String>,
    pub days: Vec<String>,
    pub shifts: Vec<String>,
    #[serde(default)]
    pub slots: Vec<SlotRecord>,
    #[serde(default)]
    pub offerings: Vec<SimilarCourseOffering>,
}

/// The catalog every resolver runs against.
///
/// Authored once, read-only afterwards. The availability table is indexed by
/// composite `SlotKey`; the offering list keeps its authored order, which is
/// the order recommendations are returned in.
#[derive(Debug, Clone)]
pub struct Catalog {
    units: Vec<String>,
    days: Vec<String>,
    shifts: Vec<String>,
    slots: HashMap<SlotKey, AvailabilitySlot>,
    offerings: Vec<SimilarCourseOffering>,
}

impl Catalog {
    /// Builds a catalog from its serde form, indexing the slot records.
    pub fn from_data(data: CatalogData) -> Self {
        let slots = data
            .slots
            .iter()
            .map(|record| (record.key(), record.slot()))
            .collect();

        Catalog {
            units: data.units,
            days: data.days,
            shifts: data.shifts,
            slots,
            offerings: data.offerings,
        }
    }

    /// Loads a catalog from a JSON file.
    pub fn load_from_path(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let data: CatalogData = serde_json::from_str(&content)?;
        Ok(Self::from_data(data))
    }

    /// Creates an empty catalog.
    pub fn empty() -> Self {
        Catalog {
            units: Vec::new(),
            days: Vec::new(),
            shifts: Vec::new(),
            slots: HashMap::new(),
            offerings: Vec::new(),
        }
    }

    /// The hand-authored catalog shipped with the prototype.
    pub fn builtin() -> Self {
        Self::from_data(builtin_data())
    }

    pub fn units(&self) -> &[String] {
        &self.units
    }

    pub fn days(&self) -> &[String] {
        &self.days
    }

    pub fn shifts(&self) -> &[String] {
        &self.shifts
    }

    /// Looks up the availability slot for one (course, unit, day, shift) triple.
    pub fn slot(&self, course_name: &str, unit: &str, day: &str, shift: &str) -> Option<&AvailabilitySlot> {
        let key = SlotKey {
            course_name: course_name.to_owned(),
            unit: unit.to_owned(),
            day: day.to_owned(),
            shift: shift.to_owned(),
        };
        self.slots.get(&key)
    }

    /// The similar-course offering list, in authored order.
    pub fn offerings(&self) -> &[SimilarCourseOffering] {
        &self.offerings
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Dates in the builtin tables are literal constants.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("static catalog date")
}

fn builtin_data() -> CatalogData {
    let units = [
        "Unidade A - Centro",
        "Unidade B - Zona Sul",
        "Unidade C - Zona Norte",
        "Unidade D - Zona Leste",
        "Unidade E - Zona Oeste",
        "Unidade F - Regional 1",
        "Unidade G - Regional 2",
        "Unidade H - Regional 3",
    ];

    let days = [
        "Segunda-feira",
        "Terça-feira",
        "Quarta-feira",
        "Quinta-feira",
        "Sexta-feira",
        "Sábado",
        "Domingo",
    ];

    let shifts = [
        "Manhã (08h às 12h)",
        "Tarde (13h às 17h)",
        "Noite (18h às 22h)",
        "Integral (08h às 17h)",
    ];

    // Deliberately sparse so the recommendation path is reachable: the only
    // open class is Monday night at Unidade A.
    let slots = vec![SlotRecord {
        course_name: "Assistente de Design de Embalagens".to_owned(),
        unit: "Unidade A - Centro".to_owned(),
        day: "Segunda-feira".to_owned(),
        shift: "Noite (18h às 22h)".to_owned(),
        available: true,
        start_date: date(2026, 2, 15),
        enroll_deadline: date(2026, 2, 8),
    }];

    let offerings = vec![
        SimilarCourseOffering {
            name: "Design Gráfico Avançado".to_owned(),
            code: "CL-003".to_owned(),
            unit: "Unidade C - Zona Norte".to_owned(),
            distance_km: 3.5,
            day: "Terça-feira".to_owned(),
            shift: "Tarde (13h às 17h)".to_owned(),
            start_date: date(2026, 2, 20),
            enroll_deadline: date(2026, 2, 13),
            match_type: MatchType::SameDayShift,
        },
        SimilarCourseOffering {
            name: "Design de Produto e Embalagens".to_owned(),
            code: "CL-005".to_owned(),
            unit: "Unidade B - Zona Sul".to_owned(),
            distance_km: 2.8,
            day: "Quarta-feira".to_owned(),
            shift: "Noite (18h às 22h)".to_owned(),
            start_date: date(2026, 2, 18),
            enroll_deadline: date(2026, 2, 11),
            match_type: MatchType::SimilarCourse,
        },
        SimilarCourseOffering {
            name: "Comunicação Visual para Embalagens".to_owned(),
            code: "CL-007".to_owned(),
            unit: "Unidade D - Zona Leste".to_owned(),
            distance_km: 4.2,
            day: "Quinta-feira".to_owned(),
            shift: "Tarde (13h às 17h)".to_owned(),
            start_date: date(2026, 2, 25),
            enroll_deadline: date(2026, 2, 18),
            match_type: MatchType::SimilarCourse,
        },
        SimilarCourseOffering {
            name: "Design e Marketing de Produto".to_owned(),
            code: "CL-009".to_owned(),
            unit: "Unidade E - Zona Oeste".to_owned(),
            distance_km: 5.1,
            day: "Sexta-feira".to_owned(),
            shift: "Manhã (08h às 12h)".to_owned(),
            start_date: date(2026, 2, 27),
            enroll_deadline: date(2026, 2, 20),
            match_type: MatchType::SimilarCourse,
        },
        SimilarCourseOffering {
            name: "Assistente de Design de Embalagens".to_owned(),
            code: "CL-001B".to_owned(),
            unit: "Unidade F - Regional 1".to_owned(),
            distance_km: 6.3,
            day: "Sábado".to_owned(),
            shift: "Manhã (08h às 12h)".to_owned(),
            start_date: date(2026, 3, 1),
            enroll_deadline: date(2026, 2, 22),
            match_type: MatchType::SameDayShift,
        },
    ];

    CatalogData {
        units: units.iter().map(|s| s.to_string()).collect(),
        days: days.iter().map(|s| s.to_string()).collect(),
        shifts: shifts.iter().map(|s| s.to_string()).collect(),
        slots,
        offerings,
    }
}
