//! Optional SQLite-backed interest store.
//!
//! The session keeps interests in memory; this collaborator offers the same
//! append/read contract with a backing file for callers that want interests
//! to survive the process.

use crate::interest::types::CourseInterest;
use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, Result};
use std::sync::Mutex;
use uuid::Uuid;

const SCHEMA_SQL: &str = include_str!("../../sql/init_interests.sql");

pub struct InterestDbManager {
    db: Mutex<Connection>,
}

impl InterestDbManager {
    /// Opens (or creates) the store at `db_path` and initializes the schema.
    /// `":memory:"` gives a transient store.
    pub fn new(db_path: &str) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self {
            db: Mutex::new(conn),
        })
    }

    /// Appends one interest. Interests are immutable, so re-appending the
    /// same id is rejected by the primary key.
    pub fn append(&self, interest: &CourseInterest) -> Result<()> {
        let db = self.db.lock().unwrap();

        let units_json = serde_json::to_string(&interest.selected_units)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
        let days_json = serde_json::to_string(&interest.selected_days)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
        let shifts_json = serde_json::to_string(&interest.selected_shifts)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        db.execute(
            "INSERT INTO interests (
                id, course_name, selected_units, selected_days, selected_shifts, registered_at
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            (
                interest.id.to_string(),
                &interest.course_name,
                units_json,
                days_json,
                shifts_json,
                interest.registered_at,
            ),
        )?;

        Ok(())
    }

    /// Reads back all stored interests, oldest first.
    pub fn load_all(&self) -> Result<Vec<CourseInterest>> {
        let db = self.db.lock().unwrap();
        let mut stmt = db.prepare(
            "SELECT id, course_name, selected_units, selected_days, selected_shifts, registered_at
             FROM interests
             ORDER BY registered_at, id",
        )?;

        let interests = stmt.query_map([], |row| {
            let id: String = row.get(0)?;
            let id = Uuid::parse_str(&id)
                .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))?;

            let selected_units = decode_list(row.get::<_, String>(2)?, 2)?;
            let selected_days = decode_list(row.get::<_, String>(3)?, 3)?;
            let selected_shifts = decode_list(row.get::<_, String>(4)?, 4)?;
            let registered_at: DateTime<Utc> = row.get(5)?;

            Ok(CourseInterest {
                id,
                course_name: row.get(1)?,
                selected_units,
                selected_days,
                selected_shifts,
                registered_at,
            })
        })?;

        interests.collect()
    }

    /// Number of stored interests.
    pub fn count(&self) -> Result<i64> {
        let db = self.db.lock().unwrap();
        db.query_row("SELECT COUNT(*) FROM interests", [], |row| row.get(0))
    }
}

fn decode_list(json: String, column: usize) -> Result<Vec<String>> {
    serde_json::from_str(&json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_interest() -> CourseInterest {
        CourseInterest {
            id: Uuid::new_v4(),
            course_name: "Assistente de Design de Embalagens".to_owned(),
            selected_units: vec!["Unidade A - Centro".to_owned(), "Unidade B - Zona Sul".to_owned()],
            selected_days: vec!["Segunda-feira".to_owned()],
            selected_shifts: vec!["Noite (18h às 22h)".to_owned()],
            registered_at: Utc.with_ymd_and_hms(2026, 1, 10, 14, 30, 0).unwrap(),
        }
    }

    #[test]
    fn append_and_load_round_trip() {
        let store = InterestDbManager::new(":memory:").unwrap();
        let interest = sample_interest();

        store.append(&interest).unwrap();
        assert_eq!(store.count().unwrap(), 1);

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, interest.id);
        assert_eq!(loaded[0].selected_units, interest.selected_units);
        assert_eq!(loaded[0].selected_days, interest.selected_days);
        assert_eq!(loaded[0].selected_shifts, interest.selected_shifts);
        assert_eq!(loaded[0].registered_at, interest.registered_at);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let store = InterestDbManager::new(":memory:").unwrap();
        let interest = sample_interest();

        store.append(&interest).unwrap();
        assert!(store.append(&interest).is_err());
        assert_eq!(store.count().unwrap(), 1);
    }
}
