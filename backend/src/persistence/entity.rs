use common::model::farm::Farm;
use common::model::farmer::Farmer;
use rusqlite::types::ToSql;
use rusqlite::Row;

/// A record that maps onto one SQLite table with an `id INTEGER PRIMARY KEY`.
///
/// Rows are always read as `id` followed by `COLUMNS` in declaration order, and
/// `values` must bind the same columns in the same order.
pub trait Entity: Sized {
    const TABLE: &'static str;
    /// Every column except `id`.
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> Option<i64>;
    fn set_id(&mut self, id: Option<i64>);
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
    fn values(&self) -> Vec<&dyn ToSql>;
}

impl Entity for Farmer {
    const TABLE: &'static str = "farmer";
    const COLUMNS: &'static [&'static str] = &["name", "location"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Farmer {
            id: row.get(0)?,
            name: row.get(1)?,
            location: row.get(2)?,
        })
    }

    fn values(&self) -> Vec<&dyn ToSql> {
        vec![&self.name as &dyn ToSql, &self.location]
    }
}

impl Entity for Farm {
    const TABLE: &'static str = "farm";
    const COLUMNS: &'static [&'static str] = &[
        "farmer_id",
        "name",
        "crop_type",
        "area",
        "latitude",
        "longitude",
        "soil_type",
        "irrigation_type",
        "last_planted",
        "expected_yield",
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Farm {
            id: row.get(0)?,
            farmer_id: row.get(1)?,
            name: row.get(2)?,
            crop_type: row.get(3)?,
            area: row.get(4)?,
            latitude: row.get(5)?,
            longitude: row.get(6)?,
            soil_type: row.get(7)?,
            irrigation_type: row.get(8)?,
            last_planted: row.get(9)?,
            expected_yield: row.get(10)?,
        })
    }

    fn values(&self) -> Vec<&dyn ToSql> {
        vec![
            &self.farmer_id as &dyn ToSql,
            &self.name,
            &self.crop_type,
            &self.area,
            &self.latitude,
            &self.longitude,
            &self.soil_type,
            &self.irrigation_type,
            &self.last_planted,
            &self.expected_yield,
        ]
    }
}
