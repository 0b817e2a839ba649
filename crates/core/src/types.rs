/// All database primary keys are SQLite INTEGER (i64) autoincrement ids.
pub type DbId = i64;
