/// Schema and relation tests against an in-memory SQLite database
pub mod schema_tests;
