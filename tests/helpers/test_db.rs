use chrono::{DateTime, Utc};
use fasttrack::database::Database;
use fasttrack::models::{Holiday, HolidayDto, HolidayStatus};
use uuid::Uuid;

pub const TEST_EMPLOYEE: &str = "klm012345";
pub const OTHER_EMPLOYEE: &str = "klm678901";

pub async fn setup_test_db() -> Database {
    // Install drivers for AnyPool (required for tests)
    sqlx::any::install_default_drivers();

    // Use file-based SQLite for tests (unique UUID per test for parallel execution)
    let temp_file = format!("test_{}.db", Uuid::new_v4());
    let db_url = format!("sqlite://{}?mode=rwc", temp_file);

    let db = Database::connect(&db_url)
        .await
        .expect("Failed to connect to test database");

    setup_schema(&db).await;
    seed_test_data(&db).await;

    db
}

async fn setup_schema(db: &Database) {
    let pool = db.pool();

    sqlx::query(
        "CREATE TABLE employees (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create employees table");

    sqlx::query(
        "CREATE TABLE holidays (
            id TEXT PRIMARY KEY,
            label TEXT NOT NULL,
            employee_id TEXT NOT NULL REFERENCES employees(id),
            start_of_holiday TEXT NOT NULL,
            end_of_holiday TEXT NOT NULL,
            status TEXT NOT NULL CHECK(status IN ('DRAFT', 'REQUESTED', 'SCHEDULED', 'ARCHIVED'))
        )",
    )
    .execute(pool)
    .await
    .expect("Failed to create holidays table");

    sqlx::query("CREATE INDEX idx_holidays_employee ON holidays(employee_id)")
        .execute(pool)
        .await
        .ok();
}

async fn seed_test_data(db: &Database) {
    let pool = db.pool();

    for (id, name) in [
        (TEST_EMPLOYEE, "Test Crew Member"),
        (OTHER_EMPLOYEE, "Other Crew Member"),
    ] {
        sqlx::query("INSERT INTO employees (id, name) VALUES (?, ?)")
            .bind(id)
            .bind(name)
            .execute(pool)
            .await
            .expect("Failed to seed test employee");
    }
}

pub async fn teardown_test_db(db: Database) {
    // Close the connection
    drop(db);
    // Note: Test database files will be cleaned up manually or by .gitignore
}

/// Build a wire DTO for a new booking
pub fn holiday_dto(employee_id: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> HolidayDto {
    HolidayDto {
        holiday_id: None,
        holiday_label: Some("Summer Vacation".to_string()),
        employee_id: Some(employee_id.to_string()),
        start_of_holiday: Some(start.to_rfc3339()),
        end_of_holiday: Some(end.to_rfc3339()),
        status: Some("DRAFT".to_string()),
    }
}

/// Insert a holiday directly through the store, bypassing the rules
pub async fn insert_test_holiday(
    db: &Database,
    employee_id: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Holiday {
    let holiday = Holiday::new(
        "Existing Booking".to_string(),
        employee_id.to_string(),
        start,
        end,
        HolidayStatus::Scheduled,
    );

    db.create_holiday(&holiday)
        .await
        .expect("Failed to insert test holiday");

    holiday
}
