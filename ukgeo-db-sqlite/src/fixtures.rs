//! Small on-disk sample datasets.

use anyhow::Context as _;
use diesel::{connection::SimpleConnection as _, Connection as _};
use std::path::Path;

use super::Connection;

const EPC_ADDRESSES: &str = r#"
CREATE TABLE epc_addresses (
    lmk_key TEXT PRIMARY KEY,
    postcode TEXT,
    address1 TEXT,
    address2 TEXT,
    address3 TEXT,
    address TEXT,
    uprn TEXT
);
CREATE INDEX idx_epc_postcode ON epc_addresses (postcode);
INSERT INTO epc_addresses VALUES
    ('lmk001', 'SW1A 2AA', '10 DOWNING STREET', '', '', '10, DOWNING STREET, LONDON', '100023336956'),
    ('lmk002', 'SW1A 2AA', '11 DOWNING STREET', '', '', '11, DOWNING STREET, LONDON', '100023336957'),
    ('lmk003', 'EC1A 1BB', '1 EXAMPLE ROAD', 'FLAT A', '', 'FLAT A, 1 EXAMPLE ROAD, LONDON', '200000000001'),
    ('lmk004', 'M1 1AE', '50 HIGH STREET', '', '', '50, HIGH STREET, MANCHESTER', '300000000001'),
    ('lmk005', 'SW1A 2AA', '12 DOWNING STREET', '', '', '12, DOWNING STREET, LONDON', 'not_a_number');
"#;

const OS_OPEN_UPRN: &str = r#"
CREATE TABLE uprns (
    UPRN INTEGER PRIMARY KEY,
    X_COORDINATE REAL,
    Y_COORDINATE REAL,
    LATITUDE REAL,
    LONGITUDE REAL
);
INSERT INTO uprns VALUES
    (100023336956, 530047.0, 179951.0, 51.5034, -0.1276),
    (100023336957, 530048.0, 179952.0, 51.5035, -0.1275),
    (200000000001, 532000.0, 181000.0, 51.52, -0.1),
    (300000000001, 383800.0, 398000.0, 53.4808, -2.2426);
"#;

const UNRELATED_TABLE: &str = "CREATE TABLE other_table (id INTEGER PRIMARY KEY);";

fn create(path: &Path, sql: &str) -> anyhow::Result<()> {
    let url = path
        .to_str()
        .with_context(|| format!("Non UTF-8 path: {}", path.display()))?;
    let mut conn = Connection::establish(url)?;
    conn.batch_execute(sql)?;
    Ok(())
}

/// EPC addresses in SW1A 2AA, EC1A 1BB and M1 1AE.
pub fn create_epc_db(path: &Path) -> anyhow::Result<()> {
    create(path, EPC_ADDRESSES)
}

/// Coordinates for all valid UPRNs of [`create_epc_db`].
pub fn create_os_db(path: &Path) -> anyhow::Result<()> {
    create(path, OS_OPEN_UPRN)
}

/// A valid SQLite file without any of the expected tables.
pub fn create_unrelated_db(path: &Path) -> anyhow::Result<()> {
    create(path, UNRELATED_TABLE)
}
