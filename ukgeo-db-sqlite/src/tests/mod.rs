use super::*;
use std::{
    fs,
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc, Arc,
    },
    thread,
};
use tempfile::TempDir;
use ukgeo_core::{
    entities::*,
    repositories::{AddressRepo, CoordinateRepo},
};

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fixtures::create_epc_db(&dir.path().join("epc.db")).unwrap();
        fixtures::create_os_db(&dir.path().join("os.db")).unwrap();
        fixtures::create_unrelated_db(&dir.path().join("other.db")).unwrap();
        Self { dir }
    }

    fn path(&self, file_name: &str) -> PathBuf {
        self.dir.path().join(file_name)
    }

    fn address_db(&self) -> AddressDb {
        AddressDb::open(self.path("epc.db"), PoolOptions::default()).unwrap()
    }

    fn coordinate_db(&self) -> CoordinateDb {
        CoordinateDb::open(self.path("os.db"), PoolOptions::default()).unwrap()
    }
}

fn postcode(raw: &str) -> Postcode {
    raw.parse().unwrap()
}

#[test]
fn open_missing_file() {
    let fixture = Fixture::new();
    let path = fixture.path("missing.db");
    let err = AddressDb::open(&path, PoolOptions::default()).err().unwrap();
    assert!(matches!(
        err,
        repo::Error::DatabaseNotFound {
            dataset: Dataset::EpcAddresses,
            ..
        }
    ));
    assert!(err.to_string().starts_with("EPC database not found at: "));
    assert!(!path.exists());
}

#[test]
fn open_database_without_expected_tables() {
    let fixture = Fixture::new();
    let err = CoordinateDb::open(fixture.path("other.db"), PoolOptions::default())
        .err()
        .unwrap();
    match err {
        repo::Error::DatabaseInvalid { detail, .. } => {
            assert_eq!("missing tables: uprns", detail);
        }
        _ => panic!("unexpected error: {err}"),
    }
    // Wrong dataset
    let err = AddressDb::open(fixture.path("os.db"), PoolOptions::default())
        .err()
        .unwrap();
    assert!(err.to_string().ends_with("missing tables: epc_addresses"));
}

#[test]
fn open_non_sqlite_file() {
    let fixture = Fixture::new();
    let path = fixture.path("garbage.db");
    fs::write(&path, "This is not a database, just some text").unwrap();
    let err = AddressDb::open(&path, PoolOptions::default()).err().unwrap();
    assert!(matches!(err, repo::Error::Other(_)));
}

#[test]
fn fetch_candidates_in_insertion_order() {
    let fixture = Fixture::new();
    let db = fixture.address_db();
    let candidates = db
        .fetch_candidates_by_postcode(&postcode("SW1A 2AA"))
        .unwrap();
    let ids: Vec<_> = candidates.iter().map(|c| c.property_id.to_u64()).collect();
    assert_eq!(vec![100023336956, 100023336957], ids);
    assert_eq!("10, DOWNING STREET, LONDON", candidates[0].address_text);
    assert_eq!(vec!["10 DOWNING STREET"], candidates[0].address_lines);
    assert_eq!(postcode("SW1A 2AA"), candidates[0].postcode);
}

#[test]
fn fetch_candidates_with_multiple_address_lines() {
    let fixture = Fixture::new();
    let db = fixture.address_db();
    let candidates = db
        .fetch_candidates_by_postcode(&postcode("EC1A 1BB"))
        .unwrap();
    assert_eq!(1, candidates.len());
    assert_eq!(
        vec!["1 EXAMPLE ROAD", "FLAT A"],
        candidates[0].address_lines
    );
}

#[test]
fn skip_candidates_with_invalid_uprn() {
    let fixture = Fixture::new();
    let db = fixture.address_db();
    // 3 rows, one of them with a non-numeric UPRN
    let candidates = db
        .fetch_candidates_by_postcode(&postcode("SW1A 2AA"))
        .unwrap();
    assert_eq!(2, candidates.len());
    assert!(candidates
        .iter()
        .all(|c| c.property_id != PropertyId::new(0)));
}

#[test]
fn no_candidates_for_unknown_postcode() {
    let fixture = Fixture::new();
    let db = fixture.address_db();
    assert!(db
        .fetch_candidates_by_postcode(&postcode("ZZ9 9ZZ"))
        .unwrap()
        .is_empty());
}

#[test]
fn fetch_coordinates() {
    let fixture = Fixture::new();
    let db = fixture.coordinate_db();
    let coord = db
        .fetch_coordinate_by_property_id(PropertyId::new(100023336956))
        .unwrap()
        .unwrap();
    assert_eq!(530047.0, coord.easting);
    assert_eq!(179951.0, coord.northing);
    assert_eq!(51.5034, coord.latitude);
    assert_eq!(-0.1276, coord.longitude);
    assert!(db
        .fetch_coordinate_by_property_id(PropertyId::new(999))
        .unwrap()
        .is_none());
    assert!(db
        .fetch_coordinate_by_property_id(PropertyId::new(u64::MAX))
        .unwrap()
        .is_none());
}

#[test]
fn connections_are_read_only() {
    let fixture = Fixture::new();
    let db = fixture.address_db();
    let res = db
        .database()
        .with_connection(|conn| {
            use diesel::RunQueryDsl as _;
            diesel::sql_query("DELETE FROM epc_addresses").execute(conn)
        });
    assert!(res.is_err());
    assert_eq!(
        2,
        db.fetch_candidates_by_postcode(&postcode("SW1A 2AA"))
            .unwrap()
            .len()
    );
}

#[test]
fn close_and_reopen_on_demand() {
    let fixture = Fixture::new();
    let db = fixture.coordinate_db();
    assert!(db.database().is_open());
    db.close();
    assert!(!db.database().is_open());
    // Closing twice is harmless
    db.close();
    assert!(db.check_coordinate_dataset().is_ok());
    assert!(db.database().is_open());
}

#[test]
fn report_deleted_database_file() {
    let fixture = Fixture::new();
    let db = fixture.address_db();
    assert!(db.check_address_dataset().is_ok());
    db.close();
    fs::remove_file(fixture.path("epc.db")).unwrap();
    let err = db.check_address_dataset().unwrap_err();
    assert!(matches!(err, repo::Error::DatabaseNotFound { .. }));
    let err = db
        .fetch_candidates_by_postcode(&postcode("SW1A 2AA"))
        .unwrap_err();
    assert!(matches!(err, repo::Error::DatabaseNotFound { .. }));
    assert!(!db.database().is_open());
}

#[test]
fn classify_failures_while_pool_is_locked() {
    let fixture = Fixture::new();
    let db = fixture.address_db();
    fs::remove_file(fixture.path("epc.db")).unwrap();
    let locked_pool = db.database().pool.write();
    let err = db
        .database()
        .classify(anyhow::anyhow!("unable to open database file"));
    assert!(matches!(err, repo::Error::DatabaseNotFound { .. }));
    drop(locked_pool);
    assert!(db.database().is_open());
}

#[test]
fn open_while_database_file_is_moved_back_and_forth() {
    const ITERATIONS: usize = 2_000;

    let fixture = Fixture::new();
    let path = fixture.path("epc.db");
    let moved = fixture.path("epc.db.moved");
    let options = PoolOptions {
        max_size: 1,
        connection_timeout: Duration::from_millis(100),
    };

    let stop = Arc::new(AtomicBool::new(false));
    let mover = {
        let stop = Arc::clone(&stop);
        let (path, moved) = (path.clone(), moved.clone());
        thread::spawn(move || {
            while !stop.load(Ordering::Relaxed) {
                fs::rename(&path, &moved).unwrap();
                fs::rename(&moved, &path).unwrap();
            }
        })
    };

    let (done_tx, done_rx) = mpsc::channel();
    {
        let path = path.clone();
        thread::spawn(move || {
            let mut not_found = 0;
            for _ in 0..ITERATIONS {
                match Database::open(Dataset::EpcAddresses, &path, options.clone()) {
                    Ok(db) => db.close(),
                    Err(repo::Error::DatabaseNotFound { .. }) => not_found += 1,
                    Err(_) => {}
                }
            }
            let _ = done_tx.send(not_found);
        });
    }

    let finished = done_rx.recv_timeout(Duration::from_secs(30));
    stop.store(true, Ordering::Relaxed);
    mover.join().unwrap();
    assert!(finished.is_ok(), "opening the database got stuck");

    // The file is back in place and can be opened again
    let db = Database::open(Dataset::EpcAddresses, &path, PoolOptions::default()).unwrap();
    assert!(db.is_open());
    db.close();
    assert!(!db.is_open());
}

#[test]
fn escape_uri_special_chars() {
    assert_eq!(
        "file:/tmp/a%3fb%23c%25d.db?mode=ro",
        read_only_uri(Path::new("/tmp/a?b#c%d.db"))
    );
}
