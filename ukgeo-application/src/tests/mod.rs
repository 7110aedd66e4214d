use super::*;
use std::path::Path;
use tempfile::TempDir;
use ukgeo_db_sqlite::fixtures;

fn init_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        init_logging();
        let dir = TempDir::new().unwrap();
        fixtures::create_epc_db(&dir.path().join("epc.db")).unwrap();
        fixtures::create_os_db(&dir.path().join("os.db")).unwrap();
        Self { dir }
    }

    fn epc_db(&self) -> PathBuf {
        self.dir.path().join("epc.db")
    }

    fn os_db(&self) -> PathBuf {
        self.dir.path().join("os.db")
    }

    fn geolocator(&self) -> Geolocator {
        Geolocator::open(self.epc_db(), self.os_db(), GeolocatorOptions::default()).unwrap()
    }
}

mod find_coordinates {
    use super::*;

    #[test]
    fn successful_lookup() {
        let fixture = Fixture::new();
        let geo = fixture.geolocator();
        let res = geo
            .find_coordinates("SW1A 2AA", "10 Downing Street")
            .unwrap();
        assert_eq!(100023336956, res.property_id.to_u64());
        assert_eq!(51.5034, res.latitude);
        assert_eq!(-0.1276, res.longitude);
        assert_eq!(530047.0, res.easting);
        assert_eq!(179951.0, res.northing);
        assert!(res.match_score > 0.5);
        assert!(res.matched_address.to_uppercase().contains("DOWNING"));
    }

    #[test]
    fn different_postcode() {
        let fixture = Fixture::new();
        let geo = fixture.geolocator();
        let res = geo.find_coordinates("m11ae", "50 High Street").unwrap();
        assert_eq!(300000000001, res.property_id.to_u64());
        assert_eq!(53.4808, res.latitude);
    }

    #[test]
    fn prefer_closest_neighbour() {
        let fixture = Fixture::new();
        let geo = fixture.geolocator();
        let res = geo
            .find_coordinates("SW1A 2AA", "11 Downing Street")
            .unwrap();
        assert_eq!(100023336957, res.property_id.to_u64());
        assert_eq!(1.0, res.match_score);
    }

    #[test]
    fn match_secondary_address_line() {
        let fixture = Fixture::new();
        let geo = fixture.geolocator();
        let res = geo.find_coordinates("EC1A 1BB", "Flat A").unwrap();
        assert_eq!(200000000001, res.property_id.to_u64());
        assert_eq!("FLAT A, 1 EXAMPLE ROAD, LONDON", res.matched_address);
        assert_eq!(1.0, res.match_score);
    }

    #[test]
    fn invalid_postcode() {
        let fixture = Fixture::new();
        let geo = fixture.geolocator();
        let err = geo
            .find_coordinates("INVALID", "10 Downing Street")
            .unwrap_err();
        assert_eq!(ErrorKind::InvalidPostcode, err.kind());
    }

    #[test]
    fn no_match() {
        let fixture = Fixture::new();
        let geo = fixture.geolocator();
        let err = geo
            .find_coordinates("SW1A 2AA", "ZZZZZ COMPLETELY UNRELATED XYZZY")
            .unwrap_err();
        assert_eq!(ErrorKind::NoMatchFound, err.kind());
    }

    #[test]
    fn unknown_postcode() {
        let fixture = Fixture::new();
        let geo = fixture.geolocator();
        let err = geo
            .find_coordinates("ZZ9 9ZZ", "10 Downing Street")
            .unwrap_err();
        assert_eq!(ErrorKind::NoMatchFound, err.kind());
    }

    #[test]
    fn custom_threshold() {
        let fixture = Fixture::new();
        let options = GeolocatorOptions {
            match_threshold: 1.0,
            ..Default::default()
        };
        let geo = Geolocator::open(fixture.epc_db(), fixture.os_db(), options).unwrap();
        assert_eq!(1.0, geo.match_threshold());
        assert!(geo
            .find_coordinates("SW1A 2AA", "10 Downing Street")
            .is_ok());
        let err = geo
            .find_coordinates("SW1A 2AA", "10 Downing St")
            .unwrap_err();
        assert_eq!(ErrorKind::NoMatchFound, err.kind());
    }

    #[test]
    fn database_disappeared_between_lookups() {
        let fixture = Fixture::new();
        let geo = fixture.geolocator();
        assert!(geo
            .find_coordinates("SW1A 2AA", "10 Downing Street")
            .is_ok());
        geo.close();
        std::fs::remove_file(fixture.epc_db()).unwrap();
        let err = geo
            .find_coordinates("SW1A 2AA", "10 Downing Street")
            .unwrap_err();
        assert_eq!(ErrorKind::DatabaseNotFound, err.kind());
        assert!(!geo.is_open());
    }

    #[test]
    fn plain_mapping() {
        let fixture = Fixture::new();
        let geo = fixture.geolocator();
        let res = geo
            .find_coordinates("SW1A 2AA", "10 Downing Street")
            .unwrap();
        let keys: Vec<_> = res.to_plain_mapping().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            vec![
                "uprn",
                "matched_address",
                "match_score",
                "easting",
                "northing",
                "latitude",
                "longitude"
            ],
            keys
        );
    }
}

mod health_check {
    use super::*;

    #[test]
    fn healthy() {
        let fixture = Fixture::new();
        let status = fixture.geolocator().health_check();
        assert!(status.healthy);
        assert_eq!(STATUS_OK, status.epc_status);
        assert_eq!(STATUS_OK, status.os_status);
    }

    #[test]
    fn unhealthy_after_deletion() {
        let fixture = Fixture::new();
        let geo = fixture.geolocator();
        geo.close();
        std::fs::remove_file(fixture.os_db()).unwrap();
        let status = geo.health_check();
        assert!(!status.healthy);
        assert_eq!(STATUS_OK, status.epc_status);
        assert!(status
            .os_status
            .starts_with("OS Open UPRN database not found at: "));
    }
}

mod open {
    use super::*;

    fn open_err(epc_db: &Path, os_db: &Path) -> Error {
        Geolocator::open(epc_db, os_db, GeolocatorOptions::default())
            .err()
            .unwrap()
    }

    #[test]
    fn missing_epc_db() {
        let fixture = Fixture::new();
        let err = open_err(Path::new("/nonexistent/path.db"), &fixture.os_db());
        assert_eq!(ErrorKind::DatabaseNotFound, err.kind());
        assert_eq!(
            "EPC database not found at: /nonexistent/path.db",
            err.to_string()
        );
    }

    #[test]
    fn missing_os_db() {
        let fixture = Fixture::new();
        let err = open_err(&fixture.epc_db(), Path::new("/nonexistent/path.db"));
        assert_eq!(ErrorKind::DatabaseNotFound, err.kind());
        assert_eq!(
            "OS Open UPRN database not found at: /nonexistent/path.db",
            err.to_string()
        );
    }

    #[test]
    fn swapped_databases() {
        let fixture = Fixture::new();
        let err = open_err(&fixture.os_db(), &fixture.epc_db());
        assert_eq!(ErrorKind::DatabaseInvalid, err.kind());
    }

    #[test]
    fn close_and_reopen() {
        let fixture = Fixture::new();
        let geo = fixture.geolocator();
        assert!(geo.is_open());
        geo.close();
        assert!(!geo.is_open());
        let res = geo
            .find_coordinates("SW1A 2AA", "10 Downing Street")
            .unwrap();
        assert_eq!(100023336956, res.property_id.to_u64());
        assert!(geo.is_open());
    }
}
