//! End-to-end NetCDF tests: create a file, load a gridded variable, compute
//! its diurnal cycle, and write the result back out.

use chrono::{TimeZone, Utc};
use ndarray::{Array1, Array2, Array3};
use netcdf::{create, open};
use ru_di_cy::prelude::*;
use tempfile::tempdir;

/// Write a small NetCDF file: tas(time, lon) with 4 six-hourly samples
/// starting 2020-01-01T00:00Z and longitudes [0, 180].
fn create_test_file(path: &std::path::Path) {
    let mut file = create(path).expect("Failed to create NetCDF file");

    file.add_dimension("time", 4)
        .expect("Failed to add dimension time");
    file.add_dimension("lon", 2)
        .expect("Failed to add dimension lon");

    let mut time_var = file
        .add_variable::<f64>("time", &["time"])
        .expect("Failed to add time variable");
    time_var
        .put_attribute("units", "hours since 2020-01-01 00:00:00")
        .expect("Failed to add units attribute");
    let time_values = Array1::from_vec(vec![0.0, 6.0, 12.0, 18.0]);
    time_var
        .put(time_values.view(), ..)
        .expect("Failed to write time values");

    let mut lon_var = file
        .add_variable::<f64>("lon", &["lon"])
        .expect("Failed to add lon variable");
    let lon_values = Array1::from_vec(vec![0.0, 180.0]);
    lon_var
        .put(lon_values.view(), ..)
        .expect("Failed to write lon values");

    let mut tas_var = file
        .add_variable::<f64>("tas", &["time", "lon"])
        .expect("Failed to add tas variable");
    // Value at (t, l) = 10 t + l
    let tas_values = Array2::from_shape_fn((4, 2), |(t, l)| (10 * t + l) as f64);
    tas_var
        .put(tas_values.view(), ..)
        .expect("Failed to write tas values");
}

#[test]
fn test_read_decode_aggregate_write_roundtrip() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let input_path = temp_dir.path().join("test_data.nc");
    let output_path = temp_dir.path().join("diurnal.nc");

    create_test_file(&input_path);

    // Load and decode
    let file = open(&input_path).expect("Failed to open NetCDF file");
    let variable = read_gridded_variable(&file, "tas").expect("Failed to read variable");

    assert_eq!(variable.dims, vec!["time".to_string(), "lon".to_string()]);
    assert_eq!(variable.shape(), &[4, 2]);
    assert_eq!(variable.lon, vec![0.0, 180.0]);
    assert_eq!(
        variable.time[0],
        Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
    );
    assert_eq!(
        variable.time[3],
        Utc.with_ymd_and_hms(2020, 1, 1, 18, 0, 0).unwrap()
    );

    // Aggregate: resolution 6 h is inferred, the antimeridian column lands
    // exactly 12 h ahead, and each bucket pools one sample per longitude
    let cycle = avg_diurnal_cycle(&variable, LocalTimeOptions::default())
        .expect("Failed to compute diurnal cycle");

    assert_eq!(cycle.resolution_seconds, 21600);
    assert_eq!(cycle.seconds_of_day(), vec![0, 21600, 43200, 64800]);
    assert_eq!(cycle.data.shape(), &[4]);
    assert_eq!(cycle.data[[0]], (0.0 + 21.0) / 2.0);
    assert_eq!(cycle.data[[1]], (10.0 + 31.0) / 2.0);
    assert_eq!(cycle.data[[2]], (20.0 + 1.0) / 2.0);
    assert_eq!(cycle.data[[3]], (30.0 + 11.0) / 2.0);

    // Write the result and read it back
    write_diurnal_cycle(&cycle, &output_path).expect("Failed to write diurnal cycle");

    let result_file = open(&output_path).expect("Failed to open result file");
    let tod_var = result_file
        .variable("time_of_day")
        .expect("time_of_day variable missing");
    let tod_values = tod_var
        .get_values::<f64, _>(..)
        .expect("Failed to read time_of_day");
    assert_eq!(tod_values, vec![0.0, 21600.0, 43200.0, 64800.0]);

    let result_var = result_file
        .variable("tas_diurnal_cycle")
        .expect("result variable missing");
    let result_dims: Vec<String> = result_var
        .dimensions()
        .iter()
        .map(|d| d.name().to_string())
        .collect();
    assert_eq!(result_dims, vec!["time_of_day".to_string()]);

    let result_values = result_var
        .get_values::<f64, _>(..)
        .expect("Failed to read result values");
    assert_eq!(result_values, vec![10.5, 20.5, 10.5, 20.5]);
}

#[test]
fn test_prelude_glob_alongside_std_result() {
    // The prelude glob brings in the crate's one-parameter `Result` alias;
    // callers mixing it with boxed-error signatures must still be able to
    // name std's two-parameter form fully qualified
    fn run(path: &std::path::Path) -> std::result::Result<(), Box<dyn std::error::Error>> {
        create_test_file(path);
        let file = open(path)?;
        let variable = read_gridded_variable(&file, "tas")?;
        let cycle = avg_diurnal_cycle(&variable, LocalTimeOptions::default())?;
        assert_eq!(cycle.num_buckets(), 4);
        Ok(())
    }

    fn crate_result(value: f64) -> Result<f64> {
        Ok(value)
    }

    let temp_dir = tempdir().expect("Failed to create temp dir");
    run(&temp_dir.path().join("test_data.nc")).expect("boxed-error helper failed");
    assert_eq!(crate_result(1.0).unwrap(), 1.0);
}

#[test]
fn test_read_missing_variable() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let input_path = temp_dir.path().join("test_data.nc");
    create_test_file(&input_path);

    let file = open(&input_path).expect("Failed to open NetCDF file");
    let result = read_gridded_variable(&file, "does_not_exist");
    assert!(matches!(
        result,
        Err(RuDiCyError::VariableNotFound { .. })
    ));
}

#[test]
fn test_decode_cf_times_units() {
    use ru_di_cy::netcdf_io::decode_cf_times;

    let base = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();

    let days = decode_cf_times(&[0.0, 1.5], "days since 2020-01-01").unwrap();
    assert_eq!(days[0], base);
    assert_eq!(days[1], base + chrono::Duration::hours(36));

    let seconds = decode_cf_times(&[30.0], "seconds since 2020-01-01 00:00:00").unwrap();
    assert_eq!(seconds[0], base + chrono::Duration::seconds(30));

    let minutes = decode_cf_times(&[2.0], "minutes since 2020-01-01T00:00:00Z").unwrap();
    assert_eq!(minutes[0], base + chrono::Duration::seconds(120));

    assert!(decode_cf_times(&[0.0], "fortnights since 2020-01-01").is_err());
    assert!(decode_cf_times(&[0.0], "no base here").is_err());
}

#[test]
fn test_diurnal_cycle_with_latitude_from_netcdf() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let input_path = temp_dir.path().join("test_data_3d.nc");

    {
        let mut file = create(&input_path).expect("Failed to create NetCDF file");
        file.add_dimension("time", 4).expect("add time");
        file.add_dimension("lat", 3).expect("add lat");
        file.add_dimension("lon", 2).expect("add lon");

        let mut time_var = file
            .add_variable::<f64>("time", &["time"])
            .expect("add time var");
        time_var
            .put_attribute("units", "seconds since 2020-01-01 00:00:00")
            .expect("units");
        let time_values = Array1::from_vec(vec![0.0, 21600.0, 43200.0, 64800.0]);
        time_var.put(time_values.view(), ..).expect("time values");

        let mut lon_var = file
            .add_variable::<f64>("lon", &["lon"])
            .expect("add lon var");
        let lon_values = Array1::from_vec(vec![0.0, 180.0]);
        lon_var.put(lon_values.view(), ..).expect("lon values");

        let mut tas_var = file
            .add_variable::<f64>("tas", &["time", "lat", "lon"])
            .expect("add tas var");
        let tas_values =
            Array3::from_shape_fn((4, 3, 2), |(t, lat, l)| (10 * t + l + 100 * lat) as f64);
        tas_var.put(tas_values.view(), ..).expect("tas values");
    }

    let file = open(&input_path).expect("Failed to open NetCDF file");
    let variable = read_gridded_variable(&file, "tas").expect("Failed to read variable");
    let cycle = avg_diurnal_cycle(&variable, LocalTimeOptions::default())
        .expect("Failed to compute diurnal cycle");

    // "lat" passes through; "time" and "lon" collapse into time_of_day
    assert_eq!(
        cycle.dims,
        vec![TIME_OF_DAY_DIM.to_string(), "lat".to_string()]
    );
    assert_eq!(cycle.data.shape(), &[4, 3]);
    assert_eq!(cycle.data[[0, 0]], 10.5);
    assert_eq!(cycle.data[[0, 2]], 210.5);
    assert_eq!(cycle.data[[3, 1]], 120.5);
}
