//! Shared fixtures for integration tests.
//!
//! Builds a miniature South-Pacific-plus-Iceland dataset on disk: five
//! countries, seven landing points and five cable connections. Landings 1
//! (Valparaiso) and 4 (Sydney) each host two cables; Iceland's arctic cable
//! is isolated from everything else.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use fathom::app::App;

/// Write the dataset CSVs plus a `fathom.yaml` pointing at them.
///
/// Returns the temp directory (keep it alive) and the config path.
pub fn write_pacific_workspace() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("temp dir");

    let countries = dir.path().join("countries.csv");
    fs::write(
        &countries,
        "country_name,capital_name,latitude,longitude,code,continent,population,internet_users\n\
         Chile,Santiago,-33.45,-70.66,CL,South America,18000000,15000000\n\
         Peru,Lima,-12.05,-77.05,PE,South America,31000000,17000000\n\
         Fiji,Suva,-18.14,178.44,FJ,Oceania,900000,450000\n\
         Australia,Canberra,-35.28,149.13,AU,Oceania,25000000,22000000\n\
         Iceland,Reykjavik,64.15,-21.94,IS,Europe,372000,370000\n",
    )
    .expect("countries.csv");

    let landings = dir.path().join("landing_points.csv");
    fs::write(
        &landings,
        "landing_id,id,location,latitude,longitude\n\
         1,10,\"Valparaiso, Chile\",-33.02,-71.64\n\
         2,20,\"Lima, Peru\",-12.05,-77.05\n\
         3,30,\"Suva, Fiji\",-18.14,178.44\n\
         4,40,\"Sydney, Australia\",-33.86,151.20\n\
         5,50,\"Perth, Australia\",-31.95,115.86\n\
         6,60,\"Reykjavik, Iceland\",64.15,-21.94\n\
         7,70,\"Akureyri, Iceland\",65.68,-18.09\n",
    )
    .expect("landing_points.csv");

    let connections = dir.path().join("connections.csv");
    fs::write(
        &connections,
        "origin,destination,cable_id\n\
         1,2,pan-am\n\
         1,3,south-cross\n\
         3,4,south-cross\n\
         4,5,aus-loop\n\
         6,7,arctic\n",
    )
    .expect("connections.csv");

    let config_path = dir.path().join("fathom.yaml");
    fs::write(
        &config_path,
        format!(
            "dataset:\n  countries: {}\n  landing-points: {}\n  connections: {}\nengine:\n  backend: probing\n  initial-capacity: 2\n  max-results: 10\n",
            countries.display(),
            landings.display(),
            connections.display()
        ),
    )
    .expect("fathom.yaml");

    (dir, config_path)
}

/// Load an [`App`] from the pacific workspace.
pub fn load_pacific_app() -> (TempDir, App) {
    let (dir, config_path) = write_pacific_workspace();
    let app = App::load(Some(&config_path), None).expect("network should build");
    (dir, app)
}
