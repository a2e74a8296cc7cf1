use std::{fs::File, io, path::Path};

use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    error::{ConvertError, Result},
    gtfs::{self, Table},
};

/// Reads every row of one feed file, after checking that the header has
/// all the columns the row type needs.
pub fn deserialize_into<T: Table + DeserializeOwned>(data_dir: &Path) -> Result<Vec<T>> {
    let path = data_dir.join(T::FILE_NAME);
    let file = File::open(&path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ConvertError::MissingFile { path: path.clone() },
        _ => ConvertError::Io {
            path: path.clone(),
            source,
        },
    })?;
    let csv_error = |source| ConvertError::Csv {
        file: T::FILE_NAME.to_owned(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let headers = reader.headers().map_err(csv_error)?;
    if let Some(&column) = T::COLUMNS
        .iter()
        .find(|&&column| !headers.iter().any(|header| header == column))
    {
        return Err(ConvertError::MissingColumn {
            file: T::FILE_NAME.to_owned(),
            column,
        });
    }

    reader
        .deserialize()
        .map(|parse_result| parse_result.map_err(csv_error))
        .collect()
}

pub fn load_feed(config: &Config) -> Result<gtfs::Feed> {
    let data_dir = config.data_dir.as_path();

    log::info!("Reading routes from {:?}", data_dir);
    let routes = deserialize_into::<gtfs::Route>(data_dir)?;

    log::info!("Reading trips");
    let trips = deserialize_into::<gtfs::Trip>(data_dir)?;

    log::info!("Reading stops");
    let stops = deserialize_into::<gtfs::Stop>(data_dir)?;

    log::info!("Reading stop_times");
    let stop_times = deserialize_into::<gtfs::StopTime>(data_dir)?;

    log::info!("Reading calendar");
    let calendar = deserialize_into::<gtfs::Calendar>(data_dir)?;

    log::debug!(
        "Loaded {} routes, {} trips, {} stops, {} stop_times, {} services",
        routes.len(),
        trips.len(),
        stops.len(),
        stop_times.len(),
        calendar.len()
    );

    Ok(gtfs::Feed {
        routes,
        trips,
        stops,
        stop_times,
        calendar,
    })
}
