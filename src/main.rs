use std::{fs, process::ExitCode};

use crate::{
    config::Config,
    error::{ConvertError, Result},
    timetable::Timetable,
};

mod config;
mod data;
mod error;
mod gtfs;
mod index;
mod loader;
mod schedule;
mod time;
mod timetable;

fn run(config: &Config) -> Result<()> {
    let feed = loader::load_feed(config)?;

    let timetable = Timetable::from(feed);
    let json = timetable.to_json()?;

    log::info!("Writing database to {:?}", config.output_file);
    if let Some(parent) = config.output_file.parent() {
        fs::create_dir_all(parent).map_err(|source| ConvertError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(&config.output_file, json).map_err(|source| ConvertError::Io {
        path: config.output_file.clone(),
        source,
    })?;

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(&Config::default()) {
        Ok(()) => {
            log::info!("Done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
