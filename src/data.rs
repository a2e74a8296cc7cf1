use serde::Serialize;

use crate::time::Time;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Route {
    #[serde(rename = "n")]
    pub short_name: String,
    #[serde(rename = "l")]
    pub long_name: String,
    #[serde(rename = "c")]
    pub color: String,
    #[serde(rename = "tc")]
    pub text_color: String,
    pub stops: Vec<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Stop {
    #[serde(rename = "n")]
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "r")]
    pub routes: Vec<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub start: u32,
    pub end: u32,
    pub days: [u8; 7],
}

/// One stop of a trip, serialized as `[stop_id, arrival]`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry(pub String, pub Time);

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    pub id: String,
    #[serde(rename = "rid")]
    pub route_id: String,
    #[serde(rename = "sid")]
    pub service_id: String,
    #[serde(rename = "head")]
    pub headsign: String,
    #[serde(rename = "sch")]
    pub schedule: Vec<ScheduleEntry>,
}
