use serde::Deserialize;

/// A feed file and the columns read from it.
pub trait Table {
    const FILE_NAME: &'static str;
    const COLUMNS: &'static [&'static str];
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Route {
    pub route_id: String,
    pub route_short_name: String,
    pub route_long_name: String,
    pub route_color: String,
    pub route_text_color: String,
}

impl Table for Route {
    const FILE_NAME: &'static str = "routes.txt";
    const COLUMNS: &'static [&'static str] = &[
        "route_id",
        "route_short_name",
        "route_long_name",
        "route_color",
        "route_text_color",
    ];
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Trip {
    pub route_id: String,
    pub service_id: String,
    pub trip_id: String,
    pub trip_headsign: String,
}

impl Table for Trip {
    const FILE_NAME: &'static str = "trips.txt";
    const COLUMNS: &'static [&'static str] =
        &["route_id", "service_id", "trip_id", "trip_headsign"];
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Stop {
    pub stop_id: String,
    pub stop_name: String,
    pub stop_lat: f64,
    pub stop_lon: f64,
}

impl Table for Stop {
    const FILE_NAME: &'static str = "stops.txt";
    const COLUMNS: &'static [&'static str] = &["stop_id", "stop_name", "stop_lat", "stop_lon"];
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct StopTime {
    pub trip_id: String,
    pub arrival_time: Option<String>,
    pub stop_id: String,
    pub stop_sequence: u32,
}

impl Table for StopTime {
    const FILE_NAME: &'static str = "stop_times.txt";
    // departure_time is only checked for in the header, never deserialized.
    const COLUMNS: &'static [&'static str] = &[
        "trip_id",
        "arrival_time",
        "departure_time",
        "stop_id",
        "stop_sequence",
    ];
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Calendar {
    pub service_id: String,
    pub monday: u8,
    pub tuesday: u8,
    pub wednesday: u8,
    pub thursday: u8,
    pub friday: u8,
    pub saturday: u8,
    pub sunday: u8,
    pub start_date: u32,
    pub end_date: u32,
}

impl Calendar {
    /// Operating flags, Monday first.
    pub fn days(&self) -> [u8; 7] {
        [
            self.monday,
            self.tuesday,
            self.wednesday,
            self.thursday,
            self.friday,
            self.saturday,
            self.sunday,
        ]
    }
}

impl Table for Calendar {
    const FILE_NAME: &'static str = "calendar.txt";
    const COLUMNS: &'static [&'static str] = &[
        "service_id",
        "monday",
        "tuesday",
        "wednesday",
        "thursday",
        "friday",
        "saturday",
        "sunday",
        "start_date",
        "end_date",
    ];
}

#[derive(Debug)]
pub struct Feed {
    pub routes: Vec<Route>,
    pub trips: Vec<Trip>,
    pub stops: Vec<Stop>,
    pub stop_times: Vec<StopTime>,
    pub calendar: Vec<Calendar>,
}
