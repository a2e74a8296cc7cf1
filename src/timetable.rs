use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    data::{Route, Service, Stop, Trip},
    error::Result,
    gtfs,
    index::StopRouteIndex,
    schedule,
};

/// The whole document handed to the client. Maps are keyed by id and kept
/// sorted so the same feed always gives the same bytes.
#[derive(Serialize, Debug, PartialEq)]
pub struct Timetable {
    pub routes: BTreeMap<String, Route>,
    pub stops: BTreeMap<String, Stop>,
    pub calendar: BTreeMap<String, Service>,
    pub trips: Vec<Trip>,
}

impl Timetable {
    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }
}

impl From<gtfs::Feed> for Timetable {
    fn from(feed: gtfs::Feed) -> Self {
        log::info!("Sorting stop times");
        let stop_times = schedule::sort_stop_times(feed.stop_times);

        log::info!("Computing stop <-> route relations");
        let index = StopRouteIndex::new(&feed.trips, &stop_times);

        log::info!("Structuring routes, stops and calendar");
        let routes = feed
            .routes
            .into_iter()
            .map(|route| {
                let stops = index.stops_for_route(&route.route_id).to_vec();
                (
                    route.route_id,
                    Route {
                        short_name: route.route_short_name,
                        long_name: route.route_long_name,
                        color: route.route_color,
                        text_color: route.route_text_color,
                        stops,
                    },
                )
            })
            .collect();

        let stops = feed
            .stops
            .into_iter()
            .map(|stop| {
                let routes = index.routes_for_stop(&stop.stop_id).to_vec();
                (
                    stop.stop_id,
                    Stop {
                        name: stop.stop_name,
                        lat: stop.stop_lat,
                        lon: stop.stop_lon,
                        routes,
                    },
                )
            })
            .collect();

        let calendar = feed
            .calendar
            .into_iter()
            .map(|service| {
                let days = service.days();
                (
                    service.service_id,
                    Service {
                        start: service.start_date,
                        end: service.end_date,
                        days,
                    },
                )
            })
            .collect();

        log::info!("Converting times and compressing schedules");
        let trips = schedule::build_trips(&feed.trips, &stop_times);
        log::debug!("Kept {} of {} trips", trips.len(), feed.trips.len());

        Self {
            routes,
            stops,
            calendar,
            trips,
        }
    }
}
