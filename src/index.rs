use std::collections::HashMap;

use itertools::Itertools;

use crate::gtfs;

/// Which routes serve a stop and which stops a route serves, derived from
/// the stop times joined with their trips.
#[derive(Debug, Default)]
pub struct StopRouteIndex {
    stop_to_routes: HashMap<String, Vec<String>>,
    route_to_stops: HashMap<String, Vec<String>>,
}

impl StopRouteIndex {
    /// Expects `stop_times` in (trip_id, stop_sequence) order; lists keep
    /// the order in which ids are first met.
    pub fn new(trips: &[gtfs::Trip], stop_times: &[gtfs::StopTime]) -> Self {
        let routes_by_trip = trips
            .iter()
            .map(|trip| (trip.trip_id.as_str(), trip.route_id.as_str()))
            .into_group_map();

        let joined = stop_times
            .iter()
            .flat_map(|stop_time| {
                routes_by_trip
                    .get(stop_time.trip_id.as_str())
                    .into_iter()
                    .flatten()
                    .map(move |&route_id| (stop_time.stop_id.as_str(), route_id))
            })
            .collect_vec();

        Self {
            stop_to_routes: dedup_group_map(joined.iter().map(|&(stop, route)| (stop, route))),
            route_to_stops: dedup_group_map(joined.iter().map(|&(stop, route)| (route, stop))),
        }
    }

    pub fn routes_for_stop(&self, stop_id: &str) -> &[String] {
        self.stop_to_routes
            .get(stop_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn stops_for_route(&self, route_id: &str) -> &[String] {
        self.route_to_stops
            .get(route_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

fn dedup_group_map<'a>(
    pairs: impl Iterator<Item = (&'a str, &'a str)>,
) -> HashMap<String, Vec<String>> {
    pairs
        .into_group_map()
        .into_iter()
        .map(|(key, values)| {
            (
                key.to_owned(),
                values.into_iter().unique().map(str::to_owned).collect(),
            )
        })
        .collect()
}
