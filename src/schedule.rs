use itertools::Itertools;

use crate::{
    data::{ScheduleEntry, Trip},
    gtfs,
    time::parse_time,
};

/// Orders stop times by trip, then by stop sequence. Rows sharing both keep
/// their file order.
pub fn sort_stop_times(stop_times: Vec<gtfs::StopTime>) -> Vec<gtfs::StopTime> {
    stop_times
        .into_iter()
        .sorted_by(|a, b| {
            a.trip_id
                .cmp(&b.trip_id)
                .then(a.stop_sequence.cmp(&b.stop_sequence))
        })
        .collect()
}

/// Builds one trip per row of `trips`, in the same order, with its stops as
/// `[stop_id, arrival]` pairs. Trips without any stop time are left out.
///
/// `stop_times` must already be sorted with [`sort_stop_times`].
pub fn build_trips(trips: &[gtfs::Trip], stop_times: &[gtfs::StopTime]) -> Vec<Trip> {
    let stop_times_by_trip = stop_times
        .iter()
        .into_group_map_by(|stop_time| stop_time.trip_id.as_str());

    trips
        .iter()
        .filter_map(|trip| {
            let rows = stop_times_by_trip.get(trip.trip_id.as_str())?;
            Some(Trip {
                id: trip.trip_id.clone(),
                route_id: trip.route_id.clone(),
                service_id: trip.service_id.clone(),
                headsign: trip.trip_headsign.clone(),
                schedule: rows
                    .iter()
                    .map(|stop_time| {
                        ScheduleEntry(
                            stop_time.stop_id.clone(),
                            parse_time(stop_time.arrival_time.as_deref()),
                        )
                    })
                    .collect(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn trip(trip_id: &str, route_id: &str, headsign: &str) -> gtfs::Trip {
        gtfs::Trip {
            route_id: route_id.to_owned(),
            service_id: "S1".to_owned(),
            trip_id: trip_id.to_owned(),
            trip_headsign: headsign.to_owned(),
        }
    }

    fn stop_time(
        trip_id: &str,
        stop_id: &str,
        arrival: &str,
        stop_sequence: u32,
    ) -> gtfs::StopTime {
        gtfs::StopTime {
            trip_id: trip_id.to_owned(),
            arrival_time: Some(arrival.to_owned()),
            stop_id: stop_id.to_owned(),
            stop_sequence,
        }
    }

    fn entry(stop_id: &str, arrival: u32) -> ScheduleEntry {
        ScheduleEntry(stop_id.to_owned(), arrival)
    }

    #[test]
    fn sorts_by_trip_then_numeric_sequence() {
        let sorted = sort_stop_times(vec![
            stop_time("T2", "X", "09:00:00", 1),
            stop_time("T1", "C", "08:30:00", 10),
            stop_time("T1", "A", "08:00:00", 1),
            stop_time("T1", "B", "08:15:00", 2),
        ]);

        let order = sorted
            .iter()
            .map(|st| (st.trip_id.as_str(), st.stop_id.as_str()))
            .collect_vec();
        assert_eq!(vec![("T1", "A"), ("T1", "B"), ("T1", "C"), ("T2", "X")], order);
    }

    #[test]
    fn schedule_follows_stop_sequence() {
        let trips = vec![trip("T1", "R1", "Downtown")];
        let stop_times = sort_stop_times(vec![
            stop_time("T1", "B", "08:15:30", 2),
            stop_time("T1", "A", "08:00:00", 1),
        ]);

        let built = build_trips(&trips, &stop_times);

        assert_eq!(
            vec![Trip {
                id: "T1".to_owned(),
                route_id: "R1".to_owned(),
                service_id: "S1".to_owned(),
                headsign: "Downtown".to_owned(),
                schedule: vec![entry("A", 28800), entry("B", 29730)],
            }],
            built
        );
    }

    #[test]
    fn trips_without_stop_times_are_dropped() {
        let trips = vec![
            trip("T1", "R1", ""),
            trip("T2", "R1", ""),
            trip("T3", "R9", ""),
        ];
        let stop_times = sort_stop_times(vec![
            stop_time("T3", "A", "07:00:00", 1),
            stop_time("T1", "A", "06:00:00", 1),
        ]);

        let built = build_trips(&trips, &stop_times);

        assert_eq!(
            vec!["T1", "T3"],
            built.iter().map(|trip| trip.id.as_str()).collect_vec()
        );
        assert_eq!("R9", built[1].route_id);
        assert_eq!("", built[0].headsign);
    }

    #[test]
    fn unreadable_arrival_counts_as_midnight() {
        let trips = vec![trip("T1", "R1", "")];
        let mut stop_times = vec![
            stop_time("T1", "A", "25:10:00", 1),
            stop_time("T1", "B", "soon", 2),
        ];
        stop_times.push(gtfs::StopTime {
            arrival_time: None,
            ..stop_time("T1", "C", "", 3)
        });

        let built = build_trips(&trips, &sort_stop_times(stop_times));

        assert_eq!(
            vec![entry("A", 90600), entry("B", 0), entry("C", 0)],
            built[0].schedule
        );
    }
}
