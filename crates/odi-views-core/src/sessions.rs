//! Event session grouping

use tracing::trace;

use crate::dates::parse_datetime;
use crate::errors::{Result, ViewError};
use crate::types::{ProjectedSession, Session, SessionBuckets};

/// Group sessions by start time of day.
///
/// Keys are `HH:MM:SS` wall-clock times; the date and offset are dropped, so
/// sessions on different days that start at the same clock time share a
/// bucket. Within a bucket, and across bucket keys, input order is kept.
///
/// A session with a missing or unparsable start date fails the whole call.
pub fn marshal_sessions(sessions: &[Session]) -> Result<SessionBuckets> {
    let mut times = SessionBuckets::new();

    for session in sessions {
        let details = &session.details;
        let start = details
            .start_date
            .as_deref()
            .ok_or_else(|| ViewError::MissingField {
                record: session.slug.clone(),
                field: "details.start_date",
            })?;

        let key = parse_datetime(start)?
            .time_of_day()
            .format("%H:%M:%S")
            .to_string();
        trace!(slug = %session.slug, %key, "bucketing session");

        times.entry(key).or_default().push(ProjectedSession {
            title: session.title.clone(),
            slug: session.slug.clone(),
            start_date: details.start_date.clone(),
            end_date: details.end_date.clone(),
            location: details.location.clone(),
            module_image: details
                .module_image
                .as_ref()
                .and_then(|image| image.web_url.clone()),
        });
    }

    Ok(times)
}

/// Format a time for the schedule, e.g. ` 2:30 pm`
pub fn session_time(time: &str) -> Result<String> {
    Ok(parse_datetime(time)?
        .time_of_day()
        .format("%l:%M %P")
        .to_string())
}
