use chrono::{DateTime, Datelike, Utc};

/// Copyright year, taken from the build timestamp.
pub fn copyright_year() -> i32 {
    year_of(env!("BUILD_TIME"))
}

fn year_of(stamp: &str) -> i32 {
    match DateTime::parse_from_rfc3339(stamp) {
        Ok(built) => built.year(),
        Err(_) => Utc::now().year(),
    }
}
