//! Month day-grid and world clock helpers.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::WeatherError;

pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldZone {
    pub name: &'static str,
    pub zone: &'static str,
    pub flag: &'static str,
}

pub const TIMEZONES: &[WorldZone] = &[
    WorldZone { name: "New York", zone: "America/New_York", flag: "🗽" },
    WorldZone { name: "London", zone: "Europe/London", flag: "🇬🇧" },
    WorldZone { name: "Paris", zone: "Europe/Paris", flag: "🇫🇷" },
    WorldZone { name: "Tokyo", zone: "Asia/Tokyo", flag: "🇯🇵" },
    WorldZone { name: "Sydney", zone: "Australia/Sydney", flag: "🇦🇺" },
    WorldZone { name: "Dubai", zone: "Asia/Dubai", flag: "🇦🇪" },
    WorldZone { name: "Los Angeles", zone: "America/Los_Angeles", flag: "🌴" },
    WorldZone { name: "Hong Kong", zone: "Asia/Hong_Kong", flag: "🇭🇰" },
];

impl WorldZone {
    /// Match by display name or IANA zone id, ignoring case.
    pub fn find(name: &str) -> Result<&'static WorldZone, WeatherError> {
        let name = name.trim();
        TIMEZONES
            .iter()
            .find(|z| z.name.eq_ignore_ascii_case(name) || z.zone.eq_ignore_ascii_case(name))
            .ok_or_else(|| WeatherError::UnknownZone(name.to_string()))
    }

    pub fn tz(&self) -> Result<Tz, WeatherError> {
        self.zone.parse::<Tz>().map_err(|_| WeatherError::UnknownZone(self.zone.to_string()))
    }
}

/// Cells of a Sunday-first month view: `None` pads the days before the 1st.
pub fn month_grid(year: i32, month: u32) -> Result<Vec<Option<u32>>, WeatherError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| WeatherError::InvalidDate(format!("{year}-{month:02}")))?;
    let leading = first.weekday().num_days_from_sunday() as usize;

    let mut cells = vec![None; leading];
    cells.extend((1..=days_in_month(first)).map(Some));
    Ok(cells)
}

fn days_in_month(first: NaiveDate) -> u32 {
    let (y, m) = if first.month() == 12 { (first.year() + 1, 1) } else { (first.year(), first.month() + 1) };
    NaiveDate::from_ymd_opt(y, m, 1)
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneClock {
    pub zone: &'static WorldZone,
    /// e.g. `09:05:07 PM`
    pub time: String,
    /// e.g. `Friday, October 16, 2026`
    pub date: String,
}

pub fn clock(now: DateTime<Utc>, zone: &'static WorldZone) -> Result<ZoneClock, WeatherError> {
    let local = now.with_timezone(&zone.tz()?);
    Ok(ZoneClock {
        zone,
        time: local.format("%I:%M:%S %p").to_string(),
        date: local.format("%A, %B %-d, %Y").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn grid_pads_to_first_weekday() {
        // October 2026 starts on a Thursday.
        let grid = month_grid(2026, 10).unwrap();
        assert_eq!(&grid[..4], &[None, None, None, None]);
        assert_eq!(grid[4], Some(1));
        assert_eq!(grid.last(), Some(&Some(31)));
        assert_eq!(grid.len(), 4 + 31);
    }

    #[test]
    fn grid_handles_leap_february_and_december() {
        let feb = month_grid(2024, 2).unwrap();
        assert_eq!(feb.iter().flatten().count(), 29);
        let feb = month_grid(2026, 2).unwrap();
        assert_eq!(feb.iter().flatten().count(), 28);
        // Feb 2026 starts on a Sunday: no padding.
        assert_eq!(feb[0], Some(1));
        let dec = month_grid(2026, 12).unwrap();
        assert_eq!(dec.last(), Some(&Some(31)));
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert!(matches!(month_grid(2026, 13), Err(WeatherError::InvalidDate(_))));
        assert!(matches!(month_grid(2026, 0), Err(WeatherError::InvalidDate(_))));
    }

    #[test]
    fn every_listed_zone_parses() {
        for z in TIMEZONES {
            assert!(z.tz().is_ok(), "{}", z.zone);
        }
    }

    #[test]
    fn find_by_name_or_zone() {
        assert_eq!(WorldZone::find("tokyo").unwrap().zone, "Asia/Tokyo");
        assert_eq!(WorldZone::find("europe/paris").unwrap().name, "Paris");
        assert!(matches!(WorldZone::find("Mars"), Err(WeatherError::UnknownZone(_))));
    }

    #[test]
    fn clock_formats_local_time() {
        let now = Utc.with_ymd_and_hms(2026, 10, 16, 23, 30, 5).unwrap();
        let tokyo = clock(now, WorldZone::find("Tokyo").unwrap()).unwrap();
        assert_eq!(tokyo.time, "08:30:05 AM");
        assert_eq!(tokyo.date, "Saturday, October 17, 2026");

        let ny = clock(now, WorldZone::find("New York").unwrap()).unwrap();
        assert_eq!(ny.time, "07:30:05 PM");
        assert_eq!(ny.date, "Friday, October 16, 2026");
    }
}
