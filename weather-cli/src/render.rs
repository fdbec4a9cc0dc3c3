//! Human-readable text output.

use std::fmt::Write;

use chrono::{Datelike, NaiveDate};
use weather_core::{
    City, DailyForecast, GeocodingResult, TemperatureUnit, WeatherReport,
    calendar::{WEEKDAYS, ZoneClock},
};

fn temp(unit: TemperatureUnit, temp_f: i32) -> String {
    format!("{}{}", unit.display(temp_f), unit.symbol())
}

fn day_label(day: &DailyForecast, today: NaiveDate) -> String {
    match (day.date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => day.date.format("%A").to_string(),
    }
}

pub fn weather_card(report: &WeatherReport, unit: TemperatureUnit, today: NaiveDate) -> String {
    let w = &report.weather;
    let c = &w.current;
    let mut out = String::new();

    let marker = if report.is_sample() { " (sample data)" } else { "" };
    let _ = writeln!(out, "{}{marker}", w.city);
    let _ = writeln!(out, "{:.2}°, {:.2}°", w.latitude, w.longitude);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} {}  feels like {}",
        c.condition.icon(),
        temp(unit, c.temperature),
        temp(unit, c.feels_like)
    );
    let _ = writeln!(out, "{}", c.condition.description);
    let _ = writeln!(out, "Wind {} mph   Humidity {}%", c.wind_speed, c.humidity);

    if !w.forecast.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}-Day Forecast", w.forecast.len());
        for day in &w.forecast {
            let _ = writeln!(
                out,
                "  {:<10} {} {:>6} / {:<6} {}",
                day_label(day, today),
                day.condition.icon(),
                temp(unit, day.max_temp),
                temp(unit, day.min_temp),
                day.condition.description
            );
        }
    }

    out
}

pub fn city_list(cities: &[City]) -> String {
    let mut out = String::new();
    for city in cities {
        let _ = writeln!(out, "{:<12} {:>8.4}, {:>9.4}", city.name, city.latitude, city.longitude);
    }
    out
}

pub fn geocoded(found: &GeocodingResult) -> String {
    format!("Found {} at {:.4}, {:.4}", found.display_name(), found.latitude, found.longitude)
}

/// Month grid with today's cell in brackets, followed by the zone clock.
pub fn calendar(cells: &[Option<u32>], month: NaiveDate, today: Option<NaiveDate>, clock: &ZoneClock) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", month.format("%B %Y"));
    for wd in WEEKDAYS {
        let _ = write!(out, "{wd:^5}");
    }
    let _ = writeln!(out);

    let highlight = today
        .filter(|t| t.year() == month.year() && t.month() == month.month())
        .map(|t| t.day());

    for week in cells.chunks(7) {
        for cell in week {
            let _ = match cell {
                Some(d) if Some(*d) == highlight => write!(out, "{:^5}", format!("[{d}]")),
                Some(d) => write!(out, "{d:^5}"),
                None => write!(out, "{:5}", ""),
            };
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{} Current time in {}", clock.zone.flag, clock.zone.name);
    let _ = writeln!(out, "{}", clock.time);
    let _ = writeln!(out, "{}", clock.date);
    out
}
