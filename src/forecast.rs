//! Multi-day forecast aggregation
//!
//! Turns the flat list of 3-hour forecast samples into one summary per
//! calendar day. The first calendar day in the feed is today, which the
//! current-conditions view already covers, so it is skipped.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use crate::models::weather::capitalize;
use crate::models::{DaySummary, ForecastSample};

/// Number of days summarized after today
pub const FORECAST_DAYS: usize = 5;

/// Group samples by calendar date and summarize the days after today.
///
/// Dates keep the order in which they are first seen. Fewer than
/// `FORECAST_DAYS` days after today yields a shorter list, never padding.
#[must_use]
pub fn summarize_days(samples: &[ForecastSample]) -> Vec<DaySummary> {
    let mut days: Vec<(NaiveDate, Vec<&ForecastSample>)> = Vec::new();

    for sample in samples {
        let date = sample.date();
        match days.iter_mut().find(|(day, _)| *day == date) {
            Some((_, bucket)) => bucket.push(sample),
            None => days.push((date, vec![sample])),
        }
    }

    debug!(
        "Grouped {} forecast samples into {} days",
        samples.len(),
        days.len()
    );

    days.into_iter()
        .skip(1)
        .take(FORECAST_DAYS)
        .filter_map(|(date, bucket)| summarize_day(date, &bucket))
        .collect()
}

/// Summarize a single day; `None` only for an empty bucket
fn summarize_day(date: NaiveDate, samples: &[&ForecastSample]) -> Option<DaySummary> {
    let first = samples.first()?;

    let (min_temp, max_temp) = samples.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(min, max), sample| (min.min(sample.temperature), max.max(sample.temperature)),
    );

    Some(DaySummary {
        date,
        day_name: day_name_es(date.weekday()).to_string(),
        date_short: date.format("%d/%m").to_string(),
        min_temp,
        max_temp,
        description: capitalize(dominant_description(samples).unwrap_or_default()),
        icon: first.icon.clone(),
    })
}

/// Most frequent description; among equally frequent ones the first seen wins
fn dominant_description<'a>(samples: &[&'a ForecastSample]) -> Option<&'a str> {
    let mut counts: Vec<(&'a str, usize)> = Vec::new();
    for sample in samples {
        let description = sample.description.as_str();
        match counts.iter_mut().find(|(seen, _)| *seen == description) {
            Some((_, count)) => *count += 1,
            None => counts.push((description, 1)),
        }
    }

    counts
        .into_iter()
        .fold(None::<(&'a str, usize)>, |best, (description, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((description, count)),
        })
        .map(|(description, _)| description)
}

/// Spanish day-of-week name
#[must_use]
pub fn day_name_es(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Lunes",
        Weekday::Tue => "Martes",
        Weekday::Wed => "Miércoles",
        Weekday::Thu => "Jueves",
        Weekday::Fri => "Viernes",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDateTime};
    use rstest::rstest;

    fn sample(timestamp: NaiveDateTime, temperature: f64, description: &str, icon: &str) -> ForecastSample {
        ForecastSample {
            timestamp,
            temperature,
            description: description.to_string(),
            icon: icon.to_string(),
        }
    }

    fn at(date: &str, hour: u32) -> NaiveDateTime {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    /// 3-hourly samples from `start` for `days` full days
    fn three_hourly(start: &str, days: i64) -> Vec<ForecastSample> {
        let first = at(start, 0);
        (0..days * 8)
            .map(|slot| {
                let timestamp = first + Duration::hours(3 * slot);
                let temperature = f64::from(u32::try_from(slot % 8).unwrap()) + 10.0;
                sample(timestamp, temperature, "cielo claro", "01d")
            })
            .collect()
    }

    #[test]
    fn test_skips_today_and_keeps_five_days() {
        let samples = three_hourly("2024-01-01", 7);
        let summaries = summarize_days(&samples);

        let dates: Vec<String> = summaries.iter().map(|day| day.date.to_string()).collect();
        assert_eq!(
            dates,
            vec!["2024-01-02", "2024-01-03", "2024-01-04", "2024-01-05", "2024-01-06"]
        );
        assert_eq!(summaries[0].day_name, "Martes");
        assert_eq!(summaries[0].date_short, "02/01");
    }

    #[test]
    fn test_min_max_come_from_the_day() {
        let samples = three_hourly("2024-01-01", 3);
        let summaries = summarize_days(&samples);

        for day in &summaries {
            assert!(day.min_temp <= day.max_temp);
            let temps: Vec<f64> = samples
                .iter()
                .filter(|s| s.date() == day.date)
                .map(|s| s.temperature)
                .collect();
            assert!(temps.contains(&day.min_temp));
            assert!(temps.contains(&day.max_temp));
        }
        assert_eq!(summaries[0].min_temp, 10.0);
        assert_eq!(summaries[0].max_temp, 17.0);
    }

    #[test]
    fn test_fewer_days_are_not_padded() {
        let samples = three_hourly("2024-03-10", 3);
        assert_eq!(summarize_days(&samples).len(), 2);

        let only_today = three_hourly("2024-03-10", 1);
        assert!(summarize_days(&only_today).is_empty());
        assert!(summarize_days(&[]).is_empty());
    }

    #[test]
    fn test_dominant_description_and_first_icon() {
        let samples = vec![
            sample(at("2024-05-01", 21), 18.0, "nubes", "04n"),
            sample(at("2024-05-02", 0), 12.0, "lluvia ligera", "10n"),
            sample(at("2024-05-02", 3), 11.0, "nubes", "04n"),
            sample(at("2024-05-02", 6), 13.0, "lluvia ligera", "10d"),
            sample(at("2024-05-02", 9), 16.0, "cielo claro", "01d"),
        ];
        let summaries = summarize_days(&samples);

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].description, "Lluvia ligera");
        assert_eq!(summaries[0].icon, "10n");
        assert_eq!(summaries[0].min_temp, 11.0);
        assert_eq!(summaries[0].max_temp, 16.0);
    }

    #[test]
    fn test_description_tie_goes_to_first_seen() {
        let samples = vec![
            sample(at("2024-05-01", 21), 18.0, "nubes", "04n"),
            sample(at("2024-05-02", 0), 12.0, "nubes dispersas", "03n"),
            sample(at("2024-05-02", 3), 11.0, "niebla", "50n"),
            sample(at("2024-05-02", 6), 13.0, "niebla", "50d"),
            sample(at("2024-05-02", 9), 16.0, "nubes dispersas", "03d"),
        ];
        let summaries = summarize_days(&samples);

        assert_eq!(summaries[0].description, "Nubes dispersas");
    }

    #[test]
    fn test_dates_keep_first_seen_order() {
        let samples = vec![
            sample(at("2024-06-01", 21), 20.0, "a", "x"),
            sample(at("2024-06-03", 0), 15.0, "b", "y"),
            sample(at("2024-06-02", 0), 16.0, "c", "z"),
            sample(at("2024-06-03", 3), 14.0, "b", "w"),
        ];
        let summaries = summarize_days(&samples);

        assert_eq!(summaries[0].date.to_string(), "2024-06-03");
        assert_eq!(summaries[0].min_temp, 14.0);
        assert_eq!(summaries[1].date.to_string(), "2024-06-02");
    }

    #[rstest]
    #[case(Weekday::Mon, "Lunes")]
    #[case(Weekday::Wed, "Miércoles")]
    #[case(Weekday::Sat, "Sábado")]
    #[case(Weekday::Sun, "Domingo")]
    fn test_day_names(#[case] weekday: Weekday, #[case] expected: &str) {
        assert_eq!(day_name_es(weekday), expected);
    }
}
