use chrono::prelude::*;
use chrono_tz::Tz;

pub fn is_valid_date(datestr: &str) -> anyhow::Result<(i32, u32, u32)> {
    let dates = datestr.split('-').collect::<Vec<_>>();
    if dates.len() != 3 {
        return Err(anyhow::Error::msg(datestr.to_string()));
    }
    let year = dates[0].parse::<i32>();
    let month = dates[1].parse::<u32>();
    let day = dates[2].parse::<u32>();

    let (year, month, day) = match (year, month, day) {
        (Ok(year), Ok(month), Ok(day)) => (year, month, day),
        _ => return Err(anyhow::Error::msg(datestr.to_string())),
    };

    if !(1970..=2100).contains(&year) || month < 1 || month > 12 {
        return Err(anyhow::Error::msg(datestr.to_string()));
    }

    let month_length = get_month_length(year, month);

    if day < 1 || day > month_length {
        return Err(anyhow::Error::msg(datestr.to_string()));
    }

    Ok((year, month, day))
}

pub fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 100 != 0 && year % 4 == 0)
}

// month: January -> 1
pub fn get_month_length(year: i32, month: u32) -> u32 {
    match month {
        1 => 31,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        3 => 31,
        4 => 30,
        5 => 31,
        6 => 30,
        7 => 31,
        8 => 31,
        9 => 30,
        10 => 31,
        11 => 30,
        12 => 31,
        _ => panic!("Invalid month"),
    }
}

/// The `[00:00:00, 23:59:59]` window of a calendar date in a given
/// timezone, as millisecond timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct DayWindow {
    pub start_ts: i64,
    pub end_ts: i64,
}

impl DayWindow {
    pub fn contains(&self, ts: i64) -> bool {
        self.start_ts <= ts && ts <= self.end_ts
    }
}

pub fn local_day_window(datestr: &str, tz: &Tz) -> anyhow::Result<DayWindow> {
    let (year, month, day) = is_valid_date(datestr)?;
    let date = tz.ymd(year, month, day);
    Ok(DayWindow {
        start_ts: date.and_hms(0, 0, 0).timestamp_millis(),
        end_ts: date.and_hms(23, 59, 59).timestamp_millis(),
    })
}

// Day of week on the wire is an integer 0-6 with Sunday = 0
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

pub fn weekday_index(weekday: &Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8
}

pub fn weekday_label(weekday: &Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_accepts_valid_dates() {
        let valid_dates = vec![
            "2018-1-1",
            "2025-12-31",
            "2020-1-12",
            "2020-2-29",
            "2020-02-2",
            "2020-02-02",
            "2020-2-09",
        ];

        for date in &valid_dates {
            assert!(is_valid_date(date).is_ok());
        }
    }

    #[test]
    fn it_rejects_invalid_dates() {
        let invalid_dates = vec![
            "2018--1-1",
            "2020-1-32",
            "2020-2-30",
            "2021-2-29",
            "2020-0-1",
            "2020-1-0",
            "1969-1-1",
            "2020-13-1",
            "garbage",
        ];

        for date in &invalid_dates {
            assert!(is_valid_date(date).is_err());
        }
    }

    #[test]
    fn it_computes_day_window_in_utc() {
        let window = local_day_window("1970-1-2", &chrono_tz::UTC).unwrap();
        assert_eq!(window.start_ts, 1000 * 60 * 60 * 24);
        assert_eq!(window.end_ts, 1000 * 60 * 60 * 24 * 2 - 1000);

        assert!(window.contains(window.start_ts));
        assert!(window.contains(window.end_ts));
        assert!(!window.contains(window.start_ts - 1));
        assert!(!window.contains(window.end_ts + 1000));
    }

    #[test]
    fn it_computes_day_window_in_local_timezone() {
        // Europe/Oslo was at UTC+1 on this date
        let tz: Tz = "Europe/Oslo".parse().unwrap();
        let window = local_day_window("1970-1-1", &tz).unwrap();
        assert_eq!(window.start_ts, -1000 * 60 * 60);
    }

    #[test]
    fn it_rejects_day_window_for_invalid_date() {
        assert!(local_day_window("2020-2-30", &chrono_tz::UTC).is_err());
    }

    #[test]
    fn weekday_index_roundtrip() {
        for index in 0..=6 {
            let weekday = weekday_from_index(index).unwrap();
            assert_eq!(weekday_index(&weekday), index);
        }
        assert!(weekday_from_index(7).is_none());
    }

    #[test]
    fn weekday_labels() {
        assert_eq!(weekday_label(&Weekday::Sun), "Sunday");
        assert_eq!(weekday_label(&Weekday::Wed), "Wednesday");
        assert_eq!(weekday_label(&Weekday::Sat), "Saturday");
    }
}
