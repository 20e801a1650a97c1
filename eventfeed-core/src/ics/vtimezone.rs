//! Static VTIMEZONE definitions.
//!
//! Only the zones listed in [`ZONES`] get a VTIMEZONE block; every other TZID is left to the
//! client's own zone database. Broader support belongs to a real tz database, not to more
//! hand-written entries here.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use super::fold::fold;

/// Reference year for the observance DTSTART values.
const RULE_EPOCH_YEAR: i32 = 1970;

/// "The nth weekday of a month at a local time", repeating yearly.
#[derive(Debug, Clone, Copy)]
pub struct AnnualRule {
    pub month: u32,
    pub nth: u8,
    pub weekday: Weekday,
    /// Local wall-clock time of the transition, in the offset being left
    pub hour: u32,
}

impl AnnualRule {
    /// Transition instant (local wall-clock) in the given year.
    pub fn transition(&self, year: i32) -> Option<NaiveDateTime> {
        let date = NaiveDate::from_weekday_of_month_opt(year, self.month, self.weekday, self.nth)?;
        Some(date.and_time(NaiveTime::from_hms_opt(self.hour, 0, 0)?))
    }

    fn rrule(&self) -> String {
        format!(
            "FREQ=YEARLY;BYMONTH={};BYDAY={}{}",
            self.month,
            self.nth,
            byday_code(self.weekday)
        )
    }
}

/// One STANDARD or DAYLIGHT sub-component.
#[derive(Debug, Clone, Copy)]
pub struct Observance {
    /// Offset in force before the transition, minutes east of UTC
    pub offset_from: i32,
    /// Offset in force after the transition, minutes east of UTC
    pub offset_to: i32,
    pub abbreviation: &'static str,
    pub rule: AnnualRule,
}

/// Seasonal offset rules for one named zone.
#[derive(Debug, Clone, Copy)]
pub struct ZoneRules {
    pub tzid: &'static str,
    pub standard: Observance,
    pub daylight: Observance,
}

/// Known zones. Not exhaustive: anything missing here relies on the client's tz database.
pub static ZONES: &[ZoneRules] = &[ZoneRules {
    tzid: "Australia/Sydney",
    standard: Observance {
        offset_from: 11 * 60,
        offset_to: 10 * 60,
        abbreviation: "AEST",
        rule: AnnualRule {
            month: 4,
            nth: 1,
            weekday: Weekday::Sun,
            hour: 3,
        },
    },
    daylight: Observance {
        offset_from: 10 * 60,
        offset_to: 11 * 60,
        abbreviation: "AEDT",
        rule: AnnualRule {
            month: 10,
            nth: 1,
            weekday: Weekday::Sun,
            hour: 2,
        },
    },
}];

/// Look up the static rules for a zone identifier.
pub fn zone_rules(zone_id: &str) -> Option<&'static ZoneRules> {
    ZONES.iter().find(|z| z.tzid == zone_id)
}

/// Build the folded VTIMEZONE lines for `zone_id`, or nothing if the zone is not in the table.
pub fn build_vtimezone(zone_id: &str) -> Vec<String> {
    let Some(zone) = zone_rules(zone_id) else {
        return Vec::new();
    };

    let mut lines = vec![
        "BEGIN:VTIMEZONE".to_string(),
        format!("TZID:{}", zone.tzid),
        format!("X-LIC-LOCATION:{}", zone.tzid),
    ];
    push_observance(&mut lines, "STANDARD", &zone.standard);
    push_observance(&mut lines, "DAYLIGHT", &zone.daylight);
    lines.push("END:VTIMEZONE".to_string());

    lines.iter().map(|l| fold(l)).collect()
}

fn push_observance(lines: &mut Vec<String>, kind: &str, obs: &Observance) {
    lines.push(format!("BEGIN:{}", kind));
    lines.push(format!("TZOFFSETFROM:{}", format_offset(obs.offset_from)));
    lines.push(format!("TZOFFSETTO:{}", format_offset(obs.offset_to)));
    lines.push(format!("TZNAME:{}", obs.abbreviation));
    if let Some(start) = obs.rule.transition(RULE_EPOCH_YEAR) {
        lines.push(format!("DTSTART:{}", start.format("%Y%m%dT%H%M%S")));
    }
    lines.push(format!("RRULE:{}", obs.rule.rrule()));
    lines.push(format!("END:{}", kind));
}

/// UTC offset as `+HHMM` / `-HHMM`.
fn format_offset(minutes: i32) -> String {
    let sign = if minutes < 0 { '-' } else { '+' };
    let abs = minutes.abs();
    format!("{}{:02}{:02}", sign, abs / 60, abs % 60)
}

fn byday_code(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "MO",
        Weekday::Tue => "TU",
        Weekday::Wed => "WE",
        Weekday::Thu => "TH",
        Weekday::Fri => "FR",
        Weekday::Sat => "SA",
        Weekday::Sun => "SU",
    }
}
