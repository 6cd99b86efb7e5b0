use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// A future match on the calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledMatch {
    pub id: String,
    pub date: NaiveDate,
    pub kickoff: NaiveTime,
    pub venue: String,
    pub description: Option<String>,
    pub reminder: bool,
    pub notified: bool,
    pub created_at: DateTime<Utc>,
}

impl ScheduledMatch {
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.kickoff)
    }
}

/// Input for scheduling; id, notified flag and timestamp are filled in by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewScheduledMatch {
    pub date: NaiveDate,
    pub kickoff: NaiveTime,
    pub venue: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_reminder")]
    pub reminder: bool,
}

fn default_reminder() -> bool {
    true
}

/// Date of the next weekly match.
///
/// On the match day itself the answer is today until the kick-off hour has
/// been reached, after that it rolls over a full week.
pub fn next_match_day(now: NaiveDateTime, match_day: Weekday, kickoff_hour: u32) -> NaiveDate {
    let today = now.date();
    let current = today.weekday().num_days_from_sunday() as i64;
    let target = match_day.num_days_from_sunday() as i64;

    let days_ahead = if current == target {
        if now.hour() < kickoff_hour { 0 } else { 7 }
    } else {
        (target - current).rem_euclid(7)
    };

    today + Duration::days(days_ahead)
}

/// Matches starting after `now`, soonest first
pub fn upcoming(matches: &[ScheduledMatch], now: NaiveDateTime, limit: usize) -> Vec<ScheduledMatch> {
    let mut future: Vec<ScheduledMatch> = matches
        .iter()
        .filter(|m| m.starts_at() > now)
        .cloned()
        .collect();
    future.sort_by_key(ScheduledMatch::starts_at);
    future.truncate(limit);
    future
}

pub fn on_date(matches: &[ScheduledMatch], date: NaiveDate) -> Vec<ScheduledMatch> {
    matches.iter().filter(|m| m.date == date).cloned().collect()
}

/// Matches whose reminder is due: enabled, not yet sent, kick-off within `lead`
pub fn pending_reminders(
    matches: &[ScheduledMatch],
    now: NaiveDateTime,
    lead: Duration,
) -> Vec<ScheduledMatch> {
    matches
        .iter()
        .filter(|m| m.reminder && !m.notified)
        .filter(|m| {
            let until = m.starts_at() - now;
            until > Duration::zero() && until <= lead
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn scheduled(id: &str, start: NaiveDateTime) -> ScheduledMatch {
        ScheduledMatch {
            id: id.to_string(),
            date: start.date(),
            kickoff: start.time(),
            venue: "SB5".into(),
            description: None,
            reminder: true,
            notified: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_next_match_day_before_thursday() {
        // 2024-03-04 is a Monday
        let next = next_match_day(at(2024, 3, 4, 10, 0), Weekday::Thu, 20);
        assert_eq!(next, NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
    }

    #[test]
    fn test_next_match_day_on_thursday() {
        let before = next_match_day(at(2024, 3, 7, 19, 59), Weekday::Thu, 20);
        assert_eq!(before, NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());

        let after = next_match_day(at(2024, 3, 7, 20, 0), Weekday::Thu, 20);
        assert_eq!(after, NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());
    }

    #[test]
    fn test_next_match_day_after_thursday() {
        // Saturday and Sunday both roll to the following Thursday
        let saturday = next_match_day(at(2024, 3, 9, 12, 0), Weekday::Thu, 20);
        let sunday = next_match_day(at(2024, 3, 10, 12, 0), Weekday::Thu, 20);
        assert_eq!(saturday, NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());
        assert_eq!(sunday, NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());
    }

    #[test]
    fn test_upcoming_is_sorted_and_limited() {
        let now = at(2024, 3, 1, 12, 0);
        let list = vec![
            scheduled("late", at(2024, 3, 21, 20, 0)),
            scheduled("past", at(2024, 2, 29, 20, 0)),
            scheduled("soon", at(2024, 3, 7, 20, 0)),
            scheduled("mid", at(2024, 3, 14, 20, 0)),
        ];

        let ids: Vec<String> = upcoming(&list, now, 2).into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["soon".to_string(), "mid".to_string()]);
    }

    #[test]
    fn test_on_date() {
        let list = vec![
            scheduled("a", at(2024, 3, 7, 20, 0)),
            scheduled("b", at(2024, 3, 8, 20, 0)),
        ];
        let today = on_date(&list, NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].id, "a");
    }

    #[test]
    fn test_pending_reminders_window() {
        let now = at(2024, 3, 7, 19, 15);
        let mut notified = scheduled("notified", at(2024, 3, 7, 20, 0));
        notified.notified = true;
        let mut silent = scheduled("silent", at(2024, 3, 7, 20, 0));
        silent.reminder = false;

        let list = vec![
            scheduled("due", at(2024, 3, 7, 20, 0)),
            scheduled("too-early", at(2024, 3, 7, 21, 0)),
            scheduled("started", at(2024, 3, 7, 19, 0)),
            notified,
            silent,
        ];

        let due = pending_reminders(&list, now, Duration::minutes(60));
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].id, "due");
    }
}
