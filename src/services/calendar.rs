use anyhow::Result;
use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use log::{error, info};

use crate::config::settings::CalendarSettings;
use crate::domain::{calendar, NewScheduledMatch, ScheduledMatch};
use crate::services::store::MatchStore;

/// Weekly match calendar and reminder checks.
///
/// Times are local wall-clock times, the way players read them.
pub struct CalendarService {
    store: MatchStore,
    settings: CalendarSettings,
}

impl CalendarService {
    pub fn new(store: MatchStore, settings: CalendarSettings) -> Self {
        Self { store, settings }
    }

    pub fn now() -> NaiveDateTime {
        Local::now().naive_local()
    }

    pub fn next_match_day(&self, now: NaiveDateTime) -> NaiveDate {
        calendar::next_match_day(now, self.settings.match_day, self.settings.kickoff_hour)
    }

    pub fn default_kickoff(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.settings.kickoff_hour, 0, 0).unwrap_or(NaiveTime::MIN)
    }

    /// Put the regular weekly match on the calendar
    pub fn schedule_next_match(&self, now: NaiveDateTime) -> Result<ScheduledMatch> {
        self.store.schedule(NewScheduledMatch {
            date: self.next_match_day(now),
            kickoff: self.default_kickoff(),
            venue: self.settings.default_venue.to_string(),
            description: Some(self.settings.default_description.to_string()),
            reminder: true,
        })
    }

    pub fn upcoming(&self, now: NaiveDateTime) -> Result<Vec<ScheduledMatch>> {
        Ok(calendar::upcoming(&self.store.scheduled()?, now, self.settings.upcoming_limit))
    }

    pub fn today(&self, now: NaiveDateTime) -> Result<Vec<ScheduledMatch>> {
        Ok(calendar::on_date(&self.store.scheduled()?, now.date()))
    }

    /// Announce every due reminder once and mark it as sent
    pub fn check_reminders(&self, now: NaiveDateTime) -> Result<Vec<ScheduledMatch>> {
        let lead = Duration::minutes(self.settings.reminder_lead_minutes);
        let due = calendar::pending_reminders(&self.store.scheduled()?, now, lead);

        for scheduled in &due {
            info!(
                "Match in {} minutes - {} ({} {})",
                self.settings.reminder_lead_minutes, scheduled.venue, scheduled.date, scheduled.kickoff
            );
            self.store.mark_notified(&scheduled.id)?;
        }
        Ok(due)
    }

    pub async fn run_reminders(self) {
        let period = std::time::Duration::from_secs(self.settings.reminder_check_secs);
        info!("Checking match reminders every {}s", period.as_secs());

        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            if let Err(e) = self.check_reminders(Self::now()) {
                error!("Reminder check failed: {e:#}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn service() -> CalendarService {
        CalendarService::new(MatchStore::in_memory().unwrap(), CalendarSettings::default())
    }

    #[test]
    fn test_schedule_next_match_uses_defaults() {
        let service = service();
        // Monday 2024-03-04
        let scheduled = service.schedule_next_match(at(4, 9, 0)).unwrap();

        assert_eq!(scheduled.date, NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
        assert_eq!(scheduled.kickoff, NaiveTime::from_hms_opt(20, 0, 0).unwrap());
        assert_eq!(scheduled.venue, "SB5, Parque Sarmiento");
        assert!(scheduled.reminder);
        assert!(!scheduled.notified);
    }

    #[test]
    fn test_upcoming_and_today() {
        let service = service();
        service.schedule_next_match(at(4, 9, 0)).unwrap();

        assert_eq!(service.upcoming(at(4, 9, 0)).unwrap().len(), 1);
        assert!(service.upcoming(at(7, 21, 0)).unwrap().is_empty());
        assert_eq!(service.today(at(7, 8, 0)).unwrap().len(), 1);
        assert!(service.today(at(6, 8, 0)).unwrap().is_empty());
    }

    #[test]
    fn test_reminder_fires_once() {
        let service = service();
        service.schedule_next_match(at(4, 9, 0)).unwrap();

        assert!(service.check_reminders(at(7, 18, 30)).unwrap().is_empty());
        assert_eq!(service.check_reminders(at(7, 19, 30)).unwrap().len(), 1);
        assert!(service.check_reminders(at(7, 19, 45)).unwrap().is_empty());
        assert!(service.store.scheduled().unwrap()[0].notified);
    }
}
