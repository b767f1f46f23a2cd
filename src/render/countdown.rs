use chrono::DateTime;
use chrono::Datelike;
use chrono::FixedOffset;
use chrono::Months;
use chrono::Offset;
use chrono::TimeDelta;
use chrono::TimeZone;
use chrono::Utc;

/// Countdown to the monthly event, anchored to a fixed target instant.
///
/// The target is local midnight on the first day of the month following
/// the moment the countdown was created, resolved in that moment's time
/// zone. Remaining time is measured between instants, so a daylight-saving
/// change before the target shifts the displayed hours. Once the target
/// passes the countdown reports [`Remaining::Live`] rather than a negative
/// duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    target: DateTime<FixedOffset>,
}

impl Countdown {
    pub fn new(target: DateTime<FixedOffset>) -> Self {
        Self { target }
    }
    /// Count down to the first day of the month after `now`.
    pub fn following<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        let zone = now.timezone();
        let target = now
            .date_naive()
            .with_day(1)
            .and_then(|first| first.checked_add_months(Months::new(1)))
            .and_then(|next| next.and_hms_opt(0, 0, 0))
            .map(|midnight| {
                zone.from_local_datetime(&midnight)
                    .earliest()
                    .unwrap_or_else(|| zone.from_utc_datetime(&midnight))
            })
            .map(|target| target.with_timezone(&target.offset().fix()))
            .unwrap_or_else(|| DateTime::<FixedOffset>::from(DateTime::<Utc>::MAX_UTC));
        Self::new(target)
    }
    pub fn target(&self) -> DateTime<FixedOffset> {
        self.target
    }
    pub fn at<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Remaining {
        let diff = self.target.signed_duration_since(now.clone());
        if diff <= TimeDelta::zero() {
            return Remaining::Live;
        }
        let secs = diff.num_seconds();
        Remaining::Pending {
            days: secs / 86_400,
            hours: (secs / 3_600) % 24,
            minutes: (secs / 60) % 60,
            seconds: secs % 60,
        }
    }
}

/// Time left until the event, or the event itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remaining {
    Pending {
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    },
    Live,
}

impl Remaining {
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live)
    }
}

impl std::fmt::Display for Remaining {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Live => write!(f, "Event is live!"),
            Self::Pending {
                days,
                hours,
                minutes,
                seconds,
            } => write!(
                f,
                "Next Event in {}d {}h {}m {}s",
                days, hours, minutes, seconds
            ),
        }
    }
}
