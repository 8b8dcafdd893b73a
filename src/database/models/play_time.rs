use crate::utils::duration::RawDuration;
use sqlx::postgres::types::PgInterval;
use sqlx::FromRow;

const MICROS_PER_SECOND: i64 = 1_000_000;

/// One raw play-time tracker row for a player, as stored by the game
/// server: a tracker label like `JobDoctor` or `Overall` and the time
/// spent on it as a SQL interval.
#[derive(Debug, Clone, FromRow)]
pub struct PlayTimeRow {
    pub tracker: String,
    pub time_spent: Option<PgInterval>,
}

impl PlayTimeRow {
    /// Fetches all trackers for the player last seen under the given
    /// name, longest first.
    pub async fn find_by_ckey(
        pool: &sqlx::PgPool,
        ckey: &str,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, PlayTimeRow>(
            "SELECT pt.tracker, pt.time_spent
             FROM play_time pt
             JOIN player p ON pt.player_id = p.user_id
             WHERE p.last_seen_user_name = $1
             ORDER BY pt.time_spent DESC",
        )
        .bind(ckey)
        .fetch_all(pool)
        .await
    }

    /// Breaks the interval into the component shape the duration
    /// formatter understands. Months are folded at 30 days each.
    pub fn raw_duration(&self) -> Option<RawDuration> {
        self.time_spent.as_ref().map(|interval| {
            let total_seconds = interval.microseconds / MICROS_PER_SECOND;
            RawDuration::Components {
                days: i64::from(interval.days) + i64::from(interval.months) * 30,
                hours: total_seconds / 3600,
                minutes: (total_seconds % 3600) / 60,
                seconds: total_seconds % 60,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(tracker: &str, months: i32, days: i32, microseconds: i64) -> PlayTimeRow {
        PlayTimeRow {
            tracker: tracker.to_string(),
            time_spent: Some(PgInterval {
                months,
                days,
                microseconds,
            }),
        }
    }

    #[test]
    fn test_raw_duration_splits_microseconds() {
        let row = row("JobDoctor", 0, 0, (2 * 3600 + 3 * 60 + 4) * MICROS_PER_SECOND);
        assert_eq!(
            row.raw_duration(),
            Some(RawDuration::Components {
                days: 0,
                hours: 2,
                minutes: 3,
                seconds: 4,
            })
        );
    }

    #[test]
    fn test_raw_duration_carries_days_and_months() {
        let row = row("Overall", 1, 2, 3600 * MICROS_PER_SECOND);
        assert_eq!(
            row.raw_duration(),
            Some(RawDuration::Components {
                days: 32,
                hours: 1,
                minutes: 0,
                seconds: 0,
            })
        );
    }

    #[test]
    fn test_raw_duration_missing_interval() {
        let row = PlayTimeRow {
            tracker: "JobChief".to_string(),
            time_spent: None,
        };
        assert_eq!(row.raw_duration(), None);
    }
}
