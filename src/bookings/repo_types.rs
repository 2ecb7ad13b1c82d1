use serde::Serialize;
use sqlx::FromRow;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub spot_id: Uuid,
    pub user_id: Uuid,
    pub start_date: Date,
    pub end_date: Date,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Booking {
    /// Half-open overlap test: a stay ending on a day another starts does
    /// not conflict. The SQL in `PgBookingStore::create` applies the same rule.
    #[cfg(test)]
    pub fn overlaps(&self, start: Date, end: Date) -> bool {
        self.start_date < end && start < self.end_date
    }
}

#[derive(Debug, Clone)]
pub struct NewBooking {
    pub spot_id: Uuid,
    pub user_id: Uuid,
    pub start_date: Date,
    pub end_date: Date,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn booking(start: Date, end: Date) -> Booking {
        let now = OffsetDateTime::now_utc();
        Booking {
            id: Uuid::new_v4(),
            spot_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            start_date: start,
            end_date: end,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn overlap_is_half_open() {
        let b = booking(date!(2030 - 01 - 10), date!(2030 - 01 - 15));
        assert!(b.overlaps(date!(2030 - 01 - 12), date!(2030 - 01 - 20)));
        assert!(b.overlaps(date!(2030 - 01 - 01), date!(2030 - 01 - 11)));
        assert!(b.overlaps(date!(2030 - 01 - 11), date!(2030 - 01 - 12)));
        assert!(!b.overlaps(date!(2030 - 01 - 15), date!(2030 - 01 - 18)));
        assert!(!b.overlaps(date!(2030 - 01 - 05), date!(2030 - 01 - 10)));
    }

    #[test]
    fn dates_serialize_as_iso_days() {
        let b = booking(date!(2030 - 01 - 10), date!(2030 - 01 - 15));
        let json = serde_json::to_value(&b).unwrap();
        assert_eq!(json["startDate"], "2030-01-10");
        assert_eq!(json["endDate"], "2030-01-15");
    }
}
