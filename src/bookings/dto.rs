use serde::{Deserialize, Serialize};
use time::Date;

use super::repo_types::Booking;
use crate::error::FieldErrors;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateBookingRequest {
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

impl CreateBookingRequest {
    /// Checks the range against `today`; returns `(start, end)`.
    pub fn validate(&self, today: Date) -> Result<(Date, Date), FieldErrors> {
        let mut errors = FieldErrors::new();
        match self.start_date {
            None => errors.add("startDate", "startDate is required"),
            Some(start) if start < today => {
                errors.add("startDate", "startDate cannot be in the past")
            }
            Some(_) => {}
        }
        match (self.start_date, self.end_date) {
            (_, None) => errors.add("endDate", "endDate is required"),
            (Some(start), Some(end)) if end <= start => {
                errors.add("endDate", "endDate cannot be on or before startDate")
            }
            _ => {}
        }
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) if errors.is_empty() => Ok((start, end)),
            _ => Err(errors),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookingList {
    pub bookings: Vec<Booking>,
}
