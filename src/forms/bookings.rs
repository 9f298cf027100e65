use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::booking::SlotRequest;

#[derive(Debug, Deserialize, Validate)]
pub struct SlotForm {
    #[validate(length(min = 1))]
    pub hall_name: String,
    #[validate(length(min = 1))]
    pub date: String,
    #[validate(length(min = 1))]
    pub start_time: String,
    #[validate(length(min = 1))]
    pub end_time: String,
}

#[derive(Debug, Error)]
pub enum SlotFormError {
    #[error("Booking form validation failed: {0}")]
    Validation(String),
}

impl From<ValidationErrors> for SlotFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl TryFrom<SlotForm> for SlotRequest {
    type Error = SlotFormError;

    fn try_from(value: SlotForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(SlotRequest::new(
            value.hall_name,
            value.date,
            value.start_time,
            value.end_time,
        ))
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBookingForm {
    #[validate(length(min = 1))]
    pub old_hall_name: String,
    #[validate(length(min = 1))]
    pub old_date: String,
    #[validate(length(min = 1))]
    pub old_start_time: String,
    #[validate(length(min = 1))]
    pub old_end_time: String,
    #[validate(length(min = 1))]
    pub new_hall_name: String,
    #[validate(length(min = 1))]
    pub new_date: String,
    #[validate(length(min = 1))]
    pub new_start_time: String,
    #[validate(length(min = 1))]
    pub new_end_time: String,
}

/// The booking to move and the slot to move it to.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBookingFormPayload {
    pub old: SlotRequest,
    pub new: SlotRequest,
}

impl TryFrom<UpdateBookingForm> for UpdateBookingFormPayload {
    type Error = SlotFormError;

    fn try_from(value: UpdateBookingForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            old: SlotRequest::new(
                value.old_hall_name,
                value.old_date,
                value.old_start_time,
                value.old_end_time,
            ),
            new: SlotRequest::new(
                value.new_hall_name,
                value.new_date,
                value.new_start_time,
                value.new_end_time,
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(hall_name: &str) -> SlotForm {
        SlotForm {
            hall_name: hall_name.into(),
            date: "2030-01-01".into(),
            start_time: "10:00".into(),
            end_time: "11:00".into(),
        }
    }

    #[test]
    fn converts_complete_form() {
        let request = SlotRequest::try_from(form("Ganga")).unwrap();
        assert_eq!(
            request,
            SlotRequest::new("Ganga", "2030-01-01", "10:00", "11:00")
        );
    }

    #[test]
    fn rejects_empty_fields() {
        let err = SlotRequest::try_from(form("")).unwrap_err();
        assert!(err.to_string().contains("hall_name"));
    }

    #[test]
    fn splits_update_form_into_old_and_new() {
        let form = UpdateBookingForm {
            old_hall_name: "Ganga".into(),
            old_date: "2030-01-01".into(),
            old_start_time: "10:00".into(),
            old_end_time: "11:00".into(),
            new_hall_name: "Kaveri".into(),
            new_date: "2030-01-02".into(),
            new_start_time: "12:00".into(),
            new_end_time: "13:00".into(),
        };
        let payload = UpdateBookingFormPayload::try_from(form).unwrap();
        assert_eq!(payload.old.hall_name, "Ganga");
        assert_eq!(payload.new.date, "2030-01-02");
    }

    #[test]
    fn deserializes_from_json() {
        let form: SlotForm = serde_json::from_value(serde_json::json!({
            "hall_name": "Yamuna",
            "date": "2030-01-01",
            "start_time": "09:00",
            "end_time": "10:00",
        }))
        .unwrap();
        assert!(form.validate().is_ok());
    }
}
