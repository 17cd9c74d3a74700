use chrono::{NaiveDate, NaiveDateTime};

use super::{Service, ServiceCategory};

const DATE_FORMAT: &str = "%Y-%m-%d";
const SLOT_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    Prev,
    Next,
}

/// Типизированное действие из callback-кнопки.
///
/// Payload разбирается ровно один раз на границе; всё, что не
/// распозналось, отбрасывается без перехода.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    Category(ServiceCategory),
    Service(Service),
    Date(NaiveDate),
    Page(PageNav),
    Slot(NaiveDateTime),
    Accept(u64),
    Reject(u64),
    NewBooking,
}

impl CallbackAction {
    pub fn payload(&self) -> String {
        match self {
            CallbackAction::Category(c) => format!("cat_{}", c.code()),
            CallbackAction::Service(s) => format!("svc_{}", s.code()),
            CallbackAction::Date(d) => format!("date_{}", d.format(DATE_FORMAT)),
            CallbackAction::Page(PageNav::Prev) => "page_prev".to_string(),
            CallbackAction::Page(PageNav::Next) => "page_next".to_string(),
            CallbackAction::Slot(dt) => format!("slot_{}", dt.format(SLOT_FORMAT)),
            CallbackAction::Accept(id) => format!("accept_{}", id),
            CallbackAction::Reject(id) => format!("reject_{}", id),
            CallbackAction::NewBooking => "new_booking".to_string(),
        }
    }

    pub fn parse(data: &str) -> Option<Self> {
        if data == "new_booking" {
            return Some(CallbackAction::NewBooking);
        }
        if let Some(code) = data.strip_prefix("cat_") {
            return ServiceCategory::from_code(code).map(CallbackAction::Category);
        }
        if let Some(code) = data.strip_prefix("svc_") {
            return Service::from_code(code).map(CallbackAction::Service);
        }
        if let Some(raw) = data.strip_prefix("date_") {
            return NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .ok()
                .map(CallbackAction::Date);
        }
        if let Some(dir) = data.strip_prefix("page_") {
            return match dir {
                "prev" => Some(CallbackAction::Page(PageNav::Prev)),
                "next" => Some(CallbackAction::Page(PageNav::Next)),
                _ => None,
            };
        }
        if let Some(raw) = data.strip_prefix("slot_") {
            return NaiveDateTime::parse_from_str(raw, SLOT_FORMAT)
                .ok()
                .map(CallbackAction::Slot);
        }
        if let Some(raw) = data.strip_prefix("accept_") {
            return raw.parse().ok().map(CallbackAction::Accept);
        }
        if let Some(raw) = data.strip_prefix("reject_") {
            return raw.parse().ok().map(CallbackAction::Reject);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn payloads_round_trip() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let slot = date.and_hms_opt(14, 30, 0).unwrap();
        let actions = [
            CallbackAction::Category(ServiceCategory::Women),
            CallbackAction::Category(ServiceCategory::Men),
            CallbackAction::Service(Service::WomenColoring),
            CallbackAction::Date(date),
            CallbackAction::Page(PageNav::Prev),
            CallbackAction::Page(PageNav::Next),
            CallbackAction::Slot(slot),
            CallbackAction::Accept(42),
            CallbackAction::Reject(7),
            CallbackAction::NewBooking,
        ];
        for action in actions {
            assert_eq!(CallbackAction::parse(&action.payload()), Some(action));
        }
    }

    #[test]
    fn malformed_payloads_are_rejected() {
        for data in [
            "",
            "noop",
            "cat_kids",
            "svc_pedicure",
            "date_2026-13-99",
            "page_sideways",
            "slot_2026-08-07",
            "slot_today",
            "accept_",
            "accept_abc",
            "reject_-5",
        ] {
            assert_eq!(CallbackAction::parse(data), None, "payload {:?}", data);
        }
    }
}
