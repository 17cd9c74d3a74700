use chrono::NaiveDate;

use super::{Service, ServiceCategory};

/// Состояние диалога записи: один вариант на шаг, в каждом только те
/// поля, которые на этом шаге действительны.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingDialog {
    SelectCategory,
    SelectService { category: ServiceCategory },
    SelectDate { service: Service },
    SelectSlot { service: Service, date: NaiveDate, page: usize },
}
