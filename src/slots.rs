use chrono::{DateTime, NaiveDate, NaiveTime, Timelike};
use chrono_tz::Tz;

/// Все получасовые слоты даты в рабочем окне `[open:00, close:00)`.
///
/// Для сегодняшней даты (в настроенной зоне) прошедшие слоты
/// отбрасываются; текущая получасовая граница остаётся доступной.
/// Детерминирована: `now` передаётся снаружи.
pub fn generate_slots(
    date: NaiveDate,
    now: DateTime<Tz>,
    open_hour: u32,
    close_hour: u32,
) -> Vec<NaiveTime> {
    let today = now.date_naive();
    if date < today {
        return Vec::new();
    }

    let mut slots = Vec::new();
    for hour in open_hour..close_hour {
        for minute in [0, 30] {
            if let Some(time) = NaiveTime::from_hms_opt(hour, minute, 0) {
                slots.push(time);
            }
        }
    }

    if date == today {
        let floor = floor_to_half_hour(now.time());
        slots.retain(|slot| *slot >= floor);
    }

    slots
}

fn floor_to_half_hour(time: NaiveTime) -> NaiveTime {
    let minute = if time.minute() < 30 { 0 } else { 30 };
    NaiveTime::from_hms_opt(time.hour(), minute, 0).unwrap_or(time)
}

/// Страница последовательности: срез, есть-ли-назад, есть-ли-вперёд.
///
/// Корректность индекса страницы — контракт вызывающего; выход за
/// границы даёт пустой срез, а не панику.
pub fn page_slots<T>(items: &[T], page: usize, size: usize) -> (&[T], bool, bool) {
    let start = page.saturating_mul(size).min(items.len());
    let end = start.saturating_add(size).min(items.len());
    let has_next = page.saturating_add(1).saturating_mul(size) < items.len();
    (&items[start..end], page > 0, has_next)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono_tz::Europe::Moscow;

    use super::*;

    fn moscow(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Tz> {
        Moscow.with_ymd_and_hms(y, mo, d, h, mi, 0).single().unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn future_date_keeps_the_full_grid() {
        let now = moscow(2026, 8, 7, 18, 45);
        let tomorrow = NaiveDate::from_ymd_opt(2026, 8, 8).unwrap();
        let slots = generate_slots(tomorrow, now, 9, 24);

        assert_eq!(slots.len(), 30);
        assert_eq!(slots[0], time(9, 0));
        assert_eq!(*slots.last().unwrap(), time(23, 30));
    }

    #[test]
    fn today_drops_slots_before_the_rounded_now() {
        let now = moscow(2026, 8, 7, 14, 45);
        let today = now.date_naive();
        let slots = generate_slots(today, now, 9, 24);

        assert_eq!(slots[0], time(14, 30));
        assert!(slots.iter().all(|slot| *slot >= time(14, 30)));
    }

    #[test]
    fn current_half_hour_boundary_stays_available() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();

        let on_boundary = generate_slots(today, moscow(2026, 8, 7, 14, 30), 9, 24);
        assert_eq!(on_boundary[0], time(14, 30));

        let just_before = generate_slots(today, moscow(2026, 8, 7, 14, 29), 9, 24);
        assert_eq!(just_before[0], time(14, 0));
    }

    #[test]
    fn late_evening_empties_a_short_working_day() {
        let now = moscow(2026, 8, 7, 20, 10);
        let slots = generate_slots(now.date_naive(), now, 9, 20);
        assert!(slots.is_empty());
    }

    #[test]
    fn past_date_has_no_slots() {
        let now = moscow(2026, 8, 7, 10, 0);
        let yesterday = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        assert!(generate_slots(yesterday, now, 9, 24).is_empty());
    }

    #[test]
    fn pager_round_trip_reproduces_the_sequence() {
        for len in [0usize, 1, 9, 10, 100] {
            let items: Vec<usize> = (0..len).collect();
            let mut collected = Vec::new();
            let mut page = 0;
            loop {
                let (chunk, has_prev, has_next) = page_slots(&items, page, 9);
                assert_eq!(has_prev, page > 0, "len={} page={}", len, page);
                collected.extend_from_slice(chunk);
                if !has_next {
                    break;
                }
                page += 1;
            }
            assert_eq!(collected, items, "len={}", len);
        }
    }

    #[test]
    fn page_past_the_end_is_empty_with_no_next() {
        let items: Vec<usize> = (0..10).collect();
        let (chunk, has_prev, has_next) = page_slots(&items, 5, 9);
        assert!(chunk.is_empty());
        assert!(has_prev);
        assert!(!has_next);
    }

    #[test]
    fn exact_multiple_has_no_trailing_empty_page() {
        let items: Vec<usize> = (0..9).collect();
        let (chunk, has_prev, has_next) = page_slots(&items, 0, 9);
        assert_eq!(chunk.len(), 9);
        assert!(!has_prev);
        assert!(!has_next);
    }
}
