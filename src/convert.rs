//! Closed-form day-count arithmetic between the Gregorian and Jalali calendars.
//!
//! Both directions map a date to a single day count and decompose it with the
//! target calendar's leap cycles. All divisions are floor divisions, so years
//! before the epochs of either calendar still decompose consistently.

use crate::consts::{
    CUMULATIVE_DAYS, DAYS_PER_100_YEARS, DAYS_PER_400_YEARS, DAYS_PER_4_YEARS, DAYS_PER_YEAR,
    GREGORIAN_EPOCH, JALALI_CYCLE_DAYS, JALALI_CYCLE_LEAPS, JALALI_CYCLE_YEARS, JALALI_EPOCH,
    JALALI_LONG_MONTH_DAYS, JALALI_SECOND_HALF_START, JALALI_SHORT_MONTH_DAYS, JALALI_YEAR_SHIFT,
    MAX_MONTH,
};
use crate::Error;
use crate::types::days_in_month;

const LONG: i64 = JALALI_LONG_MONTH_DAYS as i64;
const SHORT: i64 = JALALI_SHORT_MONTH_DAYS as i64;

/// Converts a Gregorian `(year, month, day)` to Jalali.
///
/// `month` must be in `1..=12`; `day` is not checked against the month length.
/// Fails with `Error::YearOutOfRange` if the Jalali year does not fit in `i32`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn gregorian_to_jalali(year: i32, month: u8, day: u8) -> Result<(i32, u8, u8), Error> {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    let gy = i64::from(year);
    // March onwards counts the leap day of the current year
    let gy2 = if month > 2 { gy + 1 } else { gy };

    let mut days = GREGORIAN_EPOCH
        + DAYS_PER_YEAR * gy
        + (gy2 + 3).div_euclid(4)
        - (gy2 + 99).div_euclid(100)
        + (gy2 + 399).div_euclid(400)
        + i64::from(day)
        + CUMULATIVE_DAYS[usize::from(month - 1)];

    let mut jy = -JALALI_YEAR_SHIFT + JALALI_CYCLE_YEARS * days.div_euclid(JALALI_CYCLE_DAYS);
    days = days.rem_euclid(JALALI_CYCLE_DAYS);
    jy += 4 * days.div_euclid(DAYS_PER_4_YEARS);
    days = days.rem_euclid(DAYS_PER_4_YEARS);

    if days > DAYS_PER_YEAR {
        jy += (days - 1).div_euclid(DAYS_PER_YEAR);
        days = (days - 1).rem_euclid(DAYS_PER_YEAR);
    }

    let (jm, jd) = if days < JALALI_SECOND_HALF_START {
        (1 + days / LONG, 1 + days % LONG)
    } else {
        let rest = days - JALALI_SECOND_HALF_START;
        (7 + rest / SHORT, 1 + rest % SHORT)
    };

    let jy = i32::try_from(jy).map_err(|_| Error::YearOutOfRange(jy))?;
    Ok((jy, jm as u8, jd as u8))
}

/// Converts a Jalali `(year, month, day)` to Gregorian.
///
/// `month` must be in `1..=12`; `day` is not checked against the month length.
/// Fails with `Error::YearOutOfRange` if the Gregorian year does not fit in `i32`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn jalali_to_gregorian(year: i32, month: u8, day: u8) -> Result<(i32, u8, u8), Error> {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    let jy = i64::from(year) + JALALI_YEAR_SHIFT;
    let jm = i64::from(month);

    let mut days = JALALI_EPOCH
        + DAYS_PER_YEAR * jy
        + jy.div_euclid(JALALI_CYCLE_YEARS) * JALALI_CYCLE_LEAPS
        + (jy.rem_euclid(JALALI_CYCLE_YEARS) + 3).div_euclid(4)
        + i64::from(day);

    days += if jm < 7 {
        (jm - 1) * LONG
    } else {
        (jm - 7) * SHORT + JALALI_SECOND_HALF_START
    };

    let mut gy = 400 * days.div_euclid(DAYS_PER_400_YEARS);
    days = days.rem_euclid(DAYS_PER_400_YEARS);

    if days > DAYS_PER_100_YEARS {
        days -= 1;
        gy += 100 * days.div_euclid(DAYS_PER_100_YEARS);
        days = days.rem_euclid(DAYS_PER_100_YEARS);
        if days >= DAYS_PER_YEAR {
            days += 1;
        }
    }

    gy += 4 * days.div_euclid(DAYS_PER_4_YEARS);
    days = days.rem_euclid(DAYS_PER_4_YEARS);

    if days > DAYS_PER_YEAR {
        gy += (days - 1).div_euclid(DAYS_PER_YEAR);
        days = (days - 1).rem_euclid(DAYS_PER_YEAR);
    }

    let gy = i32::try_from(gy).map_err(|_| Error::YearOutOfRange(gy))?;
    let mut gd = days + 1;
    let mut gm = 1;
    while gm < MAX_MONTH && gd > i64::from(days_in_month(gy, gm)) {
        gd -= i64::from(days_in_month(gy, gm));
        gm += 1;
    }

    Ok((gy, gm, gd as u8))
}
