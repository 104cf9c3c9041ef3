/// Number of months in both calendars
pub const MAX_MONTH: u8 = 12;

/// Largest day number accepted by the range sanity check
pub const MAX_DAY: u8 = 31;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days elapsed in a common Gregorian year before the first of each month
pub(crate) const CUMULATIVE_DAYS: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Day-count offset of the Gregorian side of the converter
pub(crate) const GREGORIAN_EPOCH: i64 = 355_666;
/// Day-count offset of the Jalali side of the converter
pub(crate) const JALALI_EPOCH: i64 = -355_668;
/// Year shift between the converter's internal Jalali count and civil years
pub(crate) const JALALI_YEAR_SHIFT: i64 = 1595;

/// Days in a 33-year Jalali leap cycle
pub(crate) const JALALI_CYCLE_DAYS: i64 = 12_053;
/// Years in a Jalali leap cycle
pub(crate) const JALALI_CYCLE_YEARS: i64 = 33;
/// Leap years within one Jalali cycle
pub(crate) const JALALI_CYCLE_LEAPS: i64 = 8;

/// Days in 400 Gregorian years
pub(crate) const DAYS_PER_400_YEARS: i64 = 146_097;
/// Days in 100 Gregorian years starting with a common century year
pub(crate) const DAYS_PER_100_YEARS: i64 = 36_524;
/// Days in a four-year cycle of either calendar
pub(crate) const DAYS_PER_4_YEARS: i64 = 1461;
/// Days in a common year
pub(crate) const DAYS_PER_YEAR: i64 = 365;

/// Jalali months 1..=6 have 31 days
pub const JALALI_LONG_MONTH_DAYS: u8 = 31;
/// Jalali months 7..=11 have 30 days, and Esfand in leap years
pub const JALALI_SHORT_MONTH_DAYS: u8 = 30;
/// Esfand in common years
pub const ESFAND_DAYS_COMMON: u8 = 29;
/// Day of year on which the 30-day months begin (0-based)
pub(crate) const JALALI_SECOND_HALF_START: i64 = 186;

/// Separator between date components, both for parsing and display
pub const DATE_SEPARATOR: char = '/';
