//! Named days of the Jalali year.

use crate::locale::{Language, to_farsi_digits};
use crate::{Error, Month, grid::MonthSelector, jalali_of};
use chrono::NaiveDate;
use std::io::Write;

/// Separator between several events of the same day.
const EVENT_SEPARATOR: &str = " - ";

/// Day of month and the events on it.
pub type DayEvents = (u8, &'static [&'static str]);

static FARVARDIN: &[DayEvents] = &[
    (1, &["جشن نوروز/جشن سال نو"]),
    (2, &["عید نوروز"]),
    (3, &["روز جهانی هواشناسی", "عید نوروز"]),
    (4, &["عیدنوروز"]),
    (6, &["زادروز آشو زرتشت، اَبَراِنسان بزرگ تاریخ", "روز امید، روز شادباش نویسی"]),
    (7, &["روز جهانی تئاتر"]),
    (10, &["جشن آبانگاه"]),
    (12, &["روز جمهوری اسلامی"]),
    (13, &["جشن سیزده به در"]),
    (17, &["سروش روز ،جشن سروشگان"]),
    (18, &["روز جهانی بهداشت"]),
    (19, &["روز جشن فروردینگان"]),
    (23, &["روز دندانپزشک"]),
    (25, &["روز بزرگداشت عطار نیشابوری"]),
    (29, &["روز ارتش جمهوری اسلامی ایران"]),
    (30, &["روز علوم آزمایشگاهی، زاد روز حکیم سید اسماعیل جرجانی"]),
];

static ORDIBEHESHT: &[DayEvents] = &[
    (1, &["روز بزرگداشت سعدی"]),
    (2, &["جشن گیاه آوری؛ روز زمین"]),
    (3, &["روزبزرگداشت شیخ بهایی؛ روزملی کارآفرینی؛ روز معماری"]),
    (7, &["روز جهانی طراحی و گرافیک"]),
    (9, &["روز ملی روانشناس و مشاور", "روزشوراها"]),
    (10, &["جشن چهلم نوروز؛ روز ملی خلیج فارس"]),
    (11, &["روزجهانی کارگر"]),
    (12, &["روز معلم"]),
    (15, &["روز جهانی ماما", "جشن میانه بهار/جشن بهاربد؛ روز شیراز"]),
    (18, &["روز جهانی صلیب سرخ و هلال احمر"]),
    (22, &["زادروز مریم میرزاخانی ریاضیدان ایرانی، روز جهانی زن در ریاضیات"]),
    (25, &["روز بزرگداشت فردوسی"]),
    (27, &["روز ارتباطات و روابط عمومی"]),
    (28, &["روز جهانی موزه و میراث فرهنگی", "روز بزرگداشت حکیم عمر خیام"]),
];

static KHORDAD: &[DayEvents] = &[
    (1, &["روز بزرگداشت ملاصدرا", "روز بهره وری و بهینه سازی مصرف"]),
    (3, &["فتح خرمشهر در عملیات بیت المقدس و روز مقاومت، ایثار و پیروزی"]),
    (4, &["روز دزفول، روز مقاومت و پایداری"]),
    (6, &["خرداد روز،جشن خردادگان"]),
    (10, &["روز جهانی بدون دخانیات"]),
    (14, &["رحلت حضرت امام خمینی"]),
    (15, &["روز جهانی محیط زیست", "قیام ۱۵ خرداد"]),
    (20, &["روز جهانی صنایع دستی"]),
    (22, &["روز جهانی مبارزه با کار کودکان"]),
    (24, &["رروز جهانی اهدای خون"]),
    (25, &["روز ملی گل وگیاه"]),
    (27, &["روز جهانی بیابان زدایی", "روز جهاد کشاورزی"]),
];

static TIR: &[DayEvents] = &[
    (1, &["روز اصناف", "جشن آب پاشونک، جشن آغاز تابستان"]),
    (5, &["روز جهانی مبارزه با مواد مخدر"]),
    (7, &["انفجار دفتر حزب جمهوری اسلامی و شهادت دکتر بهشتی و ۷۲ نفر از اعضای حزب؛ روز قوه قضاییه"]),
    (8, &["روز مبارزه با سلاح های شیمیایی و میکروبی"]),
    (10, &["روز صنعت و معدن"]),
    (12, &["شلیک به پرواز ۶۵۵ ایران ایر توسط ناو وینسنس"]),
    (13, &["تیر روز،جشن تیرگان"]),
    (14, &["روز قلم"]),
    (15, &["جشن خام خواری"]),
    (22, &["زادروز محمد خوارزمی، ریاضیدان و فیلسوف ایرانی و روز ملی فناوری اطلاعات"]),
    (25, &["روز بهزیستی و تامین اجتماعی"]),
    (27, &["اعلام پذیرش قطعنامه ۵۹۸ شورای امنیت از سوی ایران"]),
];

static MORDAD: &[DayEvents] = &[
    (6, &["روز ترویج آموزش های فنی و حرفه ای"]),
    (7, &["َمرداد روز، جشن اَمردادگان"]),
    (8, &["روز بزرگداشت شیخ شهاب الدین سهروردی"]),
    (10, &["آغاز هفته جهانی شیردهی", "جشن چله تابستان"]),
    (14, &["صدور فرمان مشروطیت"]),
    (17, &["روز خبرنگار"]),
    (22, &["روز جهانی چپ دست ها"]),
    (28, &["روز جهانی عکاسی", "سالروز فاجعه آتش زدن سینما رکس آبادان", "سالروز وقایع ۲۸ مرداد پس از برکناری محمد مصدق"]),
];

static SHAHRIVAR: &[DayEvents] = &[
    (1, &["روز بزرگداشت ابوعلی سینا و روز پزشک"]),
    (2, &["آغاز هفته دولت"]),
    (4, &["شهریور روز، جشن شهریورگان", "زادروز داراب (کوروش)"]),
    (5, &["روز بزرگداشت محمدبن زکریای رازی و روز داروساز"]),
    (8, &["انفجار در دفتر نخست‌وزیری جمهوری اسلامی ایران، روز مبارزه با تروریسم"]),
    (11, &["روز صنعت چاپ"]),
    (13, &["روز بزرگداشت ابوریحان بیرونی"]),
    (17, &["قیام ۱۷ شهریور"]),
    (19, &["روز جهانی پیشگیری از خودکشی"]),
    (20, &["حمله به برج‌های دوقلوی مرکز تجارت جهانی"]),
    (21, &["روز سینما"]),
    (22, &["به قتل رسیدن مهسا امینی توسط جمهوری اسلامی در سال ۱۴۰۱ و شروع اعتراضات سراسری (زن، زندگی، آزادی)", "روز گرامیداشت برنامه نویسان"]),
    (27, &["روز شعر و ادب پارسی و روز بزرگداشت استاد شهریار"]),
    (30, &["روز جهانی صلح"]),
    (31, &["آغاز هفته دفاع مقدس"]),
];

static MEHR: &[DayEvents] = &[
    (1, &["آغاز حمله مغول به ایران در پاییز ۵۹۸ خورشیدی"]),
    (5, &["روز جهانی جهانگردی"]),
    (7, &["سقوط هواپیمای حامل جمعی از فرماندهان جنگ (کلاهدوز، نامجو، فلاحی، فکوری، جهان آرا) در سال ۱۳۶۰", "روز آتش نشانی و ایمنی", "روز بزرگداشت شمس تبریزی"]),
    (8, &["جمعه خونین زاهدان، اعتراضات سراسری سال ۱۴۰۱", "روز جهانی ترجمه و مترجم", "روز جهانی ناشنوایان", "روز بزرگداشت مولوی"]),
    (9, &["روز جهانی سالمندان"]),
    (10, &["مهر روز،جشن مهرگان"]),
    (12, &["آغاز هفته جهانی فضا"]),
    (13, &["روز جهانی معلم", "روز نیروی انتظامی"]),
    (14, &["روز دامپزشکی"]),
    (16, &["روز ملی کودک"]),
    (17, &["روز جهانی پست"]),
    (18, &["روز جهانی مبارزه با حکم اعدام"]),
    (19, &["روز جهانی دختر"]),
    (20, &["روز بزرگداشت حافظ"]),
    (21, &["روز پیروزی کاوه و فریدون بر ضحاک"]),
    (22, &["روز جهانی استاندارد"]),
    (23, &["روز جهانی عصای سفید"]),
    (24, &["روز جهانی غذا"]),
    (25, &["روز جهانی ریشه کنی فقر"]),
    (26, &["روز تربیت بدنی و ورزش"]),
    (29, &["روز ملی کوهنورد"]),
];

static ABAN: &[DayEvents] = &[
    (1, &["روز آمار و برنامه ریزی"]),
    (7, &["سالروز ورود کوروش بزرگ به بابل در سال ۵۳۹ پیش از میلاد"]),
    (8, &["روز نوجوان"]),
    (10, &["آبان روز، جشن آبانگان"]),
    (13, &["روز دانش آموز"]),
    (14, &["روز فرهنگ عمومی"]),
    (15, &["جشن میانه پاییز"]),
    (18, &["روز ملی کیفیت"]),
    (23, &["روز جهانی دیابت"]),
    (24, &["شروع اعتراضات سراسری به دلیل گران شدن نرخ بنزین در سال ۱۳۹۸", "روز کتاب و کتابخوانی"]),
    (26, &["روز جهانی فلسفه"]),
    (28, &["روز جهانی آقایان"]),
    (29, &["روز جهانی کودک"]),
];

static AZAR: &[DayEvents] = &[
    (1, &["آذر جشن"]),
    (4, &["روز جهانی مبارزه با خشونت علیه زنان"]),
    (5, &["روز بسیج مستضعفان"]),
    (7, &["روز نیروی دریایی"]),
    (9, &["جشن آذرگان ،آذر روز"]),
    (10, &["روز جهانی ایدز", "روز مجلس"]),
    (12, &["روز جهانی معلولان"]),
    (13, &["روز بیمه"]),
    (15, &["روز حسابدار"]),
    (16, &["روز دانشجو"]),
    (19, &["روز جهانی حقوق بشر"]),
    (20, &["روز جهانی کوه نوردی"]),
    (25, &["روز پژوهش"]),
    (26, &["روز حمل و نقل"]),
    (30, &["جشن شب یلدا"]),
];

static DEY: &[DayEvents] = &[
    (1, &["روز میلاد خورشید؛ جشن خرم روز، نخستین جشن دیگان"]),
    (4, &["روز بزرگداشت دوستی", "جشن کریسمس"]),
    (5, &["سالروز شهادت آشو زرتشت، اَبَراِنسان بزرگ تاریخ", "زمین لرزه ی بم ۱۳۸۲"]),
    (8, &["دی به آذر روز، دومین جشن دیگان"]),
    (11, &["جشن آغاز سال نو میلادی"]),
    (13, &["شهادت سردار حاج قاسم سلیمانی در سال ۱۳۹۸"]),
    (15, &["دی به مهر روز، سومین جشن دیگان"]),
    (16, &["غرق شدن کشتی سانچی در سال ۱۳۹۶"]),
    (18, &["شلیک به پرواز ۷۵۲ هواپیمایی اوکراین توسط جمهوری اسلامی در سال ۱۳۹۸"]),
    (19, &["درگذشت اکبر هاشمی رفسنجانی در سال ۱۳۹۵"]),
    (20, &["قتل امیرکبیر به دستور ناصرالدین شاه قاجار در سال ۱۲۳۰"]),
    (23, &["دی به دین روز، چهارمین جشن دیگان"]),
    (30, &["آتش سوزی و فروریختن ساختمان پلاسکو در سال ۱۳۹۵"]),
];

static BAHMAN: &[DayEvents] = &[
    (1, &["زادروز فردوسی"]),
    (2, &["بهمن روز، جشن بهمنگان"]),
    (5, &["جشن نوسره"]),
    (10, &["جشن سده"]),
    (12, &["بازگشت امام خمینی به ایران"]),
    (15, &["جشن میانه زمستان"]),
    (19, &["روز نیروی هوایی"]),
    (22, &["حمله به سفارت روسیه و قتل گریبایدوف سفیر روسیه تزاری در ایران", "پیروزی انقلاب اسلامی"]),
    (23, &["زادروز چارلز داروین بنیانگذار نظریه‌ی فرگشت از طریق انتخاب طبیعی"]),
    (25, &["جشن ولنتاین"]),
    (29, &["فاجعه انفجار قطار نیشابور در سال ۱۳۸۲", "جشن سپندارمذگان و روز عشق"]),
];

static ESFAND: &[DayEvents] = &[
    (5, &["روز بزرگداشت خواجه نصیر الدین طوسی و روز مهندس", "روز بزرگداشت زمین و بانوان"]),
    (7, &["سالروز درگذشت علی اکبر دهخدا", "سالروز استقلال کانون وکلای دادگستری و روز وکیل مدافع"]),
    (15, &["روز درختکاری"]),
    (18, &["روزجهانی زنان"]),
    (24, &["روز جهانی عدد پی"]),
    (25, &["پایان سرایش شاهنامه"]),
    (29, &["روز ملی شدن صنعت نفت ایران"]),
];

static EVENTS: [&[DayEvents]; 12] = [
    FARVARDIN,
    ORDIBEHESHT,
    KHORDAD,
    TIR,
    MORDAD,
    SHAHRIVAR,
    MEHR,
    ABAN,
    AZAR,
    DEY,
    BAHMAN,
    ESFAND,
];

/// Event table of `month`, ordered by day.
pub fn month_events(month: Month) -> &'static [DayEvents] {
    EVENTS[month.index()]
}

/// Events of the selected month as `(day, description)` pairs.
///
/// Days are labelled with Farsi digits and stay in day order; several events
/// on one day are joined with `" - "`.
///
/// # Errors
/// Returns `Error::YearOutOfRange` if `today` has no Jalali equivalent.
pub fn events(
    selector: MonthSelector,
    today: NaiveDate,
) -> Result<Vec<(String, String)>, Error> {
    let month = selector.resolve(jalali_of(today)?);
    let table = month_events(month);
    tracing::debug!(month = month.get(), days = table.len(), "selected events");
    let pairs = table
        .iter()
        .map(|(day, descriptions)| {
            (
                to_farsi_digits(&day.to_string()),
                descriptions.join(EVENT_SEPARATOR),
            )
        })
        .collect();
    Ok(pairs)
}

/// Events of the selected month as `<month name> <day>: <event>` lines.
///
/// # Errors
/// Same as [`events`].
pub fn event_lines(selector: MonthSelector, today: NaiveDate) -> Result<Vec<String>, Error> {
    let month = selector.resolve(jalali_of(today)?);
    let name = Language::Farsi.month_name(month);
    let lines = events(selector, today)?
        .into_iter()
        .map(|(day, event)| format!("{name} {day}: {event}"))
        .collect();
    Ok(lines)
}

/// Prints the events of the selected month for the local date.
///
/// # Errors
/// Returns `Error::Io` if standard output cannot be written, otherwise the
/// errors of [`events`].
pub fn print_events(selector: MonthSelector) -> Result<(), Error> {
    let today = chrono::Local::now().date_naive();
    let lines = event_lines(selector, today)?;
    let mut stdout = std::io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{line}")?;
    }
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nowruz() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
    }

    #[test]
    fn test_every_month_has_sorted_days() {
        for table in EVENTS {
            assert!(!table.is_empty());
            assert!(table.windows(2).all(|pair| pair[0].0 < pair[1].0));
            assert!(table.iter().all(|(day, events)| (1..=31).contains(day) && !events.is_empty()));
        }
    }

    #[test]
    fn test_month_events() {
        let farvardin = month_events(Month::FIRST);
        assert_eq!(farvardin[0], (1, &["جشن نوروز/جشن سال نو"][..]));
    }

    #[test]
    fn test_events_current_month() {
        let pairs = events(MonthSelector::Now, nowruz()).unwrap();
        assert_eq!(pairs[0], ("۱".to_owned(), "جشن نوروز/جشن سال نو".to_owned()));
        assert_eq!(
            pairs[2],
            ("۳".to_owned(), "روز جهانی هواشناسی - عید نوروز".to_owned())
        );
    }

    #[test]
    fn test_events_keep_day_order() {
        let pairs = events(MonthSelector::Now, nowruz()).unwrap();
        let labels: Vec<&str> = pairs.iter().map(|(day, _)| day.as_str()).collect();
        let two = labels.iter().position(|l| *l == "۲").unwrap();
        let ten = labels.iter().position(|l| *l == "۱۰").unwrap();
        assert!(two < ten);
    }

    #[test]
    fn test_events_selected_month() {
        let esfand = MonthSelector::Month(Month::new(12).unwrap());
        let pairs = events(esfand, nowruz()).unwrap();
        assert_eq!(pairs.len(), month_events(Month::new(12).unwrap()).len());
    }

    #[test]
    fn test_event_lines() {
        let lines = event_lines(MonthSelector::Now, nowruz()).unwrap();
        assert_eq!(lines[0], "فروردین ۱: جشن نوروز/جشن سال نو");
        assert_eq!(lines.len(), month_events(Month::FIRST).len());
    }
}
