use chrono::Utc;
use tarikh::{CalendarState, Script};

fn main() {
    let mut today = CalendarState::from_datetime(&Utc::now());

    println!("Gregorian: {}", today.gregorian());
    println!("Iranian:   {}", today.iranian());
    println!("{}", today.jdn());
    println!("{}", today.format("%A %d %B %Y", Script::Latin));
    println!("{}", today.format("%A %d %B %Y", Script::Persian));

    today.advance(1);
    println!("Tomorrow:  {} ({} days in month)", today, today.month_length());
}
