pub mod day_entry;
pub mod hours;
pub mod summary_row;
