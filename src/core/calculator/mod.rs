pub mod break_bonus;
pub mod day_total;
pub mod week_totals;
pub mod week_window;
