pub mod app_time;
pub mod number_format;

pub use number_format::{
    format_currency, format_fixed, format_floored, format_grouped, format_plain,
    format_signed_currency, group_thousands,
};
