// UI module exports
pub mod simple;

pub use simple::{render_dev_banner, render_form, render_hints, render_notification};
