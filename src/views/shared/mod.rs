pub mod header;
pub mod widgets;

pub use header::{render_header, render_sign_out};
pub use widgets::{render_button, render_field, render_spinner};
