mod canvas_panel;
mod style_panel;

pub use canvas_panel::canvas_panel;
pub use style_panel::style_panel;
