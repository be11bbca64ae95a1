mod app;
mod draw;
mod input;
mod session;
mod style;

pub use app::App;
pub use draw::render;
pub use input::{cell_under_pointer, collect_actions, pointer_action};
pub use session::{Action, Session};
pub use style::Style;
