mod central_panel;
mod tools_panel;

pub use central_panel::{central_panel, fit_scale};
pub use tools_panel::tools_panel;
