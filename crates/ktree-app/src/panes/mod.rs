mod detail_panel;
mod list_panel;

pub use detail_panel::DetailPanel;
pub use list_panel::ListPanel;
