pub mod banner;
pub mod form;
pub mod panel;
pub mod popup;

pub use banner::{Banner, BannerVariant};
pub use form::{FormField, FormModel, FormOutcome, FormState};
pub use panel::{render_panel, PanelConfig};
pub use popup::{centered_rect, render_confirm_popup, render_input_popup, render_popup_with_block};
