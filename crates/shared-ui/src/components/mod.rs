// Layout and content
pub mod card;
pub mod detail_list;
pub mod page_header;
pub mod stat_card;

// Inputs
pub mod button;
pub mod form;
pub mod form_select;
pub mod input;
pub mod textarea;

// Data display
pub mod alert;
pub mod badge;
pub mod data_table;
pub mod skeleton;

// Overlays (confirm_dialog depends on sheet and button)
pub mod confirm_dialog;
pub mod sheet;

pub use alert::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use confirm_dialog::*;
pub use data_table::*;
pub use detail_list::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use sheet::*;
pub use skeleton::*;
pub use stat_card::*;
pub use textarea::*;
