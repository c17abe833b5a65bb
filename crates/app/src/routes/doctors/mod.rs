mod delete_dialog;
mod detail;
mod form_sheet;
mod table;

pub use delete_dialog::DeleteDoctorDialog;
pub use detail::DoctorDetailSheet;
pub use form_sheet::{NewDoctorSheet, UpdateDoctorSheet};
pub use table::DoctorTable;
