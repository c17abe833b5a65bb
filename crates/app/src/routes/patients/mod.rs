mod delete_dialog;
mod detail;
mod form_sheet;
mod table;

pub use delete_dialog::DeletePatientDialog;
pub use detail::PatientDetailSheet;
pub use form_sheet::{NewPatientSheet, UpdatePatientSheet};
pub use table::PatientTable;
