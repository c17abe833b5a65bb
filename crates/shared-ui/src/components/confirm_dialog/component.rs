use dioxus::prelude::*;

use crate::{
    Alert, Button, ButtonVariant, Sheet, SheetContent, SheetDescription, SheetFooter, SheetHeader,
    SheetSide, SheetTitle,
};

/// Centered confirmation for destructive actions.
///
/// The dialog stays open while `pending` is true and while `error` is set, so
/// a failed action can be retried from the same dialog. Closing is always the
/// caller's decision through `on_cancel`.
#[component]
pub fn ConfirmDialog(
    open: bool,
    title: String,
    description: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    #[props(default = "Deleting...".to_string())] pending_label: String,
    #[props(default = false)] pending: bool,
    #[props(default)] error: Option<String>,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        Sheet {
            open,
            side: SheetSide::Center,
            on_close: move |_| {
                if !pending {
                    on_cancel.call(());
                }
            },
            SheetHeader {
                SheetTitle { "{title}" }
                SheetDescription { "{description}" }
            }
            SheetContent {
                if let Some(err) = error.as_ref() {
                    Alert { "{err}" }
                }
            }
            SheetFooter {
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: pending,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    disabled: pending,
                    onclick: move |_| on_confirm.call(()),
                    if pending { "{pending_label}" } else { "{confirm_label}" }
                }
            }
        }
    }
}
