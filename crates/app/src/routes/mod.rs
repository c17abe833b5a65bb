pub mod appointments;
pub mod dashboard;
pub mod doctors;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod patients;
pub mod register;

use crate::auth::use_auth;
use crate::fetch::use_cache;
use client::guard::{self, check_access, Access};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdLayoutDashboard, LdLogIn, LdLogOut, LdUserPlus,
};
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant};

use dashboard::{AdminDashboard, Dashboard, DoctorDashboard, PatientDashboard};
use landing::Landing;
use login::Login;
use not_found::NotFound;
use register::Register;

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Landing {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[layout(AuthGuard)]
            #[route("/dashboard")]
            Dashboard {},
            #[route("/dashboard/admin")]
            AdminDashboard {},
            #[route("/dashboard/doctor")]
            DoctorDashboard {},
            #[route("/dashboard/patient")]
            PatientDashboard {},
        #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// The route for one of the fixed paths the session layer hands out.
    pub fn from_path(path: &str) -> Route {
        match path {
            guard::HOME_PATH => Route::Landing {},
            guard::LOGIN_PATH => Route::Login {},
            guard::REGISTER_PATH => Route::Register {},
            guard::ADMIN_DASHBOARD_PATH => Route::AdminDashboard {},
            guard::DOCTOR_DASHBOARD_PATH => Route::DoctorDashboard {},
            guard::PATIENT_DASHBOARD_PATH => Route::PatientDashboard {},
            _ => Route::Dashboard {},
        }
    }
}

/// Renders the dashboards only while a credential is stored.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();
    let route: Route = use_route();

    // Re-run when the session changes (logout from the navbar).
    let _ = auth.state.read();

    match check_access(auth.session(), &route.to_string()) {
        Access::Allow => rsx! { Outlet::<Route> {} },
        Access::Redirect(target) => {
            navigator().replace(Route::from_path(target));
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
    }
}

/// Top navbar, page body and footer shared by every page.
#[component]
fn AppLayout() -> Element {
    let mut auth = use_auth();
    let cache = use_cache();
    let logged_in = auth.is_authenticated();

    let handle_logout = move |_: MouseEvent| {
        auth.sign_out(cache);
        navigator().push(Route::Login {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            header { class: "app-navbar",
                Link { to: Route::Landing {}, class: "app-brand",
                    Icon::<LdActivity> { icon: LdActivity, width: 22, height: 22 }
                    span { "EVA Hospital" }
                }
                nav { class: "app-nav",
                    if logged_in {
                        Link { to: Route::Dashboard {}, class: "app-nav-link",
                            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                            span { "Dashboard" }
                        }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: handle_logout,
                            Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                            span { "Logout" }
                        }
                    } else {
                        Link { to: Route::Login {}, class: "app-nav-link",
                            Icon::<LdLogIn> { icon: LdLogIn, width: 18, height: 18 }
                            span { "Login" }
                        }
                        Link { to: Route::Register {}, class: "app-nav-link",
                            Icon::<LdUserPlus> { icon: LdUserPlus, width: 18, height: 18 }
                            span { "Register" }
                        }
                    }
                }
            }

            main { class: "app-main",
                Outlet::<Route> {}
            }

            footer { class: "app-footer",
                p { "© 2025 EVA Hospital. All rights reserved." }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client::credential::landing_route;
    use shared_types::Role;

    #[test]
    fn session_paths_map_to_routes() {
        assert_eq!(Route::from_path(guard::LOGIN_PATH), Route::Login {});
        assert_eq!(Route::from_path(landing_route(Some(Role::Admin))), Route::AdminDashboard {});
        assert_eq!(Route::from_path(landing_route(Some(Role::Staff))), Route::DoctorDashboard {});
        assert_eq!(Route::from_path(landing_route(Some(Role::Patient))), Route::PatientDashboard {});
        assert_eq!(Route::from_path(landing_route(None)), Route::Dashboard {});
    }

    #[test]
    fn route_paths_agree_with_guard_constants() {
        assert_eq!(Route::Dashboard {}.to_string(), guard::DASHBOARD_PATH);
        assert_eq!(Route::AdminDashboard {}.to_string(), guard::ADMIN_DASHBOARD_PATH);
        assert_eq!(Route::DoctorDashboard {}.to_string(), guard::DOCTOR_DASHBOARD_PATH);
        assert_eq!(Route::PatientDashboard {}.to_string(), guard::PATIENT_DASHBOARD_PATH);
        assert_eq!(Route::Login {}.to_string(), guard::LOGIN_PATH);
    }
}
