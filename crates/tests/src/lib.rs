#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_tests;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod patient_tests;

#[cfg(test)]
mod doctor_tests;

#[cfg(test)]
mod appointment_tests;

#[cfg(test)]
mod cache_tests;
