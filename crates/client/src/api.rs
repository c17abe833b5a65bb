//! Typed wrappers over the hospital REST API.
//!
//! Every call goes through [`ApiClient::request`], which attaches the stored
//! credential as a bearer token. Each wrapper accepts exactly one status (or
//! any 2xx, for patient creation); anything else becomes an [`AppError`]
//! carrying that call's fixed message. Causes are logged, never returned.

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{
    AppError, Appointment, ClientConfig, Credentials, DoctorDetail, DoctorSummary,
    NewAppointmentRequest, NewDoctorRequest, NewPatientRequest, Patient, RegisteredUser,
    UpdateAppointmentRequest, UpdateDoctorRequest, UpdatePatientRequest,
};
use std::sync::Arc;

use crate::cache::{CachedData, ResourceKey};
use crate::session::Session;

pub const LOGIN_FAILED: &str = "An error has occurred during login";
pub const REGISTER_FAILED: &str = "An error has occurred during registration";
pub const FETCH_PATIENTS_FAILED: &str = "An error has occurred while fetching the data";
pub const FETCH_PATIENT_FAILED: &str = "An error has occurred while fetching patient details";
pub const CREATE_PATIENT_FAILED: &str = "An error has occurred while creating patient";
pub const UPDATE_PATIENT_FAILED: &str = "An error has occurred while updating patient";
pub const DELETE_PATIENT_FAILED: &str = "An error has occurred while deleting patient";
pub const FETCH_DOCTORS_FAILED: &str = "An error has occurred while fetching doctor data";
pub const FETCH_DOCTOR_FAILED: &str = "An error has occurred while fetching doctor details";
pub const CREATE_DOCTOR_FAILED: &str = "An error has occurred while creating doctor";
pub const UPDATE_DOCTOR_FAILED: &str = "An error has occurred while updating doctor";
pub const DELETE_DOCTOR_FAILED: &str = "An error has occurred while deleting doctor";
pub const FETCH_APPOINTMENTS_FAILED: &str = "An error has occurred while fetching appointment data";
pub const FETCH_APPOINTMENT_FAILED: &str = "An error has occurred while fetching appointment";
pub const CREATE_APPOINTMENT_FAILED: &str = "An error has occurred while creating appointment";
pub const UPDATE_APPOINTMENT_FAILED: &str = "An error has occurred while updating appointment";
pub const CANCEL_APPOINTMENT_FAILED: &str = "An error has occurred while cancelling appointment";

/// Status a call accepts.
#[derive(Debug, Clone, Copy)]
enum Expect {
    Exactly(StatusCode),
    AnySuccess,
}

impl Expect {
    fn accepts(self, status: StatusCode) -> bool {
        match self {
            Expect::Exactly(code) => status == code,
            Expect::AnySuccess => status.is_success(),
        }
    }
}

const OK: Expect = Expect::Exactly(StatusCode::OK);
const CREATED: Expect = Expect::Exactly(StatusCode::CREATED);
const NO_CONTENT: Expect = Expect::Exactly(StatusCode::NO_CONTENT);

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Arc<str>,
    session: Session,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: Arc::from(base_url.trim_end_matches('/')),
            session,
        }
    }

    pub fn from_config(config: &ClientConfig, session: Session) -> Self {
        Self::new(config.api.base_url.clone(), session)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Build a request against the base URL, attaching the bearer credential
    /// when one is stored.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, format!("{}{}", self.base_url, path));
        match self.session.credential() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(
        &self,
        builder: RequestBuilder,
        expect: Expect,
        message: &'static str,
    ) -> Result<Response, AppError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(error = %e, "Request failed before a response arrived");
            AppError::network(message)
        })?;

        let status = response.status();
        if !expect.accepts(status) {
            tracing::warn!(status = status.as_u16(), url = %response.url(), "Unexpected response status");
            return Err(AppError::unexpected_status(message));
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(
        response: Response,
        message: &'static str,
    ) -> Result<T, AppError> {
        response.json::<T>().await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to decode response body");
            AppError::decode(message)
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        message: &'static str,
    ) -> Result<T, AppError> {
        let response = self.send(self.request(Method::GET, path), OK, message).await?;
        Self::decode(response, message).await
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        expect: Expect,
        message: &'static str,
    ) -> Result<Response, AppError> {
        self.send(self.request(method, path).json(body), expect, message)
            .await
    }

    // ── Auth ────────────────────────────────────────────────────────

    /// Exchange credentials for a bearer token. The token is returned, not
    /// stored; callers persist it through [`Session::set_credential`].
    ///
    /// The body is the token itself, either as plain text or as a JSON string.
    #[tracing::instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn login(&self, credentials: &Credentials) -> Result<String, AppError> {
        let response = self
            .send_json(Method::POST, "/auth/login", credentials, OK, LOGIN_FAILED)
            .await?;
        let body = response.text().await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to read login response");
            AppError::decode(LOGIN_FAILED)
        })?;
        let token = serde_json::from_str::<String>(&body).unwrap_or_else(|_| body.trim().to_string());
        if token.is_empty() {
            tracing::warn!("Login response carried no token");
            return Err(AppError::decode(LOGIN_FAILED));
        }
        tracing::info!("Login succeeded");
        Ok(token)
    }

    #[tracing::instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn register(&self, credentials: &Credentials) -> Result<RegisteredUser, AppError> {
        let response = self
            .send_json(Method::POST, "/auth/register", credentials, OK, REGISTER_FAILED)
            .await?;
        Self::decode(response, REGISTER_FAILED).await
    }

    // ── Patients ────────────────────────────────────────────────────

    #[tracing::instrument(skip(self))]
    pub async fn list_patients(&self) -> Result<Vec<Patient>, AppError> {
        self.get_json("/patient/", FETCH_PATIENTS_FAILED).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_patient(&self, id: i64) -> Result<Patient, AppError> {
        self.get_json(&format!("/patient/{id}"), FETCH_PATIENT_FAILED)
            .await
    }

    #[tracing::instrument(skip(self, payload))]
    pub async fn create_patient(&self, payload: &NewPatientRequest) -> Result<(), AppError> {
        self.send_json(
            Method::POST,
            "/patient/add-patient",
            payload,
            Expect::AnySuccess,
            CREATE_PATIENT_FAILED,
        )
        .await?;
        Ok(())
    }

    #[tracing::instrument(skip(self, payload))]
    pub async fn update_patient(
        &self,
        id: i64,
        payload: &UpdatePatientRequest,
    ) -> Result<(), AppError> {
        self.send_json(
            Method::PUT,
            &format!("/patient/{id}"),
            payload,
            OK,
            UPDATE_PATIENT_FAILED,
        )
        .await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_patient(&self, id: i64) -> Result<(), AppError> {
        self.send(
            self.request(Method::DELETE, &format!("/patient/{id}")),
            NO_CONTENT,
            DELETE_PATIENT_FAILED,
        )
        .await?;
        Ok(())
    }

    // ── Doctors ─────────────────────────────────────────────────────

    #[tracing::instrument(skip(self))]
    pub async fn list_doctors(&self) -> Result<Vec<DoctorSummary>, AppError> {
        self.get_json("/doctor/", FETCH_DOCTORS_FAILED).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_doctor(&self, id: i64) -> Result<DoctorDetail, AppError> {
        self.get_json(&format!("/doctor/{id}"), FETCH_DOCTOR_FAILED)
            .await
    }

    #[tracing::instrument(skip(self, payload))]
    pub async fn create_doctor(&self, payload: &NewDoctorRequest) -> Result<(), AppError> {
        self.send_json(Method::POST, "/doctor/", payload, CREATED, CREATE_DOCTOR_FAILED)
            .await?;
        Ok(())
    }

    #[tracing::instrument(skip(self, payload))]
    pub async fn update_doctor(&self, id: i64, payload: &UpdateDoctorRequest) -> Result<(), AppError> {
        self.send_json(
            Method::PUT,
            &format!("/doctor/{id}"),
            payload,
            OK,
            UPDATE_DOCTOR_FAILED,
        )
        .await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_doctor(&self, id: i64) -> Result<(), AppError> {
        self.send(
            self.request(Method::DELETE, &format!("/doctor/{id}")),
            NO_CONTENT,
            DELETE_DOCTOR_FAILED,
        )
        .await?;
        Ok(())
    }

    // ── Appointments ────────────────────────────────────────────────

    #[tracing::instrument(skip(self))]
    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, AppError> {
        self.get_json("/appointment/", FETCH_APPOINTMENTS_FAILED)
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_appointment(&self, id: i64) -> Result<Appointment, AppError> {
        self.get_json(&format!("/appointment/{id}"), FETCH_APPOINTMENT_FAILED)
            .await
    }

    #[tracing::instrument(skip(self, payload))]
    pub async fn create_appointment(&self, payload: &NewAppointmentRequest) -> Result<(), AppError> {
        self.send_json(
            Method::POST,
            "/appointment/",
            payload,
            CREATED,
            CREATE_APPOINTMENT_FAILED,
        )
        .await?;
        Ok(())
    }

    #[tracing::instrument(skip(self, payload))]
    pub async fn update_appointment(
        &self,
        id: i64,
        payload: &UpdateAppointmentRequest,
    ) -> Result<(), AppError> {
        self.send_json(
            Method::PUT,
            &format!("/appointment/{id}"),
            payload,
            OK,
            UPDATE_APPOINTMENT_FAILED,
        )
        .await?;
        Ok(())
    }

    /// Cancelling answers 200 with the cancelled appointment, unlike the
    /// other deletes.
    #[tracing::instrument(skip(self))]
    pub async fn cancel_appointment(&self, id: i64) -> Result<Appointment, AppError> {
        let response = self
            .send(
                self.request(Method::DELETE, &format!("/appointment/{id}")),
                OK,
                CANCEL_APPOINTMENT_FAILED,
            )
            .await?;
        Self::decode(response, CANCEL_APPOINTMENT_FAILED).await
    }

    // ── Cache integration ───────────────────────────────────────────

    /// Fetch the resource a cache key names.
    pub async fn fetch(&self, key: &ResourceKey) -> Result<CachedData, AppError> {
        match *key {
            ResourceKey::Patients => self
                .list_patients()
                .await
                .map(|v| CachedData::Patients(Arc::new(v))),
            ResourceKey::Doctors => self
                .list_doctors()
                .await
                .map(|v| CachedData::Doctors(Arc::new(v))),
            ResourceKey::Appointments => self
                .list_appointments()
                .await
                .map(|v| CachedData::Appointments(Arc::new(v))),
            ResourceKey::Patient(id) => self
                .get_patient(id)
                .await
                .map(|v| CachedData::Patient(Arc::new(v))),
            ResourceKey::Doctor(id) => self
                .get_doctor(id)
                .await
                .map(|v| CachedData::Doctor(Arc::new(v))),
            ResourceKey::Appointment(id) => self
                .get_appointment(id)
                .await
                .map(|v| CachedData::Appointment(Arc::new(v))),
        }
    }
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && self.session == other.session
    }
}
