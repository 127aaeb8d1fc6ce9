use barberbook_core::models::appointment::AppointmentStatus;
use barberbook_core::models::service::{CreateServiceRequest, UpdateServiceRequest};
use chrono::NaiveDate;
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbAppointment, DbBarber, DbService, DbShopSettings};
use crate::repositories::appointment::NewAppointment;

// Mock repositories for testing
mock! {
    pub AppointmentRepo {
        pub async fn create_appointment(
            &self,
            new: NewAppointment,
        ) -> eyre::Result<DbAppointment>;

        pub async fn get_appointment_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbAppointment>>;

        pub async fn get_blocking_appointments_by_date(
            &self,
            date: NaiveDate,
        ) -> eyre::Result<Vec<DbAppointment>>;

        pub async fn get_appointments_by_client(
            &self,
            client_id: &'static str,
        ) -> eyre::Result<Vec<DbAppointment>>;

        pub async fn update_appointment_status(
            &self,
            id: Uuid,
            status: AppointmentStatus,
        ) -> eyre::Result<Option<DbAppointment>>;
    }
}

mock! {
    pub ServiceRepo {
        pub async fn create_service(
            &self,
            request: CreateServiceRequest,
        ) -> eyre::Result<DbService>;

        pub async fn get_service_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbService>>;

        pub async fn get_services(
            &self,
            only_enabled: bool,
        ) -> eyre::Result<Vec<DbService>>;

        pub async fn update_service(
            &self,
            id: Uuid,
            request: UpdateServiceRequest,
        ) -> eyre::Result<Option<DbService>>;

        pub async fn delete_service(
            &self,
            id: Uuid,
        ) -> eyre::Result<bool>;
    }
}

mock! {
    pub BarberRepo {
        pub async fn create_barber(
            &self,
            name: &'static str,
        ) -> eyre::Result<DbBarber>;

        pub async fn get_barbers(&self) -> eyre::Result<Vec<DbBarber>>;

        pub async fn delete_barber(
            &self,
            id: Uuid,
        ) -> eyre::Result<bool>;
    }
}

mock! {
    pub ShopSettingsRepo {
        pub async fn get_shop_settings(&self) -> eyre::Result<Option<DbShopSettings>>;

        pub async fn upsert_shop_settings(
            &self,
            opening_time: &'static str,
            closing_time: &'static str,
        ) -> eyre::Result<DbShopSettings>;
    }
}
