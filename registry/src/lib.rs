use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::event::EventHub;
use adapter::mail::HttpMailer;
use adapter::repository::booking::BookingRepositoryImpl;
use adapter::repository::complaint::ComplaintRepositoryImpl;
use adapter::repository::facility::FacilityRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::timetable::TimetableRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use kernel::mailer::Mailer;
use kernel::repository::booking::BookingRepository;
use kernel::repository::complaint::ComplaintRepository;
use kernel::repository::facility::FacilityRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::timetable::TimetableRepository;
use kernel::repository::user::UserRepository;
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    user_repository: Arc<dyn UserRepository>,
    facility_repository: Arc<dyn FacilityRepository>,
    timetable_repository: Arc<dyn TimetableRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    complaint_repository: Arc<dyn ComplaintRepository>,
    mailer: Arc<dyn Mailer>,
    event_hub: EventHub,
    admin_api_key: Arc<str>,
    admin_email: Arc<str>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, app_config: AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let facility_repository = Arc::new(FacilityRepositoryImpl::new(pool.clone()));
        let timetable_repository = Arc::new(TimetableRepositoryImpl::new(pool.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(pool.clone()));
        let complaint_repository = Arc::new(ComplaintRepositoryImpl::new(pool.clone()));
        let mailer = Arc::new(HttpMailer::new(&app_config.mail));
        Self {
            health_check_repository,
            user_repository,
            facility_repository,
            timetable_repository,
            booking_repository,
            complaint_repository,
            mailer,
            event_hub: EventHub::default(),
            admin_api_key: app_config.admin.api_key.into(),
            admin_email: app_config.mail.admin_address.into(),
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn facility_repository(&self) -> Arc<dyn FacilityRepository> {
        self.facility_repository.clone()
    }

    pub fn timetable_repository(&self) -> Arc<dyn TimetableRepository> {
        self.timetable_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn complaint_repository(&self) -> Arc<dyn ComplaintRepository> {
        self.complaint_repository.clone()
    }

    pub fn mailer(&self) -> Arc<dyn Mailer> {
        self.mailer.clone()
    }

    pub fn event_hub(&self) -> &EventHub {
        &self.event_hub
    }

    pub fn admin_api_key(&self) -> &str {
        &self.admin_api_key
    }

    pub fn admin_email(&self) -> &str {
        &self.admin_email
    }
}
