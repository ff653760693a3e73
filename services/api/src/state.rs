use std::sync::Arc;

use sea_orm::DatabaseConnection;

use liftdesk_auth::extract::JwtSecret;

use crate::config::Config;
use crate::infra::db::{
    DbAttendanceRepository, DbGalleryRepository, DbMemberRepository, DbMembershipRepository,
    DbPaymentRepository, DbPlanRepository, DbProgressRepository, DbSettingsRepository,
    DbUserRepository, DbWorkoutRepository,
};
use crate::infra::gateway::HttpPaymentGateway;
use crate::infra::sms::SmsClient;
use crate::infra::storage::FsImageStore;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
    pub sms: SmsClient,
    /// `None` when gateway credentials are not configured.
    pub gateway: Option<HttpPaymentGateway>,
    pub images: FsImageStore,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn member_repo(&self) -> DbMemberRepository {
        DbMemberRepository {
            db: self.db.clone(),
        }
    }

    pub fn plan_repo(&self) -> DbPlanRepository {
        DbPlanRepository {
            db: self.db.clone(),
        }
    }

    pub fn membership_repo(&self) -> DbMembershipRepository {
        DbMembershipRepository {
            db: self.db.clone(),
        }
    }

    pub fn payment_repo(&self) -> DbPaymentRepository {
        DbPaymentRepository {
            db: self.db.clone(),
        }
    }

    pub fn attendance_repo(&self) -> DbAttendanceRepository {
        DbAttendanceRepository {
            db: self.db.clone(),
        }
    }

    pub fn workout_repo(&self) -> DbWorkoutRepository {
        DbWorkoutRepository {
            db: self.db.clone(),
        }
    }

    pub fn progress_repo(&self) -> DbProgressRepository {
        DbProgressRepository {
            db: self.db.clone(),
        }
    }

    pub fn gallery_repo(&self) -> DbGalleryRepository {
        DbGalleryRepository {
            db: self.db.clone(),
        }
    }

    pub fn settings_repo(&self) -> DbSettingsRepository {
        DbSettingsRepository {
            db: self.db.clone(),
        }
    }
}

impl JwtSecret for AppState {
    fn jwt_secret(&self) -> &str {
        &self.config.jwt_secret
    }
}
