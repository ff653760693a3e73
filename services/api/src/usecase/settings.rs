use chrono::Utc;

use crate::domain::repository::SettingsRepository;
use crate::domain::types::{GymSettings, NotificationSettings};
use crate::error::ApiError;

// ── GetSettings ──────────────────────────────────────────────────────────────

pub struct GetSettingsUseCase<S: SettingsRepository> {
    pub settings: S,
}

impl<S: SettingsRepository> GetSettingsUseCase<S> {
    /// Falls back to the built-in defaults before anything has been saved.
    pub async fn execute(&self) -> Result<GymSettings, ApiError> {
        Ok(self
            .settings
            .get()
            .await?
            .unwrap_or_else(|| GymSettings::defaults(Utc::now())))
    }
}

// ── UpdateSettings ───────────────────────────────────────────────────────────

#[derive(Default)]
pub struct UpdateSettingsInput {
    pub gym_name: Option<String>,
    pub tagline: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub gstin: Option<String>,
    pub logo_url: Option<String>,
    pub working_hours: Option<serde_json::Value>,
    pub currency: Option<String>,
    pub timezone: Option<String>,
    pub social_links: Option<serde_json::Value>,
    pub notifications: Option<NotificationSettings>,
}

pub struct UpdateSettingsUseCase<S: SettingsRepository> {
    pub settings: S,
}

impl<S: SettingsRepository> UpdateSettingsUseCase<S> {
    pub async fn execute(&self, input: UpdateSettingsInput) -> Result<GymSettings, ApiError> {
        let now = Utc::now();
        let mut current = self
            .settings
            .get()
            .await?
            .unwrap_or_else(|| GymSettings::defaults(now));

        if let Some(gym_name) = input.gym_name {
            let gym_name = gym_name.trim().to_owned();
            if gym_name.is_empty() {
                return Err(ApiError::Validation("Gym name is required".to_owned()));
            }
            current.gym_name = gym_name;
        }
        if let Some(tagline) = input.tagline {
            current.tagline = Some(tagline);
        }
        if let Some(address) = input.address {
            current.address = address;
        }
        if let Some(phone) = input.phone {
            current.phone = Some(phone);
        }
        if let Some(email) = input.email {
            current.email = Some(email);
        }
        if let Some(website) = input.website {
            current.website = Some(website);
        }
        if let Some(gstin) = input.gstin {
            current.gstin = Some(gstin);
        }
        if let Some(logo_url) = input.logo_url {
            current.logo_url = Some(logo_url);
        }
        if let Some(working_hours) = input.working_hours {
            current.working_hours = Some(working_hours);
        }
        if let Some(currency) = input.currency {
            current.currency = currency;
        }
        if let Some(timezone) = input.timezone {
            current.timezone = timezone;
        }
        if let Some(social_links) = input.social_links {
            current.social_links = Some(social_links);
        }
        if let Some(notifications) = input.notifications {
            current.notifications = notifications;
        }
        current.updated_at = now;

        self.settings.upsert(&current).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockSettingsRepo {
        stored: Option<GymSettings>,
        upserted: std::sync::Mutex<Option<GymSettings>>,
    }

    impl MockSettingsRepo {
        fn with(stored: Option<GymSettings>) -> Self {
            Self {
                stored,
                upserted: std::sync::Mutex::new(None),
            }
        }
    }

    impl SettingsRepository for MockSettingsRepo {
        async fn get(&self) -> Result<Option<GymSettings>, ApiError> {
            Ok(self.stored.clone())
        }
        async fn upsert(&self, settings: &GymSettings) -> Result<GymSettings, ApiError> {
            *self.upserted.lock().unwrap() = Some(settings.clone());
            Ok(settings.clone())
        }
    }

    #[tokio::test]
    async fn should_hand_out_defaults_before_first_save() {
        let usecase = GetSettingsUseCase {
            settings: MockSettingsRepo::with(None),
        };
        let settings = usecase.execute().await.unwrap();
        assert_eq!(settings.gym_name, "Liftdesk Gym");
        assert_eq!(settings.timezone, "Asia/Kolkata");
    }

    #[tokio::test]
    async fn should_merge_partial_update_over_stored_row() {
        let mut stored = GymSettings::defaults(Utc::now());
        stored.gym_name = "Iron Temple".to_owned();
        stored.address = "12 MG Road, Pune".to_owned();
        let usecase = UpdateSettingsUseCase {
            settings: MockSettingsRepo::with(Some(stored)),
        };
        let updated = usecase
            .execute(UpdateSettingsInput {
                phone: Some("+912012345678".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(updated.gym_name, "Iron Temple");
        assert_eq!(updated.address, "12 MG Road, Pune");
        assert_eq!(updated.phone.as_deref(), Some("+912012345678"));
    }

    #[tokio::test]
    async fn should_reject_blank_gym_name() {
        let usecase = UpdateSettingsUseCase {
            settings: MockSettingsRepo::with(None),
        };
        let result = usecase
            .execute(UpdateSettingsInput {
                gym_name: Some("  ".into()),
                ..Default::default()
            })
            .await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
        assert!(usecase.settings.upserted.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn should_toggle_notification_switches() {
        let usecase = UpdateSettingsUseCase {
            settings: MockSettingsRepo::with(Some(GymSettings::defaults(Utc::now()))),
        };
        let updated = usecase
            .execute(UpdateSettingsInput {
                notifications: Some(NotificationSettings {
                    sms_alerts: false,
                    email_alerts: true,
                }),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(!updated.notifications.sms_alerts);
        assert!(updated.notifications.email_alerts);
    }
}
