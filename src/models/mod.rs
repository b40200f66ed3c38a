pub mod debt;
pub mod nap_record;
pub mod questionnaire;
pub mod recovery_plan;
pub mod sleep_record;
pub mod user_settings;
