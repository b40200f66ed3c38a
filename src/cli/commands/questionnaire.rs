use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::debt::total_debt;
use crate::core::questionnaire::{Answers, QuestionnaireLogic};
use crate::db::kv::SqliteKv;
use crate::errors::{AppError, AppResult};
use crate::storage;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::formatting::format_duration;

/// Submit the weekly fatigue questionnaire and evaluate the
/// chronic-fatigue trend.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Questionnaire {
        waking,
        restorative,
        malaise,
        tired_days,
        concentration,
    } = cmd
    {
        if *tired_days > 7 {
            return Err(AppError::InvalidAnswer(format!(
                "--tired-days must be 0-7, got {}",
                tired_days
            )));
        }

        let mut store = SqliteKv::open(&cfg.database)?;

        let answers = Answers {
            feeling_on_waking: *waking,
            sleep_restorative: *restorative,
            post_exertion_malaise: *malaise,
            too_tired_days_count: *tired_days,
            concentration_difficulties: *concentration,
        };

        let questionnaire = QuestionnaireLogic::build(&answers, date::today(), storage::new_id());
        storage::save_questionnaire(&mut store, &questionnaire)?;

        crate::db::log::ttlog(
            store.conn(),
            "questionnaire",
            &questionnaire.week_start_date.to_string(),
            &format!("Weekly check-in, risk {}", questionnaire.risk_score.rs_as_str()),
        )?;

        success(format!(
            "Weekly check-in saved. Risk score: {}.",
            questionnaire.risk_score.rs_as_str()
        ));

        // Trend check over the four most recent submissions.
        let records = storage::get_sleep_records(&store)?;
        let naps = storage::get_nap_records(&store)?;
        let debt = total_debt(&records, &naps, date::today(), cfg.debt_window_days);

        let questionnaires = storage::get_questionnaires(&store)?;
        if let Some(alert) = QuestionnaireLogic::chronic_fatigue_alert(&questionnaires, debt) {
            println!();
            warning(format!(
                "Chronic fatigue warning: {} of your last 4 weekly check-ins were high risk and \
                 your sleep debt is {}. Persistent non-restorative sleep at this level may \
                 indicate chronic fatigue syndrome or a sleep disorder. A medical consultation \
                 is recommended.",
                alert.high_risk_weeks,
                format_duration(alert.debt_minutes as f64)
            ));
        }
    }

    Ok(())
}
