use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::debt::total_debt;
use crate::core::insights::InsightsLogic;
use crate::core::questionnaire::QuestionnaireLogic;
use crate::core::recovery::RecoveryLogic;
use crate::db::kv::SqliteKv;
use crate::errors::{AppError, AppResult};
use crate::models::debt::DebtLevel;
use crate::models::recovery_plan::RecoveryKind;
use crate::storage;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::RESET;
use crate::utils::date;
use crate::utils::formatting::{bold, format_duration};

/// The debt dashboard: current total, severity tier, guidance.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Debt { plans, insights } = cmd {
        let store = SqliteKv::open(&cfg.database)?;
        let settings = storage::get_user_settings(&store)?.ok_or(AppError::NotOnboarded)?;

        if !storage::has_logged_sleep(&store)? {
            info("No nights logged yet. Start with `rsleepmanager log --bed HH:MM --wake HH:MM`.");
        }

        let records = storage::get_sleep_records(&store)?;
        let naps = storage::get_nap_records(&store)?;
        let today = date::today();

        let total = total_debt(&records, &naps, today, cfg.debt_window_days);
        let level = DebtLevel::from_minutes(total);

        header(format!("Sleep debt ({} days)", cfg.debt_window_days));
        println!(
            "Total:    {} {}{}{}",
            bold(&format_duration(total as f64)),
            level.color(),
            level.label(),
            RESET
        );
        println!("{}", level.description());

        let in_window = storage::get_recent_sleep_records(&store, today, cfg.debt_window_days)?;
        if !in_window.is_empty() {
            let average = in_window.iter().map(|r| r.debt_minutes).sum::<i64>() as f64
                / in_window.len() as f64;
            println!("Average daily debt: {}", format_duration(average));
        }

        if let Some(nap_hint) = RecoveryLogic::nap_recommendation(total) {
            println!();
            warning(nap_hint);
        }

        if *plans {
            println!();
            header("Recovery plans");
            for plan in RecoveryLogic::build_plans(total) {
                let name = match plan.kind {
                    RecoveryKind::Progressive => "Progressive (steady and sustainable)",
                    RecoveryKind::Intensive => "Intensive (fast but demanding)",
                };
                println!("- {}", bold(name));
                println!("    {}", plan.description);
                println!("    Estimated recovery: {} days", plan.estimated_recovery_days);
            }
            if total < 120 {
                info("Your sleep debt is minimal. Keep maintaining your current sleep schedule.");
            }
        }

        if *insights {
            println!();
            header("Insights");
            let found = InsightsLogic::build_insights(&records, settings.cycle_duration);
            if found.is_empty() {
                info("Not enough data yet. Log (and rate) more nights to unlock insights.");
            } else {
                for insight in found {
                    println!("- {}", insight);
                }
            }

            if let Some(optimized) = InsightsLogic::suggest_cycle_duration(&records) {
                info(format!(
                    "Based on your wake quality ratings, you feel best with {}-minute cycles \
                     instead of {}-minute cycles. Apply with `settings --apply-optimized`.",
                    optimized, settings.cycle_duration
                ));
            }
        }

        let questionnaires = storage::get_questionnaires(&store)?;
        if let Some(alert) = QuestionnaireLogic::chronic_fatigue_alert(&questionnaires, total) {
            println!();
            warning(format!(
                "Chronic fatigue warning: {} of the last 4 weekly check-ins were high risk and \
                 your debt is {}. These symptoms may indicate chronic fatigue syndrome, sleep \
                 disorders, or other conditions that require professional evaluation.",
                alert.high_risk_weeks,
                format_duration(alert.debt_minutes as f64)
            ));
        }
    }

    Ok(())
}
