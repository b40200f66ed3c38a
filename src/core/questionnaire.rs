//! Weekly questionnaire scoring and the chronic-fatigue trend check.

use crate::models::questionnaire::{Malaise, Restorative, RiskScore, WakeFeeling,
    WeeklyQuestionnaire};
use crate::utils::date::week_start;
use chrono::NaiveDate;

/// The five self-report answers collected each week.
#[derive(Debug, Clone, Copy)]
pub struct Answers {
    pub feeling_on_waking: WakeFeeling,
    pub sleep_restorative: Restorative,
    pub post_exertion_malaise: Malaise,
    pub too_tired_days_count: u8,
    pub concentration_difficulties: bool,
}

/// Raised when the four most recent questionnaires show a sustained
/// high-risk pattern alongside critical debt.
#[derive(Debug, Clone, PartialEq)]
pub struct FatigueAlert {
    pub high_risk_weeks: usize,
    pub debt_minutes: i64,
}

pub struct QuestionnaireLogic;

impl QuestionnaireLogic {
    /// Count risk factors and map to a score: >=4 high, >=2 medium,
    /// else low.
    pub fn risk_score(answers: &Answers) -> RiskScore {
        let poor_wake_quality = matches!(
            answers.feeling_on_waking,
            WakeFeeling::Exhausted | WakeFeeling::Tired
        );
        let non_restorative = matches!(
            answers.sleep_restorative,
            Restorative::No | Restorative::Partially
        );
        let frequent_malaise = matches!(
            answers.post_exertion_malaise,
            Malaise::Often | Malaise::Always
        );
        let high_tired_days = answers.too_tired_days_count >= 4;

        let risk_factors = [
            poor_wake_quality,
            non_restorative,
            frequent_malaise,
            high_tired_days,
            answers.concentration_difficulties,
        ]
        .iter()
        .filter(|f| **f)
        .count();

        if risk_factors >= 4 {
            RiskScore::High
        } else if risk_factors >= 2 {
            RiskScore::Medium
        } else {
            RiskScore::Low
        }
    }

    pub fn build(answers: &Answers, submitted_on: NaiveDate, id: String) -> WeeklyQuestionnaire {
        WeeklyQuestionnaire {
            id,
            week_start_date: week_start(submitted_on),
            feeling_on_waking: answers.feeling_on_waking,
            sleep_restorative: answers.sleep_restorative,
            post_exertion_malaise: answers.post_exertion_malaise,
            too_tired_days_count: answers.too_tired_days_count.min(7),
            concentration_difficulties: answers.concentration_difficulties,
            risk_score: Self::risk_score(answers),
        }
    }

    /// Evaluate the chronic-fatigue trend over the four most recent
    /// questionnaires. Fewer than four on file → no evaluation (`None`),
    /// not a degenerate answer. Fires only when at least three of the
    /// four are high risk and the current debt exceeds 14 hours.
    pub fn chronic_fatigue_alert(
        questionnaires: &[WeeklyQuestionnaire],
        current_debt_minutes: i64,
    ) -> Option<FatigueAlert> {
        let mut sorted: Vec<&WeeklyQuestionnaire> = questionnaires.iter().collect();
        sorted.sort_by(|a, b| b.week_start_date.cmp(&a.week_start_date));

        let recent: Vec<&WeeklyQuestionnaire> = sorted.into_iter().take(4).collect();
        if recent.len() < 4 {
            return None;
        }

        let high_risk_weeks = recent
            .iter()
            .filter(|q| q.risk_score == RiskScore::High)
            .count();

        if high_risk_weeks >= 3 && current_debt_minutes > 14 * 60 {
            Some(FatigueAlert {
                high_risk_weeks,
                debt_minutes: current_debt_minutes,
            })
        } else {
            None
        }
    }
}
