//! Printable plain-text rendition of a finished analysis.

use chrono::{DateTime, Local};
use shared::{PersonalityReport, UserProfile};

use crate::state::AnalysisState;

pub const REPORT_TITLE: &str = "PERSONALITY.EXE // Digital Identity Analysis";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionBody<'a> {
    Text(&'a str),
    List(&'a [String]),
}

/// Report sections in display order, after the personality type headline.
pub fn report_sections(report: &PersonalityReport) -> [(&'static str, SectionBody<'_>); 5] {
    [
        ("Key Strengths", SectionBody::List(&report.key_strengths)),
        (
            "Thinking & Work Style",
            SectionBody::Text(&report.thinking_work_style),
        ),
        (
            "Preferred Learning Style",
            SectionBody::Text(&report.preferred_learning_style),
        ),
        (
            "Potential Skill Areas",
            SectionBody::List(&report.potential_skill_areas),
        ),
        ("Positive Insight", SectionBody::Text(&report.positive_insight)),
    ]
}

fn or_dash(value: &str) -> &str {
    let value = value.trim();
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintJob {
    pub profile: UserProfile,
    pub analysis: AnalysisState,
}

impl PrintJob {
    pub fn new(profile: UserProfile, analysis: AnalysisState) -> Self {
        Self { profile, analysis }
    }

    pub fn render_text(&self, printed_at: DateTime<Local>) -> String {
        let profile = &self.profile;
        let mut lines = vec![
            REPORT_TITLE.to_string(),
            format!("Printed {}", printed_at.format("%Y-%m-%d %H:%M")),
            String::new(),
            format!(
                "Subject: {}    Grade: {}",
                or_dash(&profile.name),
                or_dash(&profile.grade)
            ),
            format!(
                "Games: {} ({} play)",
                or_dash(&profile.games),
                profile.play_style
            ),
            format!("Hobbies: {}", or_dash(&profile.hobbies)),
            String::new(),
        ];

        match &self.analysis {
            AnalysisState::Success(report) => {
                lines.push("Personality Type".to_string());
                lines.push(format!("  {}", report.personality_type));
                for (title, body) in report_sections(report) {
                    lines.push(String::new());
                    lines.push(title.to_string());
                    match body {
                        SectionBody::Text(text) => lines.push(format!("  {text}")),
                        SectionBody::List(items) => {
                            lines.extend(items.iter().map(|item| format!("  - {item}")))
                        }
                    }
                }
            }
            AnalysisState::Failed(message) => {
                lines.push(format!("Analysis failed: {message}"));
            }
            AnalysisState::Idle | AnalysisState::Loading(_) => {
                lines.push("No analysis available.".to_string());
            }
        }

        lines.push(String::new());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared::PlayStyle;

    fn printed_at() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
            .single()
            .expect("unambiguous local time")
    }

    fn report() -> PersonalityReport {
        PersonalityReport {
            personality_type: "The Strategist".into(),
            key_strengths: vec!["Planning".into(), "Focus".into()],
            thinking_work_style: "Deliberate".into(),
            preferred_learning_style: "Reading".into(),
            potential_skill_areas: vec!["Law".into()],
            positive_insight: "Patience pays.".into(),
        }
    }

    #[test]
    fn renders_every_report_section_in_order() {
        let profile = UserProfile {
            name: "Ann".into(),
            grade: "10".into(),
            games: "Chess".into(),
            hobbies: "Reading".into(),
            play_style: PlayStyle::Solo,
        };
        let text = PrintJob::new(profile, AnalysisState::Success(report())).render_text(printed_at());

        assert!(text.starts_with(REPORT_TITLE));
        assert!(text.contains("Printed 2026-01-02 03:04"));
        assert!(text.contains("Subject: Ann    Grade: 10"));
        assert!(text.contains("Games: Chess (Solo play)"));
        assert!(text.contains("  - Planning\n  - Focus"));

        let strengths = text.find("Key Strengths").expect("strengths");
        let insight = text.find("Positive Insight").expect("insight");
        assert!(strengths < insight);
    }

    #[test]
    fn renders_failure_and_blank_profile() {
        let text = PrintJob::new(
            UserProfile::default(),
            AnalysisState::Failed("Service unavailable".into()),
        )
        .render_text(printed_at());

        assert!(text.contains("Subject: -    Grade: -"));
        assert!(text.contains("Analysis failed: Service unavailable"));
        assert!(!text.contains("Personality Type"));
    }
}
