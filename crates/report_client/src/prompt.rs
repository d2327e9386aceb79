//! Prompt text and response schema sent to the report service.

use serde_json::{json, Value};
use shared::UserProfile;

const NOT_PROVIDED: &str = "not provided";

fn or_not_provided(value: &str) -> &str {
    let value = value.trim();
    if value.is_empty() {
        NOT_PROVIDED
    } else {
        value
    }
}

pub fn build_prompt(profile: &UserProfile) -> String {
    format!(
        "You are a supportive career and learning-style counselor for students.\n\
         Analyze the following self-reported profile and produce an encouraging, \
         insightful personality report that connects the student's gaming habits \
         and hobbies to real-world strengths and potential skill areas.\n\
         \n\
         Name: {name}\n\
         Grade: {grade}\n\
         Favorite games or genres: {games}\n\
         Preferred play style: {play_style}\n\
         Main hobbies: {hobbies}\n\
         \n\
         Respond only with JSON matching the provided schema. Keep the tone \
         positive and age-appropriate, list three to five key strengths and \
         three to five potential skill areas, and address the student by name \
         in the positive insight when a name is given.",
        name = or_not_provided(&profile.name),
        grade = or_not_provided(&profile.grade),
        games = or_not_provided(&profile.games),
        play_style = profile.play_style,
        hobbies = or_not_provided(&profile.hobbies),
    )
}

/// Structured-output schema for `PersonalityReport`; every field required.
pub fn report_response_schema() -> Value {
    let string_list = json!({ "type": "ARRAY", "items": { "type": "STRING" } });
    json!({
        "type": "OBJECT",
        "properties": {
            "personalityType": { "type": "STRING" },
            "keyStrengths": string_list,
            "thinkingWorkStyle": { "type": "STRING" },
            "preferredLearningStyle": { "type": "STRING" },
            "potentialSkillAreas": string_list,
            "positiveInsight": { "type": "STRING" }
        },
        "required": [
            "personalityType",
            "keyStrengths",
            "thinkingWorkStyle",
            "preferredLearningStyle",
            "potentialSkillAreas",
            "positiveInsight"
        ]
    })
}
