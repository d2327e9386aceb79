use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PlayStyle {
    #[default]
    Solo,
    Team,
}

impl PlayStyle {
    pub const ALL: [PlayStyle; 2] = [PlayStyle::Solo, PlayStyle::Team];

    pub fn label(self) -> &'static str {
        match self {
            PlayStyle::Solo => "Solo",
            PlayStyle::Team => "Team",
        }
    }
}

impl fmt::Display for PlayStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PlayStyle {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("solo") {
            Ok(PlayStyle::Solo)
        } else if raw.eq_ignore_ascii_case("team") {
            Ok(PlayStyle::Team)
        } else {
            Err(format!("unknown play style '{raw}' (expected Solo or Team)"))
        }
    }
}

/// Free-text fields of the profile form. Play style is set separately since
/// it only accepts the two [`PlayStyle`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Name,
    Grade,
    Games,
    Hobbies,
}

impl ProfileField {
    pub const ALL: [ProfileField; 4] = [
        ProfileField::Name,
        ProfileField::Grade,
        ProfileField::Games,
        ProfileField::Hobbies,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProfileField::Name => "Name",
            ProfileField::Grade => "Grade",
            ProfileField::Games => "Favorite Games or Genres",
            ProfileField::Hobbies => "Main Hobbies",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ProfileField::Name => "Full name",
            ProfileField::Grade => "e.g. Grade 10",
            ProfileField::Games => "What games dominate your screen time?",
            ProfileField::Hobbies => "What do you do when you're not gaming?",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, ProfileField::Games | ProfileField::Hobbies)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub grade: String,
    pub games: String,
    pub hobbies: String,
    pub play_style: PlayStyle,
}

impl UserProfile {
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Grade => &self.grade,
            ProfileField::Games => &self.games,
            ProfileField::Hobbies => &self.hobbies,
        }
    }

    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        let slot = match field {
            ProfileField::Name => &mut self.name,
            ProfileField::Grade => &mut self.grade,
            ProfileField::Games => &mut self.games,
            ProfileField::Hobbies => &mut self.hobbies,
        };
        *slot = value.into();
    }

    pub fn set_play_style(&mut self, play_style: PlayStyle) {
        self.play_style = play_style;
    }

    /// The play-style toggle is only offered once some games were entered.
    pub fn has_entered_games(&self) -> bool {
        !self.games.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityReport {
    pub personality_type: String,
    pub key_strengths: Vec<String>,
    pub thinking_work_style: String,
    pub preferred_learning_style: String,
    pub potential_skill_areas: Vec<String>,
    pub positive_insight: String,
}
