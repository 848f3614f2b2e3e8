use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the seven life domains assessed by the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Battery {
    Physical,
    Mental,
    Emotional,
    Identity,
    Relational,
    Professional,
    Spiritual,
}

impl Battery {
    /// Canonical order used for progress labels, report sections and narrative text.
    pub const ALL: [Battery; 7] = [
        Battery::Physical,
        Battery::Mental,
        Battery::Emotional,
        Battery::Identity,
        Battery::Relational,
        Battery::Professional,
        Battery::Spiritual,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Battery::Physical => "physical",
            Battery::Mental => "mental",
            Battery::Emotional => "emotional",
            Battery::Identity => "identity",
            Battery::Relational => "relational",
            Battery::Professional => "professional",
            Battery::Spiritual => "spiritual",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Battery::Physical => "Physique",
            Battery::Mental => "Mentale",
            Battery::Emotional => "Émotionnelle",
            Battery::Identity => "Identitaire",
            Battery::Relational => "Relationnelle",
            Battery::Professional => "Professionnelle",
            Battery::Spiritual => "Spirituelle",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Battery::Physical => "🔋",
            Battery::Mental => "🧠",
            Battery::Emotional => "💙",
            Battery::Identity => "👤",
            Battery::Relational => "🤝",
            Battery::Professional => "💼",
            Battery::Spiritual => "🕊",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Battery::Physical => "#a5826f",
            Battery::Mental => "#1c3b5a",
            Battery::Emotional => "#379191",
            Battery::Identity => "#827268",
            Battery::Relational => "#dea742",
            Battery::Professional => "#1c576e",
            Battery::Spiritual => "#7e8081",
        }
    }

    /// Identifier prefix used by the standard catalog (`phys-1`, `ment-3`, ...).
    pub const fn id_prefix(self) -> &'static str {
        match self {
            Battery::Physical => "phys",
            Battery::Mental => "ment",
            Battery::Emotional => "emot",
            Battery::Identity => "iden",
            Battery::Relational => "rela",
            Battery::Professional => "prof",
            Battery::Spiritual => "spir",
        }
    }

    /// Encouragement shown on the checkpoint that follows this battery.
    pub const fn checkpoint_message(self) -> &'static str {
        match self {
            Battery::Physical => {
                "Bravo ! Tu viens d'explorer ta batterie physique. Continue, ton corps te remerciera ! 💪"
            }
            Battery::Mental => {
                "Excellent ! Ta batterie mentale est évaluée. Chaque réponse te rapproche de la clarté ! 🧠"
            }
            Battery::Emotional => {
                "Magnifique ! Tu as pris le temps d'explorer tes émotions. Continue ce beau travail ! 💙"
            }
            Battery::Identity => {
                "Superbe ! Ta batterie identitaire est complète. Tu te découvres un peu plus ! ✨"
            }
            Battery::Relational => {
                "Fantastique ! Tes relations sont maintenant cartographiées. Continue sur ta lancée ! 🤝"
            }
            Battery::Professional => {
                "Incroyable ! Ta batterie professionnelle est évaluée. Ton avenir te dit merci ! 💼"
            }
            Battery::Spiritual => {
                "Merveilleux ! Tu as exploré ta dimension spirituelle. La dernière étape approche ! 🕊️"
            }
        }
    }

    /// 1-based position in the canonical order.
    pub fn ordinal(self) -> usize {
        Battery::ALL
            .iter()
            .position(|battery| *battery == self)
            .map(|index| index + 1)
            .unwrap_or(0)
    }
}

impl fmt::Display for Battery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity tier derived from a battery score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreLevel {
    Critical,
    Unstable,
    Optimal,
}

impl ScoreLevel {
    pub const fn label(self) -> &'static str {
        match self {
            ScoreLevel::Critical => "CRITIQUE",
            ScoreLevel::Unstable => "INSTABLE",
            ScoreLevel::Optimal => "OPTIMAL",
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            ScoreLevel::Critical => "🔴",
            ScoreLevel::Unstable => "🟡",
            ScoreLevel::Optimal => "🟢",
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            ScoreLevel::Critical => "#d96536",
            ScoreLevel::Unstable => "#dea742",
            ScoreLevel::Optimal => "#379191",
        }
    }
}

/// Identifier wrapper for catalog questions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Selectable answer carrying its point value on the 0/2/4/6 scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    pub example: String,
    pub points: u8,
}

impl AnswerOption {
    pub fn new(text: impl Into<String>, example: impl Into<String>, points: u8) -> Self {
        Self {
            text: text.into(),
            example: example.into(),
            points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub battery: Battery,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn new(
        id: impl Into<String>,
        battery: Battery,
        prompt: impl Into<String>,
        options: Vec<AnswerOption>,
    ) -> Self {
        Self {
            id: QuestionId(id.into()),
            battery,
            prompt: prompt.into(),
            options,
        }
    }

    pub fn option_for_points(&self, points: u8) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.points == points)
    }

    pub fn max_points(&self) -> u32 {
        self.options
            .iter()
            .map(|option| u32::from(option.points))
            .max()
            .unwrap_or(0)
    }
}

/// Selected points keyed by question. Unanswered questions are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap {
    entries: BTreeMap<QuestionId, u8>,
}

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the answer for `id`.
    pub fn record(&mut self, id: QuestionId, points: u8) {
        self.entries.insert(id, points);
    }

    pub fn points(&self, id: &QuestionId) -> Option<u8> {
        self.entries.get(id).copied()
    }

    pub fn contains(&self, id: &QuestionId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, u8)> {
        self.entries.iter().map(|(id, points)| (id, *points))
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}

impl FromIterator<(QuestionId, u8)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (QuestionId, u8)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Person taking the assessment, as captured on the intro screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Participant {
    /// Trim every field and check the required ones.
    pub fn validated(self) -> Result<Self, ParticipantError> {
        let first_name = required(self.first_name, "first_name")?;
        let last_name = required(self.last_name, "last_name")?;
        let email = required(self.email, "email")?;
        if !email.contains('@') {
            return Err(ParticipantError::InvalidEmail(email));
        }
        let phone = self
            .phone
            .map(|phone| phone.trim().to_string())
            .filter(|phone| !phone.is_empty());

        Ok(Self {
            first_name,
            last_name,
            email,
            phone,
        })
    }

    pub fn display_name(&self) -> &str {
        &self.first_name
    }
}

fn required(value: String, field: &'static str) -> Result<String, ParticipantError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ParticipantError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParticipantError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("'{0}' is not a valid e-mail address")]
    InvalidEmail(String),
}
