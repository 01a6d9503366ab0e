use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for submitted artist applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub String);

impl ApplicationId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Performance category offered on the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Musician,
    #[serde(rename = "Singer/Vocalist")]
    SingerVocalist,
    Dancer,
    #[serde(rename = "Visual Artist")]
    VisualArtist,
    Photographer,
    #[serde(rename = "Actor/Actress")]
    ActorActress,
    Comedian,
    #[serde(rename = "DJ")]
    Dj,
    Other,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Musician,
        Category::SingerVocalist,
        Category::Dancer,
        Category::VisualArtist,
        Category::Photographer,
        Category::ActorActress,
        Category::Comedian,
        Category::Dj,
        Category::Other,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Category::Musician => "Musician",
            Category::SingerVocalist => "Singer/Vocalist",
            Category::Dancer => "Dancer",
            Category::VisualArtist => "Visual Artist",
            Category::Photographer => "Photographer",
            Category::ActorActress => "Actor/Actress",
            Category::Comedian => "Comedian",
            Category::Dj => "DJ",
            Category::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.label() == label)
    }
}

/// Self-reported experience band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[serde(rename = "Beginner (0-2 years)")]
    Beginner,
    #[serde(rename = "Intermediate (3-5 years)")]
    Intermediate,
    #[serde(rename = "Advanced (6-10 years)")]
    Advanced,
    #[serde(rename = "Expert (10+ years)")]
    Expert,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
        ExperienceLevel::Expert,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner (0-2 years)",
            ExperienceLevel::Intermediate => "Intermediate (3-5 years)",
            ExperienceLevel::Advanced => "Advanced (6-10 years)",
            ExperienceLevel::Expert => "Expert (10+ years)",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    #[serde(rename = "Live Performance")]
    LivePerformance,
    #[serde(rename = "Studio Recording")]
    StudioRecording,
    Composition,
    Improvisation,
    Teaching,
    #[serde(rename = "Audio Production")]
    AudioProduction,
    #[serde(rename = "Video Production")]
    VideoProduction,
    #[serde(rename = "Social Media")]
    SocialMedia,
    Marketing,
    #[serde(rename = "Event Planning")]
    EventPlanning,
}

impl Skill {
    pub const ALL: [Skill; 10] = [
        Skill::LivePerformance,
        Skill::StudioRecording,
        Skill::Composition,
        Skill::Improvisation,
        Skill::Teaching,
        Skill::AudioProduction,
        Skill::VideoProduction,
        Skill::SocialMedia,
        Skill::Marketing,
        Skill::EventPlanning,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Skill::LivePerformance => "Live Performance",
            Skill::StudioRecording => "Studio Recording",
            Skill::Composition => "Composition",
            Skill::Improvisation => "Improvisation",
            Skill::Teaching => "Teaching",
            Skill::AudioProduction => "Audio Production",
            Skill::VideoProduction => "Video Production",
            Skill::SocialMedia => "Social Media",
            Skill::Marketing => "Marketing",
            Skill::EventPlanning => "Event Planning",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|skill| skill.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    Weekdays,
    Weekends,
    Evenings,
    Daytime,
    Holidays,
    #[serde(rename = "Tours/Travel")]
    ToursTravel,
}

impl Availability {
    pub const ALL: [Availability; 6] = [
        Availability::Weekdays,
        Availability::Weekends,
        Availability::Evenings,
        Availability::Daytime,
        Availability::Holidays,
        Availability::ToursTravel,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Availability::Weekdays => "Weekdays",
            Availability::Weekends => "Weekends",
            Availability::Evenings => "Evenings",
            Availability::Daytime => "Daytime",
            Availability::Holidays => "Holidays",
            Availability::ToursTravel => "Tours/Travel",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.label() == label)
    }
}

/// State or union territory the artist is based in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "Andhra Pradesh")]
    AndhraPradesh,
    #[serde(rename = "Arunachal Pradesh")]
    ArunachalPradesh,
    Assam,
    Bihar,
    Chhattisgarh,
    Goa,
    Gujarat,
    Haryana,
    #[serde(rename = "Himachal Pradesh")]
    HimachalPradesh,
    Jharkhand,
    Karnataka,
    Kerala,
    #[serde(rename = "Madhya Pradesh")]
    MadhyaPradesh,
    Maharashtra,
    Manipur,
    Meghalaya,
    Mizoram,
    Nagaland,
    Odisha,
    Punjab,
    Rajasthan,
    Sikkim,
    #[serde(rename = "Tamil Nadu")]
    TamilNadu,
    Telangana,
    Tripura,
    #[serde(rename = "Uttar Pradesh")]
    UttarPradesh,
    Uttarakhand,
    #[serde(rename = "West Bengal")]
    WestBengal,
    Delhi,
    #[serde(rename = "Jammu and Kashmir")]
    JammuAndKashmir,
    Ladakh,
    Puducherry,
    Chandigarh,
    #[serde(rename = "Dadra and Nagar Haveli and Daman and Diu")]
    DadraNagarHaveliDamanDiu,
    Lakshadweep,
}

impl Region {
    pub const ALL: [Region; 35] = [
        Region::AndhraPradesh,
        Region::ArunachalPradesh,
        Region::Assam,
        Region::Bihar,
        Region::Chhattisgarh,
        Region::Goa,
        Region::Gujarat,
        Region::Haryana,
        Region::HimachalPradesh,
        Region::Jharkhand,
        Region::Karnataka,
        Region::Kerala,
        Region::MadhyaPradesh,
        Region::Maharashtra,
        Region::Manipur,
        Region::Meghalaya,
        Region::Mizoram,
        Region::Nagaland,
        Region::Odisha,
        Region::Punjab,
        Region::Rajasthan,
        Region::Sikkim,
        Region::TamilNadu,
        Region::Telangana,
        Region::Tripura,
        Region::UttarPradesh,
        Region::Uttarakhand,
        Region::WestBengal,
        Region::Delhi,
        Region::JammuAndKashmir,
        Region::Ladakh,
        Region::Puducherry,
        Region::Chandigarh,
        Region::DadraNagarHaveliDamanDiu,
        Region::Lakshadweep,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Region::AndhraPradesh => "Andhra Pradesh",
            Region::ArunachalPradesh => "Arunachal Pradesh",
            Region::Assam => "Assam",
            Region::Bihar => "Bihar",
            Region::Chhattisgarh => "Chhattisgarh",
            Region::Goa => "Goa",
            Region::Gujarat => "Gujarat",
            Region::Haryana => "Haryana",
            Region::HimachalPradesh => "Himachal Pradesh",
            Region::Jharkhand => "Jharkhand",
            Region::Karnataka => "Karnataka",
            Region::Kerala => "Kerala",
            Region::MadhyaPradesh => "Madhya Pradesh",
            Region::Maharashtra => "Maharashtra",
            Region::Manipur => "Manipur",
            Region::Meghalaya => "Meghalaya",
            Region::Mizoram => "Mizoram",
            Region::Nagaland => "Nagaland",
            Region::Odisha => "Odisha",
            Region::Punjab => "Punjab",
            Region::Rajasthan => "Rajasthan",
            Region::Sikkim => "Sikkim",
            Region::TamilNadu => "Tamil Nadu",
            Region::Telangana => "Telangana",
            Region::Tripura => "Tripura",
            Region::UttarPradesh => "Uttar Pradesh",
            Region::Uttarakhand => "Uttarakhand",
            Region::WestBengal => "West Bengal",
            Region::Delhi => "Delhi",
            Region::JammuAndKashmir => "Jammu and Kashmir",
            Region::Ladakh => "Ladakh",
            Region::Puducherry => "Puducherry",
            Region::Chandigarh => "Chandigarh",
            Region::DadraNagarHaveliDamanDiu => "Dadra and Nagar Haveli and Daman and Diu",
            Region::Lakshadweep => "Lakshadweep",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|region| region.label() == label)
    }
}

/// Raw form input exactly as the registration form posts it. Nothing here is trusted;
/// see [`super::validation::validate`] for the acceptance rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub category: String,
    pub city: String,
    pub state: String,
    pub fee: Option<f64>,
    pub experience: String,
    pub skills: Vec<String>,
    pub bio: String,
    pub portfolio: String,
    pub availability: Vec<String>,
}

/// Typed artist profile produced by a successful validation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub category: Category,
    pub city: String,
    pub state: Region,
    pub fee: f64,
    pub experience: ExperienceLevel,
    pub skills: Vec<Skill>,
    pub bio: String,
    pub portfolio: Option<String>,
    pub availability: Vec<Availability>,
}

/// Review outcome lifecycle of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 3] = [
        ApplicationStatus::Pending,
        ApplicationStatus::Approved,
        ApplicationStatus::Rejected,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(label))
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Stored application: the validated profile plus system-assigned fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: ApplicationId,
    #[serde(flatten)]
    pub profile: ArtistProfile,
    pub submitted_at: DateTime<Utc>,
    pub status: ApplicationStatus,
}

/// Counts shown on the review dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl ApplicationStats {
    pub(crate) fn record(mut self, status: ApplicationStatus) -> Self {
        self.total += 1;
        match status {
            ApplicationStatus::Pending => self.pending += 1,
            ApplicationStatus::Approved => self.approved += 1,
            ApplicationStatus::Rejected => self.rejected += 1,
        }
        self
    }
}

/// Every choice list the registration form offers, in display order.
#[derive(Debug, Clone, Serialize)]
pub struct FormOptions {
    pub categories: Vec<&'static str>,
    pub experience_levels: Vec<&'static str>,
    pub skills: Vec<&'static str>,
    pub availability: Vec<&'static str>,
    pub states: Vec<&'static str>,
    pub statuses: Vec<&'static str>,
}

impl FormOptions {
    pub fn collect() -> Self {
        Self {
            categories: Category::ALL.iter().map(|item| item.label()).collect(),
            experience_levels: ExperienceLevel::ALL.iter().map(|item| item.label()).collect(),
            skills: Skill::ALL.iter().map(|item| item.label()).collect(),
            availability: Availability::ALL.iter().map(|item| item.label()).collect(),
            states: Region::ALL.iter().map(|item| item.label()).collect(),
            statuses: ApplicationStatus::ALL
                .iter()
                .map(|item| item.label())
                .collect(),
        }
    }
}
