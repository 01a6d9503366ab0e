//! Showcase roster used to populate a fresh store for demos and tests.

use chrono::{DateTime, NaiveDate, Utc};

use super::domain::{
    ApplicationId, ApplicationRecord, ApplicationStatus, ArtistProfile, Availability, Category,
    ExperienceLevel, Region, Skill,
};

fn submitted_on(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

/// Four applications covering every status, newest first.
pub fn demo_records() -> Vec<ApplicationRecord> {
    vec![
        ApplicationRecord {
            id: ApplicationId("1".to_string()),
            profile: ArtistProfile {
                name: "Sarah Johnson".to_string(),
                email: "sarah.johnson@email.com".to_string(),
                phone: "+1234567890".to_string(),
                category: Category::SingerVocalist,
                city: "Mumbai".to_string(),
                state: Region::Maharashtra,
                fee: 2500.0,
                experience: ExperienceLevel::Advanced,
                skills: vec![
                    Skill::LivePerformance,
                    Skill::StudioRecording,
                    Skill::Composition,
                ],
                bio: "Professional vocalist with over 8 years of experience in jazz and contemporary music. Performed at major venues across the west coast and has collaborated with renowned artists.".to_string(),
                portfolio: Some("https://sarahjohnson.com".to_string()),
                availability: vec![Availability::Weekends, Availability::Evenings],
            },
            submitted_at: submitted_on(2024, 1, 15),
            status: ApplicationStatus::Approved,
        },
        ApplicationRecord {
            id: ApplicationId("2".to_string()),
            profile: ArtistProfile {
                name: "Marcus Rodriguez".to_string(),
                email: "marcus.rodriguez@email.com".to_string(),
                phone: "+1987654321".to_string(),
                category: Category::Musician,
                city: "Bengaluru".to_string(),
                state: Region::Karnataka,
                fee: 1800.0,
                experience: ExperienceLevel::Expert,
                skills: vec![
                    Skill::LivePerformance,
                    Skill::Composition,
                    Skill::Teaching,
                    Skill::AudioProduction,
                ],
                bio: "Multi-instrumentalist specializing in guitar and piano. Has toured internationally and produced music for various artists. Currently teaching at a city music academy.".to_string(),
                portfolio: Some("https://marcusmusic.com".to_string()),
                availability: vec![
                    Availability::Weekdays,
                    Availability::Weekends,
                    Availability::ToursTravel,
                ],
            },
            submitted_at: submitted_on(2024, 1, 12),
            status: ApplicationStatus::Pending,
        },
        ApplicationRecord {
            id: ApplicationId("3".to_string()),
            profile: ArtistProfile {
                name: "Emma Chen".to_string(),
                email: "emma.chen@email.com".to_string(),
                phone: "+1555123456".to_string(),
                category: Category::Dancer,
                city: "New Delhi".to_string(),
                state: Region::Delhi,
                fee: 1500.0,
                experience: ExperienceLevel::Intermediate,
                skills: vec![Skill::LivePerformance, Skill::Teaching, Skill::SocialMedia],
                bio: "Contemporary and hip-hop dancer with experience in music videos and live performances. Passionate about teaching dance to young artists and creating engaging content.".to_string(),
                portfolio: Some("https://emmadance.com".to_string()),
                availability: vec![Availability::Evenings, Availability::Weekends],
            },
            submitted_at: submitted_on(2024, 1, 10),
            status: ApplicationStatus::Approved,
        },
        ApplicationRecord {
            id: ApplicationId("4".to_string()),
            profile: ArtistProfile {
                name: "David Thompson".to_string(),
                email: "david.thompson@email.com".to_string(),
                phone: "+1444567890".to_string(),
                category: Category::Photographer,
                city: "Chennai".to_string(),
                state: Region::TamilNadu,
                fee: 3200.0,
                experience: ExperienceLevel::Advanced,
                skills: vec![
                    Skill::VideoProduction,
                    Skill::SocialMedia,
                    Skill::Marketing,
                    Skill::EventPlanning,
                ],
                bio: "Professional photographer specializing in concert and event photography. Has worked with major music festivals and artists, creating stunning visual content that captures the essence of live performances.".to_string(),
                portfolio: Some("https://davidphoto.com".to_string()),
                availability: vec![
                    Availability::Weekdays,
                    Availability::Weekends,
                    Availability::Holidays,
                    Availability::ToursTravel,
                ],
            },
            submitted_at: submitted_on(2024, 1, 8),
            status: ApplicationStatus::Rejected,
        },
    ]
}
