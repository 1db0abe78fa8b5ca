//! Test data helpers for building entities

use chrono::NaiveDate;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use fake::Fake;
use bde_office::models::*;

pub fn random_name() -> String {
    Name().fake()
}

pub fn create_test_student(name: &str, level: &str) -> Student {
    Student::new(name, level)
}

pub fn create_test_event(title: &str, date: NaiveDate, status: EventStatus) -> Event {
    Event {
        title: title.to_string(),
        date,
        location: "Amphi A".to_string(),
        description: Sentence(3..8).fake(),
        image_url: "https://cdn.example.org/event.jpg".to_string(),
        status,
    }
}

pub fn create_test_club(name: &str) -> Club {
    Club {
        name: name.to_string(),
        description: Sentence(3..8).fake(),
        leader_name: random_name(),
        leader_whatsapp: "+2250102030405".to_string(),
        activities: vec!["Réunions".to_string(), "Sorties".to_string()],
    }
}

pub fn create_test_member(name: &str, role: &str) -> Member {
    Member {
        name: name.to_string(),
        role: role.to_string(),
        photo_url: "https://cdn.example.org/team.jpg".to_string(),
        whatsapp: "0700000000".to_string(),
    }
}

pub fn create_test_mentor(name: &str, subject: &str) -> Mentor {
    Mentor {
        name: name.to_string(),
        subject: subject.to_string(),
        whatsapp: "0700000000".to_string(),
        order: None,
    }
}

pub fn create_test_atelier(name: &str, emoji: &str) -> Atelier {
    Atelier {
        name: name.to_string(),
        description: Sentence(3..8).fake(),
        room: "Salle 12".to_string(),
        emoji: emoji.to_string(),
        order: None,
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}
