pub mod mood_service;

pub use mood_service::MoodEntryService;
