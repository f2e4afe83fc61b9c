//! Fake Adapter - 离线生成器

mod fake_song_generator;

pub use fake_song_generator::{FakeCall, FakeSongGenerator};
